// SPDX-License-Identifier: MPL-2.0
//! Search, tag filtering, and pagination over the project catalog.
//!
//! Filters combine with AND logic: every whitespace-separated query token
//! must match, and the tag filter (when set) must be among the project's
//! tags. Matching is case-insensitive over the project id, its tags, and
//! the localized title supplied by the caller.

use crate::catalog::Project;

/// Active search and tag filter state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilter {
    /// Free-text query, already debounced by the caller.
    pub query: String,
    /// Exact tag restriction, `None` shows every tag.
    pub tag: Option<String>,
}

impl SearchFilter {
    /// Returns `true` if any filtering is in effect.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty() || self.tag.is_some()
    }

    /// Whether `project` passes the filter. `localized_title` is the
    /// title in the current UI language, resolved by the caller.
    #[must_use]
    pub fn matches(&self, project: &Project, localized_title: &str) -> bool {
        if let Some(tag) = &self.tag {
            if !project.tags.iter().any(|candidate| candidate == tag) {
                return false;
            }
        }

        let haystack = format!(
            "{} {} {}",
            project.id.to_lowercase(),
            project.tags.join(" ").to_lowercase(),
            localized_title.to_lowercase()
        );

        self.query
            .split_whitespace()
            .all(|token| haystack.contains(&token.to_lowercase()))
    }
}

/// Current page over a filtered project list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Zero-based page index.
    pub index: usize,
    /// Cards per page, at least 1.
    pub size: usize,
}

impl Page {
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            index: 0,
            size: size.max(1),
        }
    }

    /// Number of pages needed for `total` items, at least 1 so an empty
    /// result set still renders "page 1 of 1".
    #[must_use]
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.size).max(1)
    }

    /// Pulls the index back in range after the filtered set shrank.
    pub fn clamp(&mut self, total: usize) {
        let last = self.page_count(total) - 1;
        if self.index > last {
            self.index = last;
        }
    }

    /// Jump back to the first page (after a filter change).
    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn next(&mut self, total: usize) {
        if self.index + 1 < self.page_count(total) {
            self.index += 1;
        }
    }

    pub fn previous(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Half-open item range `[start, end)` visible on this page.
    #[must_use]
    pub fn bounds(&self, total: usize) -> (usize, usize) {
        let start = (self.index * self.size).min(total);
        let end = (start + self.size).min(total);
        (start, end)
    }
}

/// Applies the filter and returns the matching projects in catalog order.
///
/// `localize_title` resolves a project to its title in the current UI
/// language so search covers what the user actually sees.
pub fn apply<'a, F>(
    projects: &'a [Project],
    filter: &SearchFilter,
    localize_title: F,
) -> Vec<&'a Project>
where
    F: Fn(&Project) -> String,
{
    projects
        .iter()
        .filter(|project| filter.matches(project, &localize_title(project)))
        .collect()
}
