// SPDX-License-Identifier: MPL-2.0
//! Static project catalog.
//!
//! The portfolio content is embedded data: `assets/catalog/projects.toml`
//! describes the projects, and the screenshots referenced by each project
//! live next to it. Titles, summaries, and descriptions are localized
//! through Fluent keys derived from the project id, so the catalog itself
//! stays language-neutral.

pub mod debounce;
pub mod search;

use crate::error::{Error, Result};
use iced::widget::image::Handle;
use rust_embed::RustEmbed;
use serde::Deserialize;

const CATALOG_FILE: &str = "projects.toml";

#[derive(RustEmbed)]
#[folder = "assets/catalog/"]
struct Asset;

/// One portfolio entry.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Project {
    /// Stable identifier, also the stem of the project's Fluent keys.
    pub id: String,
    /// Year the project was finished or last worked on.
    pub year: u16,
    /// Technology labels used by the tag filter.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Ordered screenshot asset names (relative to `assets/catalog/`).
    #[serde(default)]
    pub images: Vec<String>,
    /// Source repository URL.
    #[serde(default)]
    pub repository: Option<String>,
    /// Live demo URL.
    #[serde(default)]
    pub demo: Option<String>,
}

impl Project {
    /// Fluent key for the localized project title.
    #[must_use]
    pub fn title_key(&self) -> String {
        format!("project-{}-title", self.id)
    }

    /// Fluent key for the one-line card summary.
    #[must_use]
    pub fn summary_key(&self) -> String {
        format!("project-{}-summary", self.id)
    }

    /// Fluent key for the detail page description.
    #[must_use]
    pub fn description_key(&self) -> String {
        format!("project-{}-description", self.id)
    }

    /// Resolves the image at `index` to a widget handle.
    ///
    /// Returns `None` when the index is out of range or the asset is not
    /// embedded; the view renders a placeholder in that case instead of
    /// failing.
    #[must_use]
    pub fn image_handle(&self, index: usize) -> Option<Handle> {
        let name = self.images.get(index)?;
        let content = Asset::get(name)?;
        Some(Handle::from_bytes(content.data.into_owned()))
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    projects: Vec<Project>,
}

/// The full, ordered project collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Loads the embedded catalog.
    pub fn load() -> Result<Self> {
        let content = Asset::get(CATALOG_FILE)
            .ok_or_else(|| Error::Catalog(format!("{CATALOG_FILE} is not embedded")))?;
        let text = String::from_utf8_lossy(content.data.as_ref());
        let file: CatalogFile =
            toml::from_str(&text).map_err(|err| Error::Catalog(err.to_string()))?;
        Ok(Self {
            projects: file.projects,
        })
    }

    #[cfg(test)]
    pub(crate) fn from_projects(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// All distinct tags across the catalog, sorted alphabetically.
    #[must_use]
    pub fn tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .projects
            .iter()
            .flat_map(|project| project.tags.iter().cloned())
            .collect();
        tags.sort();
        tags.dedup();
        tags
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

/// Test fixture shared by the search and UI tests.
#[cfg(test)]
pub(crate) fn sample_project(id: &str, year: u16, tags: &[&str]) -> Project {
    Project {
        id: id.to_string(),
        year,
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        images: vec![],
        repository: None,
        demo: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_parses_the_embedded_catalog() {
        let catalog = Catalog::load().expect("embedded catalog should parse");
        assert!(!catalog.is_empty());
        // Every project id must be unique since it names the Fluent keys.
        let mut ids: Vec<&str> = catalog.projects().iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn get_finds_projects_by_id() {
        let catalog = Catalog::from_projects(vec![
            sample_project("alpha", 2021, &["rust"]),
            sample_project("beta", 2023, &["iced"]),
        ]);
        assert_eq!(catalog.get("beta").map(|p| p.year), Some(2023));
        assert!(catalog.get("gamma").is_none());
    }

    #[test]
    fn tags_are_sorted_and_deduplicated() {
        let catalog = Catalog::from_projects(vec![
            sample_project("alpha", 2021, &["rust", "wasm"]),
            sample_project("beta", 2023, &["iced", "rust"]),
        ]);
        assert_eq!(catalog.tags(), vec!["iced", "rust", "wasm"]);
    }

    #[test]
    fn fluent_keys_derive_from_the_id() {
        let project = sample_project("folio", 2024, &[]);
        assert_eq!(project.title_key(), "project-folio-title");
        assert_eq!(project.summary_key(), "project-folio-summary");
        assert_eq!(project.description_key(), "project-folio-description");
    }

    #[test]
    fn image_handle_returns_none_for_missing_assets() {
        let mut project = sample_project("folio", 2024, &[]);
        project.images = vec!["does-not-exist.png".to_string()];
        assert!(project.image_handle(0).is_none());
        assert!(project.image_handle(1).is_none());
    }
}
