// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard and touch events are only routed while the lightbox overlay
//! is open; the subscription is dropped when it closes. A periodic tick
//! runs only while search input is waiting out its debounce delay.

use super::Message;
use crate::ui::lightbox;
use iced::{event, keyboard, time, touch, Subscription};
use std::time::Duration;

/// Routes native events to the lightbox while it is open.
///
/// Arrow keys navigate, Escape closes, and finger events feed the swipe
/// tracker. Events already captured by a widget are left alone.
pub fn create_event_subscription(lightbox_open: bool) -> Subscription<Message> {
    if !lightbox_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }

        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(named),
                ..
            }) => match named {
                keyboard::key::Named::ArrowRight => {
                    Some(Message::Lightbox(lightbox::Message::Next))
                }
                keyboard::key::Named::ArrowLeft => {
                    Some(Message::Lightbox(lightbox::Message::Previous))
                }
                keyboard::key::Named::Escape => Some(Message::Lightbox(lightbox::Message::Close)),
                _ => None,
            },
            event::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                Some(Message::Lightbox(lightbox::Message::TouchStarted(position)))
            }
            event::Event::Touch(touch::Event::FingerLifted { position, .. }) => {
                Some(Message::Lightbox(lightbox::Message::TouchEnded(position)))
            }
            event::Event::Touch(touch::Event::FingerLost { .. }) => {
                Some(Message::Lightbox(lightbox::Message::TouchCancelled))
            }
            _ => None,
        }
    })
}

/// Creates a periodic tick subscription that polls the search debouncer.
pub fn create_tick_subscription(debounce_pending: bool) -> Subscription<Message> {
    if debounce_pending {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
