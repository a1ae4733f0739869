//! Tag-input widget for ratatui applications.
//!
//! The widget lets a user build an ordered collection of distinct string
//! values: text typed into the input field becomes a committed tag when a
//! configured trigger fires (Enter or `','` by default, optionally losing
//! focus), and each rendered tag row carries a removal control.
//!
//! The pieces follow the usual component split:
//! - [`TagFieldState`] owns the committed values, the draft text, and the
//!   caller hooks; all mutations go through it.
//! - [`TagFieldView`] maps state to terminal rows and records hit-test areas.
//! - [`TagFieldComponent`] routes key, mouse, and focus events between the
//!   embedding application and the state.
//!
//! Everything is synchronous: event handlers and hooks complete before
//! control returns to the caller's event loop.

mod component;
mod config;
mod draft;
mod hooks;
mod state;
mod theme;
mod trigger;
mod view;

pub use component::TagFieldComponent;
pub use config::TagFieldConfig;
pub use draft::DraftState;
pub use hooks::{TagFieldHooks, TagHook};
pub use state::{CommitOutcome, TagFieldLayout, TagFieldState};
pub use theme::Theme;
pub use trigger::{CommitTrigger, TriggerSet};
pub use view::{TagFieldView, tag_row};
