//! Navigation model of the wallet window.
//!
//! This module holds the state a frame loop needs to draw the menu: which
//! top-level item is selected, the selection inside each sub-menu, and the unit
//! scale. Drawing and input handling live outside the crate.
//!
//! Submodules:
//! - `menu`: the selectable items and their labels.
//! - `state`: `UiState`, seeded from the resolved configuration.

pub mod menu;
pub mod state;

pub use menu::{AccountsItem, AdvancedItem, MenuItem, ScaleUnit, SettingsItem};
pub use state::UiState;
