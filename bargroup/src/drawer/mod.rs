//! Drawer reveal controller.
//!
//! A drawer is a group whose secondary children sit in a collapsible
//! revealer. In hover mode the pointer reveals it and an auto-hide task
//! collapses it again after an idle interval; in click-to-reveal mode only
//! primary clicks toggle it. External refresh triggers can request a reveal
//! in either mode.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use bargroup::config::{Axis, DrawerConfig, GroupConfig};
//! use bargroup::drawer::{DrawerController, NullView, RevealState};
//! use bargroup::events::ClickEvent;
//!
//! let config = GroupConfig::new("group/tray", Axis::Horizontal)
//!     .drawer(DrawerConfig::new().click_to_reveal());
//! let drawer = DrawerController::new(&config, Arc::new(NullView)).unwrap();
//!
//! drawer.on_click(ClickEvent::primary());
//! assert_eq!(drawer.state(), RevealState::Revealed);
//! ```

mod controller;
mod state;
mod task;
mod view;
mod wakeup;

pub use controller::DrawerController;
pub use state::{RevealState, VisibilityChange};
pub use view::{DrawerView, NullView};
