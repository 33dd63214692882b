//! Composite status-bar group with an optional auto-hiding drawer.

pub mod config;
pub mod drawer;
pub mod error;
pub mod events;
pub mod group;

pub use error::GroupError;
pub use group::Group;

pub mod prelude {
    pub use crate::config::{AutoHide, Axis, ConfigError, DrawerConfig, GroupConfig, Orientation};
    pub use crate::drawer::{DrawerController, DrawerView, NullView, RevealState, VisibilityChange};
    pub use crate::error::GroupError;
    pub use crate::events::{ClickEvent, ClickKind, EventResult, LeaveDetail, PointerEvent};
    pub use crate::group::{Child, ChildSlot, Group, Placement};
}
