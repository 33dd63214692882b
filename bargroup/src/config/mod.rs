//! Group configuration snapshot.
//!
//! A [`GroupConfig`] is resolved once from the raw JSON module configuration
//! and is immutable afterwards. Only `orientation` can make resolution fail;
//! every other field falls back to its default when missing or mistyped.
//!
//! ```
//! use bargroup::config::{Axis, GroupConfig};
//! use serde_json::json;
//!
//! let config = GroupConfig::from_value(
//!     "group/power",
//!     "",
//!     &json!({ "drawer": { "click-to-reveal": true } }),
//!     Axis::Horizontal,
//! )
//! .unwrap();
//!
//! assert!(config.is_drawer());
//! assert!(!config.has_auto_hide_task());
//! assert_eq!(config.axis(), Axis::Vertical);
//! ```

mod drawer;
mod error;

pub use drawer::{
    AutoHide, DEFAULT_CHILDREN_CLASS, DEFAULT_TRANSITION_DURATION, DrawerConfig, TransitionHint,
    TransitionKind,
};
pub use error::ConfigError;

use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

/// Layout axis of a box or bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn from_vertical(vertical: bool) -> Self {
        if vertical {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }

    pub fn is_vertical(self) -> bool {
        self == Self::Vertical
    }

    /// The perpendicular axis.
    pub fn flipped(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Requested orientation of the group's primary box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Same axis as the parent bar.
    Inherit,
    /// Perpendicular to the parent bar.
    #[default]
    Orthogonal,
    Vertical,
    Horizontal,
}

impl Orientation {
    /// Resolve the `orientation` field. Absent or `null` means the default.
    pub fn from_value(value: Option<&Value>) -> Result<Self, ConfigError> {
        match value {
            None | Some(Value::Null) => Ok(Self::default()),
            Some(Value::String(s)) => s.parse(),
            Some(other) => Err(ConfigError::InvalidOrientation(other.to_string())),
        }
    }

    /// Concrete axis given the parent bar's axis.
    pub fn resolve(self, parent: Axis) -> Axis {
        match self {
            Self::Inherit => parent,
            Self::Orthogonal => parent.flipped(),
            Self::Vertical => Axis::Vertical,
            Self::Horizontal => Axis::Horizontal,
        }
    }
}

impl FromStr for Orientation {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inherit" => Ok(Self::Inherit),
            "orthogonal" => Ok(Self::Orthogonal),
            "vertical" => Ok(Self::Vertical),
            "horizontal" => Ok(Self::Horizontal),
            other => Err(ConfigError::InvalidOrientation(other.to_string())),
        }
    }
}

/// Immutable configuration of one group instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupConfig {
    name: String,
    id: String,
    axis: Axis,
    drawer: Option<DrawerConfig>,
    auto_hide: AutoHide,
    signal: Option<i32>,
    transition: TransitionHint,
}

impl GroupConfig {
    /// Create a plain (non-drawer) group configuration inside a bar with
    /// the given axis, using the default orthogonal orientation.
    pub fn new(name: impl Into<String>, parent: Axis) -> Self {
        let drawer = DrawerConfig::default();
        Self {
            name: name.into(),
            id: String::new(),
            axis: Orientation::default().resolve(parent),
            drawer: None,
            auto_hide: AutoHide::default(),
            signal: None,
            transition: TransitionHint::new(parent, &drawer),
        }
    }

    /// Set the instance id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Turn the group into a drawer.
    pub fn drawer(mut self, drawer: DrawerConfig) -> Self {
        self.transition = TransitionHint::new(self.transition.axis, &drawer);
        self.drawer = Some(drawer);
        self
    }

    /// Set the auto-hide period.
    pub fn auto_hide(mut self, auto_hide: AutoHide) -> Self {
        self.auto_hide = auto_hide;
        self
    }

    /// Set the refresh code this group reacts to.
    pub fn signal(mut self, signal: i32) -> Self {
        self.signal = Some(signal);
        self
    }

    /// Resolve a configuration from the raw JSON module block.
    ///
    /// `parent` is the axis of the bar the group is placed in.
    pub fn from_value(
        name: impl Into<String>,
        id: impl Into<String>,
        value: &Value,
        parent: Axis,
    ) -> Result<Self, ConfigError> {
        let block = match value {
            Value::Object(map) => map,
            Value::Null => return Ok(Self::new(name, parent).id(id)),
            Value::Bool(_) => return Err(ConfigError::NotAnObject("a boolean")),
            Value::Number(_) => return Err(ConfigError::NotAnObject("a number")),
            Value::String(_) => return Err(ConfigError::NotAnObject("a string")),
            Value::Array(_) => return Err(ConfigError::NotAnObject("an array")),
        };

        let orientation = Orientation::from_value(block.get("orientation"))?;
        let drawer = block.get("drawer").and_then(DrawerConfig::from_value);
        let transition = match &drawer {
            Some(drawer) => TransitionHint::new(parent, drawer),
            None => TransitionHint::new(parent, &DrawerConfig::default()),
        };
        let signal = block
            .get("signal")
            .and_then(Value::as_i64)
            .and_then(|s| i32::try_from(s).ok());

        Ok(Self {
            name: name.into(),
            id: id.into(),
            axis: orientation.resolve(parent),
            drawer,
            auto_hide: AutoHide::from_value(block.get("interval")),
            signal,
            transition,
        })
    }

    /// Parse and resolve a configuration from JSON text.
    pub fn from_json_str(
        name: impl Into<String>,
        id: impl Into<String>,
        json: &str,
        parent: Axis,
    ) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(name, id, &value, parent)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn instance_id(&self) -> &str {
        &self.id
    }

    /// Axis of the primary box.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn drawer_config(&self) -> Option<&DrawerConfig> {
        self.drawer.as_ref()
    }

    pub fn is_drawer(&self) -> bool {
        self.drawer.is_some()
    }

    pub fn click_to_reveal(&self) -> bool {
        self.drawer.as_ref().is_some_and(|d| d.click_to_reveal)
    }

    /// Class for overlay children, `None` for plain groups.
    pub fn children_class(&self) -> Option<&str> {
        self.drawer.as_ref().map(|d| d.children_class.as_str())
    }

    pub fn auto_hide_period(&self) -> AutoHide {
        self.auto_hide
    }

    /// Whether a controller built from this config runs an auto-hide task.
    pub fn has_auto_hide_task(&self) -> bool {
        self.is_drawer() && !self.click_to_reveal()
    }

    pub fn signal_code(&self) -> Option<i32> {
        self.signal
    }

    /// Whether a refresh code addresses this group.
    pub fn matches_signal(&self, code: i32) -> bool {
        self.signal == Some(code)
    }

    pub fn transition(&self) -> TransitionHint {
        self.transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_resolve() {
        assert_eq!(Orientation::Inherit.resolve(Axis::Vertical), Axis::Vertical);
        assert_eq!(Orientation::Orthogonal.resolve(Axis::Vertical), Axis::Horizontal);
        assert_eq!(Orientation::Vertical.resolve(Axis::Horizontal), Axis::Vertical);
        assert_eq!(Orientation::Horizontal.resolve(Axis::Vertical), Axis::Horizontal);
    }

    #[test]
    fn test_orientation_parse_rejects_unknown() {
        assert!(matches!(
            "diagonal".parse::<Orientation>(),
            Err(ConfigError::InvalidOrientation(v)) if v == "diagonal"
        ));
        assert_eq!("inherit".parse::<Orientation>().ok(), Some(Orientation::Inherit));
    }

    #[test]
    fn test_builder_keeps_transition_axis() {
        let config = GroupConfig::new("group/a", Axis::Vertical)
            .drawer(DrawerConfig::new().right_to_left());
        assert_eq!(config.transition().axis, Axis::Vertical);
        assert!(!config.transition().left_to_right);
        assert_eq!(config.axis(), Axis::Horizontal);
    }
}
