//! Drawer-specific configuration: reveal mode, auto-hide interval and
//! transition hints for the rendering layer.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use super::Axis;

/// Transition duration used when `transition-duration` is absent.
pub const DEFAULT_TRANSITION_DURATION: Duration = Duration::from_millis(500);

/// Style class applied to every drawer child after the first.
pub const DEFAULT_CHILDREN_CLASS: &str = "drawer-child";

/// Settings of the `drawer` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawerConfig {
    /// Duration of the reveal animation.
    pub transition_duration: Duration,
    /// Class added to every child placed in the overlay sequence.
    pub children_class: String,
    /// Whether the revealer is packed after the primary content.
    pub transition_left_to_right: bool,
    /// Only primary clicks toggle the drawer; hover is ignored.
    pub click_to_reveal: bool,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            transition_duration: DEFAULT_TRANSITION_DURATION,
            children_class: DEFAULT_CHILDREN_CLASS.to_string(),
            transition_left_to_right: true,
            click_to_reveal: false,
        }
    }
}

impl DrawerConfig {
    /// Create a hover-mode drawer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to click-to-reveal mode.
    pub fn click_to_reveal(mut self) -> Self {
        self.click_to_reveal = true;
        self
    }

    /// Set the class applied to overlay children.
    pub fn children_class(mut self, class: impl Into<String>) -> Self {
        self.children_class = class.into();
        self
    }

    /// Set the reveal animation duration.
    pub fn transition_duration(mut self, duration: Duration) -> Self {
        self.transition_duration = duration;
        self
    }

    /// Pack the revealer before the primary content instead of after it.
    pub fn right_to_left(mut self) -> Self {
        self.transition_left_to_right = false;
        self
    }

    /// Extract a drawer block from raw JSON.
    ///
    /// Returns `None` unless `value` is an object. Fields with the wrong
    /// type keep their defaults.
    pub fn from_value(value: &Value) -> Option<Self> {
        let block = value.as_object()?;
        let defaults = Self::default();

        let transition_duration = block
            .get("transition-duration")
            .and_then(Value::as_u64)
            .map(Duration::from_millis)
            .unwrap_or(defaults.transition_duration);
        let children_class = block
            .get("children-class")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or(defaults.children_class);
        let transition_left_to_right = block
            .get("transition-left-to-right")
            .and_then(Value::as_bool)
            .unwrap_or(defaults.transition_left_to_right);
        let click_to_reveal = block
            .get("click-to-reveal")
            .and_then(Value::as_bool)
            .unwrap_or(defaults.click_to_reveal);

        Some(Self {
            transition_duration,
            children_class,
            transition_left_to_right,
            click_to_reveal,
        })
    }
}

/// Period of the auto-hide task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoHide {
    /// Hide after this much idle time with the pointer outside the group.
    After(Duration),
    /// Never hide on a schedule; the task only reacts to explicit wakes.
    #[default]
    Disabled,
}

impl AutoHide {
    /// Resolve the `interval` field.
    ///
    /// A positive integer is a number of seconds. `"once"`, zero, a missing
    /// value and anything else disable the schedule.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_u64) {
            Some(secs) if secs > 0 => Self::After(Duration::from_secs(secs)),
            _ => Self::Disabled,
        }
    }

    /// The sleep period, or `None` when the task sleeps until woken.
    pub fn period(&self) -> Option<Duration> {
        match self {
            Self::After(period) => Some(*period),
            Self::Disabled => None,
        }
    }
}

/// Animation style the rendering layer should use for the revealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionKind {
    SlideUp,
    SlideLeft,
}

/// Cosmetic transition settings passed through to the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionHint {
    /// Axis of the bar the group lives in.
    pub axis: Axis,
    pub duration: Duration,
    pub left_to_right: bool,
}

impl TransitionHint {
    pub fn new(axis: Axis, drawer: &DrawerConfig) -> Self {
        Self {
            axis,
            duration: drawer.transition_duration,
            left_to_right: drawer.transition_left_to_right,
        }
    }

    /// Slide direction. The visual direction is decided by packing order,
    /// so only the axis matters here.
    pub fn kind(&self) -> TransitionKind {
        if self.axis.is_vertical() {
            TransitionKind::SlideUp
        } else {
            TransitionKind::SlideLeft
        }
    }

    /// Whether the revealer goes after the primary content.
    pub fn revealer_at_end(&self) -> bool {
        self.left_to_right
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_drawer_requires_object() {
        assert!(DrawerConfig::from_value(&json!(true)).is_none());
        assert!(DrawerConfig::from_value(&json!(null)).is_none());
        assert_eq!(
            DrawerConfig::from_value(&json!({})),
            Some(DrawerConfig::default())
        );
    }

    #[test]
    fn test_drawer_mistyped_fields_use_defaults() {
        let drawer = DrawerConfig::from_value(&json!({
            "transition-duration": "fast",
            "children-class": 3,
            "transition-left-to-right": "no",
            "click-to-reveal": 1,
        }))
        .unwrap();
        assert_eq!(drawer, DrawerConfig::default());
    }

    #[test]
    fn test_auto_hide_values() {
        assert_eq!(
            AutoHide::from_value(Some(&json!(2))),
            AutoHide::After(Duration::from_secs(2))
        );
        assert_eq!(AutoHide::from_value(Some(&json!("once"))), AutoHide::Disabled);
        assert_eq!(AutoHide::from_value(Some(&json!(-4))), AutoHide::Disabled);
        assert_eq!(AutoHide::from_value(Some(&json!(0))), AutoHide::Disabled);
        assert_eq!(AutoHide::from_value(None), AutoHide::Disabled);
    }

    #[test]
    fn test_transition_kind_follows_bar_axis() {
        let drawer = DrawerConfig::default();
        assert_eq!(
            TransitionHint::new(Axis::Vertical, &drawer).kind(),
            TransitionKind::SlideUp
        );
        assert_eq!(
            TransitionHint::new(Axis::Horizontal, &drawer).kind(),
            TransitionKind::SlideLeft
        );
        assert!(!TransitionHint::new(Axis::Horizontal, &drawer.right_to_left()).revealer_at_end());
    }
}
