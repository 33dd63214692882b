//! Interaction events delivered by the host toolkit.
//!
//! The host's event dispatch loop converts its native crossing and button
//! events into these types before calling the group's handlers.

/// Where the pointer went when it left the group's region.
///
/// The event source must tell the two apart: only [`LeaveDetail::Outside`]
/// hides a hover-mode drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveDetail {
    /// Pointer moved into a descendant region of the group.
    Inferior,
    /// Pointer left the group's region entirely.
    Outside,
}

/// Pointer crossing event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Pointer entered the group's hit region
    Enter,
    /// Pointer left the group's hit region
    Leave(LeaveDetail),
}

impl PointerEvent {
    /// Leave event for the whole region.
    pub const LEAVE: Self = Self::Leave(LeaveDetail::Outside);
}

/// Click event kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickKind {
    /// Primary button (left click)
    Primary,
    /// Secondary button (right click)
    Secondary,
    /// Middle button
    Middle,
    /// Any other button number
    Other(u8),
}

impl ClickKind {
    /// Map a toolkit button number (1-based) to a click kind.
    pub fn from_button(button: u8) -> Self {
        match button {
            1 => Self::Primary,
            2 => Self::Middle,
            3 => Self::Secondary,
            other => Self::Other(other),
        }
    }

    pub fn is_primary(&self) -> bool {
        matches!(self, Self::Primary)
    }
}

/// Button press on the group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    /// Type of click
    pub kind: ClickKind,
}

impl ClickEvent {
    pub const fn new(kind: ClickKind) -> Self {
        Self { kind }
    }

    /// A synthetic primary click.
    pub const fn primary() -> Self {
        Self::new(ClickKind::Primary)
    }
}

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, let the host keep propagating it.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_kind_from_button() {
        assert_eq!(ClickKind::from_button(1), ClickKind::Primary);
        assert_eq!(ClickKind::from_button(2), ClickKind::Middle);
        assert_eq!(ClickKind::from_button(3), ClickKind::Secondary);
        assert_eq!(ClickKind::from_button(8), ClickKind::Other(8));
    }
}
