//! Child placement bookkeeping.

use serde::Serialize;

/// Which child sequence a widget was appended to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChildSlot {
    /// Always-visible content of the group.
    Primary,
    /// Content inside the drawer's revealer.
    Overlay,
}

/// A widget placed in a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Child<W> {
    pub widget: W,
    /// Style class added at placement time, if any.
    pub style_class: Option<String>,
}

/// Where `add_widget` put a widget and which class it applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub slot: ChildSlot,
    /// Index within the slot's sequence.
    pub index: usize,
    pub style_class: Option<String>,
}

/// Decides the slot for each newly added child.
///
/// The first child of a drawer stays in the primary sequence; every later
/// one goes to the overlay and gets the drawer children class. Plain groups
/// put everything in the primary sequence.
#[derive(Debug, Clone, Default)]
pub(crate) struct Placer {
    children_class: Option<String>,
    first_placed: bool,
}

impl Placer {
    pub fn new(children_class: Option<&str>) -> Self {
        Self {
            children_class: children_class.map(str::to_string),
            first_placed: false,
        }
    }

    /// Slot and class for the next child. Marks the first child as placed.
    pub fn next(&mut self) -> (ChildSlot, Option<String>) {
        let first = !self.first_placed;
        self.first_placed = true;

        match &self.children_class {
            Some(class) if !first => (ChildSlot::Overlay, Some(class.clone())),
            _ => (ChildSlot::Primary, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_group_always_primary() {
        let mut placer = Placer::new(None);
        for _ in 0..3 {
            assert_eq!(placer.next(), (ChildSlot::Primary, None));
        }
    }

    #[test]
    fn test_drawer_first_child_primary() {
        let mut placer = Placer::new(Some("drawer-child"));
        assert_eq!(placer.next(), (ChildSlot::Primary, None));
        assert_eq!(
            placer.next(),
            (ChildSlot::Overlay, Some("drawer-child".to_string()))
        );
    }
}
