//! Rendering seam of the drawer.

use std::sync::Arc;

use super::VisibilityChange;

/// Receives visibility changes of a drawer.
///
/// The rendering layer implements this to start or stop its reveal
/// animation and to add or remove the persistent "active" marker on the
/// primary container. Calls are made while the drawer's state lock is held,
/// from either the event-handling thread or the auto-hide task, so they are
/// totally ordered. Implementations must return quickly and must not call
/// back into the drawer.
pub trait DrawerView: Send + Sync {
    fn visibility_changed(&self, change: VisibilityChange);
}

impl<F> DrawerView for F
where
    F: Fn(VisibilityChange) + Send + Sync,
{
    fn visibility_changed(&self, change: VisibilityChange) {
        self(change)
    }
}

/// A view that discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullView;

impl DrawerView for NullView {
    fn visibility_changed(&self, _change: VisibilityChange) {}
}

impl NullView {
    pub fn shared() -> Arc<dyn DrawerView> {
        Arc::new(Self)
    }
}
