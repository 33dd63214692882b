//! Group container model.
//!
//! A [`Group`] holds child widgets in one or two ordered sequences and, when
//! configured as a drawer, a [`DrawerController`] deciding whether the
//! overlay sequence is shown. Building and styling the actual toolkit
//! widgets is left to the host; the group records what to build.

mod child;

pub use child::{Child, ChildSlot, Placement};

use std::sync::Arc;

use log::debug;
use serde_json::Value;

use crate::config::{Axis, GroupConfig, TransitionHint};
use crate::drawer::{DrawerController, DrawerView, RevealState};
use crate::error::GroupError;
use crate::events::{ClickEvent, EventResult, PointerEvent};

use child::Placer;

/// Style class of a drawer's revealer container.
pub const DRAWER_CLASS: &str = "drawer";

/// A composite bar module holding other modules.
#[derive(Debug)]
pub struct Group<W> {
    config: GroupConfig,
    primary: Vec<Child<W>>,
    overlay: Vec<Child<W>>,
    placer: Placer,
    drawer: Option<DrawerController>,
}

impl<W> Group<W> {
    /// Create a group from a resolved configuration.
    ///
    /// `view` receives the drawer's visibility changes; it is unused for
    /// plain groups.
    pub fn new(config: GroupConfig, view: Arc<dyn DrawerView>) -> Result<Self, GroupError> {
        let drawer = if config.is_drawer() {
            Some(DrawerController::new(&config, view)?)
        } else {
            None
        };
        debug!(
            "group '{}' created (drawer: {}, axis: {:?})",
            config.name(),
            drawer.is_some(),
            config.axis()
        );

        Ok(Self {
            placer: Placer::new(config.children_class()),
            config,
            primary: Vec::new(),
            overlay: Vec::new(),
            drawer,
        })
    }

    /// Resolve the raw JSON module block and create the group.
    pub fn from_value(
        name: &str,
        id: &str,
        value: &Value,
        parent: Axis,
        view: Arc<dyn DrawerView>,
    ) -> Result<Self, GroupError> {
        let config = GroupConfig::from_value(name, id, value, parent)?;
        Self::new(config, view)
    }

    // -------------------------------------------------------------------------
    // Children
    // -------------------------------------------------------------------------

    /// Append a widget, choosing its sequence and style class.
    pub fn add_widget(&mut self, widget: W) -> Placement {
        let (slot, style_class) = self.placer.next();
        let sequence = match slot {
            ChildSlot::Primary => &mut self.primary,
            ChildSlot::Overlay => &mut self.overlay,
        };
        sequence.push(Child {
            widget,
            style_class: style_class.clone(),
        });

        Placement {
            slot,
            index: sequence.len() - 1,
            style_class,
        }
    }

    pub fn primary(&self) -> &[Child<W>] {
        &self.primary
    }

    pub fn overlay(&self) -> &[Child<W>] {
        &self.overlay
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    pub fn handle_pointer(&self, event: PointerEvent) -> EventResult {
        match &self.drawer {
            Some(drawer) => drawer.on_pointer(event),
            None => EventResult::Ignored,
        }
    }

    pub fn handle_click(&self, event: ClickEvent) -> EventResult {
        match &self.drawer {
            Some(drawer) => drawer.on_click(event),
            None => EventResult::Ignored,
        }
    }

    /// Deliver an external refresh code. Returns whether it addressed this
    /// group.
    pub fn refresh(&self, code: i32) -> bool {
        match &self.drawer {
            Some(drawer) => drawer.refresh(code),
            None => self.config.matches_signal(code),
        }
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn config(&self) -> &GroupConfig {
        &self.config
    }

    pub fn name(&self) -> &str {
        self.config.name()
    }

    /// Axis of the primary box.
    pub fn axis(&self) -> Axis {
        self.config.axis()
    }

    pub fn is_drawer(&self) -> bool {
        self.drawer.is_some()
    }

    pub fn drawer(&self) -> Option<&DrawerController> {
        self.drawer.as_ref()
    }

    /// Current reveal state. Plain groups always show everything they hold
    /// in the primary sequence and report `Hidden` for the empty overlay.
    pub fn reveal_state(&self) -> RevealState {
        self.drawer
            .as_ref()
            .map(DrawerController::state)
            .unwrap_or_default()
    }

    /// Style class of the revealer container, if the group has one.
    pub fn revealer_class(&self) -> Option<&'static str> {
        self.drawer.as_ref().map(|_| DRAWER_CLASS)
    }

    /// Transition settings for the revealer, if the group has one.
    pub fn transition(&self) -> Option<TransitionHint> {
        self.drawer.as_ref().map(|_| self.config.transition())
    }

    /// Stop the drawer's auto-hide task and wait for it to exit.
    pub async fn shutdown(self) {
        if let Some(drawer) = self.drawer {
            drawer.shutdown().await;
        }
    }
}
