use std::sync::{Arc, Mutex};

use bargroup::config::{Axis, ConfigError, DrawerConfig, GroupConfig, TransitionKind};
use bargroup::drawer::{NullView, RevealState, VisibilityChange};
use bargroup::events::{ClickEvent, EventResult, PointerEvent};
use bargroup::group::{ChildSlot, DRAWER_CLASS, Group, Placement};
use bargroup::GroupError;
use serde_json::json;

fn click_group() -> Group<&'static str> {
    let config = GroupConfig::new("group/power", Axis::Horizontal)
        .drawer(DrawerConfig::new().click_to_reveal());
    Group::new(config, NullView::shared()).unwrap()
}

// ============================================================================
// Child placement
// ============================================================================

#[test]
fn test_plain_group_places_everything_in_primary() {
    let mut group = Group::new(
        GroupConfig::new("group/plain", Axis::Horizontal),
        NullView::shared(),
    )
    .unwrap();

    for (i, label) in ["cpu", "memory", "disk"].into_iter().enumerate() {
        assert_eq!(
            group.add_widget(label),
            Placement {
                slot: ChildSlot::Primary,
                index: i,
                style_class: None,
            }
        );
    }
    assert!(group.overlay().is_empty());
    assert_eq!(group.primary().len(), 3);
    assert_eq!(group.revealer_class(), None);
    assert_eq!(group.transition(), None);
}

#[test]
fn test_drawer_first_child_primary_rest_overlay() {
    let mut group = click_group();

    let first = group.add_widget("power");
    assert_eq!(first.slot, ChildSlot::Primary);
    assert_eq!(first.style_class, None);

    let labels = ["lock", "logout", "reboot"];
    for (i, label) in labels.into_iter().enumerate() {
        let placement = group.add_widget(label);
        assert_eq!(placement.slot, ChildSlot::Overlay);
        assert_eq!(placement.index, i);
        assert_eq!(placement.style_class.as_deref(), Some("drawer-child"));
    }

    assert_eq!(group.primary().len(), 1);
    assert_eq!(group.primary()[0].widget, "power");
    assert_eq!(group.primary()[0].style_class, None);

    let overlay: Vec<_> = group.overlay().iter().map(|c| c.widget).collect();
    assert_eq!(overlay, labels);
    assert!(group
        .overlay()
        .iter()
        .all(|c| c.style_class.as_deref() == Some("drawer-child")));
}

#[test]
fn test_custom_children_class_from_json() {
    let mut group: Group<u32> = Group::from_value(
        "group/tray",
        "tray",
        &json!({ "drawer": { "children-class": "tray-item", "click-to-reveal": true } }),
        Axis::Vertical,
        NullView::shared(),
    )
    .unwrap();

    group.add_widget(1);
    let placement = group.add_widget(2);
    assert_eq!(placement.style_class.as_deref(), Some("tray-item"));
    assert_eq!(group.revealer_class(), Some(DRAWER_CLASS));
    assert_eq!(group.axis(), Axis::Horizontal);
    assert_eq!(group.transition().map(|t| t.kind()), Some(TransitionKind::SlideUp));
    assert_eq!(group.config().instance_id(), "tray");
}

// ============================================================================
// Event delegation
// ============================================================================

#[test]
fn test_group_delegates_clicks_to_drawer() {
    let group = click_group();
    assert!(group.is_drawer());

    assert_eq!(group.handle_click(ClickEvent::primary()), EventResult::Consumed);
    assert_eq!(group.reveal_state(), RevealState::Revealed);
    assert_eq!(group.handle_pointer(PointerEvent::LEAVE), EventResult::Ignored);
    assert_eq!(group.reveal_state(), RevealState::Revealed);
}

#[test]
fn test_plain_group_is_inert() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let view = move |change: VisibilityChange| sink.lock().unwrap().push(change);
    let group: Group<()> = Group::new(
        GroupConfig::new("group/plain", Axis::Horizontal).signal(2),
        Arc::new(view),
    )
    .unwrap();

    assert!(!group.is_drawer());
    assert!(group.drawer().is_none());
    assert_eq!(group.handle_pointer(PointerEvent::Enter), EventResult::Ignored);
    assert_eq!(group.handle_click(ClickEvent::primary()), EventResult::Ignored);
    assert!(group.refresh(2));
    assert!(!group.refresh(3));
    assert_eq!(group.reveal_state(), RevealState::Hidden);
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_hover_group_reveals_on_enter() {
    let mut group: Group<&str> = Group::from_value(
        "group/hover",
        "",
        &json!({ "drawer": {}, "interval": 1 }),
        Axis::Horizontal,
        NullView::shared(),
    )
    .unwrap();
    group.add_widget("main");
    group.add_widget("extra");

    group.handle_pointer(PointerEvent::Enter);
    assert_eq!(group.reveal_state(), RevealState::Revealed);
    group.handle_pointer(PointerEvent::LEAVE);
    assert_eq!(group.reveal_state(), RevealState::Hidden);

    group.shutdown().await;
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_invalid_orientation_fails_construction() {
    let result: Result<Group<()>, _> = Group::from_value(
        "group/bad",
        "",
        &json!({ "orientation": "sideways" }),
        Axis::Horizontal,
        NullView::shared(),
    );
    let err = result.unwrap_err();
    assert!(matches!(
        err,
        GroupError::Config(ConfigError::InvalidOrientation(_))
    ));
    assert_eq!(err.to_string(), "Invalid orientation value: sideways");
}
