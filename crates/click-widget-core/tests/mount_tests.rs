// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Mount and click scenarios against an in-memory host document.
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use click_widget_core::{
    ConfigError, Label, MountError, MountRegistry, Phase, WidgetConfig, BUTTON_CLASS,
};
use common::FakeDocument;

#[test]
fn mount_into_present_target_shows_click_me() {
    let doc = FakeDocument::with_targets(&["react_root"]);
    let mut registry = MountRegistry::new();

    let widget = registry.mount(&doc, &WidgetConfig::default()).unwrap();

    let button = doc.button("react_root").expect("button attached");
    assert_eq!(button.tag, "button");
    assert_eq!(button.class, BUTTON_CLASS);
    assert_eq!(button.text, "Click Me");
    assert_eq!(button.paints, 0);
    assert_eq!(widget.phase(), Phase::Unclicked);
    assert_eq!(widget.mount_id(), "react_root");
}

#[test]
fn click_updates_text() {
    let doc = FakeDocument::with_targets(&["react_root"]);
    let widget = MountRegistry::new()
        .mount(&doc, &WidgetConfig::default())
        .unwrap();

    widget.click();

    assert_eq!(doc.text("react_root").as_deref(), Some("Clicked!"));
    assert_eq!(widget.label(), Label::Clicked);
    assert!(widget.state().was_clicked());
}

#[test]
fn second_click_keeps_clicked_and_still_rerenders() {
    let doc = FakeDocument::with_targets(&["react_root"]);
    let widget = MountRegistry::new()
        .mount(&doc, &WidgetConfig::default())
        .unwrap();

    widget.click();
    widget.click();

    let button = doc.button("react_root").unwrap();
    assert_eq!(button.text, "Clicked!");
    assert_eq!(button.class, BUTTON_CLASS);
    assert_eq!(button.paints, 2);
}

#[test]
fn click_through_rendered_view_dispatches_into_widget() {
    let doc = FakeDocument::with_targets(&["app"]);
    let widget = MountRegistry::new()
        .mount(&doc, &WidgetConfig::new("app"))
        .unwrap();

    widget.with_view(|view| {
        assert_eq!(view.label(), Label::ClickMe);
        view.click();
    });

    assert_eq!(doc.text("app").as_deref(), Some("Clicked!"));
    assert_eq!(widget.phase(), Phase::Clicked);
}

#[test]
fn missing_target_fails_visibly() {
    let doc = FakeDocument::with_targets(&["elsewhere"]);
    let mut registry = MountRegistry::new();

    let err = registry
        .mount(&doc, &WidgetConfig::default())
        .err()
        .expect("mount must fail");

    assert_eq!(err, MountError::TargetNotFound("react_root".into()));
    assert_eq!(
        err.to_string(),
        "mount target `react_root` not found in host document"
    );
    assert!(doc.button("elsewhere").is_none());
    assert!(!registry.is_mounted("react_root"));
    assert!(registry.is_empty());
}

#[test]
fn failed_mount_can_be_retried_once_target_exists() {
    let empty = FakeDocument::default();
    let mut registry = MountRegistry::new();
    assert!(registry.mount(&empty, &WidgetConfig::default()).is_err());

    let doc = FakeDocument::with_targets(&["react_root"]);
    assert!(registry.mount(&doc, &WidgetConfig::default()).is_ok());
    assert!(registry.is_mounted("react_root"));
}

#[test]
fn second_mount_on_same_target_is_refused() {
    let doc = FakeDocument::with_targets(&["react_root"]);
    let mut registry = MountRegistry::new();
    let first = registry.mount(&doc, &WidgetConfig::default()).unwrap();

    let err = registry
        .mount(&doc, &WidgetConfig::default())
        .err()
        .expect("re-binding must fail");
    assert_eq!(err, MountError::AlreadyMounted("react_root".into()));

    first.click();
    assert_eq!(doc.text("react_root").as_deref(), Some("Clicked!"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn widgets_on_distinct_targets_are_independent() {
    let doc = FakeDocument::with_targets(&["left", "right"]);
    let mut registry = MountRegistry::new();
    let left = registry.mount(&doc, &WidgetConfig::new("left")).unwrap();
    let _right = registry.mount(&doc, &WidgetConfig::new("right")).unwrap();

    left.click();

    assert_eq!(doc.text("left").as_deref(), Some("Clicked!"));
    assert_eq!(doc.text("right").as_deref(), Some("Click Me"));
    assert_eq!(registry.len(), 2);
}

#[test]
fn blank_mount_id_is_rejected_before_touching_host() {
    let doc = FakeDocument::with_targets(&[""]);
    let err = MountRegistry::new()
        .mount(&doc, &WidgetConfig::new(""))
        .err()
        .expect("blank id must fail");

    assert_eq!(err, MountError::Config(ConfigError::EmptyMountId));
    assert!(doc.button("").is_none());
}
