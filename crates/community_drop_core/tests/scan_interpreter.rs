use community_drop_core::{interpret, CoreConfig, NavigationTarget, ScanInterpreter};

#[test]
fn tracking_shaped_scan_navigates_to_tracking_view() {
    let outcome = interpret("CD123456789");
    assert!(outcome.should_navigate);
    assert_eq!(outcome.display, "CD123456789");
    let target = outcome.navigation_target.expect("navigation target");
    assert_eq!(target, NavigationTarget::track("CD123456789"));
    assert_eq!(target.to_uri(), "/track?code=CD123456789");
}

#[test]
fn other_text_is_displayed_without_navigation() {
    let outcome = interpret("XYZ999");
    assert!(!outcome.should_navigate);
    assert_eq!(outcome.display, "XYZ999");
    assert!(outcome.navigation_target.is_none());
}

#[test]
fn prefix_without_digits_does_not_navigate() {
    assert!(!interpret("CD").should_navigate);
}

#[test]
fn surrounding_characters_block_navigation() {
    for raw in [" CD123", "CD123 ", "CD123\n", "https://x.test/CD123", "CD-123", "cd123"] {
        let outcome = interpret(raw);
        assert!(!outcome.should_navigate, "raw: {raw:?}");
        assert_eq!(outcome.display, raw);
    }
}

#[test]
fn non_matching_text_can_still_be_tracked_manually() {
    let interpreter = ScanInterpreter::default();
    let outcome = interpreter.interpret("pickup ABC123");
    assert!(!outcome.should_navigate);

    let target = interpreter.track_anyway(&outcome.display);
    assert_eq!(target.to_uri(), "/track?code=pickup+ABC123");
}

#[test]
fn interpreter_from_config_uses_configured_path() {
    let mut config = CoreConfig::default();
    config.tracking_path = "/packages/track".to_string();
    let outcome = config.scan_interpreter().interpret("CD7");
    assert_eq!(
        outcome.navigation_target.map(|target| target.to_uri()),
        Some("/packages/track?code=CD7".to_string())
    );
}

#[test]
fn classification_is_deterministic() {
    assert_eq!(interpret("CD42"), interpret("CD42"));
    assert_eq!(interpret("XYZ"), interpret("XYZ"));
}
