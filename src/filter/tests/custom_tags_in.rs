use super::*;

/// Expect custom tags to be collected once per matching group, fixed tags skipped
#[test]
fn collects_distinct_custom_tags() {
    let events = vec![
        event(
            "1",
            LifecycleStatus::Upcoming,
            vec![Tag::Fixed(FixedTag::Concert), custom("jazz", "Jazz")],
        ),
        event(
            "2",
            LifecycleStatus::Held,
            vec![custom("jazz-2", "JAZZ"), custom("blues", "Blues")],
        ),
    ];

    assert_eq!(
        custom_tags_in(&events),
        vec![custom("jazz", "Jazz"), custom("blues", "Blues")]
    );
}

/// Expect no custom tags for events with fixed tags only
#[test]
fn fixed_only_collection() {
    assert!(custom_tags_in(&conference_and_workshop()).is_empty());
}
