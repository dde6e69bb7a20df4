use crate::model::event::YearMonth;

use super::*;

/// Expect empty criteria to return the input in order with duplicate ids removed
#[test]
fn empty_criteria_returns_all_deduplicated() {
    let mut events = conference_and_workshop();
    events.push(event("3", LifecycleStatus::Ongoing, Vec::new()));
    let mut duplicate = events[0].clone();
    duplicate.title = "Second copy".to_string();
    events.insert(2, duplicate);

    let result = filter_events(&events, &FilterCriteria::default());

    assert_eq!(ids(&result), vec!["1", "2", "3"]);
    assert_eq!(result[0].title, "Event 1");
}

/// Expect a search term present in no title or organizer to return nothing
#[test]
fn unknown_search_term_returns_nothing() {
    let events = conference_and_workshop();
    let criteria = FilterCriteria {
        search: "zzz-not-there".to_string(),
        ..Default::default()
    };

    assert!(filter_events(&events, &criteria).is_empty());
}

/// Expect the search to match title or organizer ignoring case
#[test]
fn search_matches_title_or_organizer() {
    let events = vec![
        named("1", "RustConf", "Rust Foundation"),
        named("2", "Jazz Night", "Blue Note"),
        named("3", "Open Air", "CITY OF RUST"),
    ];
    let criteria = FilterCriteria {
        search: "  rust ".to_string(),
        ..Default::default()
    };

    assert_eq!(ids(&filter_events(&events, &criteria)), vec!["1", "3"]);
}

/// Expect the upcoming status filter to return only upcoming events
#[test]
fn status_filter_upcoming_only() {
    let criteria = FilterCriteria {
        statuses: vec![LifecycleStatus::Upcoming],
        ..Default::default()
    };

    let result = filter_events(&conference_and_workshop(), &criteria);

    assert_eq!(ids(&result), vec!["1"]);
    assert!(result
        .iter()
        .all(|e| e.status == LifecycleStatus::Upcoming));
}

/// Expect selecting every status to return the full de-duplicated set
#[test]
fn status_filter_all_statuses_returns_everything() {
    let mut events = conference_and_workshop();
    events.push(event("3", LifecycleStatus::Ongoing, Vec::new()));
    events.push(events[1].clone());
    let criteria = FilterCriteria {
        statuses: LifecycleStatus::ALL.to_vec(),
        ..Default::default()
    };

    assert_eq!(ids(&filter_events(&events, &criteria)), vec!["1", "2", "3"]);
}

/// Expect events with at least one matching tag to be included
#[test]
fn tag_filter_matches_any_selected_tag() {
    let events = vec![
        event("1", LifecycleStatus::Upcoming, vec![Tag::Fixed(FixedTag::Conference)]),
        event("2", LifecycleStatus::Upcoming, vec![custom("rust", "Rust")]),
        event("3", LifecycleStatus::Upcoming, vec![custom("jazz", "Jazz")]),
        event("4", LifecycleStatus::Upcoming, Vec::new()),
    ];
    let criteria = FilterCriteria {
        tags: vec![Tag::Fixed(FixedTag::Conference), custom("other-id", "RUST")],
        ..Default::default()
    };

    assert_eq!(ids(&filter_events(&events, &criteria)), vec!["1", "2"]);
}

/// Expect a custom tag named like a fixed tag not to match the fixed one
#[test]
fn tag_filter_does_not_mix_kinds() {
    let events = vec![event(
        "1",
        LifecycleStatus::Upcoming,
        vec![Tag::Fixed(FixedTag::Workshop)],
    )];
    let criteria = FilterCriteria {
        tags: vec![custom("workshop", "Workshop")],
        ..Default::default()
    };

    assert!(filter_events(&events, &criteria).is_empty());
}

/// Expect adding a tag never to produce events outside the old result plus the new tag's matches
#[test]
fn tag_filter_is_monotonic() {
    let events = vec![
        event("1", LifecycleStatus::Upcoming, vec![Tag::Fixed(FixedTag::Conference)]),
        event("2", LifecycleStatus::Held, vec![Tag::Fixed(FixedTag::Workshop)]),
        event(
            "3",
            LifecycleStatus::Ongoing,
            vec![Tag::Fixed(FixedTag::Workshop), custom("rust", "Rust")],
        ),
        event("4", LifecycleStatus::Upcoming, vec![Tag::Fixed(FixedTag::Concert)]),
    ];
    let base = FilterCriteria {
        tags: vec![Tag::Fixed(FixedTag::Conference)],
        ..Default::default()
    };

    for new_tag in [
        Tag::Fixed(FixedTag::Workshop),
        custom("rust", "Rust"),
        Tag::Fixed(FixedTag::Festival),
    ] {
        let before = filter_events(&events, &base);
        let only_new = filter_events(
            &events,
            &FilterCriteria {
                tags: vec![new_tag.clone()],
                ..Default::default()
            },
        );
        let mut extended = base.clone();
        extended.tags.push(new_tag);
        let after = filter_events(&events, &extended);

        for event in &after {
            assert!(
                before.iter().chain(only_new.iter()).any(|e| e.id == event.id),
                "event {} appeared from nowhere",
                event.id
            );
        }
        assert!(after.len() <= before.len() + only_new.len());
    }
}

/// Expect only events starting in the selected month to be included
#[test]
fn month_filter_matches_year_and_month() {
    let events = vec![
        starting("1", "2025-03-01T10:00:00Z"),
        starting("2", "2025-04-01T10:00:00Z"),
        starting("3", "2024-03-20"),
        starting("4", "2025-03-31 23:00"),
        starting("5", "2025-03-31T23:30:00-05:00"),
        starting("6", "2025-04-01T00:30:00+02:00"),
    ];
    let criteria = FilterCriteria {
        month: YearMonth::new(2025, 3),
        ..Default::default()
    };

    assert_eq!(ids(&filter_events(&events, &criteria)), vec!["1", "4", "5"]);
}

/// Expect malformed timestamps to be excluded by a month filter rather than failing
#[test]
fn month_filter_skips_malformed_dates() {
    let events = vec![starting("1", "tomorrow"), starting("2", "2025-03-02")];
    let criteria = FilterCriteria {
        month: YearMonth::new(2025, 3),
        ..Default::default()
    };

    assert_eq!(ids(&filter_events(&events, &criteria)), vec!["2"]);
    assert_eq!(
        ids(&filter_events(&events, &FilterCriteria::default())),
        vec!["1", "2"]
    );
}

/// Expect all criteria to be combined with AND
#[test]
fn criteria_are_combined() {
    let mut events = conference_and_workshop();
    let mut third = event(
        "3",
        LifecycleStatus::Upcoming,
        vec![Tag::Fixed(FixedTag::Conference)],
    );
    third.title = "Other conference".to_string();
    third.starts_at = "2025-05-01".to_string();
    events.push(third);

    let criteria = FilterCriteria {
        search: "event".to_string(),
        tags: vec![Tag::Fixed(FixedTag::Conference)],
        month: YearMonth::new(2025, 3),
        statuses: vec![LifecycleStatus::Upcoming],
    };

    assert_eq!(ids(&filter_events(&events, &criteria)), vec!["1"]);
}
