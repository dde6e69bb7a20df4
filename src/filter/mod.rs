//! Client-side event filtering.
//!
//! The home page holds the full event collection and re-filters it synchronously on every input
//! change. [`filter_events`] combines four predicates (text search, tags, month, lifecycle status)
//! with a logical AND, then removes duplicate ids keeping the first occurrence. Input order is
//! preserved and no predicate can fail: a start timestamp that does not parse simply never
//! matches a month selector.
//!
//! [`selection::EventBrowser`] layers the marker selection state on top of the filter.

pub mod criteria;
pub mod selection;

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use crate::model::{event::Event, tag::Tag};

pub use criteria::FilterCriteria;
pub use selection::{EventBrowser, Selection};

/// Returns the events matching every non-empty criterion, de-duplicated by id.
pub fn filter_events(events: &[Event], criteria: &FilterCriteria) -> Vec<Event> {
    let search = criteria.normalized_search();

    let matching = events.iter().filter(|event| {
        matches_search(event, search.as_deref())
            && criteria.matches_tags(event)
            && criteria.matches_month(event)
            && criteria.matches_status(event)
    });

    dedup_by_id(matching)
}

/// Keeps the first event for each id, preserving order.
pub fn dedup_by_id<'a>(events: impl IntoIterator<Item = &'a Event>) -> Vec<Event> {
    let mut seen = HashSet::new();

    events
        .into_iter()
        .filter(|event| seen.insert(event.id.as_str()))
        .cloned()
        .collect()
}

/// Custom tags used by any event, one per matching group, in first-seen order.
///
/// Fixed tags are always offered by the filter panel, so only custom ones are collected here.
pub fn custom_tags_in(events: &[Event]) -> Vec<Tag> {
    let mut tags: Vec<Tag> = Vec::new();
    for tag in events.iter().flat_map(|event| &event.tags) {
        if matches!(tag, Tag::Custom(_)) && !tags.iter().any(|known| known.matches(tag)) {
            tags.push(tag.clone());
        }
    }

    tags
}

/// Case-insensitive substring match on the title or the organizer name.
fn matches_search(event: &Event, search: Option<&str>) -> bool {
    let Some(needle) = search else {
        return true;
    };

    event.title.to_lowercase().contains(needle)
        || event.organizer_name.to_lowercase().contains(needle)
}
