use crate::{
    filter::{filter_events, FilterCriteria},
    model::event::Event,
};

/// Which part of the collection the home page shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Selection {
    /// Everything that passes the current filter.
    #[default]
    AllEvents,
    /// Exactly one event, picked from the map.
    SingleSelected(String),
}

/// Full event collection plus the filter and marker selection applied to it.
///
/// Transitions:
/// - `AllEvents -> SingleSelected` on [`select`](Self::select)
/// - `SingleSelected -> AllEvents` on [`reset`](Self::reset) or any
///   [`set_criteria`](Self::set_criteria) call
///
/// The visible list is always derived from the full collection, so leaving the selection never
/// depends on what was visible before.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventBrowser {
    events: Vec<Event>,
    criteria: FilterCriteria,
    selection: Selection,
    matching: Vec<Event>,
    visible: Vec<Event>,
}

impl EventBrowser {
    pub fn new(events: Vec<Event>) -> Self {
        let mut browser = Self {
            events,
            ..Default::default()
        };
        browser.recompute();
        browser
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Events to render in the list.
    pub fn visible(&self) -> &[Event] {
        &self.visible
    }

    /// Events passing the current filter, regardless of the marker selection.
    pub fn matching(&self) -> &[Event] {
        &self.matching
    }

    pub fn active_filter_count(&self) -> usize {
        self.criteria.active_count()
    }

    /// Shows only the event behind a clicked marker. Unknown ids are ignored.
    pub fn select(&mut self, event_id: &str) -> bool {
        let Some(event) = self.events.iter().find(|e| e.id == event_id) else {
            return false;
        };

        self.visible = vec![event.clone()];
        self.selection = Selection::SingleSelected(event_id.to_string());
        true
    }

    /// Leaves the single selection and shows the filtered collection again.
    pub fn reset(&mut self) {
        self.selection = Selection::AllEvents;
        self.recompute();
    }

    /// Applies new filter inputs, always from the full collection.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.selection = Selection::AllEvents;
        self.recompute();
    }

    /// Applies a change to the current filter inputs.
    pub fn update_criteria(&mut self, update: impl FnOnce(&mut FilterCriteria)) {
        let mut criteria = self.criteria.clone();
        update(&mut criteria);
        self.set_criteria(criteria);
    }

    /// Swaps in a freshly loaded collection, keeping the filter inputs.
    pub fn replace_events(&mut self, events: Vec<Event>) {
        self.events = events;
        self.selection = Selection::AllEvents;
        self.recompute();
    }

    /// Inserts or replaces an event after the backend confirmed the change.
    pub fn upsert(&mut self, event: Event) {
        match self.events.iter_mut().find(|e| e.id == event.id) {
            Some(existing) => *existing = event,
            None => self.events.push(event),
        }
        self.refresh();
    }

    pub fn remove(&mut self, event_id: &str) {
        self.events.retain(|e| e.id != event_id);
        if self.selection == Selection::SingleSelected(event_id.to_string()) {
            self.selection = Selection::AllEvents;
        }
        self.refresh();
    }

    /// Recomputes the visible list without leaving a still valid selection.
    fn refresh(&mut self) {
        self.matching = filter_events(&self.events, &self.criteria);
        match self.selection.clone() {
            Selection::SingleSelected(id) => {
                if !self.select(&id) {
                    self.reset();
                }
            }
            Selection::AllEvents => self.recompute(),
        }
    }

    fn recompute(&mut self) {
        self.matching = filter_events(&self.events, &self.criteria);
        self.visible = self.matching.clone();
    }
}
