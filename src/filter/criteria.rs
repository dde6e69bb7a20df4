use crate::model::{
    event::{Event, LifecycleStatus, YearMonth},
    tag::Tag,
};

/// User-selected filter inputs. Every empty criterion matches all events.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterCriteria {
    pub search: String,
    pub tags: Vec<Tag>,
    pub month: Option<YearMonth>,
    pub statuses: Vec<LifecycleStatus>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of non-empty criteria, shown as a badge on the filter button.
    pub fn active_count(&self) -> usize {
        [
            !self.search.trim().is_empty(),
            !self.tags.is_empty(),
            self.month.is_some(),
            !self.statuses.is_empty(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    /// Lowercased search needle, `None` when the search box is blank.
    pub(crate) fn normalized_search(&self) -> Option<String> {
        match self.search.trim() {
            "" => None,
            search => Some(search.to_lowercase()),
        }
    }

    pub(crate) fn matches_tags(&self, event: &Event) -> bool {
        self.tags.is_empty()
            || event
                .tags
                .iter()
                .any(|tag| self.tags.iter().any(|selected| tag.matches(selected)))
    }

    pub(crate) fn matches_month(&self, event: &Event) -> bool {
        match self.month {
            None => true,
            Some(month) => event.year_month() == Some(month),
        }
    }

    pub(crate) fn matches_status(&self, event: &Event) -> bool {
        self.statuses.is_empty() || self.statuses.contains(&event.status)
    }

    /// Adds the tag to the selection, or removes every selected tag matching it.
    pub fn toggle_tag(&mut self, tag: Tag) {
        let before = self.tags.len();
        self.tags.retain(|selected| !selected.matches(&tag));
        if self.tags.len() == before {
            self.tags.push(tag);
        }
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.iter().any(|selected| selected.matches(tag))
    }

    pub fn toggle_status(&mut self, status: LifecycleStatus) {
        match self.statuses.iter().position(|s| *s == status) {
            Some(index) => {
                self.statuses.remove(index);
            }
            None => self.statuses.push(status),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
