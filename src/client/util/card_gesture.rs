//! Interaction state of an event card.
//!
//! Hovering the flip handle turns the card to its back face (register and invite actions). On the
//! front face two clicks less than [`DOUBLE_CLICK_WINDOW_MS`] apart toggle the favorite and start a
//! three-wave ripple; a click that stays alone for the whole window opens the comments dialog.
//! Timestamps are passed in so the rules can be driven without a browser.

/// Clicks closer than this count as a double click.
pub const DOUBLE_CLICK_WINDOW_MS: i64 = 300;
/// Number of concentric waves drawn by the favorite ripple.
pub const RIPPLE_WAVES: usize = 3;
/// How long the ripple stays visible after a favorite toggle.
pub const RIPPLE_DURATION_MS: i64 = 900;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardFace {
    #[default]
    Front,
    Flipped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureAction {
    ToggleFavorite,
    OpenDetails,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardGesture {
    face: CardFace,
    pending_click: Option<i64>,
    ripple_started: Option<i64>,
}

impl CardGesture {
    pub fn face(&self) -> CardFace {
        self.face
    }

    pub fn hover_enter(&mut self) {
        self.face = CardFace::Flipped;
        self.pending_click = None;
    }

    pub fn hover_leave(&mut self) {
        self.face = CardFace::Front;
    }

    pub fn has_pending_click(&self) -> bool {
        self.pending_click.is_some()
    }

    /// Registers a click on the front face at `now_ms`.
    ///
    /// Returns [`GestureAction::ToggleFavorite`] when it completes a double click. A previous
    /// click that is already outside the window resolves to [`GestureAction::OpenDetails`] and
    /// this click starts a new window. Otherwise the click waits for [`resolve`](Self::resolve).
    pub fn click(&mut self, now_ms: i64) -> Option<GestureAction> {
        if self.face == CardFace::Flipped {
            return None;
        }

        match self.pending_click.replace(now_ms) {
            Some(previous) if now_ms - previous < DOUBLE_CLICK_WINDOW_MS => {
                self.pending_click = None;
                self.ripple_started = Some(now_ms);
                Some(GestureAction::ToggleFavorite)
            }
            Some(_) => Some(GestureAction::OpenDetails),
            None => None,
        }
    }

    /// Resolves a lone click once its window has passed.
    pub fn resolve(&mut self, now_ms: i64) -> Option<GestureAction> {
        match self.pending_click {
            Some(clicked) if now_ms - clicked >= DOUBLE_CLICK_WINDOW_MS => {
                self.pending_click = None;
                Some(GestureAction::OpenDetails)
            }
            _ => None,
        }
    }

    pub fn ripple_active(&self, now_ms: i64) -> bool {
        matches!(self.ripple_started, Some(started) if now_ms - started < RIPPLE_DURATION_MS)
    }

    /// Drops an expired ripple, returns whether anything changed.
    pub fn clear_ripple(&mut self, now_ms: i64) -> bool {
        if self.ripple_started.is_some() && !self.ripple_active(now_ms) {
            self.ripple_started = None;
            return true;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect two clicks 200ms apart to toggle the favorite and show the ripple
    #[test]
    fn double_click_toggles_favorite() {
        let mut gesture = CardGesture::default();

        assert_eq!(gesture.click(1_000), None);
        assert_eq!(gesture.click(1_200), Some(GestureAction::ToggleFavorite));
        assert!(gesture.ripple_active(1_200));
        // The pending click was consumed, so the window timer finds nothing
        assert_eq!(gesture.resolve(1_500), None);
    }

    /// Expect two clicks 500ms apart to open the comment dialog instead
    #[test]
    fn slow_clicks_open_details() {
        let mut gesture = CardGesture::default();

        assert_eq!(gesture.click(1_000), None);
        assert_eq!(gesture.click(1_500), Some(GestureAction::OpenDetails));
        assert!(!gesture.ripple_active(1_500));
        assert_eq!(gesture.resolve(1_800), Some(GestureAction::OpenDetails));
    }

    /// Expect a lone click to open details only after the window passed
    #[test]
    fn single_click_resolves_after_window() {
        let mut gesture = CardGesture::default();
        gesture.click(0);

        assert_eq!(gesture.resolve(DOUBLE_CLICK_WINDOW_MS - 1), None);
        assert!(gesture.has_pending_click());
        assert_eq!(
            gesture.resolve(DOUBLE_CLICK_WINDOW_MS),
            Some(GestureAction::OpenDetails)
        );
        assert!(!gesture.has_pending_click());
    }

    /// Expect the ripple to clear after its fixed duration
    #[test]
    fn ripple_clears_after_duration() {
        let mut gesture = CardGesture::default();
        gesture.click(0);
        gesture.click(100);

        assert!(!gesture.clear_ripple(100 + RIPPLE_DURATION_MS - 1));
        assert!(gesture.ripple_active(100 + RIPPLE_DURATION_MS - 1));
        assert!(gesture.clear_ripple(100 + RIPPLE_DURATION_MS));
        assert!(!gesture.ripple_active(100 + RIPPLE_DURATION_MS));
    }

    /// Expect hovering to flip the card and clicks on the back face to be ignored
    #[test]
    fn flipped_card_ignores_clicks() {
        let mut gesture = CardGesture::default();
        gesture.click(0);

        gesture.hover_enter();
        assert_eq!(gesture.face(), CardFace::Flipped);
        assert_eq!(gesture.click(100), None);
        assert_eq!(gesture.resolve(1_000), None);

        gesture.hover_leave();
        assert_eq!(gesture.face(), CardFace::Front);
    }
}
