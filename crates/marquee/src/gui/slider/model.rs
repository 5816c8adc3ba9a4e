use barker::content::SlideRecord;

/// Visual position of a slide relative to the active one. Resolution does
/// not wrap at the deck boundary: slide 0 is never the "next" of the last
/// slide even though navigation itself wraps. That asymmetry is part of the
/// styling contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideRole {
    Current,
    Previous,
    Next,
    Neutral,
}

impl SlideRole {
    pub fn resolve(index: usize, active: usize) -> Self {
        if index == active {
            Self::Current
        } else if active > 0 && index == active - 1 {
            Self::Previous
        } else if index == active + 1 {
            Self::Next
        } else {
            Self::Neutral
        }
    }

    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            Self::Current => Some("slide--current"),
            Self::Previous => Some("slide--previous"),
            Self::Next => Some("slide--next"),
            Self::Neutral => None,
        }
    }
}

/// Cursor position relative to a slide's geometric center. Transient and
/// purely cosmetic; zeroed when the cursor leaves the slide.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerOffset {
    pub dx: f64,
    pub dy: f64,
}

impl PointerOffset {
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    /// Offset of a widget-local cursor position from the widget's center.
    /// The center is integer-floored to match the observed behavior.
    pub fn from_pointer(x: f64, y: f64, width: i32, height: i32) -> Self {
        Self {
            dx: x - f64::from(width / 2),
            dy: y - f64::from(height / 2),
        }
    }
}

/// The slider's single piece of mutable state: which slide is active, plus
/// per-slide image-load flags driving the one-shot reveal. `generation`
/// identifies the deck across config reloads so image loads started for a
/// replaced deck cannot claim a fresh slide's reveal.
pub struct SliderState {
    deck: Vec<SlideRecord>,
    active: usize,
    loaded: Vec<bool>,
    generation: u64,
}

impl SliderState {
    /// `deck` must be non-empty; the config layer guarantees that.
    pub fn new(deck: Vec<SlideRecord>, generation: u64) -> Self {
        debug_assert!(!deck.is_empty(), "slider deck must have at least one slide");
        let loaded = vec![false; deck.len()];
        Self {
            deck,
            active: 0,
            loaded,
            generation,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn deck(&self) -> &[SlideRecord] {
        &self.deck
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn select_previous(&mut self) {
        self.active = (self.active + self.len() - 1) % self.len();
    }

    pub fn select_next(&mut self) {
        self.active = (self.active + 1) % self.len();
    }

    /// Direct selection. Returns whether the active index actually changed,
    /// so callers can skip redundant refreshes.
    pub fn select_index(&mut self, index: usize) -> bool {
        if index == self.active || index >= self.len() {
            return false;
        }
        self.active = index;
        true
    }

    /// Horizontal translation of the slide track, as a percentage of the
    /// track width. Pure function of the active index and deck size.
    pub fn track_offset_percent(&self) -> f64 {
        self.active as f64 * (100.0 / self.len() as f64)
    }

    pub fn role_of(&self, index: usize) -> SlideRole {
        SlideRole::resolve(index, self.active)
    }

    /// Records that a slide's image finished loading. Returns true only on
    /// the first call for that slide, so the reveal fires exactly once.
    /// Loads reported for another deck generation are ignored.
    pub fn mark_loaded(&mut self, index: usize, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        match self.loaded.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_loaded(&self, index: usize) -> bool {
        self.loaded.get(index).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barker::content::{ButtonLabel, Headline, ImageSource};

    fn deck(n: usize) -> Vec<SlideRecord> {
        (0..n)
            .map(|index| SlideRecord {
                index,
                image: ImageSource::new(format!("/tmp/slide-{}.jpg", index)),
                headline: Headline::new(format!("Slide {}", index)),
                button: ButtonLabel::new("Go"),
            })
            .collect()
    }

    #[test]
    fn active_index_stays_in_range() {
        for n in 1..=5 {
            let mut state = SliderState::new(deck(n), 0);
            for step in 0..50 {
                if step % 3 == 0 {
                    state.select_previous();
                } else {
                    state.select_next();
                }
                assert!(state.active() < n);
            }
        }
    }

    #[test]
    fn next_n_times_is_a_full_cycle() {
        let mut state = SliderState::new(deck(4), 0);
        state.select_index(2);
        for _ in 0..4 {
            state.select_next();
        }
        assert_eq!(state.active(), 2);
    }

    #[test]
    fn previous_inverts_next() {
        let mut state = SliderState::new(deck(5), 0);
        for start in 0..5 {
            state.select_index(start);
            state.select_next();
            state.select_previous();
            assert_eq!(state.active(), start);
        }
    }

    #[test]
    fn selecting_the_active_slide_changes_nothing() {
        let mut state = SliderState::new(deck(3), 0);
        assert!(!state.select_index(0));
        assert!(state.select_index(2));
        assert!(!state.select_index(2));
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut state = SliderState::new(deck(3), 0);
        assert!(!state.select_index(3));
        assert_eq!(state.active(), 0);
    }

    #[test]
    fn wraparound_scenario_with_four_slides() {
        let mut state = SliderState::new(deck(4), 0);
        state.select_previous();
        assert_eq!(state.active(), 3);
        state.select_next();
        state.select_next();
        assert_eq!(state.active(), 1);
        assert_eq!(state.track_offset_percent(), 25.0);
    }

    #[test]
    fn track_offset_at_origin_is_zero() {
        let state = SliderState::new(deck(7), 0);
        assert_eq!(state.track_offset_percent(), 0.0);
    }

    #[test]
    fn roles_do_not_wrap() {
        assert_eq!(SlideRole::resolve(2, 1), SlideRole::Next);
        assert_eq!(SlideRole::resolve(2, 3), SlideRole::Previous);
        assert_eq!(SlideRole::resolve(2, 0), SlideRole::Neutral);

        // boundary: slide 0 is not "next" of the last slide
        assert_eq!(SlideRole::resolve(0, 3), SlideRole::Neutral);
        // and the last slide is not "previous" of slide 0
        assert_eq!(SlideRole::resolve(3, 0), SlideRole::Neutral);
    }

    #[test]
    fn role_precedence_follows_the_active_neighbors() {
        let mut state = SliderState::new(deck(4), 0);
        state.select_index(1);
        assert_eq!(state.role_of(2), SlideRole::Next);
        state.select_index(3);
        assert_eq!(state.role_of(2), SlideRole::Previous);
        assert_eq!(state.role_of(0), SlideRole::Neutral);
    }

    #[test]
    fn pointer_offset_is_relative_to_floored_center() {
        let offset = PointerOffset::from_pointer(320.0, 100.0, 641, 401);
        assert_eq!(offset.dx, 0.0);
        assert_eq!(offset.dy, -100.0);
    }

    #[test]
    fn pointer_offset_resets_to_exact_zero() {
        let offset = PointerOffset::from_pointer(12.5, 388.0, 640, 400);
        assert_ne!(offset, PointerOffset::ZERO);
        assert_eq!(PointerOffset::ZERO.dx, 0.0);
        assert_eq!(PointerOffset::ZERO.dy, 0.0);
    }

    #[test]
    fn image_reveal_fires_exactly_once() {
        let mut state = SliderState::new(deck(2), 0);
        assert!(!state.is_loaded(1));
        assert!(state.mark_loaded(1, 0));
        assert!(state.is_loaded(1));
        assert!(!state.mark_loaded(1, 0));
        assert!(!state.mark_loaded(9, 0));
    }

    #[test]
    fn image_loads_from_a_replaced_deck_are_ignored() {
        let state = SliderState::new(deck(2), 0);

        // deck replaced, e.g. after a config reload
        let mut state = SliderState::new(deck(2), state.generation() + 1);

        // a load started for the old deck must not claim the reveal
        assert!(!state.mark_loaded(0, 0));
        assert!(!state.is_loaded(0));

        // the load for the current deck still reveals exactly once
        assert!(state.mark_loaded(0, 1));
        assert!(!state.mark_loaded(0, 1));
    }
}
