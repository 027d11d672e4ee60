//! Press timers classifying one button hold over several time horizons.

/// Ticks a button must be held before its release counts as a long press.
pub const LONG_PRESS_TICKS: u32 = 500;

/// Ticks a button must be held before the mode toggle fires.
///
/// Must stay strictly above [`LONG_PRESS_TICKS`], otherwise a long press
/// could never be released before the toggle claims the hold.
pub const MODE_TOGGLE_PRESS_TICKS: u32 = 2000;

/// One per-channel hold counter.
///
/// A frozen timer ignores the rest of the ongoing hold. It is used to
/// consume a hold once it triggered an action, so the action fires once per
/// physical press rather than once per tick, and to suppress segment
/// actions on other channels while a mode change is in flight. Releasing
/// the button always returns the timer to `Idle`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressTimer {
    #[default]
    Idle,
    Counting(u32),
    Frozen,
}

impl PressTimer {
    /// Advance the timer one tick, returning the hold duration on release.
    ///
    /// A release of a frozen timer reports nothing, the hold was already
    /// consumed elsewhere.
    pub fn update(&mut self, down: bool) -> Option<u32> {
        if down {
            *self = match *self {
                Self::Idle => Self::Counting(1),
                Self::Counting(ticks) => Self::Counting(ticks.saturating_add(1)),
                Self::Frozen => Self::Frozen,
            };
            None
        } else {
            let held = match *self {
                Self::Counting(ticks) => Some(ticks),
                _ => None,
            };
            *self = Self::Idle;
            held
        }
    }

    pub fn freeze(&mut self) {
        *self = Self::Frozen;
    }

    #[must_use]
    pub fn elapsed(self) -> Option<u32> {
        match self {
            Self::Counting(ticks) => Some(ticks),
            _ => None,
        }
    }
}

/// Classification of a finished hold against the press thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Press {
    Tap,
    Long,
}

/// Classify a released hold, or nothing when the hold reached the mode
/// toggle horizon and belongs to the other timer bank.
#[must_use]
pub fn classify(held_ticks: u32) -> Option<Press> {
    if held_ticks > LONG_PRESS_TICKS {
        if held_ticks < MODE_TOGGLE_PRESS_TICKS {
            Some(Press::Long)
        } else {
            None
        }
    } else {
        Some(Press::Tap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_held_it_counts_every_tick_and_reports_the_duration_on_release() {
        let mut timer = PressTimer::default();
        for _ in 0..3 {
            assert_eq!(timer.update(true), None);
        }
        assert_eq!(timer.elapsed(), Some(3));
        assert_eq!(timer.update(false), Some(3));
        assert_eq!(timer, PressTimer::Idle);
    }

    #[test]
    fn when_frozen_it_ignores_the_rest_of_the_hold() {
        let mut timer = PressTimer::default();
        timer.update(true);
        timer.freeze();
        assert_eq!(timer.update(true), None);
        assert_eq!(timer.elapsed(), None);
        assert_eq!(timer.update(false), None);
    }

    #[test]
    fn when_released_after_a_freeze_it_counts_the_next_hold_again() {
        let mut timer = PressTimer::Frozen;
        timer.update(false);
        timer.update(true);
        assert_eq!(timer.elapsed(), Some(1));
    }

    #[test]
    fn classification_splits_holds_at_the_documented_thresholds() {
        assert_eq!(classify(1), Some(Press::Tap));
        assert_eq!(classify(LONG_PRESS_TICKS), Some(Press::Tap));
        assert_eq!(classify(LONG_PRESS_TICKS + 1), Some(Press::Long));
        assert_eq!(classify(MODE_TOGGLE_PRESS_TICKS - 1), Some(Press::Long));
        assert_eq!(classify(MODE_TOGGLE_PRESS_TICKS), None);
    }

    #[test]
    fn thresholds_keep_a_window_for_long_presses() {
        assert!(MODE_TOGGLE_PRESS_TICKS > LONG_PRESS_TICKS);
    }
}
