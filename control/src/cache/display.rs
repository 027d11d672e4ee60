//! Volatile display state layered on top of the mode rendering.

use crate::led::LedColor;
use crate::NUM_CHANNELS;

/// How many frames the mode toggle confirmation stays on screen.
pub const MODE_TOGGLE_DISPLAY_TICKS: u32 = 1000;

/// Transient state feeding the renderer, none of it is persisted.
///
/// Counters here are advanced *after* a frame was composed, so every render
/// pass consistently sees the values as of the start of its tick.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Display {
    pub mode_toggle: Option<ModeToggleOverlay>,
    pub slider_decay: [u32; NUM_CHANNELS],
    pub factory_test: bool,
    /// Indicator colors computed by the six-stage envelope engine.
    pub segment_leds: [LedColor; NUM_CHANNELS],
}

/// Confirmation shown after a very long press toggled the operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeToggleOverlay {
    pub channel: usize,
    pub remaining_ticks: u32,
}

impl Display {
    pub fn show_mode_toggle(&mut self, channel: usize) {
        self.mode_toggle = Some(ModeToggleOverlay {
            channel,
            remaining_ticks: MODE_TOGGLE_DISPLAY_TICKS,
        });
    }

    /// Advance the overlay countdown after an overlay frame was shown.
    pub fn tick_mode_toggle(&mut self) {
        if let Some(overlay) = self.mode_toggle.as_mut() {
            overlay.remaining_ticks -= 1;
            if overlay.remaining_ticks == 0 {
                self.mode_toggle = None;
            }
        }
    }

    /// Advance the slider tails after an ordinary mode frame was shown.
    pub fn tick_slider_decay(&mut self) {
        for counter in &mut self.slider_decay {
            *counter = counter.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_expires_after_exactly_its_configured_duration() {
        let mut display = Display::default();
        display.show_mode_toggle(2);

        for _ in 0..MODE_TOGGLE_DISPLAY_TICKS - 1 {
            display.tick_mode_toggle();
            assert!(display.mode_toggle.is_some());
        }
        display.tick_mode_toggle();
        assert!(display.mode_toggle.is_none());
    }

    #[test]
    fn repeated_toggle_restarts_the_countdown() {
        let mut display = Display::default();
        display.show_mode_toggle(0);
        display.tick_mode_toggle();
        display.show_mode_toggle(4);
        assert_eq!(
            display.mode_toggle,
            Some(ModeToggleOverlay {
                channel: 4,
                remaining_ticks: MODE_TOGGLE_DISPLAY_TICKS,
            })
        );
    }

    #[test]
    fn slider_decay_stops_at_zero() {
        let mut display = Display::default();
        display.slider_decay[1] = 2;
        display.tick_slider_decay();
        display.tick_slider_decay();
        display.tick_slider_decay();
        assert_eq!(display.slider_decay, [0; NUM_CHANNELS]);
    }
}
