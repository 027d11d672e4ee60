//! LED frame model shared between the control loop and the LED driver.

use crate::NUM_CHANNELS;

/// Closed palette of the bicolor panel LEDs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedColor {
    #[default]
    Off,
    Green,
    Yellow,
    Red,
}

/// Colors assigned to the four values of a 2-bit segment type.
pub const PALETTE: [LedColor; 4] = [
    LedColor::Green,
    LedColor::Yellow,
    LedColor::Red,
    LedColor::Off,
];

/// Desired state of every LED on the panel for one frame.
///
/// The frame is composed fresh every tick and handed over to the LED driver,
/// which flushes it as a whole.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedFrame {
    pub indicator: [LedColor; NUM_CHANNELS],
    pub slider: [LedColor; NUM_CHANNELS],
}

/// Gate a color on or off based on its brightness and the frame's PWM phase.
///
/// Comparing the brightness against the running 4-bit PWM counter every
/// frame duty-cycles the discrete palette entry into apparent analog
/// brightness.
#[must_use]
pub fn duty_cycled(color: LedColor, brightness: u8, pwm: u8) -> LedColor {
    if brightness >= pwm && brightness != 0 {
        color
    } else {
        LedColor::Off
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_brightness_is_zero_it_stays_off_for_the_whole_pwm_cycle() {
        for pwm in 0..16 {
            assert_eq!(duty_cycled(LedColor::Red, 0, pwm), LedColor::Off);
        }
    }

    #[test]
    fn when_brightness_is_full_it_stays_lit_for_the_whole_pwm_cycle() {
        for pwm in 0..16 {
            assert_eq!(duty_cycled(LedColor::Red, 0xf, pwm), LedColor::Red);
        }
    }

    #[test]
    fn when_brightness_is_partial_it_is_lit_for_a_proportional_share() {
        let lit = (0..16)
            .filter(|pwm| duty_cycled(LedColor::Green, 0x8, *pwm) != LedColor::Off)
            .count();
        assert_eq!(lit, 9);
    }
}
