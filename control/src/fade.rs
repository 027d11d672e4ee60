//! Free-running triangle ramp derived from the millisecond clock.

/// Calculate a triangular brightness ramp for the given time.
///
/// The clock value is coarsened by `shift` (controlling the animation
/// speed), offset by `phase` and masked to a 5-bit window. Values above the
/// window midpoint fold back down, producing a wave that ramps from 0 up to
/// `0x10` and back. The function is stateless and tolerates clock
/// wraparound, since only the masked low bits of the time matter.
#[must_use]
pub fn fade_pattern(milliseconds: u32, shift: u8, phase: u8) -> u8 {
    let x = ((milliseconds >> shift) as u8).wrapping_add(phase) & 0x1f;
    if x <= 0x10 {
        x
    } else {
        0x1f - x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn it_ramps_up_and_back_down_within_one_period() {
        let mut last = fade_pattern(0, 0, 0);
        for t in 1..=0x10 {
            let value = fade_pattern(t, 0, 0);
            assert!(value >= last, "not rising at t={t}");
            last = value;
        }
        for t in 0x11..0x20 {
            let value = fade_pattern(t, 0, 0);
            assert!(value <= last, "not falling at t={t}");
            last = value;
        }
    }

    #[test]
    fn it_survives_clock_wraparound() {
        // The last coarse step before the clock wraps and the first one
        // after it both sit at the bottom of the ramp.
        assert_eq!(fade_pattern(u32::MAX, 4, 0), 0);
        assert_eq!(fade_pattern(u32::MAX.wrapping_add(1 << 4), 4, 0), 0);
    }

    proptest! {
        #[test]
        fn it_repeats_with_the_expected_period(
            milliseconds in any::<u32>(),
            shift in 0u8..8,
            phase in any::<u8>(),
        ) {
            let period = 32u32 << shift;
            let one = fade_pattern(milliseconds, shift, phase);
            let other = fade_pattern(milliseconds.wrapping_add(period), shift, phase);
            prop_assert_eq!(one, other);
        }

        #[test]
        fn it_stays_within_the_5_bit_window(
            milliseconds in any::<u32>(),
            shift in 0u8..8,
            phase in any::<u8>(),
        ) {
            prop_assert!(fade_pattern(milliseconds, shift, phase) <= 0x10);
        }

        #[test]
        fn it_is_symmetrical_around_the_peak(
            coarse in 0u32..0x20,
            shift in 0u8..8,
        ) {
            // The peak itself has no mirror, the ramp rises one step higher
            // than it falls.
            prop_assume!(coarse != 0x0f && coarse != 0x10);
            let mirrored = 0x1f - coarse;
            prop_assert_eq!(
                fade_pattern(coarse << shift, shift, 0),
                fade_pattern(mirrored << shift, shift, 0),
            );
        }
    }
}
