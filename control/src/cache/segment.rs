//! Per-channel configuration packed into a single persisted byte.

/// One channel's persisted configuration.
///
/// A single byte serves two display modes at once. The stage family reads
/// the 2-bit type from the bottom of the byte, while the ouroboros family
/// reads the same byte shifted right by four. After that shift, the
/// waveshape high bit lands on the glow selector position. Changing the bit
/// layout of one mode therefore always affects the read path of the other.
///
/// ```text
/// 7   6   5   4   3   2   1   0
/// .   W   O   O   .   .   P   P
///     |   '---'           '---'
///     |     |               '-- primary type, stage family palette index
///     |     '-- ouroboros type, cycled 0,1,2 by a tap
///     '-- waveshape high bit, toggled by a long press;
///         doubles as the ouroboros glow selector once shifted
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentConfiguration(u8);

const PRIMARY_TYPE_MASK: u8 = 0b0000_0011;
const OUROBOROS_TYPE_MASK: u8 = 0b0011_0000;
const OUROBOROS_SHIFT: u8 = 4;
const WAVESHAPE_BIT: u8 = 0b0100_0000;

impl SegmentConfiguration {
    #[must_use]
    pub fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn raw(self) -> u8 {
        self.0
    }

    /// 2-bit palette selector used by the stage family modes.
    #[must_use]
    pub fn primary_type(self) -> u8 {
        self.0 & PRIMARY_TYPE_MASK
    }

    /// 2-bit palette selector used by the ouroboros family modes.
    #[must_use]
    pub fn ouroboros_type(self) -> u8 {
        (self.0 >> OUROBOROS_SHIFT) & 0x3
    }

    #[must_use]
    pub fn waveshape_bit(self) -> bool {
        self.0 & WAVESHAPE_BIT != 0
    }

    /// Whether the ouroboros rendering breathes instead of staying solid.
    ///
    /// Reads the waveshape high bit through the shifted ouroboros path.
    #[must_use]
    pub fn ouroboros_glow(self) -> bool {
        (self.0 >> OUROBOROS_SHIFT) & 0x4 != 0
    }

    /// Advance the ouroboros type through 0, 1, 2 and back to 0.
    pub fn cycle_ouroboros_type(&mut self) {
        let next = (self.ouroboros_type() + 1) % 3;
        self.0 &= !OUROBOROS_TYPE_MASK;
        self.0 |= next << OUROBOROS_SHIFT;
    }

    pub fn toggle_waveshape_bit(&mut self) {
        self.0 ^= WAVESHAPE_BIT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_cycled_three_times_the_ouroboros_type_returns_to_its_origin() {
        let mut configuration = SegmentConfiguration::from_raw(0b0100_0010);
        let original = configuration;

        configuration.cycle_ouroboros_type();
        assert_eq!(configuration.ouroboros_type(), 1);
        configuration.cycle_ouroboros_type();
        assert_eq!(configuration.ouroboros_type(), 2);
        configuration.cycle_ouroboros_type();

        assert_eq!(configuration, original);
    }

    #[test]
    fn when_ouroboros_type_is_cycled_other_bits_are_left_alone() {
        let mut configuration = SegmentConfiguration::from_raw(0b0100_0011);
        configuration.cycle_ouroboros_type();
        assert_eq!(configuration.raw() & !OUROBOROS_TYPE_MASK, 0b0100_0011);
    }

    #[test]
    fn when_out_of_range_ouroboros_type_is_cycled_it_recovers_into_range() {
        let mut configuration = SegmentConfiguration::from_raw(0b0011_0000);
        configuration.cycle_ouroboros_type();
        assert_eq!(configuration.ouroboros_type(), 1);
    }

    #[test]
    fn when_waveshape_is_toggled_it_flips_exactly_one_bit() {
        let mut configuration = SegmentConfiguration::from_raw(0b0010_0001);
        configuration.toggle_waveshape_bit();
        assert_eq!(configuration.raw(), 0b0110_0001);
        configuration.toggle_waveshape_bit();
        assert_eq!(configuration.raw(), 0b0010_0001);
    }

    #[test]
    fn waveshape_bit_reads_back_as_the_ouroboros_glow() {
        let mut configuration = SegmentConfiguration::from_raw(0);
        assert!(!configuration.ouroboros_glow());
        configuration.toggle_waveshape_bit();
        assert!(configuration.waveshape_bit());
        assert!(configuration.ouroboros_glow());
    }
}
