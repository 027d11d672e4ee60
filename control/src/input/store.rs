//! Process all input peripherals over time.

use super::button::Button;
use super::snapshot::{ChainSnapshot, Snapshot};
use crate::NUM_CHANNELS;

/// Stateful store of raw inputs.
///
/// This struct turns the raw snapshot into a set of abstracted peripherals,
/// providing click and release detection per switch. Note that despite all
/// its attributes are public, they should be only read from.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Store {
    pub switches: [Button; NUM_CHANNELS],
    pub chain: ChainSnapshot,
}

impl Store {
    pub fn update(&mut self, snapshot: Snapshot) {
        for (switch, down) in self.switches.iter_mut().zip(&snapshot.switches) {
            switch.update(*down);
        }
        self.chain = snapshot.chain;
    }

    /// Bitmask of currently pressed switches, bit i = channel i, debounced.
    #[must_use]
    pub fn pressed_bitmask(&self) -> u8 {
        let mut bitmask = 0;
        for (i, switch) in self.switches.iter().enumerate() {
            if switch.pressed {
                bitmask |= 1 << i;
            }
        }
        bitmask
    }
}
