//! Desired state of output peripherals and collaborators after one tick.

use crate::led::LedFrame;
use crate::save::Save;

/// Response of the control store after processing one tick.
///
/// This response should be evaluated by the caller: the frame goes to the
/// LED driver, chain signals to the chain collaborator, and the save, when
/// present, marks a persistence transaction to be written out.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollResult {
    pub leds: LedFrame,
    pub chain: ChainSignals,
    pub save: Option<Save>,
}

/// Requests pushed to the chain-state collaborator every tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChainSignals {
    /// Locally pressed switches, debounced, bit i = channel i.
    pub pressed_bitmask: u8,
    /// One-shot edge raised when the operating mode just changed, telling
    /// the chain to hold off its own press interpretation.
    pub suspend_switches: bool,
}
