//! Structures used to pass the current state of hardware peripherals.

use crate::NUM_CHANNELS;

/// The current state of all peripherals observed by the panel.
///
/// `Snapshot` is meant to be passed from the hardware binding to the
/// control package once per tick. It should pass pretty raw data, with two
/// exceptions:
///
/// 1. Switch debouncing is done by the caller, exactly once per tick before
///    the snapshot is taken.
/// 2. Chain observation is resolved by the chain collaborator; it enters
///    here already interpreted.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub switches: [bool; NUM_CHANNELS],
    pub chain: ChainSnapshot,
}

/// Chain state pulled fresh for every tick.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChainSnapshot {
    /// The chain is still enumerating connected modules.
    pub discovering_neighbors: bool,
    /// Total number of modules in the chain, including this one.
    pub size: usize,
    /// Position of this module within the chain, starting at 0.
    pub index: usize,
    pub loop_status: [LoopStatus; NUM_CHANNELS],
}

impl Default for ChainSnapshot {
    fn default() -> Self {
        Self {
            discovering_neighbors: false,
            size: 1,
            index: 0,
            loop_status: [LoopStatus::Free; NUM_CHANNELS],
        }
    }
}

/// Role a channel plays within a loop, as reported by the chain.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoopStatus {
    #[default]
    Free,
    Start,
    End,
    SelfLooping,
}
