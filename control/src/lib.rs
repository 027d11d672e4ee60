//! Front-panel control loop of a chainable six-channel eurorack module.
//!
//! This crate interprets button presses over multiple time horizons and
//! renders the full LED feedback of the module, one frame per tick. It is
//! meant to be driven by a firmware loop running on a fixed frequency,
//! passing peripheral state in and desired outputs back out:
//!
//! ```text
//!                  [ ControlLoop 1 kHz ]
//!                     |            A
//!     (InputSnapshot) |            | (PollResult)
//!                     V            |
//!    [Switches] -> [ Store {Cache} ] -> [LEDs]
//!                          |            [Chain]
//!                          V
//!                       (Save) -------> [Flash]
//! ```
//!
//! The store renders first and only then processes the tick's input, so
//! every frame consistently reflects the state of the *previous* tick. This
//! one-tick lag is uniform over everything a single frame consumes.

#![cfg_attr(not(test), no_std)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]

pub mod cache;
pub mod fade;
pub mod input;
pub mod led;
mod log;
pub mod output;
mod render;
pub mod save;
pub mod store;

pub use cache::display::MODE_TOGGLE_DISPLAY_TICKS;
pub use cache::press::{LONG_PRESS_TICKS, MODE_TOGGLE_PRESS_TICKS};
pub use cache::OperatingMode;
pub use input::snapshot::{ChainSnapshot, LoopStatus, Snapshot as InputSnapshot};
pub use led::{LedColor, LedFrame};
pub use output::{ChainSignals, PollResult};
pub use save::{Save, Store as SaveStore};
pub use store::Store;

/// Number of channels on a single module, one switch and LED pair each.
pub const NUM_CHANNELS: usize = 6;
