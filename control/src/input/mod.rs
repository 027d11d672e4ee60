//! Abstraction of the panel's input peripherals.

pub mod button;
pub mod snapshot;
pub mod store;
