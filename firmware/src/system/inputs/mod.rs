//! Abstraction of the panel's switch inputs.
//!
//! Sampling is driven by the control loop, so the debounce filter of every
//! switch advances exactly once per tick, before the tick's snapshot is
//! taken.

mod debounced;
pub mod switches;

pub use switches::Config as SwitchesPins;
use switches::Switches;

pub struct Inputs {
    pub switches: Switches,
}

pub struct Config {
    pub switches: SwitchesPins,
}

impl Inputs {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            switches: Switches::new(config.switches),
        }
    }

    pub fn sample(&mut self) {
        self.switches.sample();
    }
}
