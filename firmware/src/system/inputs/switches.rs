use etapa_control::NUM_CHANNELS;

use super::debounced::Debounced;
use crate::system::hal::gpio;

/// The six channel switches of the panel, one debounce filter each.
pub struct Switches {
    debounced: [Debounced<4>; NUM_CHANNELS],
    pub pressed: [bool; NUM_CHANNELS],
    pins: Pins,
}

struct Pins {
    switch_1: Switch1Pin,
    switch_2: Switch2Pin,
    switch_3: Switch3Pin,
    switch_4: Switch4Pin,
    switch_5: Switch5Pin,
    switch_6: Switch6Pin,
}

pub struct Config {
    pub switch_1: Switch1Pin,
    pub switch_2: Switch2Pin,
    pub switch_3: Switch3Pin,
    pub switch_4: Switch4Pin,
    pub switch_5: Switch5Pin,
    pub switch_6: Switch6Pin,
}

pub type Switch1Pin = gpio::gpiog::PG14<gpio::Input>;
pub type Switch2Pin = gpio::gpiog::PG13<gpio::Input>;
pub type Switch3Pin = gpio::gpiob::PB14<gpio::Input>;
pub type Switch4Pin = gpio::gpiob::PB15<gpio::Input>;
pub type Switch5Pin = gpio::gpioc::PC2<gpio::Input>;
pub type Switch6Pin = gpio::gpioc::PC3<gpio::Input>;

impl Switches {
    pub fn new(config: Config) -> Self {
        Self {
            debounced: [
                Debounced::new(),
                Debounced::new(),
                Debounced::new(),
                Debounced::new(),
                Debounced::new(),
                Debounced::new(),
            ],
            pressed: [false; NUM_CHANNELS],
            pins: Pins {
                switch_1: config.switch_1,
                switch_2: config.switch_2,
                switch_3: config.switch_3,
                switch_4: config.switch_4,
                switch_5: config.switch_5,
                switch_6: config.switch_6,
            },
        }
    }

    /// Run the debounce filter of every switch, once per tick.
    pub fn sample(&mut self) {
        self.pressed[0] = self.debounced[0].update(self.pins.switch_1.is_low());
        self.pressed[1] = self.debounced[1].update(self.pins.switch_2.is_low());
        self.pressed[2] = self.debounced[2].update(self.pins.switch_3.is_low());
        self.pressed[3] = self.debounced[3].update(self.pins.switch_4.is_low());
        self.pressed[4] = self.debounced[4].update(self.pins.switch_5.is_low());
        self.pressed[5] = self.debounced[5].update(self.pins.switch_6.is_low());
    }

    /// Raw reading bypassing the debounce filter.
    ///
    /// The boot gesture is taken the instant the module initializes, before
    /// the filter had a chance to prime.
    #[must_use]
    pub fn pressed_immediate(&self, i: usize) -> bool {
        match i {
            0 => self.pins.switch_1.is_low(),
            1 => self.pins.switch_2.is_low(),
            2 => self.pins.switch_3.is_low(),
            3 => self.pins.switch_4.is_low(),
            4 => self.pins.switch_5.is_low(),
            5 => self.pins.switch_6.is_low(),
            _ => false,
        }
    }
}
