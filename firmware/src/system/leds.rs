//! Driver of the panel LEDs behind a chain of shift registers.

use etapa_control::{LedColor, LedFrame, NUM_CHANNELS};

use crate::system::hal::gpio;

pub struct Leds {
    pins: Pins,
}

pub struct Pins {
    pub data: DataPin,
    pub clock: ClockPin,
    pub latch: LatchPin,
}

pub type DataPin = gpio::gpiob::PB4<gpio::Output>;
pub type ClockPin = gpio::gpioc::PC11<gpio::Output>;
pub type LatchPin = gpio::gpioc::PC10<gpio::Output>;

impl Leds {
    #[must_use]
    pub fn new(pins: Pins) -> Self {
        Self { pins }
    }

    /// Shift out the whole frame and latch it at once.
    ///
    /// Indicator LEDs are bicolor, with the green and red dies on separate
    /// register outputs; yellow lights both. The single latch pulse flips
    /// all outputs in one instant, a frame is never visible half written.
    pub fn set_frame(&mut self, frame: &LedFrame) {
        for i in (0..NUM_CHANNELS).rev() {
            self.shift_bit(frame.slider[i] != LedColor::Off);
        }
        for i in (0..NUM_CHANNELS).rev() {
            let (green, red) = match frame.indicator[i] {
                LedColor::Off => (false, false),
                LedColor::Green => (true, false),
                LedColor::Yellow => (true, true),
                LedColor::Red => (false, true),
            };
            self.shift_bit(red);
            self.shift_bit(green);
        }
        self.pins.latch.set_high();
        self.pins.latch.set_low();
    }

    fn shift_bit(&mut self, on: bool) {
        self.pins.data.set_state(on.into());
        self.pins.clock.set_high();
        self.pins.clock.set_low();
    }
}
