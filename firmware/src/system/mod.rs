pub mod inputs;
pub mod leds;
pub mod storage;

pub use daisy::hal;

use daisy::flash::Flash;
use daisy::led::LedUser;
use hal::pac::CorePeripherals;
use hal::pac::Peripherals as DevicePeripherals;
use hal::prelude::*;
use systick_monotonic::Systick;

use inputs::{Config as InputsConfig, Inputs, SwitchesPins};
use leds::{Leds, Pins as LedsPins};

pub struct System {
    pub mono: Systick<1000>,
    pub status_led: LedUser,
    pub inputs: Inputs,
    pub leds: Leds,
    pub flash: Flash,
}

impl System {
    /// Initialize system abstraction
    ///
    /// # Panics
    ///
    /// The system can be initialized only once. It panics otherwise.
    #[must_use]
    pub fn init(mut cp: CorePeripherals, dp: DevicePeripherals) -> Self {
        enable_cache(&mut cp);

        let board = daisy::Board::take().unwrap();
        let ccdr = daisy::board_freeze_clocks!(board, dp);
        let pins = daisy::board_split_gpios!(board, ccdr, dp);
        let flash = daisy::board_split_flash!(ccdr, dp, pins);

        let mono = Systick::new(cp.SYST, 480_000_000);
        let status_led = daisy::board_split_leds!(pins).USER;

        let inputs = Inputs::new(InputsConfig {
            switches: SwitchesPins {
                switch_1: pins.GPIO.PIN_B9.into_floating_input(),
                switch_2: pins.GPIO.PIN_B10.into_floating_input(),
                switch_3: pins.GPIO.PIN_A8.into_floating_input(),
                switch_4: pins.GPIO.PIN_A9.into_floating_input(),
                switch_5: pins.GPIO.PIN_D8.into_floating_input(),
                switch_6: pins.GPIO.PIN_D9.into_floating_input(),
            },
        });

        let leds = Leds::new(LedsPins {
            data: pins.GPIO.PIN_D1.into_push_pull_output(),
            clock: pins.GPIO.PIN_D2.into_push_pull_output(),
            latch: pins.GPIO.PIN_D3.into_push_pull_output(),
        });

        Self {
            mono,
            status_led,
            inputs,
            leds,
            flash,
        }
    }
}

/// AN5212: Improve application performance when fetching instruction and
/// data, from both internal andexternal memories.
fn enable_cache(cp: &mut CorePeripherals) {
    cp.SCB.enable_icache();
    // NOTE: This requires cache management around all use of DMA.
    cp.SCB.enable_dcache(&mut cp.CPUID);
}
