#![no_std]
#![no_main]

use etapa_firmware as _; // memory layout + panic handler

#[defmt_test::tests]
mod tests {
    use etapa_firmware::system::inputs::Inputs;
    use etapa_firmware::system::System;
    use etapa_firmware::testlib::sample_until_switch_is_clicked;

    #[init]
    fn init() -> Inputs {
        let cp = cortex_m::Peripherals::take().unwrap();
        let dp = daisy::pac::Peripherals::take().unwrap();

        System::init(cp, dp).inputs
    }

    #[test]
    fn all_switches_work(inputs: &mut Inputs) {
        defmt::info!("Press switches one by one, from left to right");

        for i in 0..6 {
            sample_until_switch_is_clicked(inputs, i);
            defmt::info!("OK");
        }
    }

    #[test]
    fn immediate_reading_follows_the_first_switch(inputs: &mut Inputs) {
        defmt::info!("Hold the first switch down");
        sample_until_switch_is_clicked(inputs, 0);
        defmt::assert!(inputs.switches.pressed_immediate(0));
    }
}
