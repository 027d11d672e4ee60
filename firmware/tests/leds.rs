#![no_std]
#![no_main]

use etapa_firmware as _; // memory layout + panic handler

#[defmt_test::tests]
mod tests {
    use etapa_control::{LedColor, LedFrame};
    use etapa_firmware::system::System;
    use etapa_firmware::testlib::sample_until_switch_is_clicked;

    #[init]
    fn init() -> System {
        let cp = cortex_m::Peripherals::take().unwrap();
        let dp = daisy::pac::Peripherals::take().unwrap();

        System::init(cp, dp)
    }

    #[test]
    fn leds_go_on_and_off(system: &mut System) {
        defmt::info!("Click the first switch");
        sample_until_switch_is_clicked(&mut system.inputs, 0);

        system.leds.set_frame(&LedFrame::default());
        defmt::info!("Click the first switch if all leds are dimmed");
        sample_until_switch_is_clicked(&mut system.inputs, 0);

        let lit = LedFrame {
            indicator: [LedColor::Yellow; 6],
            slider: [LedColor::Green; 6],
        };
        system.leds.set_frame(&lit);
        defmt::info!("Click the first switch if all leds are lit up");
        sample_until_switch_is_clicked(&mut system.inputs, 0);
    }

    #[test]
    fn indicator_colors_are_distinguishable(system: &mut System) {
        let mut frame = LedFrame::default();
        frame.indicator[0] = LedColor::Green;
        frame.indicator[1] = LedColor::Yellow;
        frame.indicator[2] = LedColor::Red;
        system.leds.set_frame(&frame);

        defmt::info!("Click the first switch if the colors read green, yellow, red");
        sample_until_switch_is_clicked(&mut system.inputs, 0);
    }
}
