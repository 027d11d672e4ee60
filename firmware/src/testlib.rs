use crate::system::inputs::Inputs;

pub fn sample_until_switch_is_clicked(inputs: &mut Inputs, i: usize) {
    loop {
        let was_down = inputs.switches.pressed[i];
        inputs.sample();
        let is_down = inputs.switches.pressed[i];
        if !was_down && is_down {
            break;
        }
        cortex_m::asm::delay(480_000_000 / 1000);
    }
}
