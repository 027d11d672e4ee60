#![no_main]
#![no_std]

use etapa_firmware as _; // global logger + panicking-behavior

#[rtic::app(device = stm32h7xx_hal::pac, peripherals = true, dispatchers = [EXTI0, EXTI1, EXTI2])]
mod app {
    use daisy::led::{Led, LedUser};
    use fugit::ExtU64;
    use systick_monotonic::Systick;

    use etapa_control::{InputSnapshot, Save, Store};
    use etapa_firmware::system::inputs::Inputs;
    use etapa_firmware::system::leds::Leds;
    use etapa_firmware::system::storage::Storage;
    use etapa_firmware::system::System;

    const BLINKS: u8 = 1;

    #[monotonic(binds = SysTick, default = true)]
    type Mono = Systick<1000>; // 1 kHz / 1 ms granularity

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        status_led: LedUser,
        store: Store,
        inputs: Inputs,
        leds: Leds,
        storage: Storage,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local, init::Monotonics) {
        defmt::info!("INIT");

        let system = System::init(cx.core, cx.device);
        let mono = system.mono;
        let inputs = system.inputs;
        let mut storage = Storage::new(system.flash);

        let mut store = Store::from(storage.load_save());

        // The boot gesture must see the raw pin before the debounce filter
        // had a chance to prime.
        if let Some(save) = store.apply_boot_gesture(inputs.switches.pressed_immediate(0)) {
            storage.save_save(save);
        }

        control::spawn().unwrap();
        blink::spawn(true, BLINKS).unwrap();

        (
            Shared {},
            Local {
                status_led: system.status_led,
                store,
                inputs,
                leds: system.leds,
                storage,
            },
            init::Monotonics(mono),
        )
    }

    #[task(local = [store, inputs, leds], priority = 3)]
    fn control(cx: control::Context) {
        control::spawn_after(1.millis()).unwrap();

        cx.local.inputs.sample();
        let snapshot = InputSnapshot {
            switches: cx.local.inputs.switches.pressed,
            // A module without chain neighbors observes only itself.
            ..InputSnapshot::default()
        };

        let result = cx.local.store.poll(snapshot);
        cx.local.leds.set_frame(&result.leds);

        if let Some(save) = result.save {
            // Flash writes are slow, they run below the control loop.
            let _: Result<_, _> = persist::spawn(save);
        }
    }

    #[task(local = [storage], priority = 1, capacity = 4)]
    fn persist(cx: persist::Context, save: Save) {
        cx.local.storage.save_save(save);
    }

    #[task(local = [status_led], priority = 2)]
    fn blink(cx: blink::Context, on: bool, blinks: u8) {
        let time_on = 200.millis();
        let time_off_short = 200.millis();
        let time_off_long = 2.secs();

        if on {
            cx.local.status_led.on();
            blink::spawn_after(time_on, false, blinks).unwrap();
        } else {
            cx.local.status_led.off();
            if blinks > 1 {
                blink::spawn_after(time_off_short, true, blinks - 1).unwrap();
            } else {
                blink::spawn_after(time_off_long, true, BLINKS).unwrap();
            }
        }
    }
}
