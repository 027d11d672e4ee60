//! The main store of panel state and its per-tick state machine.

use crate::cache::press::{self, Press, PressTimer, MODE_TOGGLE_PRESS_TICKS};
use crate::cache::{Cache, OperatingMode};
use crate::input::snapshot::Snapshot as InputSnapshot;
use crate::input::store::Store as Input;
use crate::led::LedColor;
use crate::log;
use crate::output::{ChainSignals, PollResult};
use crate::render::{self, Branch, View};
use crate::save::Save;
use crate::NUM_CHANNELS;

/// Operating mode each channel's very long press toggles to.
///
/// The two extreme channels select the endpoints of the mode families.
const MODE_TOGGLE_TABLE: [OperatingMode; NUM_CHANNELS] = [
    OperatingMode::Stages,
    OperatingMode::Stages,
    OperatingMode::StagesSlowLfo,
    OperatingMode::SixEg,
    OperatingMode::Ouroboros,
    OperatingMode::OuroborosAlternate,
];

/// The central piece of the control crate.
///
/// The store takes an `InputSnapshot` once per tick, interprets presses
/// over their time horizons, keeps the module configuration, and composes
/// the LED frame. Two independent timer banks track every hold: segment
/// presses act on *release* so a tap can be told apart from a long press,
/// while the mode toggle fires the instant its horizon is crossed, giving
/// feedback while the button is still held.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Store {
    milliseconds: u32,
    pub(crate) input: Input,
    pub(crate) cache: Cache,
    segment_press: [PressTimer; NUM_CHANNELS],
    mode_toggle_press: [PressTimer; NUM_CHANNELS],
}

#[allow(clippy::new_without_default)]
impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self {
            milliseconds: 0,
            input: Input::default(),
            cache: Cache::default(),
            segment_press: [PressTimer::default(); NUM_CHANNELS],
            mode_toggle_press: [PressTimer::default(); NUM_CHANNELS],
        }
    }

    /// One-shot startup gesture toggling color-blind rendering.
    ///
    /// Called once during initialization with the *immediate* reading of
    /// the first channel's switch, taken before the debounce filter had a
    /// chance to prime.
    pub fn apply_boot_gesture(&mut self, first_switch_down: bool) -> Option<Save> {
        if first_switch_down {
            self.cache.color_blind = !self.cache.color_blind;
            log::info!("Toggling color blind rendering: {:?}", self.cache.color_blind);
            Some(self.cache.save())
        } else {
            None
        }
    }

    /// Process one tick of the polling loop.
    ///
    /// The frame is composed before the snapshot is ingested, so it
    /// reflects the previous tick's state in full. A returned save marks a
    /// persistence transaction the caller is expected to write out.
    pub fn poll(&mut self, snapshot: InputSnapshot) -> PollResult {
        self.milliseconds = self.milliseconds.wrapping_add(1);

        let (leds, branch) = {
            let view = View {
                milliseconds: self.milliseconds,
                cache: &self.cache,
                chain: &self.input.chain,
            };
            (render::render(&view), render::select_branch(&view))
        };
        match branch {
            Branch::Overlay(_) => self.cache.display.tick_mode_toggle(),
            Branch::Mode => self.cache.display.tick_slider_decay(),
            Branch::FactoryTest | Branch::Discovery => (),
        }

        self.input.update(snapshot);

        let mut needs_save = false;
        self.update_segment_presses(&mut needs_save);
        let pressed_bitmask = self.input.pressed_bitmask();
        let suspend_switches = self.update_mode_toggle_presses(&mut needs_save);

        PollResult {
            leds,
            chain: ChainSignals {
                pressed_bitmask,
                suspend_switches,
            },
            save: if needs_save {
                Some(self.cache.save())
            } else {
                None
            },
        }
    }

    /// Arm a short lit tail on a slider LED, called when its value moved.
    pub fn set_slider_led(&mut self, channel: usize, ticks: u32) {
        self.cache.display.slider_decay[channel] = ticks;
    }

    /// Indicator color computed by the six-stage envelope engine.
    pub fn set_segment_led(&mut self, channel: usize, color: LedColor) {
        self.cache.display.segment_leds[channel] = color;
    }

    /// Production test entry point, preempting all normal rendering.
    pub fn set_factory_test(&mut self, enabled: bool) {
        self.cache.display.factory_test = enabled;
    }

    /// Taps and long presses reconfiguring segments on release.
    ///
    /// Active in the ouroboros modes only, elsewhere the timers sit idle.
    fn update_segment_presses(&mut self, needs_save: &mut bool) {
        if !self.cache.operating_mode.is_ouroboros() {
            return;
        }

        for i in 0..NUM_CHANNELS {
            let down = self.input.switches[i].pressed;
            if let Some(held) = self.segment_press[i].update(down) {
                match press::classify(held) {
                    Some(Press::Tap) => {
                        self.cache.segment_configurations[i].cycle_ouroboros_type();
                        log::info!("Cycling ouroboros type of channel={:?}", i);
                        *needs_save = true;
                    }
                    Some(Press::Long) => {
                        self.cache.segment_configurations[i].toggle_waveshape_bit();
                        log::info!("Toggling waveshape of channel={:?}", i);
                        *needs_save = true;
                    }
                    // The hold was claimed by the mode toggle bank.
                    None => (),
                }
            }
        }
    }

    /// Very long presses toggling the operating mode.
    ///
    /// Fires while the button is still held, and freezing the timer right
    /// after makes it fire exactly once per physical hold.
    fn update_mode_toggle_presses(&mut self, needs_save: &mut bool) -> bool {
        let mut suspend_switches = false;

        for i in 0..NUM_CHANNELS {
            let down = self.input.switches[i].pressed;
            let _ = self.mode_toggle_press[i].update(down);
            if let Some(elapsed) = self.mode_toggle_press[i].elapsed() {
                if elapsed > MODE_TOGGLE_PRESS_TICKS {
                    suspend_switches |= self.toggle_mode(i, needs_save);
                    self.mode_toggle_press[i].freeze();
                }
            }
        }

        suspend_switches
    }

    /// Switch to the mode assigned to the channel, when it differs.
    ///
    /// The confirmation overlay starts either way, so repeated toggles into
    /// the current mode still give visible feedback.
    fn toggle_mode(&mut self, channel: usize, needs_save: &mut bool) -> bool {
        let target = MODE_TOGGLE_TABLE[channel];
        let mut changed = false;

        if self.cache.operating_mode != target {
            // Releases happening mid-transition must not fire segment
            // actions on any channel.
            for timer in &mut self.segment_press {
                timer.freeze();
            }
            self.cache.operating_mode = target;
            log::info!("Switching operating mode: {:?}", target);
            *needs_save = true;
            changed = true;
        }

        self.cache.display.show_mode_toggle(channel);
        changed
    }
}

impl From<Save> for Store {
    fn from(save: Save) -> Self {
        let mut store = Self::new();
        store.cache = Cache::from(save);
        store
    }
}
