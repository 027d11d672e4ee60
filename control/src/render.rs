//! Composition of one LED frame, dispatched over mutually exclusive branches.

use crate::cache::display::ModeToggleOverlay;
use crate::cache::{Cache, OperatingMode};
use crate::fade::fade_pattern;
use crate::input::snapshot::{ChainSnapshot, LoopStatus};
use crate::led::{duty_cycled, LedColor, LedFrame, PALETTE};
use crate::NUM_CHANNELS;

/// Borrowed state of the tick a frame is composed from.
///
/// Everything a single frame consumes enters through this view, keeping the
/// whole pass a pure function of it.
pub(crate) struct View<'a> {
    pub milliseconds: u32,
    pub cache: &'a Cache,
    pub chain: &'a ChainSnapshot,
}

/// The branch owning the frame of one tick, checked in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Branch {
    FactoryTest,
    Discovery,
    Overlay(ModeToggleOverlay),
    Mode,
}

pub(crate) fn select_branch(view: &View) -> Branch {
    if view.cache.display.factory_test {
        Branch::FactoryTest
    } else if view.chain.discovering_neighbors {
        Branch::Discovery
    } else if let Some(overlay) = view.cache.display.mode_toggle {
        Branch::Overlay(overlay)
    } else {
        Branch::Mode
    }
}

pub(crate) fn render(view: &View) -> LedFrame {
    match select_branch(view) {
        Branch::FactoryTest => factory_test(view),
        Branch::Discovery => discovery(view),
        Branch::Overlay(overlay) => mode_toggle_overlay(overlay),
        Branch::Mode => match view.cache.operating_mode {
            OperatingMode::Stages | OperatingMode::StagesSlowLfo => segments(view),
            OperatingMode::Ouroboros | OperatingMode::OuroborosAlternate => ouroboros(view),
            OperatingMode::SixEg => six_eg(view),
        },
    }
}

/// Cycle all LEDs through the palette in lock-step, sliders flashing in
/// sync. Only reachable through the production test entry point.
fn factory_test(view: &View) -> LedFrame {
    let mut frame = LedFrame::default();
    let counter = ((view.milliseconds >> 8) % 3) as usize;
    for i in 0..NUM_CHANNELS {
        match view.cache.display.slider_decay[i] {
            0 => {
                frame.indicator[i] = PALETTE[counter];
                frame.slider[i] = if counter == 0 {
                    LedColor::Green
                } else {
                    LedColor::Off
                };
            }
            1 => {
                frame.indicator[i] = LedColor::Green;
            }
            _ => {
                frame.indicator[i] = LedColor::Green;
                frame.slider[i] = LedColor::Green;
            }
        }
    }
    frame
}

/// A single highlight sweeping back and forth over the whole chain,
/// clipped to this module's channel window.
fn discovery(view: &View) -> LedFrame {
    let mut frame = LedFrame::default();

    let n = view.chain.size.max(1) * NUM_CHANNELS;
    let mut counter = (view.milliseconds >> 5) as usize % (2 * n - 2);
    if counter >= n {
        counter = 2 * n - 2 - counter;
    }

    let window_start = view.chain.index * NUM_CHANNELS;
    if counter >= window_start {
        let local = counter - window_start;
        if local < NUM_CHANNELS {
            frame.indicator[local] = LedColor::Yellow;
            frame.slider[local] = LedColor::Green;
        }
    }

    frame
}

/// Confirmation of a mode toggle, preempting all mode rendering.
fn mode_toggle_overlay(overlay: ModeToggleOverlay) -> LedFrame {
    let mut frame = LedFrame::default();
    frame.indicator[overlay.channel] = LedColor::Yellow;
    frame
}

fn segments(view: &View) -> LedFrame {
    let mut frame = LedFrame::default();
    let fade_levels = fade_levels(view.milliseconds);
    for i in 0..NUM_CHANNELS {
        let configuration = view.cache.segment_configurations[i];
        let brightness = fade_levels[fade_index(view.chain.loop_status[i])];
        frame.indicator[i] = stage_led(view, i, configuration.primary_type(), brightness);
        frame.slider[i] = slider_tail(view, i);
    }
    frame
}

fn ouroboros(view: &View) -> LedFrame {
    let mut frame = LedFrame::default();
    let fade_levels = fade_levels(view.milliseconds);
    for i in 0..NUM_CHANNELS {
        let configuration = view.cache.segment_configurations[i];
        let brightness = fade_levels[if configuration.ouroboros_glow() { 3 } else { 0 }];
        frame.indicator[i] = stage_led(view, i, configuration.ouroboros_type(), brightness);
        frame.slider[i] = slider_tail(view, i);
    }
    frame
}

/// Indicator colors in this mode are computed by the envelope engine.
fn six_eg(view: &View) -> LedFrame {
    let mut frame = LedFrame::default();
    for i in 0..NUM_CHANNELS {
        frame.indicator[i] = view.cache.display.segment_leds[i];
        frame.slider[i] = slider_tail(view, i);
    }
    frame
}

/// The four intensities a stage family channel selects between, derived
/// from a single clock read so all channels of a frame stay in phase.
fn fade_levels(milliseconds: u32) -> [u8; 4] {
    [
        0xf,
        fade_pattern(milliseconds, 4, 0),
        fade_pattern(milliseconds, 4, 0x0f),
        fade_pattern(milliseconds, 4, 0x08),
    ]
}

fn fade_index(status: LoopStatus) -> usize {
    match status {
        LoopStatus::Free => 0,
        LoopStatus::Start => 1,
        LoopStatus::End => 2,
        LoopStatus::SelfLooping => 3,
    }
}

fn stage_led(view: &View, channel: usize, segment_type: u8, brightness: u8) -> LedColor {
    let pwm = (view.milliseconds & 0xf) as u8;
    let mut color = PALETTE[segment_type as usize];
    let mut brightness = brightness;
    if view.cache.color_blind {
        // Substitute hue discrimination with timing and brightness
        // discrimination.
        match segment_type {
            0 => {
                color = LedColor::Green;
                let phase = 13u8.wrapping_sub(2 * channel as u8);
                let modulation = fade_pattern(view.milliseconds, 6, phase) >> 1;
                brightness =
                    ((u16::from(brightness) * u16::from(7 + modulation)) >> 4) as u8;
            }
            1 => {
                color = LedColor::Yellow;
                brightness = if brightness >= 0x8 { 0xf } else { 0 };
            }
            2 => {
                color = LedColor::Red;
                brightness = if brightness >= 0xc { 0x1 } else { 0 };
            }
            _ => (),
        }
    }
    duty_cycled(color, brightness, pwm)
}

fn slider_tail(view: &View, channel: usize) -> LedColor {
    if view.cache.display.slider_decay[channel] > 0 {
        LedColor::Green
    } else {
        LedColor::Off
    }
}
