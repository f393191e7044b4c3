//! NES emulator entry point.
//!
//! Loads a cartridge and runs it with a display window.
//! Usage: `nesbox <path/to/game.nes>`

use std::env;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use minifb::{Key, Window, WindowOptions};
use nesbox::system::System;

/// NES frame rate ~60.0988 Hz (NTSC). Target one frame per 16.67 ms for ~60 fps display.
const FRAME_DURATION: Duration = Duration::from_nanos(16_666_667);

/// Controller bits: 0=A, 1=B, 2=Select, 3=Start, 4=Up, 5=Down, 6=Left, 7=Right.
/// Controller 1 uses Z/X for A/B; controller 2 uses ,/. for a second local player.
fn controller1_state(window: &Window) -> u8 {
    let mut state = 0u8;
    if window.is_key_down(Key::Z) {
        state |= 1 << 0;
    }
    if window.is_key_down(Key::X) {
        state |= 1 << 1;
    }
    if window.is_key_down(Key::RightShift) || window.is_key_down(Key::LeftShift) {
        state |= 1 << 2;
    }
    if window.is_key_down(Key::Enter) {
        state |= 1 << 3;
    }
    if window.is_key_down(Key::Up) {
        state |= 1 << 4;
    }
    if window.is_key_down(Key::Down) {
        state |= 1 << 5;
    }
    if window.is_key_down(Key::Left) {
        state |= 1 << 6;
    }
    if window.is_key_down(Key::Right) {
        state |= 1 << 7;
    }
    state
}

fn controller2_state(window: &Window) -> u8 {
    let mut state = 0u8;
    if window.is_key_down(Key::Comma) {
        state |= 1 << 0;
    }
    if window.is_key_down(Key::Period) {
        state |= 1 << 1;
    }
    if window.is_key_down(Key::Key9) {
        state |= 1 << 2;
    }
    if window.is_key_down(Key::Key0) {
        state |= 1 << 3;
    }
    if window.is_key_down(Key::I) {
        state |= 1 << 4;
    }
    if window.is_key_down(Key::K) {
        state |= 1 << 5;
    }
    if window.is_key_down(Key::J) {
        state |= 1 << 6;
    }
    if window.is_key_down(Key::L) {
        state |= 1 << 7;
    }
    state
}

fn run() -> Result<(), String> {
    env_logger::init();

    let path = env::args()
        .nth(1)
        .ok_or_else(|| "usage: nesbox <path/to/game.nes>".to_string())?;

    let mut system = System::load(&path).map_err(|e| e.to_string())?;

    // NES native resolution 256x240.
    let mut window = Window::new(
        "nesbox",
        256,
        240,
        WindowOptions {
            borderless: true,
            resize: true,
            scale: minifb::Scale::FitScreen,
            scale_mode: minifb::ScaleMode::AspectRatioStretch,
            topmost: true,
            title: false,
            transparency: false,
            none: false,
        },
    )
    .map_err(|e| format!("failed to create window: {e}"))?;

    window.set_target_fps(60);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let frame_start = Instant::now();

        system.run_frame(controller1_state(&window), controller2_state(&window));

        if system.halted() {
            log::error!("CPU halted, stopping emulation");
            return Err("CPU hit an unimplemented or illegal opcode".to_string());
        }

        window
            .update_with_buffer(system.framebuffer(), 256, 240)
            .map_err(|e| format!("failed to present frame: {e}"))?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("nesbox: {msg}");
            ExitCode::FAILURE
        }
    }
}
