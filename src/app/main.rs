use sdl2::pixels::PixelFormatEnum;
use std::{
    env,
    path::Path,
    thread,
    time::{Duration, Instant},
};

mod constants;
mod drawing;
mod input;
mod sdl_setup;

use dotmatrix::cartridge::Cartridge;
use dotmatrix::emulator::Emulator;

fn main() -> Result<(), String> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <rom-path>", args[0]);
        std::process::exit(1);
    }
    let rom_path = Path::new(&args[1]);
    let rom_filename = rom_path.file_name().unwrap_or_default().to_string_lossy();

    let cartridge = Cartridge::load(rom_path)?;
    let mut emulator = Emulator::new(cartridge);
    println!("Loaded ROM: {}", rom_path.display());

    let window_title = format!("dotmatrix - {}", rom_filename);
    let mut sdl_context = sdl_setup::init_sdl(&window_title)?;

    let mut texture = sdl_context
        .texture_creator
        .create_texture_streaming(
            PixelFormatEnum::ARGB8888,
            constants::SCREEN_WIDTH as u32,
            constants::SCREEN_HEIGHT as u32,
        )
        .map_err(|e| e.to_string())?;
    let mut scratch = Vec::with_capacity(constants::SCREEN_WIDTH * constants::SCREEN_HEIGHT * 4);

    'main_loop: loop {
        let frame_start = Instant::now();

        if input::handle_input(&mut sdl_context.event_pump, &mut emulator) {
            break 'main_loop;
        }

        emulator.run_frame()?;

        drawing::present_frame(
            &mut sdl_context.canvas,
            &mut texture,
            emulator.frame(),
            &mut scratch,
        )?;

        let elapsed = frame_start.elapsed();
        if elapsed < constants::TARGET_FRAME_DURATION {
            let remaining = constants::TARGET_FRAME_DURATION.saturating_sub(elapsed);
            if remaining > Duration::from_millis(1) {
                thread::sleep(remaining.saturating_sub(Duration::from_millis(1)));
            }
            while Instant::now() < frame_start + constants::TARGET_FRAME_DURATION {
                thread::yield_now();
            }
        }
    }

    println!("Emulator stopped.");
    Ok(())
}
