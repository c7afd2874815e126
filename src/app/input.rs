use crate::constants::BOOST_MULTIPLIER;
use dotmatrix::emulator::Emulator;
use dotmatrix::hardware::Button;
use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

fn button_for(key: Keycode) -> Option<Button> {
    match key {
        Keycode::W => Some(Button::Up),
        Keycode::S => Some(Button::Down),
        Keycode::A => Some(Button::Left),
        Keycode::D => Some(Button::Right),
        Keycode::K => Some(Button::A),
        Keycode::J => Some(Button::B),
        Keycode::L => Some(Button::Select),
        Keycode::Semicolon => Some(Button::Start),
        _ => None,
    }
}

/// Drains SDL events into the emulator's input state.
/// Returns `true` when the user asked to quit.
pub fn handle_input(event_pump: &mut EventPump, emulator: &mut Emulator) -> bool {
    for event in event_pump.poll_iter() {
        match event {
            Event::Quit { .. }
            | Event::KeyDown {
                keycode: Some(Keycode::Q),
                ..
            } => {
                return true;
            }
            Event::KeyDown {
                keycode: Some(Keycode::Escape),
                repeat: false,
                ..
            } => {
                eprintln!("{}", emulator.cpu);
            }
            Event::KeyDown {
                keycode: Some(Keycode::Space),
                ..
            } => {
                emulator.speed = BOOST_MULTIPLIER;
            }
            Event::KeyUp {
                keycode: Some(Keycode::Space),
                ..
            } => {
                emulator.speed = 1;
            }
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => {
                if let Some(button) = button_for(key) {
                    emulator.press(button);
                }
            }
            Event::KeyUp {
                keycode: Some(key),
                repeat: false,
                ..
            } => {
                if let Some(button) = button_for(key) {
                    emulator.release(button);
                }
            }
            _ => {}
        }
    }
    false
}
