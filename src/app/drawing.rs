use crate::constants::SCREEN_WIDTH;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

/// Uploads the ARGB framebuffer into the streaming texture and presents
/// it scaled to the window.
pub fn present_frame(
    canvas: &mut Canvas<Window>,
    texture: &mut Texture,
    frame: &[u32],
    scratch: &mut Vec<u8>,
) -> Result<(), String> {
    scratch.clear();
    for pixel in frame {
        scratch.extend_from_slice(&pixel.to_ne_bytes());
    }
    texture
        .update(None, scratch, SCREEN_WIDTH * 4)
        .map_err(|e| e.to_string())?;
    canvas.copy(texture, None, None)?;
    canvas.present();
    Ok(())
}
