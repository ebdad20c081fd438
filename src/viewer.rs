//! # Disparity viewer
//!
//! Shows a rendered disparity map in a window until a key is pressed or the window is closed.

// -----------------------------------------------------------------------------------------------
// IMPORTS
// -----------------------------------------------------------------------------------------------

use image::RgbImage;
use minifb::{Window, WindowOptions};

use crate::error::*;

// -----------------------------------------------------------------------------------------------
// FUNCTIONS
// -----------------------------------------------------------------------------------------------

/// Display `image` in a window titled `title`, blocking until any key is pressed.
pub fn show(title: &str, image: &RgbImage) -> Result<()> {
    let width = image.width() as usize;
    let height = image.height() as usize;

    let buffer: Vec<u32> = image.pixels().map(rgb_to_u32).collect();

    let mut window = Window::new(title, width, height, WindowOptions::default())
        .map_err(|e| Error::Viewer(e.to_string()))?;

    window.limit_update_rate(Some(std::time::Duration::from_micros(16600)));

    while window.is_open() && !any_key_down(&window) {
        window
            .update_with_buffer(&buffer, width, height)
            .map_err(|e| Error::Viewer(e.to_string()))?;
    }

    Ok(())
}

fn any_key_down(window: &Window) -> bool {
    window.get_keys().map_or(false, |keys| !keys.is_empty())
}

fn rgb_to_u32(rgb: &image::Rgb<u8>) -> u32 {
    (rgb[0] as u32) << 16 | (rgb[1] as u32) << 8 | rgb[2] as u32
}
