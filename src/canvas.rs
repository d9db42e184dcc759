use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use tracing::debug;

/// Output canvas edge length.
pub const TARGET_SIZE: u32 = 1024;

/// Margin kept clear on every side of the canvas.
pub const MARGIN: u32 = 20;

/// Scale a mark of the given size to fill the usable canvas area along its
/// longer axis, preserving aspect ratio. Dimensions truncate toward zero
/// but never collapse below one pixel.
pub fn fit_dimensions(width: u32, height: u32) -> (u32, u32) {
    let usable = TARGET_SIZE - MARGIN * 2;
    let aspect = f64::from(width) / f64::from(height);
    if width > height {
        let out_h = (f64::from(usable) / aspect) as u32;
        (usable, out_h.max(1))
    } else {
        let out_w = (f64::from(usable) * aspect) as u32;
        (out_w.max(1), usable)
    }
}

/// Resize the mark to fit the padded canvas and paste it centered onto an
/// opaque white 1024x1024 background, blending with the mark's own alpha.
pub fn compose(mark: &RgbaImage) -> RgbaImage {
    let (out_w, out_h) = fit_dimensions(mark.width(), mark.height());
    debug!(
        "resizing mark {}x{} -> {}x{}",
        mark.width(),
        mark.height(),
        out_w,
        out_h
    );
    let resized = imageops::resize(mark, out_w, out_h, FilterType::Lanczos3);

    let mut canvas = RgbaImage::from_pixel(TARGET_SIZE, TARGET_SIZE, Rgba([255, 255, 255, 255]));
    let paste_x = i64::from((TARGET_SIZE - out_w) / 2);
    let paste_y = i64::from((TARGET_SIZE - out_h) / 2);
    imageops::overlay(&mut canvas, &resized, paste_x, paste_y);
    canvas
}
