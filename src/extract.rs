use image::{Rgba, RgbaImage, imageops};
use tracing::debug;

/// Rectangle enclosing all content pixels; `right` and `bottom` are
/// exclusive, matching the crop window they describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// Composite the image over an opaque white background so translucent
/// pixels become solid. The result always has alpha 255.
pub fn flatten_onto_white(img: &RgbaImage) -> RgbaImage {
    let mut flat = RgbaImage::from_pixel(img.width(), img.height(), Rgba([255, 255, 255, 255]));
    for (x, y, pixel) in img.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        flat.put_pixel(
            x,
            y,
            Rgba([
                blend_over_white(r, a),
                blend_over_white(g, a),
                blend_over_white(b, a),
                255,
            ]),
        );
    }
    flat
}

fn blend_over_white(channel: u8, alpha: u8) -> u8 {
    let alpha = u32::from(alpha);
    let blended = u32::from(channel) * alpha + 255 * (255 - alpha);
    ((blended + 127) / 255) as u8
}

/// ITU-R 601-2 luminance, truncated.
fn luminance(r: u8, g: u8, b: u8) -> u8 {
    ((u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000) as u8
}

/// Bounding box of every pixel that deviates from white, computed on the
/// flattened image. `None` when the image is uniformly blank.
pub fn content_bounding_box(flat: &RgbaImage) -> Option<BoundingBox> {
    let mut bbox: Option<BoundingBox> = None;
    for (x, y, pixel) in flat.enumerate_pixels() {
        let [r, g, b, _] = pixel.0;
        if luminance(r, g, b) == 255 {
            continue;
        }
        bbox = Some(match bbox {
            Some(prev) => BoundingBox {
                left: prev.left.min(x),
                top: prev.top.min(y),
                right: prev.right.max(x + 1),
                bottom: prev.bottom.max(y + 1),
            },
            None => BoundingBox {
                left: x,
                top: y,
                right: x + 1,
                bottom: y + 1,
            },
        });
    }
    if let Some(found) = bbox {
        debug!(
            "content bbox: left={} top={} right={} bottom={}",
            found.left, found.top, found.right, found.bottom
        );
    }
    bbox
}

/// Crop the original alpha-preserving image to the content box.
pub fn crop_to_box(img: &RgbaImage, bbox: &BoundingBox) -> RgbaImage {
    imageops::crop_imm(img, bbox.left, bbox.top, bbox.width(), bbox.height()).to_image()
}

/// Keep only the rows above the split line.
pub fn crop_above(img: &RgbaImage, split_y: u32) -> RgbaImage {
    imageops::crop_imm(img, 0, 0, img.width(), split_y).to_image()
}
