use image::RgbaImage;
use tracing::debug;

/// Channel floor below which a pixel counts as content rather than
/// background. Anti-aliased logo edges sit just under pure white, so the
/// blank-row test tolerates values down to 250.
const NEAR_WHITE: u8 = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    ScanningForBottom,
    ScanningForGap,
    ScanningForMarkTop,
}

/// Scan rows from the bottom edge upward looking for the blank band that
/// separates the graphical mark from trailing text.
///
/// Returns the row index of the first empty row met after the bottom
/// content block, or `None` when content reaches every row (no text to
/// strip). The retained mark is rows `[0, split_y)`.
///
/// Assumes a single mark above at most one gap above one text block;
/// multi-gap or text-above-mark layouts are undefined.
pub fn find_split(content: &RgbaImage) -> Option<u32> {
    let height = content.height();
    let mut state = ScanState::ScanningForBottom;
    let mut split_y = None;

    for y in (0..height).rev() {
        let empty = row_is_blank(content, y);
        match state {
            ScanState::ScanningForBottom => {
                if !empty {
                    debug!("gap scan: bottom content at row {}", y);
                    state = ScanState::ScanningForGap;
                }
            }
            ScanState::ScanningForGap => {
                if empty {
                    debug!("gap scan: gap at row {}", y);
                    split_y = Some(y);
                    state = ScanState::ScanningForMarkTop;
                }
            }
            ScanState::ScanningForMarkTop => {
                if !empty {
                    debug!("gap scan: mark bottom at row {}", y);
                    return split_y;
                }
            }
        }
    }
    split_y
}

/// A row is blank iff every pixel is near-white in all color channels.
/// Alpha is deliberately ignored here; the caller scans the original
/// alpha-preserving crop.
fn row_is_blank(img: &RgbaImage, y: u32) -> bool {
    (0..img.width()).all(|x| {
        let [r, g, b, _] = img.get_pixel(x, y).0;
        r >= NEAR_WHITE && g >= NEAR_WHITE && b >= NEAR_WHITE
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    /// One pixel wide column image built from a per-row content flag.
    fn column(rows: &[bool]) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(1, rows.len() as u32, WHITE);
        for (y, &content) in rows.iter().enumerate() {
            if content {
                img.put_pixel(0, y as u32, BLACK);
            }
        }
        img
    }

    #[test]
    fn split_is_first_blank_row_above_bottom_content() {
        // mark rows 0..3, gap rows 3..6, text rows 6..8
        let img = column(&[true, true, true, false, false, false, true, true]);
        assert_eq!(find_split(&img), Some(5));
    }

    #[test]
    fn single_row_gap_splits_exactly_between_blocks() {
        let img = column(&[true, true, false, true]);
        assert_eq!(find_split(&img), Some(2));
    }

    #[test]
    fn no_gap_when_content_touches_every_row() {
        let img = column(&[true, true, true, true]);
        assert_eq!(find_split(&img), None);
    }

    #[test]
    fn gap_is_still_reported_when_scan_exhausts_rows() {
        // blank rows above the bottom block but no second content block
        let img = column(&[false, false, true, true]);
        assert_eq!(find_split(&img), Some(1));
    }

    #[test]
    fn near_white_rows_count_as_blank() {
        let mut img = column(&[true, false, true]);
        img.put_pixel(0, 1, Rgba([250, 252, 255, 255]));
        assert_eq!(find_split(&img), Some(1));
    }

    #[test]
    fn just_under_threshold_rows_count_as_content() {
        let mut img = column(&[true, false, true]);
        img.put_pixel(0, 1, Rgba([249, 255, 255, 255]));
        assert_eq!(find_split(&img), None);
    }

    #[test]
    fn alpha_is_ignored_by_the_blank_test() {
        // transparent white row still reads as blank
        let mut img = column(&[true, false, true]);
        img.put_pixel(0, 1, Rgba([255, 255, 255, 0]));
        assert_eq!(find_split(&img), Some(1));
    }
}
