use image::{Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;

/// Draw the detected region's outline onto a working-size image.
pub fn draw_region_box(img: &mut RgbImage, corners: &[(f32, f32); 4]) {
    for i in 0..4 {
        draw_line_segment_mut(img, corners[i], corners[(i + 1) % 4], Rgb([0, 255, 0]));
    }
}
