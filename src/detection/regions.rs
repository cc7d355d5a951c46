use image::GrayImage;
use imageproc::contours::{find_contours, BorderType};
use imageproc::geometry::min_area_rect;

use crate::error::DetectError;
use crate::models::RotatedRect;

/// Minimum-area rotated rectangles fitted around every outer contour.
/// Holes inside a connected component are ignored.
pub fn outer_rects(mask: &GrayImage) -> Vec<RotatedRect> {
    find_contours::<i32>(mask)
        .iter()
        .filter(|c| c.border_type == BorderType::Outer)
        .map(|c| {
            let corners = min_area_rect(&c.points);
            RotatedRect::from_corners(corners.map(|p| (p.x as f32, p.y as f32)))
        })
        .collect()
}

/// Select the rectangle judged most likely to be the barcode: the one with
/// the largest area. Candidates are never merged or ranked beyond area.
pub fn select_barcode_region(mask: &GrayImage) -> Result<RotatedRect, DetectError> {
    outer_rects(mask)
        .into_iter()
        .max_by(|a, b| a.area().total_cmp(&b.area()))
        .ok_or(DetectError::NoRegionFound)
}
