use image::imageops;
use image::{Rgb, RgbImage};
use imageproc::geometric_transformations::{warp_into, Interpolation, Projection};

use crate::models::RotatedRect;

/// Extract an upright crop of `region` from the working image.
///
/// The rectangle is first canonicalized (long axis = width, angle in
/// (-90, 90]). Beyond `angle_tolerance` degrees the region is rectified by a
/// single homography mapping its four corners onto an upright rectangle,
/// correcting rotation and residual skew in one resampling pass. Within
/// tolerance the straight bounding box is cropped directly, with no
/// resampling at all.
///
/// The second element reports whether the rectification path was taken.
/// A zero-area result is returned as an empty image, not an error.
pub fn extract_region(
    working: &RgbImage,
    region: &RotatedRect,
    angle_tolerance: f32,
) -> (RgbImage, bool) {
    let rect = region.canonicalized();
    let target_w = rect.width.round() as u32;
    let target_h = rect.height.round() as u32;
    if target_w == 0 || target_h == 0 {
        return (RgbImage::new(0, 0), false);
    }

    if rect.angle.abs() > angle_tolerance {
        let src = rect.corners();
        let dst = [
            (0.0, 0.0),
            (target_w as f32, 0.0),
            (target_w as f32, target_h as f32),
            (0.0, target_h as f32),
        ];
        let Some(projection) = Projection::from_control_points(src, dst) else {
            // degenerate corner geometry, nothing usable to rectify
            return (RgbImage::new(0, 0), true);
        };
        let mut crop = RgbImage::new(target_w, target_h);
        warp_into(
            working,
            &projection,
            Interpolation::Bilinear,
            Rgb([0, 0, 0]),
            &mut crop,
        );
        (crop, true)
    } else {
        let corners = rect.corners();
        let min_x = corners.iter().map(|p| p.0).fold(f32::INFINITY, f32::min);
        let min_y = corners.iter().map(|p| p.1).fold(f32::INFINITY, f32::min);
        let max_x = corners.iter().map(|p| p.0).fold(f32::NEG_INFINITY, f32::max);
        let max_y = corners.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max);

        let x0 = min_x.floor().max(0.0) as u32;
        let y0 = min_y.floor().max(0.0) as u32;
        let x1 = (max_x.ceil().max(0.0) as u32).min(working.width());
        let y1 = (max_y.ceil().max(0.0) as u32).min(working.height());
        if x1 <= x0 || y1 <= y0 {
            return (RgbImage::new(0, 0), false);
        }
        let crop = imageops::crop_imm(working, x0, y0, x1 - x0, y1 - y0).to_image();
        (crop, false)
    }
}
