#![allow(dead_code)]

use image::{DynamicImage, Rgb, RgbImage};

pub const WORKING_W: u32 = 600;
pub const WORKING_H: u32 = 400;

/// Uniform mid-gray working-size image with no texture anywhere.
pub fn blank_image() -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(
        WORKING_W,
        WORKING_H,
        Rgb([128, 128, 128]),
    ))
}

/// Barcode-like pattern of alternating black bars on a white background,
/// rotated by `angle_deg` about its center. `width` spans across the bars,
/// `bar_px` is the width of a single bar (and of a single gap).
pub fn striped_image(
    cx: f32,
    cy: f32,
    width: f32,
    height: f32,
    bar_px: f32,
    angle_deg: f32,
) -> DynamicImage {
    let mut img = RgbImage::from_pixel(WORKING_W, WORKING_H, Rgb([255, 255, 255]));
    let (s, c) = angle_deg.to_radians().sin_cos();
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - cx;
        let dy = y as f32 + 0.5 - cy;
        // coordinates in the unrotated rectangle frame
        let u = dx * c + dy * s;
        let v = -dx * s + dy * c;
        if u.abs() < width / 2.0 && v.abs() < height / 2.0 {
            let bar = ((u + width / 2.0) / bar_px) as u32;
            if bar % 2 == 0 {
                *pixel = Rgb([0, 0, 0]);
            }
        }
    }
    DynamicImage::ImageRgb8(img)
}
