use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, RgbImage};
use imageproc::filter::gaussian_blur_f32;

/// Resize to the fixed working resolution all later stages operate on.
pub fn resize_to_working(img: &DynamicImage, width: u32, height: u32) -> RgbImage {
    imageops::resize(&img.to_rgb8(), width, height, FilterType::Triangle)
}

/// Convert image to grayscale
pub fn to_grayscale(img: &RgbImage) -> GrayImage {
    imageops::grayscale(img)
}

/// Apply Gaussian blur to reduce sensor noise before gradient computation
pub fn apply_blur(img: &GrayImage, sigma: f32) -> GrayImage {
    gaussian_blur_f32(img, sigma)
}
