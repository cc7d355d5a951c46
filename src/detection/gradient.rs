use image::{GrayImage, Luma};
use imageproc::contrast::{threshold, ThresholdType};
use imageproc::filter::box_filter;
use imageproc::gradients::{horizontal_sobel, vertical_sobel};

/// Difference of horizontal and vertical Sobel responses, rescaled to 8-bit
/// absolute magnitude.
///
/// Barcodes have strong horizontal-gradient energy (alternating bars) and
/// weak vertical-gradient energy, so the difference map is bright over
/// barcode regions and near-zero over smooth backgrounds.
pub fn gradient_difference(img: &GrayImage) -> GrayImage {
    let grad_x = horizontal_sobel(img);
    let grad_y = vertical_sobel(img);

    let mut diff = GrayImage::new(img.width(), img.height());
    for (x, y, pixel) in diff.enumerate_pixels_mut() {
        let gx = grad_x.get_pixel(x, y)[0] as i32;
        let gy = grad_y.get_pixel(x, y)[0] as i32;
        *pixel = Luma([(gx - gy).unsigned_abs().min(255) as u8]);
    }
    diff
}

/// Gradient-difference map, mean-filtered to suppress isolated
/// high-frequency pixels, then binarized.
///
/// The threshold is a fixed constant, not adaptive; pixels at or above
/// `thresh` become foreground. Exposure sensitivity is a known limitation.
pub fn enhance_and_binarize(img: &GrayImage, thresh: u8) -> GrayImage {
    let diff = gradient_difference(img);
    let smoothed = box_filter(&diff, 1, 1);
    // threshold() keeps strictly-greater pixels, so shift by one to make
    // the configured value inclusive
    threshold(&smoothed, thresh.saturating_sub(1), ThresholdType::Binary)
}
