use image::GrayImage;
use imageproc::distance_transform::Norm;
use imageproc::morphology::{close, dilate, erode};

/// Solidify the candidate region into one connected blob.
///
/// Closing bridges the gaps between adjacent bars, erosion removes isolated
/// speckle that survived it, and dilating twice regrows the surviving region
/// so the fitted rectangle fully encloses the true bars. Slight
/// over-inclusion is preferred over a tight bound that clips bars.
/// `radius` 3 with the L-inf norm is a 7x7 rectangular structuring element.
pub fn consolidate(binary: &GrayImage, radius: u8) -> GrayImage {
    let closed = close(binary, Norm::LInf, radius);
    let eroded = erode(&closed, Norm::LInf, radius);
    let grown = dilate(&eroded, Norm::LInf, radius);
    dilate(&grown, Norm::LInf, radius)
}
