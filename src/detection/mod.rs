pub mod extract;
pub mod gradient;
pub mod morphology;
pub mod overlay;
pub mod preprocessing;
pub mod regions;

use std::path::PathBuf;

use image::{DynamicImage, GrayImage, RgbImage};

use crate::error::DetectError;
use crate::models::{BarcodeDetection, RotatedRect};

/// Barcode region detector with tunable thresholds.
///
/// The defaults are the empirically tuned constants of the pipeline; they
/// are public fields so callers can recalibrate them without touching the
/// algorithm's structure. The detector is stateless between `detect` calls.
pub struct BarcodeDetector {
    /// Width of the resized working copy all geometric stages operate on.
    pub working_width: u32,
    /// Height of the resized working copy.
    pub working_height: u32,
    /// Sigma of the 3x3 Gaussian smoothing kernel.
    pub blur_sigma: f32,
    /// Inclusive binarization threshold on the gradient-difference map.
    pub gradient_threshold: u8,
    /// Structuring element radius; 3 gives the 7x7 rectangular element.
    pub morph_radius: u8,
    /// Maximum |angle| in degrees still treated as axis-aligned.
    pub angle_tolerance: f32,
    pub verbose: bool,
    debug_dir: Option<PathBuf>,
}

impl BarcodeDetector {
    pub fn new() -> Self {
        Self {
            working_width: 600,
            working_height: 400,
            blur_sigma: 0.8,
            gradient_threshold: 90,
            morph_radius: 3,
            angle_tolerance: 5.0,
            verbose: false,
            debug_dir: None,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Save per-stage intermediate images to `dir`.
    /// The directory must be empty or non-existent.
    pub fn with_debug(mut self, dir: PathBuf) -> Result<Self, DetectError> {
        if dir.exists() {
            if std::fs::read_dir(&dir)?.count() > 0 {
                return Err(DetectError::DebugDirNotEmpty(dir));
            }
        } else {
            std::fs::create_dir_all(&dir)?;
        }
        self.debug_dir = Some(dir);
        Ok(self)
    }

    /// Run the full detection pipeline on an image.
    ///
    /// Returns `DetectError::NoRegionFound` when no barcode-like texture
    /// survives consolidation. An empty crop is a valid outcome, not an
    /// error; check `BarcodeDetection::is_empty`.
    pub fn detect(&self, img: &DynamicImage) -> Result<BarcodeDetection, DetectError> {
        let working =
            preprocessing::resize_to_working(img, self.working_width, self.working_height);
        self.dump_rgb("01_working.png", &working)?;

        if self.verbose {
            println!("Preprocessing image...");
        }
        let gray = preprocessing::to_grayscale(&working);
        self.dump_gray("02_grayscale.png", &gray)?;
        let blurred = preprocessing::apply_blur(&gray, self.blur_sigma);
        self.dump_gray("03_blurred.png", &blurred)?;

        if self.verbose {
            println!("Computing gradient-difference mask...");
        }
        let binary = gradient::enhance_and_binarize(&blurred, self.gradient_threshold);
        self.dump_gray("04_gradient_mask.png", &binary)?;

        if self.verbose {
            println!("Consolidating mask regions...");
        }
        let morph = morphology::consolidate(&binary, self.morph_radius);
        self.dump_gray("05_consolidated.png", &morph)?;

        if self.verbose {
            println!("Selecting barcode region...");
        }
        let region = regions::select_barcode_region(&morph)?;
        if self.verbose {
            let rect = region.canonicalized();
            println!(
                "Selected region: center=({:.1}, {:.1}) size={:.1}x{:.1} angle={:.1} deg",
                rect.center_x, rect.center_y, rect.width, rect.height, rect.angle
            );
        }

        let (crop, rectified) = extract::extract_region(&working, &region, self.angle_tolerance);
        if self.verbose {
            if rectified {
                println!("Region rotated beyond tolerance, rectifying via homography");
            } else {
                println!("Region axis-aligned, cropping directly");
            }
        }
        if crop.width() > 0 && crop.height() > 0 {
            self.dump_rgb("06_crop.png", &crop)?;
        }

        Ok(BarcodeDetection {
            corners: region.corners(),
            region,
            crop,
            rectified,
        })
    }

    /// Resized working copy of an input image (for overlay drawing).
    pub fn working_copy(&self, img: &DynamicImage) -> RgbImage {
        preprocessing::resize_to_working(img, self.working_width, self.working_height)
    }

    /// Consolidated binary mask for an image (for debugging).
    pub fn consolidated_mask(&self, img: &DynamicImage) -> GrayImage {
        let working = self.working_copy(img);
        let gray = preprocessing::to_grayscale(&working);
        let blurred = preprocessing::apply_blur(&gray, self.blur_sigma);
        let binary = gradient::enhance_and_binarize(&blurred, self.gradient_threshold);
        morphology::consolidate(&binary, self.morph_radius)
    }

    /// Fitted barcode rectangle without extracting the crop (for debugging).
    pub fn locate(&self, img: &DynamicImage) -> Result<RotatedRect, DetectError> {
        regions::select_barcode_region(&self.consolidated_mask(img))
    }

    fn dump_gray(&self, name: &str, img: &GrayImage) -> Result<(), DetectError> {
        if let Some(dir) = &self.debug_dir {
            img.save(dir.join(name))?;
            if self.verbose {
                println!("  Debug: saved {}", name);
            }
        }
        Ok(())
    }

    fn dump_rgb(&self, name: &str, img: &RgbImage) -> Result<(), DetectError> {
        if let Some(dir) = &self.debug_dir {
            img.save(dir.join(name))?;
            if self.verbose {
                println!("  Debug: saved {}", name);
            }
        }
        Ok(())
    }
}

impl Default for BarcodeDetector {
    fn default() -> Self {
        Self::new()
    }
}
