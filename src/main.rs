use clap::Parser;
use image::ImageReader;
use std::path::PathBuf;

use barlocate::detection::overlay;
use barlocate::BarcodeDetector;

#[derive(Parser)]
#[command(name = "barlocate")]
#[command(about = "Locate and rectify 1D barcode regions in images")]
struct Cli {
    /// Path to input image file
    #[arg(value_name = "IMAGE")]
    image_path: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Where to save the extracted barcode crop
    #[arg(long, value_name = "FILE", default_value = "barcode.png")]
    output: PathBuf,

    /// Save the working image with the detected region outlined
    #[arg(long, value_name = "FILE")]
    annotate: Option<PathBuf>,

    /// Save per-stage debug images to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,

    /// Binarization threshold on the gradient-difference map
    #[arg(long, default_value_t = 90)]
    gradient_threshold: u8,

    /// Maximum angle in degrees still cropped without rectification
    #[arg(long, default_value_t = 5.0)]
    angle_tolerance: f32,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    if args.verbose {
        println!("Loading image: {:?}", args.image_path);
    }

    // Load image
    let img = ImageReader::open(&args.image_path)?
        .decode()
        .map_err(|e| anyhow::anyhow!("Failed to decode image: {}", e))?;

    if args.verbose {
        println!("Image loaded: {}x{}\n", img.width(), img.height());
    }

    let mut detector = BarcodeDetector::new().with_verbose(args.verbose);
    detector.gradient_threshold = args.gradient_threshold;
    detector.angle_tolerance = args.angle_tolerance;
    if let Some(debug_dir) = args.debug_out {
        detector = detector.with_debug(debug_dir)?;
    }

    let detection = detector.detect(&img)?;

    println!("\n=== Barcode Region Detection ===");
    let rect = detection.region.canonicalized();
    println!(
        "Region: center=({:.1}, {:.1}) size={:.1}x{:.1} angle={:.1} deg",
        rect.center_x, rect.center_y, rect.width, rect.height, rect.angle
    );
    println!(
        "Extraction: {}",
        if detection.rectified {
            "perspective rectification"
        } else {
            "direct crop"
        }
    );

    if detection.is_empty() {
        println!("Extracted crop is empty, nothing saved.");
    } else {
        detection.crop.save(&args.output)?;
        println!(
            "Saved {}x{} barcode crop to {:?}",
            detection.crop.width(),
            detection.crop.height(),
            args.output
        );
    }

    if let Some(annotate_path) = args.annotate {
        let mut annotated = detector.working_copy(&img);
        overlay::draw_region_box(&mut annotated, &detection.corners);
        annotated.save(&annotate_path)?;
        println!("Saved annotated image to {:?}", annotate_path);
    }

    Ok(())
}
