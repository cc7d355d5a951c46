mod common;

use common::*;

use barlocate::{BarcodeDetector, DetectError};

#[test]
fn detects_axis_aligned_barcode() {
    let img = striped_image(300.0, 200.0, 200.0, 80.0, 4.0, 0.0);
    let detection = BarcodeDetector::new().detect(&img).unwrap();

    assert!(!detection.rectified, "axis-aligned path expected");
    assert!(!detection.is_empty());

    let rect = detection.region.canonicalized();
    assert!((rect.center_x - 300.0).abs() <= 5.0, "center_x {}", rect.center_x);
    assert!((rect.center_y - 200.0).abs() <= 5.0, "center_y {}", rect.center_y);
    assert!(rect.angle.abs() <= 5.0, "angle {}", rect.angle);
    // the double dilation intentionally grows the region a little
    assert!(
        rect.width >= 196.0 && rect.width <= 222.0,
        "width {}",
        rect.width
    );
    assert!(
        rect.height >= 78.0 && rect.height <= 102.0,
        "height {}",
        rect.height
    );

    let (cw, ch) = (detection.crop.width() as f32, detection.crop.height() as f32);
    assert!(cw >= 196.0 && cw <= 224.0, "crop width {}", cw);
    assert!(ch >= 78.0 && ch <= 104.0, "crop height {}", ch);
}

#[test]
fn rectifies_rotated_barcode() {
    let img = striped_image(300.0, 200.0, 200.0, 80.0, 4.0, 20.0);
    let detection = BarcodeDetector::new().detect(&img).unwrap();

    assert!(detection.rectified, "rotated path expected");
    assert!(!detection.is_empty());

    let rect = detection.region.canonicalized();
    assert!(
        rect.angle.abs() >= 13.0 && rect.angle.abs() <= 27.0,
        "angle {}",
        rect.angle
    );
    assert!((rect.center_x - 300.0).abs() <= 6.0, "center_x {}", rect.center_x);
    assert!((rect.center_y - 200.0).abs() <= 6.0, "center_y {}", rect.center_y);

    // output is upright with dimensions near the unrotated bounds
    let (cw, ch) = (detection.crop.width() as f32, detection.crop.height() as f32);
    assert!(cw >= 190.0 && cw <= 232.0, "crop width {}", cw);
    assert!(ch >= 72.0 && ch <= 110.0, "crop height {}", ch);
}

#[test]
fn detected_corners_stay_near_working_bounds() {
    let img = striped_image(300.0, 200.0, 200.0, 80.0, 4.0, 10.0);
    let detection = BarcodeDetector::new().detect(&img).unwrap();

    for (x, y) in detection.corners {
        assert!(x > -20.0 && x < WORKING_W as f32 + 20.0);
        assert!(y > -20.0 && y < WORKING_H as f32 + 20.0);
    }
}

#[test]
fn blank_image_reports_no_region() {
    let result = BarcodeDetector::new().detect(&blank_image());
    assert!(matches!(result, Err(DetectError::NoRegionFound)));
}

#[test]
fn debug_mode_writes_stage_images() {
    let dir = tempfile::TempDir::new().unwrap();
    let debug_dir = dir.path().join("stages");

    let img = striped_image(300.0, 200.0, 200.0, 80.0, 4.0, 0.0);
    let detector = BarcodeDetector::new()
        .with_debug(debug_dir.clone())
        .unwrap();
    detector.detect(&img).unwrap();

    let saved = std::fs::read_dir(&debug_dir).unwrap().count();
    assert!(saved >= 5, "expected stage dumps, found {}", saved);
}

#[test]
fn debug_mode_rejects_non_empty_directory() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("leftover.txt"), "x").unwrap();

    let result = BarcodeDetector::new().with_debug(dir.path().to_path_buf());
    assert!(matches!(result, Err(DetectError::DebugDirNotEmpty(_))));
}
