use std::mem;

use image::RgbImage;

/// Rectangle described by center, extents, and a rotation angle in degrees.
///
/// The angle is measured from the positive x-axis to the edge joining
/// corner 0 and corner 1, so `width` is always the length of that edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatedRect {
    pub center_x: f32,
    pub center_y: f32,
    pub width: f32,
    pub height: f32,
    pub angle: f32,
}

impl RotatedRect {
    pub fn new(center_x: f32, center_y: f32, width: f32, height: f32, angle: f32) -> Self {
        Self {
            center_x,
            center_y,
            width,
            height,
            angle,
        }
    }

    /// Build from four corner points ordered around the rectangle, as
    /// produced by a minimum-area rectangle fit.
    pub fn from_corners(corners: [(f32, f32); 4]) -> Self {
        let center_x = corners.iter().map(|p| p.0).sum::<f32>() / 4.0;
        let center_y = corners.iter().map(|p| p.1).sum::<f32>() / 4.0;
        let e0 = (corners[1].0 - corners[0].0, corners[1].1 - corners[0].1);
        let e1 = (corners[2].0 - corners[1].0, corners[2].1 - corners[1].1);
        Self {
            center_x,
            center_y,
            width: (e0.0 * e0.0 + e0.1 * e0.1).sqrt(),
            height: (e1.0 * e1.0 + e1.1 * e1.1).sqrt(),
            angle: e0.1.atan2(e0.0).to_degrees(),
        }
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Corner points in order top-left, top-right, bottom-right, bottom-left
    /// of the unrotated rectangle, rotated by `angle` about the center.
    pub fn corners(&self) -> [(f32, f32); 4] {
        let (s, c) = self.angle.to_radians().sin_cos();
        let rotate = |dx: f32, dy: f32| {
            (
                self.center_x + dx * c - dy * s,
                self.center_y + dx * s + dy * c,
            )
        };
        let hw = self.width / 2.0;
        let hh = self.height / 2.0;
        [
            rotate(-hw, -hh),
            rotate(hw, -hh),
            rotate(hw, hh),
            rotate(-hw, hh),
        ]
    }

    /// Same rectangle with the long axis mapped to `width` and the angle
    /// collapsed into (-90, 90]. Barcodes are wider than tall by convention.
    pub fn canonicalized(&self) -> RotatedRect {
        let mut rect = *self;
        if rect.height > rect.width {
            mem::swap(&mut rect.width, &mut rect.height);
            rect.angle += 90.0;
        }
        rect.angle = normalize_angle(rect.angle);
        rect
    }
}

/// Collapse an angle in degrees into the range (-90, 90].
///
/// After normalization "near zero" reliably means "axis-aligned" regardless
/// of which quadrant the raw minimum-rectangle angle fell into.
pub fn normalize_angle(degrees: f32) -> f32 {
    let mut angle = (degrees + 180.0).rem_euclid(180.0);
    if angle > 90.0 {
        angle -= 180.0;
    }
    angle
}

/// Result of a detection run: the upright crop plus the geometry it came from.
#[derive(Debug, Clone)]
pub struct BarcodeDetection {
    /// Extracted barcode region, in working-image resolution.
    pub crop: RgbImage,
    /// The selected rotated rectangle, in working-image coordinates.
    pub region: RotatedRect,
    /// Corner points of the selected rectangle, for overlay drawing.
    pub corners: [(f32, f32); 4],
    /// Whether the perspective-rectification path was taken.
    pub rectified: bool,
}

impl BarcodeDetection {
    /// A zero-area crop signals "no usable crop"; callers check this rather
    /// than receiving an error.
    pub fn is_empty(&self) -> bool {
        self.crop.width() == 0 || self.crop.height() == 0
    }
}
