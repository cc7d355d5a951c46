pub mod detection;
pub mod error;
pub mod models;

pub use detection::BarcodeDetector;
pub use error::DetectError;
pub use models::{normalize_angle, BarcodeDetection, RotatedRect};
