pub mod codec_info;
pub mod color_mode;
pub mod encoder_options;
pub mod format_name;
pub mod inspection_report;
pub mod jpeg_markers;
pub mod pixel_dump;
pub mod sample_set;
pub mod solid_image;

// --- public re-exports ---
pub use encoder_options::EncoderOptions;
pub use inspection_report::InspectionReport;
pub use pixel_dump::{PixelFormat, Rect};
