//! # qrmatrix
//!
//! A Rust library for building the module matrix of a QR-style symbol and rendering it.
//!
//! ## Features
//!
//! - **Version selection**: Picks the smallest version (size class) whose capacity fits the payload
//! - **Function patterns**: Lays out the three finder patterns and the timing patterns
//! - **Mask selection**: Scores all eight masks with a run length penalty and applies the best one
//! - **Rendering**: Raster images, SVG documents and plain text
//!
//! ## Quick Start
//!
//! ```rust
//! use qrmatrix::{QRBuilder, RenderOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Version and mask are chosen automatically, error correction defaults to ECLevel::H
//! let qr = QRBuilder::new(b"Hello, World!").build()?;
//!
//! let img = qr.to_image(&RenderOptions::default());
//! assert_eq!(img.dimensions(), (256, 256));
//! # Ok(())
//! # }
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use qrmatrix::{ECLevel, MaskPattern, QRBuilder, RenderOptions, Version};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let qr = QRBuilder::new("Hello, World!".as_bytes())
//!     .version(Version::new(2)?)          // if not provided, finds smallest version to fit data
//!     .ec_level(ECLevel::M)               // if not provided, defaults to ECLevel::H
//!     .mask(MaskPattern::DiagonalLines)   // if not provided, finds best mask based on penalty score
//!     .build()?;
//!
//! let svg = qr.to_svg(RenderOptions::new().size(512, 512).dark_hex("#1a2b3c")?);
//! assert!(svg.contains("viewBox=\"0 0 25 25\""));
//! # Ok(())
//! # }
//! ```
//!
//! ## Components
//!
//! ### Versions
//! - Versions 1-16, with sizes from 21x21 to 81x81 modules (`width = version * 4 + 17`)
//!
//! ### Error Correction Levels
//! - **L**, **M**, **Q**, **H**: each selects a column of the capacity table, from the
//!   largest payload (L) to the smallest (H)
//!
//! ### Masks
//! - Eight fixed patterns, see [`MaskPattern`]. Masks flip every drawn module the pattern
//!   selects, function patterns included.

pub mod builder;
pub(crate) mod common;

pub use builder::{parse_hex_color, Module, QRBuilder, RenderOptions, QR};
pub use common::{
    compute_total_penalty, select_best_mask, Color, ECLevel, MaskPattern, QRError, QRResult,
    Version, MAX_VERSION,
};
