//! QR code placement and rendering for `embedded-graphics` draw targets.
//!
//! This crate turns a text payload into a QR symbol (encoding is
//! delegated to the [`qrcodegen_no_heap`] crate at a fixed medium
//! error-correction level, working in stack buffers with no allocator)
//! and paints the module grid onto any [`DrawTarget`], with four
//! placement strategies: auto-fitted and centred, explicit position,
//! boxed with an explicit quiet border, and centred on a point. A pure
//! size query lets callers lay out surrounding content before drawing
//! anything.
//!
//! # Quick Start
//!
//! ```ignore
//! use qr_display_rs::{draw_centered, QrConfig};
//! use embedded_graphics::pixelcolor::BinaryColor;
//!
//! // `display` is any embedded-graphics DrawTarget.
//! let config = QrConfig::default();
//! let placement = draw_centered(
//!     &mut display,
//!     "https://example.com/p/42",
//!     BinaryColor::On,
//!     BinaryColor::Off,
//!     &config,
//! )?;
//! defmt::info!("QR drawn, {} px across", placement.extent_px);
//! ```
//!
//! # Failure model
//!
//! Each draw operation either completes fully or fails before the first
//! pixel is written: payloads that exceed the supported capacity are
//! rejected up front, and encoder failures surface as
//! [`EncodeError`] without any partial drawing. Draw-target errors are
//! propagated unchanged as [`RenderError::Draw`].
//!
//! # Crate Features
//!
//! - **`defmt`** — structured logging via [`defmt`] (`Format` impls on
//!   the error types).
//!
//! [`DrawTarget`]: embedded_graphics::draw_target::DrawTarget

#![no_std]

pub mod error;
pub mod placement;
pub mod render;
pub mod symbol;

#[cfg(test)]
mod test_target;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use error::{EncodeError, RenderError};
pub use placement::{
    draw_at, draw_boxed, draw_centered, draw_centered_at, pixel_extent, Placement, QrConfig,
};
pub use render::draw_modules;
pub use symbol::{
    encode_into, side_for_version, version_for_len, BUFFER_LEN, ECC_LEVEL, MAX_PAYLOAD_BYTES,
};
