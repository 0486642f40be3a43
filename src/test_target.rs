//! Recording draw target used by the unit tests.
//!
//! Logs every draw call instead of keeping a framebuffer, so tests can
//! assert on the exact sequence of pixel writes and block fills an
//! operation produced.

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*, primitives::Rectangle};
use heapless::Vec;

/// One recorded draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOp {
    /// A single-pixel write.
    Pixel(Point, BinaryColor),
    /// A solid rectangle fill.
    FillRect(Rectangle, BinaryColor),
}

/// Draw target that records operations in issue order.
///
/// No clipping is performed; out-of-bounds writes are recorded as
/// issued so tests can see exactly what an operation asked for. The
/// log holds the largest supported symbol (57×57 cells plus a box
/// fill) with room to spare.
pub struct RecordingTarget {
    size: Size,
    pub ops: Vec<DrawOp, 4096>,
}

impl RecordingTarget {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Size::new(width, height),
            ops: Vec::new(),
        }
    }
}

impl OriginDimensions for RecordingTarget {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for RecordingTarget {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.ops.push(DrawOp::Pixel(point, color)).expect("op log full");
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        self.ops
            .push(DrawOp::FillRect(*area, color))
            .expect("op log full");
        Ok(())
    }
}
