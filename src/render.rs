//! Module-grid rendering onto a draw target.
//!
//! [`draw_modules`] is the single painting primitive the placement
//! strategies build on: it walks an encoded symbol cell by cell and
//! paints every module, set or clear, onto the target.

use embedded_graphics::{prelude::*, primitives::Rectangle};
use qrcodegen_no_heap::QrCode;

/// Paint an encoded symbol's module grid onto `target`.
///
/// Every cell is painted: `fg` for set modules, `bg` for clear ones, in
/// row-major order. Cell (row, col) lands at
/// `(origin.x + col·module_px, origin.y + row·module_px)`. With
/// `module_px == 1` each cell is a single pixel write; with
/// `module_px > 1` each cell is one filled block — the two are never
/// mixed within a call, and identical inputs always produce the
/// identical draw sequence.
///
/// If `fill_background` is set, a `side·module_px` square of `bg` is
/// filled at `origin` before any modules are drawn. The fill covers the
/// symbol only; quiet-zone background is the caller's responsibility
/// (see the placement strategies).
///
/// Writes that fall outside the target's bounds are the target's
/// contract to clip or reject; no bounds handling happens here.
///
/// # Errors
///
/// Propagates the first error the draw target reports.
pub fn draw_modules<D>(
    target: &mut D,
    qr: &QrCode<'_>,
    origin: Point,
    module_px: u32,
    fg: D::Color,
    bg: D::Color,
    fill_background: bool,
) -> Result<(), D::Error>
where
    D: DrawTarget,
{
    let side = qr.size();
    let module_px = module_px.max(1);

    if fill_background {
        let extent = side as u32 * module_px;
        target.fill_solid(&Rectangle::new(origin, Size::new_equal(extent)), bg)?;
    }

    for row in 0..side {
        for col in 0..side {
            let color = if qr.get_module(col, row) { fg } else { bg };
            let top_left = Point::new(
                origin.x + col * module_px as i32,
                origin.y + row * module_px as i32,
            );
            if module_px == 1 {
                Pixel(top_left, color).draw(target)?;
            } else {
                target.fill_solid(
                    &Rectangle::new(top_left, Size::new_equal(module_px)),
                    color,
                )?;
            }
        }
    }

    Ok(())
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::BinaryColor;

    use super::*;
    use crate::symbol::{self, BUFFER_LEN};
    use crate::test_target::{DrawOp, RecordingTarget};

    const FG: BinaryColor = BinaryColor::On;
    const BG: BinaryColor = BinaryColor::Off;

    #[test]
    fn unit_modules_use_pixel_writes_only() {
        let mut tempbuffer = [0u8; BUFFER_LEN];
        let mut outbuffer = [0u8; BUFFER_LEN];
        let qr = symbol::encode_into("ckb1qz", &mut tempbuffer, &mut outbuffer).unwrap();
        let mut target = RecordingTarget::new(240, 240);
        draw_modules(&mut target, &qr, Point::new(10, 10), 1, FG, BG, false).unwrap();

        assert_eq!(target.ops.len(), 25 * 25);
        assert!(target
            .ops
            .iter()
            .all(|op| matches!(op, DrawOp::Pixel(..))));
    }

    #[test]
    fn scaled_modules_use_block_fills_only() {
        let mut tempbuffer = [0u8; BUFFER_LEN];
        let mut outbuffer = [0u8; BUFFER_LEN];
        let qr = symbol::encode_into("ckb1qz", &mut tempbuffer, &mut outbuffer).unwrap();
        let mut target = RecordingTarget::new(240, 240);
        draw_modules(&mut target, &qr, Point::new(0, 0), 3, FG, BG, false).unwrap();

        assert_eq!(target.ops.len(), 25 * 25);
        assert!(target
            .ops
            .iter()
            .all(|op| matches!(op, DrawOp::FillRect(..))));
    }

    #[test]
    fn cells_are_painted_row_major_at_scaled_offsets() {
        let mut tempbuffer = [0u8; BUFFER_LEN];
        let mut outbuffer = [0u8; BUFFER_LEN];
        let qr = symbol::encode_into("ckb1qz", &mut tempbuffer, &mut outbuffer).unwrap();
        let origin = Point::new(7, 11);
        let mut target = RecordingTarget::new(240, 240);
        draw_modules(&mut target, &qr, origin, 2, FG, BG, false).unwrap();

        // Cell (0, 0) is part of a finder pattern, so it is always set.
        assert_eq!(
            target.ops[0],
            DrawOp::FillRect(Rectangle::new(origin, Size::new_equal(2)), FG)
        );
        // Row-major: the second op is cell (row 0, col 1).
        match target.ops[1] {
            DrawOp::FillRect(rect, _) => {
                assert_eq!(rect.top_left, origin + Point::new(2, 0));
            }
            ref other => panic!("expected a block fill, got {:?}", other),
        }
        // First cell of row 1 sits 25 cells later.
        match target.ops[25] {
            DrawOp::FillRect(rect, _) => {
                assert_eq!(rect.top_left, origin + Point::new(0, 2));
            }
            ref other => panic!("expected a block fill, got {:?}", other),
        }
    }

    #[test]
    fn background_fill_precedes_modules_and_covers_symbol_only() {
        let mut tempbuffer = [0u8; BUFFER_LEN];
        let mut outbuffer = [0u8; BUFFER_LEN];
        let qr = symbol::encode_into("ckb1qz", &mut tempbuffer, &mut outbuffer).unwrap();
        let origin = Point::new(4, 4);
        let mut target = RecordingTarget::new(240, 240);
        draw_modules(&mut target, &qr, origin, 2, FG, BG, true).unwrap();

        assert_eq!(target.ops.len(), 1 + 25 * 25);
        assert_eq!(
            target.ops[0],
            DrawOp::FillRect(Rectangle::new(origin, Size::new_equal(50)), BG)
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        let mut tempbuffer = [0u8; BUFFER_LEN];
        let mut outbuffer = [0u8; BUFFER_LEN];
        let qr = symbol::encode_into("ckb1qz", &mut tempbuffer, &mut outbuffer).unwrap();
        let mut first = RecordingTarget::new(240, 240);
        let mut second = RecordingTarget::new(240, 240);
        draw_modules(&mut first, &qr, Point::new(3, 9), 2, FG, BG, true).unwrap();
        draw_modules(&mut second, &qr, Point::new(3, 9), 2, FG, BG, true).unwrap();

        assert_eq!(first.ops, second.ops);
    }

    #[test]
    fn every_cell_is_painted_fg_or_bg() {
        let mut tempbuffer = [0u8; BUFFER_LEN];
        let mut outbuffer = [0u8; BUFFER_LEN];
        let qr = symbol::encode_into("ckb1qz", &mut tempbuffer, &mut outbuffer).unwrap();
        let mut target = RecordingTarget::new(240, 240);
        draw_modules(&mut target, &qr, Point::new(0, 0), 1, FG, BG, false).unwrap();

        let set = target
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Pixel(_, c) if *c == FG))
            .count();
        let clear = target
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Pixel(_, c) if *c == BG))
            .count();
        assert_eq!(set + clear, 25 * 25);
        // A valid symbol has both set and clear modules.
        assert!(set > 0);
        assert!(clear > 0);
    }

    #[test]
    fn renders_largest_supported_symbol() {
        // 213 bytes is version 10's capacity: a 57×57 grid, the most
        // cells any render call can produce.
        let bytes = [b'x'; 213];
        let payload = core::str::from_utf8(&bytes).unwrap();
        let mut tempbuffer = [0u8; BUFFER_LEN];
        let mut outbuffer = [0u8; BUFFER_LEN];
        let qr = symbol::encode_into(payload, &mut tempbuffer, &mut outbuffer).unwrap();
        let mut target = RecordingTarget::new(240, 240);
        draw_modules(&mut target, &qr, Point::zero(), 1, FG, BG, false).unwrap();

        assert_eq!(target.ops.len(), 57 * 57);
    }

    #[test]
    fn zero_module_px_is_clamped_to_one() {
        let mut tempbuffer = [0u8; BUFFER_LEN];
        let mut outbuffer = [0u8; BUFFER_LEN];
        let qr = symbol::encode_into("ckb1qz", &mut tempbuffer, &mut outbuffer).unwrap();
        let mut target = RecordingTarget::new(240, 240);
        draw_modules(&mut target, &qr, Point::new(0, 0), 0, FG, BG, false).unwrap();

        assert!(target
            .ops
            .iter()
            .all(|op| matches!(op, DrawOp::Pixel(..))));
    }
}
