//! Placement strategies: where a symbol lands on the target and how
//! large its modules are.
//!
//! Every operation here encodes the payload itself (via
//! [`symbol::encode_into`], into scratch buffers that live only for the
//! duration of the call), computes an origin and module size, and then
//! delegates the painting to [`render::draw_modules`]. Encoding failure
//! aborts the call before anything touches the target.

use embedded_graphics::{prelude::*, primitives::Rectangle};
use qrcodegen_no_heap::QrCode;

use crate::error::{EncodeError, RenderError};
use crate::render;
use crate::symbol;

// ── QrConfig ─────────────────────────────────────────────────────────────

/// Configuration for symbol placement.
///
/// All placement geometry lives here — there are **no** module-level
/// layout constants. Callers can tune every dimension at construction
/// time without modifying library source.
pub struct QrConfig {
    /// Blank border around the symbol, in modules. Default: 4 (the
    /// width scanners expect).
    pub quiet_zone_modules: u32,
    /// Pixels kept free around the auto-fitted extent on the shorter
    /// screen axis. Default: 16.
    pub fit_margin_px: u32,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            quiet_zone_modules: 4,
            fit_margin_px: 16,
        }
    }
}

impl QrConfig {
    /// Total grid width in modules once the quiet zone is added on both
    /// sides of a `side`-module symbol.
    pub fn padded_modules(&self, side: u32) -> u32 {
        side + 2 * self.quiet_zone_modules
    }
}

// ── Placement ────────────────────────────────────────────────────────────

/// Where a draw operation put the symbol.
///
/// Computed fresh on every call; nothing is stored between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Top-left corner of the full rendered extent (quiet zone
    /// included, where the operation draws one).
    pub top_left: Point,
    /// Module size in pixels, always ≥ 1.
    pub module_px: u32,
    /// Side length in pixels of the full rendered extent.
    pub extent_px: u32,
}

// ── Draw operations ──────────────────────────────────────────────────────

/// Draw a symbol centred on the target with an auto-fitted module size.
///
/// The module size is the largest integer such that the full extent
/// (symbol plus quiet zone) fits within the shorter target axis minus
/// `config.fit_margin_px`, floored at 1 — a payload too dense for the
/// screen loses centring accuracy rather than failing. The background
/// fill covers the full extent, quiet zone included.
///
/// # Errors
///
/// [`RenderError::Encode`] if the payload cannot be encoded (nothing is
/// drawn), or [`RenderError::Draw`] from the target.
///
/// # Example
///
/// ```no_run
/// # use qr_display_rs::{placement::draw_centered, QrConfig};
/// # use embedded_graphics::pixelcolor::BinaryColor;
/// # fn example(display: &mut impl embedded_graphics::draw_target::DrawTarget<Color = BinaryColor>) {
/// let config = QrConfig::default();
/// draw_centered(display, "https://example.com/p/42", BinaryColor::On, BinaryColor::Off, &config).ok();
/// # }
/// ```
pub fn draw_centered<D>(
    target: &mut D,
    payload: &str,
    fg: D::Color,
    bg: D::Color,
    config: &QrConfig,
) -> Result<Placement, RenderError<D::Error>>
where
    D: DrawTarget,
{
    let mut tempbuffer = [0u8; symbol::BUFFER_LEN];
    let mut outbuffer = [0u8; symbol::BUFFER_LEN];
    let qr = symbol::encode_into(payload, &mut tempbuffer, &mut outbuffer)?;
    let side = qr.size() as u32;
    let modules = config.padded_modules(side);

    let bounds = target.bounding_box();
    let available = bounds
        .size
        .width
        .min(bounds.size.height)
        .saturating_sub(config.fit_margin_px);
    let module_px = (available / modules).max(1);
    let extent = modules * module_px;

    let top_left = bounds.top_left
        + Point::new(
            (bounds.size.width as i32 - extent as i32) / 2,
            (bounds.size.height as i32 - extent as i32) / 2,
        );

    draw_quiet_boxed(target, &qr, top_left, module_px, config.quiet_zone_modules, fg, bg)
}

/// Draw a symbol at an explicit origin with an explicit module size.
///
/// No auto-fit and no quiet-zone fill: the background fill is limited
/// to the symbol square itself. `module_px` is clamped to ≥ 1.
///
/// # Errors
///
/// [`RenderError::Encode`] if the payload cannot be encoded (nothing is
/// drawn), or [`RenderError::Draw`] from the target.
pub fn draw_at<D>(
    target: &mut D,
    payload: &str,
    top_left: Point,
    module_px: u32,
    fg: D::Color,
    bg: D::Color,
) -> Result<Placement, RenderError<D::Error>>
where
    D: DrawTarget,
{
    let mut tempbuffer = [0u8; symbol::BUFFER_LEN];
    let mut outbuffer = [0u8; symbol::BUFFER_LEN];
    let qr = symbol::encode_into(payload, &mut tempbuffer, &mut outbuffer)?;
    let module_px = module_px.max(1);

    render::draw_modules(target, &qr, top_left, module_px, fg, bg, true)
        .map_err(RenderError::Draw)?;

    Ok(Placement {
        top_left,
        module_px,
        extent_px: qr.size() as u32 * module_px,
    })
}

/// Draw a symbol inside a filled box with an explicit quiet zone.
///
/// Fills a `(side + 2·quiet_modules)·module_px` square of `bg` at
/// `top_left`, then renders the symbol inset by `quiet_modules ·
/// module_px` pixels on both axes, leaving a clean quiet border around
/// it.
///
/// # Errors
///
/// [`RenderError::Encode`] if the payload cannot be encoded (nothing is
/// drawn), or [`RenderError::Draw`] from the target.
pub fn draw_boxed<D>(
    target: &mut D,
    payload: &str,
    top_left: Point,
    module_px: u32,
    quiet_modules: u32,
    fg: D::Color,
    bg: D::Color,
) -> Result<Placement, RenderError<D::Error>>
where
    D: DrawTarget,
{
    let mut tempbuffer = [0u8; symbol::BUFFER_LEN];
    let mut outbuffer = [0u8; symbol::BUFFER_LEN];
    let qr = symbol::encode_into(payload, &mut tempbuffer, &mut outbuffer)?;
    draw_quiet_boxed(target, &qr, top_left, module_px.max(1), quiet_modules, fg, bg)
}

/// Draw a symbol centred on an explicit point with an explicit module
/// size.
///
/// Like [`draw_centered`] but without auto-fit: the origin is
/// `center − extent/2` on both axes, where the extent includes
/// `config.quiet_zone_modules` of quiet border.
///
/// # Errors
///
/// [`RenderError::Encode`] if the payload cannot be encoded (nothing is
/// drawn), or [`RenderError::Draw`] from the target.
pub fn draw_centered_at<D>(
    target: &mut D,
    payload: &str,
    center: Point,
    module_px: u32,
    fg: D::Color,
    bg: D::Color,
    config: &QrConfig,
) -> Result<Placement, RenderError<D::Error>>
where
    D: DrawTarget,
{
    let mut tempbuffer = [0u8; symbol::BUFFER_LEN];
    let mut outbuffer = [0u8; symbol::BUFFER_LEN];
    let qr = symbol::encode_into(payload, &mut tempbuffer, &mut outbuffer)?;
    let module_px = module_px.max(1);
    let extent = config.padded_modules(qr.size() as u32) * module_px;
    let top_left = center - Point::new(extent as i32 / 2, extent as i32 / 2);

    draw_quiet_boxed(target, &qr, top_left, module_px, config.quiet_zone_modules, fg, bg)
}

/// Pixel side length a render of `payload` would occupy, quiet zone
/// included, without touching any draw target.
///
/// Lets callers lay out surrounding content before rendering.
/// `module_px` is clamped to ≥ 1, matching the draw operations.
///
/// # Errors
///
/// [`EncodeError::PayloadTooLarge`] if the payload exceeds the
/// supported capacity.
pub fn pixel_extent(
    payload: &str,
    module_px: u32,
    config: &QrConfig,
) -> Result<u32, EncodeError> {
    let side = symbol::side_for_version(symbol::version_for_payload(payload)?);
    Ok(config.padded_modules(side) * module_px.max(1))
}

// ── Shared box-and-render step ───────────────────────────────────────────

/// Fill the full extent (quiet zone included) with `bg`, then render the
/// symbol inset by the quiet border.
fn draw_quiet_boxed<D>(
    target: &mut D,
    qr: &QrCode<'_>,
    top_left: Point,
    module_px: u32,
    quiet_modules: u32,
    fg: D::Color,
    bg: D::Color,
) -> Result<Placement, RenderError<D::Error>>
where
    D: DrawTarget,
{
    let side = qr.size() as u32;
    let extent = (side + 2 * quiet_modules) * module_px;

    target
        .fill_solid(&Rectangle::new(top_left, Size::new_equal(extent)), bg)
        .map_err(RenderError::Draw)?;

    let inset = (quiet_modules * module_px) as i32;
    render::draw_modules(
        target,
        qr,
        top_left + Point::new(inset, inset),
        module_px,
        fg,
        bg,
        false,
    )
    .map_err(RenderError::Draw)?;

    Ok(Placement {
        top_left,
        module_px,
        extent_px: extent,
    })
}

// ── Tests ────────────────────────────────────────────────────────────────
