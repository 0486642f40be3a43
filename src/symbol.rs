//! Version selection and symbol encoding.
//!
//! Maps a payload length onto the smallest QR version that can hold it,
//! then delegates the actual encoding to the [`qrcodegen_no_heap`]
//! crate, which works entirely in caller-provided buffers and never
//! allocates. Error correction is fixed at the medium tier (~15%
//! recovery) and is not configurable per call.

use qrcodegen_no_heap::{QrCode, QrCodeEcc, Version};

use crate::error::EncodeError;

/// Error-correction level used for every symbol.
pub const ECC_LEVEL: QrCodeEcc = QrCodeEcc::Medium;

/// Largest version any operation selects.
pub const MAX_VERSION: Version = Version::new(10);

/// Buffer length that fits any symbol this crate produces.
///
/// Both buffers passed to [`encode_into`] should be this long; the draw
/// operations allocate theirs on the stack (814 bytes per call).
pub const BUFFER_LEN: usize = MAX_VERSION.buffer_len();

/// Largest payload (in bytes) any draw operation accepts.
///
/// This is version 10's byte-mode capacity at medium error correction.
/// Longer payloads would need a version this crate does not select, so
/// they are rejected up front with [`EncodeError::PayloadTooLarge`]
/// instead of being handed to the encoder to overflow.
pub const MAX_PAYLOAD_BYTES: usize = 213;

/// Select the smallest supported version for a payload length.
///
/// Threshold table (bytes → version): ≤20 → 2, ≤32 → 3, ≤46 → 4,
/// ≤60 → 5, ≤74 → 6, ≤86 → 7, ≤108 → 8, ≤130 → 9, otherwise 10.
///
/// The table itself clamps to version 10 for any longer length; the
/// capacity check against [`MAX_PAYLOAD_BYTES`] happens in
/// [`version_for_payload`], not here.
pub fn version_for_len(len: usize) -> u8 {
    match len {
        0..=20 => 2,
        21..=32 => 3,
        33..=46 => 4,
        47..=60 => 5,
        61..=74 => 6,
        75..=86 => 7,
        87..=108 => 8,
        109..=130 => 9,
        _ => 10,
    }
}

/// Grid side length (modules) of a given version: `4·version + 17`.
pub fn side_for_version(version: u8) -> u32 {
    version as u32 * 4 + 17
}

/// Select a version for `payload`, rejecting oversize payloads.
///
/// # Errors
///
/// Returns [`EncodeError::PayloadTooLarge`] if the payload exceeds
/// [`MAX_PAYLOAD_BYTES`].
pub fn version_for_payload(payload: &str) -> Result<u8, EncodeError> {
    let len = payload.len();
    if len > MAX_PAYLOAD_BYTES {
        return Err(EncodeError::PayloadTooLarge { len });
    }
    Ok(version_for_len(len))
}

/// Encode `payload` into caller-provided buffers at the version the
/// threshold table selects.
///
/// The returned symbol borrows `outbuffer`; `tempbuffer` is free for
/// reuse as soon as this returns. Both buffers must be at least the
/// selected version's `buffer_len()` — [`BUFFER_LEN`] always suffices.
/// The version is pinned (min == max) so the rendered grid size depends
/// only on the payload length, and ECC boosting is disabled so the
/// level stays at [`ECC_LEVEL`].
///
/// # Errors
///
/// * [`EncodeError::PayloadTooLarge`] — payload exceeds version 10's
///   capacity; nothing is encoded.
/// * [`EncodeError::BufferTooSmall`] — either buffer is shorter than
///   the selected version needs; nothing is encoded.
/// * [`EncodeError::Encoder`] — the encoder could not fit the payload
///   at the selected version.
pub fn encode_into<'a>(
    payload: &str,
    tempbuffer: &mut [u8],
    outbuffer: &'a mut [u8],
) -> Result<QrCode<'a>, EncodeError> {
    let version = Version::new(version_for_payload(payload)?);
    // The encoder asserts on short buffers; check here and report
    // instead of panicking.
    let needed = version.buffer_len();
    if tempbuffer.len() < needed || outbuffer.len() < needed {
        return Err(EncodeError::BufferTooSmall { needed });
    }
    QrCode::encode_text(
        payload, tempbuffer, outbuffer, ECC_LEVEL, version, version, None, false,
    )
    .map_err(EncodeError::Encoder)
}

// ── Tests ────────────────────────────────────────────────────────────────
