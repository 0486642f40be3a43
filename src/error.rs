//! Error types for QR encoding and rendering.

use qrcodegen_no_heap::DataTooLong;

/// Errors that can occur while turning a payload into an encoded symbol.
///
/// All variants are reported *before* anything is drawn, so a failed
/// call never leaves a partially painted symbol on the target.
#[derive(Debug)]
pub enum EncodeError {
    /// Payload is longer than the largest supported version (10) can
    /// hold at medium error correction.
    PayloadTooLarge {
        /// Payload length in bytes.
        len: usize,
    },
    /// A scratch or output buffer is shorter than the selected version
    /// requires.
    BufferTooSmall {
        /// Minimum buffer length in bytes for the selected version.
        needed: usize,
    },
    /// The encoder rejected the payload (wraps
    /// [`qrcodegen_no_heap::DataTooLong`]).
    ///
    /// Unreachable for payloads that pass the length check, but kept as
    /// an explicit variant rather than a panic path.
    Encoder(DataTooLong),
}

/// Errors that can occur during a draw operation.
///
/// Generic over the draw target's own error type, which is propagated
/// unchanged.
#[derive(Debug)]
pub enum RenderError<E> {
    /// The payload could not be encoded; nothing was drawn.
    Encode(EncodeError),
    /// The draw target reported a failure.
    Draw(E),
}

impl<E> From<EncodeError> for RenderError<E> {
    fn from(e: EncodeError) -> Self {
        RenderError::Encode(e)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for EncodeError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            EncodeError::PayloadTooLarge { len } => {
                defmt::write!(f, "payload too large ({} bytes)", len)
            }
            EncodeError::BufferTooSmall { needed } => {
                defmt::write!(f, "buffer too small ({} bytes needed)", needed)
            }
            EncodeError::Encoder(_e) => defmt::write!(f, "encoder rejected payload"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E> defmt::Format for RenderError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            RenderError::Encode(e) => defmt::write!(f, "{}", e),
            RenderError::Draw(_e) => defmt::write!(f, "draw target error"),
        }
    }
}
