//! Module matrix acquisition.
//!
//! Encoding internals (bit placement, Reed-Solomon, mask scoring) are
//! delegated to the `qrcode` crate; this module only defines the square
//! boolean grid the rest of the engine consumes and the seam through
//! which it is obtained.

use qrcode::QrCode;

use crate::style::EcLevel;
use crate::{Error, Result};

/// Square grid of QR modules. `true` is a dark module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    width: usize,
    bits: Vec<bool>,
}

impl ModuleMatrix {
    /// Build from a flat row-major bit vector. Fails if the bit count
    /// is not a perfect square.
    pub fn from_bits(bits: Vec<bool>) -> Result<Self> {
        let width = (bits.len() as f64).sqrt() as usize;
        if width * width != bits.len() {
            return Err(Error::Encoding(format!(
                "matrix of {} modules is not square",
                bits.len()
            )));
        }
        Ok(Self { width, bits })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.bits[y * self.width + x]
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, value: bool) {
        self.bits[y * self.width + x] = value;
    }

    pub(crate) fn clear_index(&mut self, index: usize) {
        self.bits[index] = false;
    }

    /// Number of dark modules.
    pub fn dark_count(&self) -> usize {
        self.bits.iter().filter(|b| **b).count()
    }
}

/// Source of error-corrected module matrices for a payload.
pub trait MatrixSource {
    fn encode(
        &self,
        payload: &str,
        level: EcLevel,
        mask_pattern: Option<u8>,
    ) -> Result<ModuleMatrix>;
}

/// Default matrix source backed by the `qrcode` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrMatrixSource;

impl MatrixSource for QrMatrixSource {
    fn encode(
        &self,
        payload: &str,
        level: EcLevel,
        mask_pattern: Option<u8>,
    ) -> Result<ModuleMatrix> {
        if let Some(mask) = mask_pattern {
            // The qrcode crate picks masks by penalty score and exposes
            // no override knob.
            tracing::warn!(
                mask,
                "mask pattern override is not supported by the qrcode encoder; using automatic selection"
            );
        }

        let code = QrCode::with_error_correction_level(payload.as_bytes(), level.into())
            .map_err(|e| Error::Encoding(e.to_string()))?;

        let bits = code
            .to_colors()
            .iter()
            .map(|c| *c == qrcode::Color::Dark)
            .collect();
        ModuleMatrix::from_bits(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_payload_is_smallest_version() {
        let matrix = QrMatrixSource
            .encode("HELLO", EcLevel::H, None)
            .unwrap();
        assert_eq!(matrix.width(), 21);
        assert_eq!(matrix.bits().len(), 21 * 21);
    }

    #[test]
    fn oversized_payload_fails() {
        let payload = "a".repeat(3000);
        let err = QrMatrixSource
            .encode(&payload, EcLevel::H, None)
            .unwrap_err();
        assert!(matches!(err, Error::Encoding(_)));
    }

    #[test]
    fn non_square_bits_rejected() {
        let err = ModuleMatrix::from_bits(vec![false; 20]).unwrap_err();
        assert!(matches!(err, Error::Encoding(_)));
    }

    #[test]
    fn finder_corner_is_dark() {
        let matrix = QrMatrixSource
            .encode("HELLO", EcLevel::H, None)
            .unwrap();
        // Finder pattern corners are dark in every QR symbol.
        assert!(matrix.get(0, 0));
        assert!(matrix.get(matrix.width() - 1, 0));
        assert!(matrix.get(0, matrix.width() - 1));
    }
}
