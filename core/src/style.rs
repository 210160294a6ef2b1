//! Style configuration for a render: dot, eye, logo, and canvas knobs.

use serde::{Deserialize, Serialize};

/// QR error-correction level.
///
/// Defaults to `H`: eye and logo regions are always overdrawn, so the
/// symbol needs maximal redundancy headroom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EcLevel {
    L,
    M,
    Q,
    #[default]
    H,
}

impl From<EcLevel> for qrcode::EcLevel {
    fn from(level: EcLevel) -> Self {
        match level {
            EcLevel::L => qrcode::EcLevel::L,
            EcLevel::M => qrcode::EcLevel::M,
            EcLevel::Q => qrcode::EcLevel::Q,
            EcLevel::H => qrcode::EcLevel::H,
        }
    }
}

/// How the logical canvas size is derived from the matrix width.
///
/// `PerModule` keeps every module on an integer-sized cell, avoiding
/// anti-aliasing seams between adjacent dots. `Fixed` reproduces the
/// historical fixed-viewport behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanvasSizing {
    /// Canvas is `width * n` logical units.
    PerModule(u32),
    /// Canvas is exactly `n` logical units regardless of matrix width.
    Fixed(u32),
}

impl CanvasSizing {
    pub fn logical_size(&self, width: usize) -> f64 {
        match self {
            CanvasSizing::PerModule(cell) => (width as u32 * cell) as f64,
            CanvasSizing::Fixed(size) => *size as f64,
        }
    }
}

impl Default for CanvasSizing {
    fn default() -> Self {
        CanvasSizing::PerModule(32)
    }
}

/// Logo exclusion-area factors, tiered by matrix width.
///
/// Larger symbols carry more error-correction redundancy, so the logo
/// may claim a proportionally bigger share of the grid. Thresholds sit
/// at widths 21 and 50.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogoAreaTiers {
    pub small: f64,
    pub medium: f64,
    pub large: f64,
}

impl LogoAreaTiers {
    /// Conservative table, leaves the most modules intact.
    pub const BALANCED: Self = Self {
        small: 0.15,
        medium: 0.16,
        large: 0.18,
    };

    /// Roomier table for logos that need extra clearance.
    pub const EXPANDED: Self = Self {
        small: 0.16,
        medium: 0.18,
        large: 0.20,
    };

    /// Area factor for a given matrix width.
    pub fn factor(&self, width: usize) -> f64 {
        if width <= 21 {
            self.small
        } else if width <= 50 {
            self.medium
        } else {
            self.large
        }
    }
}

impl Default for LogoAreaTiers {
    fn default() -> Self {
        Self::BALANCED
    }
}

/// Immutable per-render style knobs. All fields have defaults; radius
/// fractions are expected in `[0, 1]` but out-of-range values pass
/// through and simply produce odd-looking geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Error-correction level handed to the matrix encoder.
    pub error_correction: EcLevel,
    /// Mask-pattern override in `0..=7`, if the encoder supports one.
    pub mask_pattern: Option<u8>,
    /// Dot corner-radius fraction: 0 square, (0, 1) rounded, >= 1 circle.
    pub dot_radius: f64,
    /// Per-dot shrink factor about the dot center.
    pub dot_scale: f64,
    pub dot_color: String,
    /// Outer eye frame corner-radius fraction.
    pub outer_eye_radius: f64,
    pub outer_eye_color: String,
    /// Inner eye core corner-radius fraction.
    pub inner_eye_radius: f64,
    pub inner_eye_color: String,
    /// Multiplier on the safe-fit logo scale; > 1 deliberately
    /// overflows the cleared area.
    pub logo_scale: f64,
    /// Multiplier on the tiered exclusion area.
    pub logo_area_scale: f64,
    /// Full-canvas background fill, if any.
    pub background: Option<String>,
    pub canvas: CanvasSizing,
    pub logo_area_tiers: LogoAreaTiers,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            error_correction: EcLevel::H,
            mask_pattern: None,
            dot_radius: 0.0,
            dot_scale: 1.0,
            dot_color: "black".to_string(),
            outer_eye_radius: 0.0,
            outer_eye_color: "black".to_string(),
            inner_eye_radius: 0.0,
            inner_eye_color: "black".to_string(),
            logo_scale: 1.0,
            logo_area_scale: 1.0,
            background: None,
            canvas: CanvasSizing::default(),
            logo_area_tiers: LogoAreaTiers::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_thresholds() {
        let tiers = LogoAreaTiers::BALANCED;
        assert_eq!(tiers.factor(21), 0.15);
        assert_eq!(tiers.factor(25), 0.16);
        assert_eq!(tiers.factor(50), 0.16);
        assert_eq!(tiers.factor(57), 0.18);
    }

    #[test]
    fn canvas_sizing() {
        assert_eq!(CanvasSizing::PerModule(32).logical_size(21), 672.0);
        assert_eq!(CanvasSizing::Fixed(1024).logical_size(21), 1024.0);
    }

    #[test]
    fn style_deserializes_with_partial_fields() {
        let style: StyleConfig =
            serde_json::from_str(r##"{"dot_radius": 0.5, "dot_color": "#102030"}"##).unwrap();
        assert_eq!(style.dot_radius, 0.5);
        assert_eq!(style.dot_color, "#102030");
        assert_eq!(style.error_correction, EcLevel::H);
        assert_eq!(style.logo_scale, 1.0);
    }
}
