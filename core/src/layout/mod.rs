//! Layout engine: logo exclusion geometry and finder-pattern stripping.
//!
//! Works on a mutable copy of the module matrix. The three finder
//! ("eye") regions are always cleared from the generic dot pass and
//! handed back as index sets so the renderer can draw them as dedicated
//! shapes; readers expect crisp finder geometry even under heavy dot
//! styling.

use crate::logo::LogoProfile;
use crate::matrix::ModuleMatrix;
use crate::style::StyleConfig;

/// Side length of a finder pattern in modules.
const FINDER_SPAN: usize = 7;
/// Side length of the finder core in modules.
const CORE_SPAN: usize = 3;
/// Offset of the core within the finder pattern.
const CORE_INSET: usize = 2;

/// The three fixed finder-pattern positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EyeCorner {
    TopLeft,
    TopRight,
    BottomLeft,
}

impl EyeCorner {
    pub const ALL: [EyeCorner; 3] = [EyeCorner::TopLeft, EyeCorner::TopRight, EyeCorner::BottomLeft];

    /// Top-left module of this finder pattern. Positions are fixed by
    /// the QR standard, never detected from content.
    pub fn origin(&self, width: usize) -> (usize, usize) {
        match self {
            EyeCorner::TopLeft => (0, 0),
            EyeCorner::TopRight => (width - FINDER_SPAN, 0),
            EyeCorner::BottomLeft => (0, width - FINDER_SPAN),
        }
    }
}

/// Absolute module indices of one finder pattern, split into the 7x7
/// frame ring and the 3x3 core.
#[derive(Debug, Clone)]
pub struct EyeRegion {
    pub corner: EyeCorner,
    pub outer: Vec<usize>,
    pub inner: Vec<usize>,
}

/// Centered logo exclusion rectangle, as half extents in modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExclusionRect {
    pub half_width: usize,
    pub half_height: usize,
}

/// Result of laying out one matrix: the cleared working copy plus the
/// geometry the renderer needs.
#[derive(Debug, Clone)]
pub struct LayoutResult {
    pub matrix: ModuleMatrix,
    pub exclusion: Option<ExclusionRect>,
    pub eyes: [EyeRegion; 3],
}

/// Compute the logo exclusion rectangle for a matrix width and logo
/// aspect ratio.
///
/// The longer logo axis is bounded by the tiered area; the shorter axis
/// shrinks proportionally so a wide or tall logo does not eat modules
/// it cannot use. Half extents are clamped to the matrix center so the
/// clearing loops can never leave the grid.
pub fn exclusion_rect(width: usize, aspect_ratio: f64, style: &StyleConfig) -> ExclusionRect {
    let base = (width as f64 * style.logo_area_tiers.factor(width)).round();
    let area = (base * style.logo_area_scale).round();

    let half_width = if aspect_ratio > 1.0 {
        area
    } else {
        (area * aspect_ratio).round()
    };
    let half_height = if aspect_ratio < 1.0 {
        area
    } else {
        (area / aspect_ratio).round()
    };

    let center = width / 2;
    ExclusionRect {
        half_width: (half_width as usize).min(center),
        half_height: (half_height as usize).min(center),
    }
}

/// Compute the three eye regions for a matrix width. Purely formulaic;
/// the matrix contents are irrelevant.
pub fn eye_regions(width: usize) -> [EyeRegion; 3] {
    EyeCorner::ALL.map(|corner| {
        let (ox, oy) = corner.origin(width);
        let mut outer = Vec::with_capacity(FINDER_SPAN * 4 - 4);
        let mut inner = Vec::with_capacity(CORE_SPAN * CORE_SPAN);

        for dy in 0..FINDER_SPAN {
            for dx in 0..FINDER_SPAN {
                let on_ring =
                    dx == 0 || dy == 0 || dx == FINDER_SPAN - 1 || dy == FINDER_SPAN - 1;
                let in_core = (CORE_INSET..CORE_INSET + CORE_SPAN).contains(&dx)
                    && (CORE_INSET..CORE_INSET + CORE_SPAN).contains(&dy);
                let index = (oy + dy) * width + (ox + dx);
                if on_ring {
                    outer.push(index);
                } else if in_core {
                    inner.push(index);
                }
            }
        }

        EyeRegion { corner, outer, inner }
    })
}

/// Lay out a matrix: clear the logo exclusion zone (when a profile is
/// present) and strip the eye regions from the dot grid.
pub fn layout(
    matrix: &ModuleMatrix,
    profile: Option<&LogoProfile>,
    style: &StyleConfig,
) -> LayoutResult {
    let width = matrix.width();
    let mut cleared = matrix.clone();

    // Space is reserved whenever a logo is resolved, whether or not the
    // final render draws a visible shape there.
    let exclusion = profile.map(|p| exclusion_rect(width, p.aspect_ratio(), style));
    if let Some(rect) = exclusion {
        let center = width / 2;
        for y in center - rect.half_height..=center + rect.half_height {
            for x in center - rect.half_width..=center + rect.half_width {
                cleared.set(x, y, false);
            }
        }
        tracing::debug!(
            half_width = rect.half_width,
            half_height = rect.half_height,
            "cleared logo exclusion zone"
        );
    }

    let eyes = eye_regions(width);
    for eye in &eyes {
        for &index in eye.outer.iter().chain(eye.inner.iter()) {
            cleared.clear_index(index);
        }
    }

    LayoutResult {
        matrix: cleared,
        exclusion,
        eyes,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::matrix::{MatrixSource, ModuleMatrix, QrMatrixSource};
    use crate::style::EcLevel;

    fn hello_matrix() -> ModuleMatrix {
        QrMatrixSource.encode("HELLO", EcLevel::H, None).unwrap()
    }

    fn profile_with_ratio(width: f64, height: f64) -> LogoProfile {
        let markup = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}"><rect width="{width}" height="{height}"/></svg>"#
        );
        LogoProfile::from_markup("logo.svg", markup).unwrap()
    }

    #[test]
    fn eye_sets_disjoint_and_contained() {
        for width in [21usize, 25, 57] {
            let regions = eye_regions(width);
            let mut seen = HashSet::new();

            for region in &regions {
                assert_eq!(region.outer.len(), 24);
                assert_eq!(region.inner.len(), 9);

                for &index in region.outer.iter().chain(region.inner.iter()) {
                    assert!(index < width * width);
                    assert!(seen.insert(index), "index {index} appears in two sets");
                }

                // Every core module sits inside the frame's 7x7 footprint.
                let (ox, oy) = region.corner.origin(width);
                for &index in &region.inner {
                    let x = index % width;
                    let y = index / width;
                    assert!((ox..ox + 7).contains(&x));
                    assert!((oy..oy + 7).contains(&y));
                }
            }
        }
    }

    #[test]
    fn eyes_always_cleared() {
        let matrix = hello_matrix();
        let result = layout(&matrix, None, &StyleConfig::default());

        for eye in &result.eyes {
            for &index in eye.outer.iter().chain(eye.inner.iter()) {
                assert!(!result.matrix.bits()[index]);
            }
        }
        // The source matrix is untouched.
        assert!(matrix.get(0, 0));
    }

    #[test]
    fn exclusion_matches_tier_table() {
        // width 21, ratio 2.0: base round(21 * 0.15) = 3, so half
        // extents (3, round(3 / 2)) = (3, 2).
        let style = StyleConfig::default();
        let rect = exclusion_rect(21, 2.0, &style);
        assert_eq!(rect, ExclusionRect { half_width: 3, half_height: 2 });

        let square = exclusion_rect(21, 1.0, &style);
        assert_eq!(square, ExclusionRect { half_width: 3, half_height: 3 });
    }

    #[test]
    fn expanded_tiers_reachable() {
        let style = StyleConfig {
            logo_area_tiers: crate::style::LogoAreaTiers::EXPANDED,
            ..StyleConfig::default()
        };
        let rect = exclusion_rect(21, 1.0, &style);
        // round(21 * 0.16) = 3
        assert_eq!(rect.half_width, 3);
        let rect = exclusion_rect(25, 1.0, &style);
        // round(25 * 0.18) = 5 versus round(25 * 0.16) = 4 balanced
        assert_eq!(rect.half_width, 5);
    }

    #[test]
    fn exclusion_symmetric_under_aspect_inversion() {
        let style = StyleConfig::default();
        for width in [21usize, 29, 57] {
            for ratio in [1.5, 2.0, 3.25] {
                let wide = exclusion_rect(width, ratio, &style);
                let tall = exclusion_rect(width, 1.0 / ratio, &style);
                assert_eq!(wide.half_width, tall.half_height);
                assert_eq!(wide.half_height, tall.half_width);
            }
        }
    }

    #[test]
    fn exclusion_clamped_to_matrix_bounds() {
        let style = StyleConfig {
            logo_area_scale: 100.0,
            ..StyleConfig::default()
        };
        let rect = exclusion_rect(21, 1.0, &style);
        assert_eq!(rect.half_width, 10);
        assert_eq!(rect.half_height, 10);

        // Clearing with the clamped rect must not panic.
        let matrix = hello_matrix();
        let profile = profile_with_ratio(80.0, 80.0);
        let result = layout(&matrix, Some(&profile), &style);
        assert!(result.matrix.dark_count() < matrix.dark_count());
    }

    #[test]
    fn exclusion_zone_fully_cleared() {
        let matrix = hello_matrix();
        let profile = profile_with_ratio(100.0, 50.0);
        let style = StyleConfig::default();
        let result = layout(&matrix, Some(&profile), &style);

        let rect = result.exclusion.unwrap();
        let center = matrix.width() / 2;
        for y in center - rect.half_height..=center + rect.half_height {
            for x in center - rect.half_width..=center + rect.half_width {
                assert!(!result.matrix.get(x, y));
            }
        }
    }

    #[test]
    fn no_profile_means_no_exclusion() {
        let result = layout(&hello_matrix(), None, &StyleConfig::default());
        assert!(result.exclusion.is_none());
    }
}
