//! Shape renderer: turns a laid-out matrix into a styled SVG document.

mod doc;

pub use doc::VectorDoc;

use doc::rounded_rect_path;

use crate::layout::LayoutResult;
use crate::logo::LogoProfile;
use crate::style::StyleConfig;

/// Render a laid-out matrix to a self-contained SVG document.
///
/// Assumes a valid layout; the only failure mode here would be upstream
/// (a matrix/profile mismatch), which the pipeline rules out.
pub fn render(layout: &LayoutResult, profile: Option<&LogoProfile>, style: &StyleConfig) -> String {
    let width = layout.matrix.width();
    let canvas = style.canvas.logical_size(width);
    let cell = canvas / width as f64;

    let mut doc = VectorDoc::new(canvas);

    if let Some(background) = &style.background {
        doc.background(background);
    }

    draw_dots(&mut doc, layout, cell, style);
    draw_eyes(&mut doc, canvas, cell, style);

    if let (Some(profile), Some(rect)) = (profile, layout.exclusion) {
        let safe_width = (rect.half_width * 2 + 1) as f64 * cell;
        let safe_height = (rect.half_height * 2 + 1) as f64 * cell;
        draw_logo(&mut doc, canvas, safe_width, safe_height, profile, style);
    }

    doc.finish()
}

fn draw_dots(doc: &mut VectorDoc, layout: &LayoutResult, cell: f64, style: &StyleConfig) {
    let width = layout.matrix.width();
    let side = cell * style.dot_scale;
    let inset = (cell - side) / 2.0;

    for (index, dark) in layout.matrix.bits().iter().enumerate() {
        if !dark {
            continue;
        }
        let x = (index % width) as f64 * cell;
        let y = (index / width) as f64 * cell;

        if style.dot_radius >= 1.0 {
            doc.circle(
                "dot",
                x + cell / 2.0,
                y + cell / 2.0,
                side / 2.0,
                &style.dot_color,
            );
        } else {
            // The radius fraction is a continuous knob; zero is just a
            // plain square.
            let rx = side * 0.5 * style.dot_radius.max(0.0);
            doc.rect("dot", x + inset, y + inset, side, side, rx, &style.dot_color);
        }
    }
}

fn draw_eyes(doc: &mut VectorDoc, canvas: f64, cell: f64, style: &StyleConfig) {
    let outer = cell * 7.0;
    let inner = cell * 3.0;
    let corners = [
        (0.0, 0.0),
        (canvas - outer, 0.0),
        (0.0, canvas - outer),
    ];

    // Outer frames: even-odd union of the frame square and a concentric
    // mask square, leaving a one-module-thick ring. The corner radii
    // scale with the square sizes so the frame reads the same at every
    // symbol size.
    let mask = outer - cell * 2.0;
    for &(x, y) in &corners {
        let data = format!(
            "{} {}",
            rounded_rect_path(x, y, outer, outer, outer * style.outer_eye_radius * 0.5),
            rounded_rect_path(
                x + (outer - mask) / 2.0,
                y + (outer - mask) / 2.0,
                mask,
                mask,
                mask * style.outer_eye_radius * 0.35,
            ),
        );
        doc.path("eye-outer", &data, &style.outer_eye_color, true);
    }

    let offset = (outer - inner) / 2.0;
    for &(x, y) in &corners {
        doc.rect(
            "eye-inner",
            x + offset,
            y + offset,
            inner,
            inner,
            inner * 0.5 * style.inner_eye_radius,
            &style.inner_eye_color,
        );
    }
}

fn draw_logo(
    doc: &mut VectorDoc,
    canvas: f64,
    safe_width: f64,
    safe_height: f64,
    profile: &LogoProfile,
    style: &StyleConfig,
) {
    let fit = (safe_width / profile.intrinsic_width).min(safe_height / profile.intrinsic_height);
    let scale = fit * style.logo_scale;

    let x = canvas / 2.0 - profile.intrinsic_width * 0.5 * scale;
    let y = canvas / 2.0 - profile.intrinsic_height * 0.5 * scale;
    doc.placed_group("logo", x, y, scale, &profile.markup);
}
