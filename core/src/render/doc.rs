//! Minimal deterministic SVG document builder.
//!
//! Emits rect/circle/path/group primitives with fill, class, and
//! transform attributes. Output is plain text so it can be handed to
//! any downstream adapter as an opaque, self-contained document.

use std::fmt::Write;

/// Format a coordinate without trailing noise so repeated renders are
/// byte-identical.
pub(crate) fn fmt_num(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        let mut s = format!("{value:.4}");
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
        s
    }
}

/// Path data for a rounded rectangle built from line and arc segments.
pub(crate) fn rounded_rect_path(x: f64, y: f64, width: f64, height: f64, radius: f64) -> String {
    let r = fmt_num(radius);
    format!(
        "M {},{} L {},{} A {r},{r} 0 0 1 {},{} L {},{} A {r},{r} 0 0 1 {},{} L {},{} A {r},{r} 0 0 1 {},{} L {},{} A {r},{r} 0 0 1 {},{} Z",
        fmt_num(x + radius),
        fmt_num(y),
        fmt_num(x + width - radius),
        fmt_num(y),
        fmt_num(x + width),
        fmt_num(y + radius),
        fmt_num(x + width),
        fmt_num(y + height - radius),
        fmt_num(x + width - radius),
        fmt_num(y + height),
        fmt_num(x + radius),
        fmt_num(y + height),
        fmt_num(x),
        fmt_num(y + height - radius),
        fmt_num(x),
        fmt_num(y + radius),
        fmt_num(x + radius),
        fmt_num(y),
    )
}

/// Square SVG document under construction.
pub struct VectorDoc {
    size: f64,
    body: String,
}

impl VectorDoc {
    pub fn new(size: f64) -> Self {
        Self {
            size,
            body: String::new(),
        }
    }

    /// Full-canvas background fill.
    pub fn background(&mut self, fill: &str) {
        let _ = writeln!(
            self.body,
            "  <rect width=\"100%\" height=\"100%\" fill=\"{fill}\"/>"
        );
    }

    /// Rectangle, optionally with rounded corners.
    pub fn rect(&mut self, class: &str, x: f64, y: f64, width: f64, height: f64, rx: f64, fill: &str) {
        let corners = if rx > 0.0 {
            format!(" rx=\"{}\"", fmt_num(rx))
        } else {
            String::new()
        };
        let _ = writeln!(
            self.body,
            "  <rect class=\"{class}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{corners} fill=\"{fill}\"/>",
            fmt_num(x),
            fmt_num(y),
            fmt_num(width),
            fmt_num(height),
        );
    }

    pub fn circle(&mut self, class: &str, cx: f64, cy: f64, r: f64, fill: &str) {
        let _ = writeln!(
            self.body,
            "  <circle class=\"{class}\" cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{fill}\"/>",
            fmt_num(cx),
            fmt_num(cy),
            fmt_num(r),
        );
    }

    /// Path with an optional even-odd fill rule for cutout shapes.
    pub fn path(&mut self, class: &str, data: &str, fill: &str, even_odd: bool) {
        let rule = if even_odd {
            " fill-rule=\"evenodd\""
        } else {
            ""
        };
        let _ = writeln!(
            self.body,
            "  <path class=\"{class}\" d=\"{data}\" fill=\"{fill}\"{rule}/>"
        );
    }

    /// Nested translate/scale groups around verbatim child markup, so
    /// the child's internal geometry is left untouched.
    pub fn placed_group(&mut self, class: &str, x: f64, y: f64, scale: f64, markup: &str) {
        let _ = writeln!(
            self.body,
            "  <g class=\"{class}\" transform=\"translate({},{})\"><g transform=\"scale({})\">{markup}</g></g>",
            fmt_num(x),
            fmt_num(y),
            fmt_num(scale),
        );
    }

    pub fn finish(self) -> String {
        let size = fmt_num(self.size);
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\">\n{}</svg>\n",
            self.body
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_format_without_noise() {
        assert_eq!(fmt_num(32.0), "32");
        assert_eq!(fmt_num(2.24), "2.24");
        assert_eq!(fmt_num(48.761904761904766), "48.7619");
        assert_eq!(fmt_num(0.5), "0.5");
    }

    #[test]
    fn document_is_self_contained() {
        let mut doc = VectorDoc::new(672.0);
        doc.background("white");
        doc.rect("dot", 0.0, 0.0, 32.0, 32.0, 8.0, "black");
        let svg = doc.finish();

        assert!(svg.starts_with("<?xml version=\"1.0\""));
        assert!(svg.contains("viewBox=\"0 0 672 672\""));
        assert!(svg.contains("rx=\"8\""));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn zero_radius_rect_has_no_rx() {
        let mut doc = VectorDoc::new(100.0);
        doc.rect("dot", 0.0, 0.0, 10.0, 10.0, 0.0, "black");
        assert!(!doc.finish().contains("rx="));
    }

    #[test]
    fn rounded_rect_path_closes() {
        let d = rounded_rect_path(0.0, 0.0, 224.0, 224.0, 16.0);
        assert!(d.starts_with("M 16,0"));
        assert!(d.ends_with("Z"));
        assert_eq!(d.matches("A ").count(), 4);
    }
}
