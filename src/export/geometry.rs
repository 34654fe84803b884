//! Page geometry for paginated document export.

/// Millimetres per inch.
const MM_PER_INCH: f64 = 25.4;

/// CSS pixels per inch.
const CSS_DPI: f64 = 96.0;

/// Upper bound on pages produced for one document.
pub const MAX_PAGES: usize = 1_000;

/// Physical page layout used when a rendered resume is split into pages.
///
/// Lengths are in millimetres. `scale` is the raster scale the rendered
/// HTML was captured at, so pixel heights reported by a rasterizer are
/// `scale` times larger than CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub page_width_mm: f64,
    pub page_height_mm: f64,
    pub margin_mm: f64,
    pub scale: f64,
}

impl PageGeometry {
    /// A4 portrait with 10 mm margins, captured at scale 2.
    pub fn a4() -> Self {
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_mm: 10.0,
            scale: 2.0,
        }
    }

    pub fn with_margin(mut self, margin_mm: f64) -> Self {
        self.margin_mm = margin_mm;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Printable width inside the margins.
    pub fn content_width_mm(&self) -> f64 {
        self.page_width_mm - 2.0 * self.margin_mm
    }

    /// Printable height inside the margins.
    pub fn content_height_mm(&self) -> f64 {
        self.page_height_mm - 2.0 * self.margin_mm
    }

    /// Convert raster pixels to millimetres.
    pub fn px_to_mm(&self, px: f64) -> f64 {
        px * MM_PER_INCH / (CSS_DPI * self.scale)
    }

    /// Raster pixels that fit on one page.
    pub fn page_height_px(&self) -> f64 {
        self.content_height_mm() / MM_PER_INCH * CSS_DPI * self.scale
    }

    /// Pages needed for content `content_height_px` raster pixels tall.
    /// Always between one and [`MAX_PAGES`].
    pub fn page_count(&self, content_height_px: f64) -> usize {
        let pages = (self.px_to_mm(content_height_px) / self.content_height_mm()).ceil();
        if pages.is_finite() && pages >= 1.0 {
            pages.min(MAX_PAGES as f64) as usize
        } else if pages == f64::INFINITY {
            MAX_PAGES
        } else {
            1
        }
    }

    /// Vertical raster slices, one `(offset_px, height_px)` per page.
    ///
    /// The last slice holds the remainder.
    pub fn page_slices(&self, content_height_px: f64) -> Vec<(f64, f64)> {
        let page_px = self.page_height_px();
        (0..self.page_count(content_height_px))
            .map(|page| {
                let offset = page as f64 * page_px;
                let height = page_px.min((content_height_px - offset).max(0.0));
                (offset, height)
            })
            .collect()
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_a4_content_box() {
        let geometry = PageGeometry::default();
        assert!(close(geometry.content_width_mm(), 190.0));
        assert!(close(geometry.content_height_mm(), 277.0));
    }

    #[test]
    fn test_px_to_mm() {
        let geometry = PageGeometry::a4();
        // 192 raster px at scale 2 is one inch
        assert!(close(geometry.px_to_mm(192.0), 25.4));
        assert!(close(geometry.with_scale(1.0).px_to_mm(96.0), 25.4));
    }

    #[test]
    fn test_page_count() {
        let geometry = PageGeometry::a4();
        let page_px = geometry.page_height_px();

        assert_eq!(geometry.page_count(0.0), 1);
        assert_eq!(geometry.page_count(page_px * 0.5), 1);
        assert_eq!(geometry.page_count(page_px - 1.0), 1);
        assert_eq!(geometry.page_count(page_px * 2.0 + 1.0), 3);
    }

    #[test]
    fn test_page_count_is_capped() {
        let geometry = PageGeometry::a4();
        assert_eq!(geometry.page_count(1e300), MAX_PAGES);
        assert_eq!(geometry.page_count(f64::INFINITY), MAX_PAGES);
        assert_eq!(geometry.page_count(f64::NAN), 1);
        assert_eq!(geometry.page_count(-5.0), 1);

        let slices = geometry.page_slices(1e300);
        assert_eq!(slices.len(), MAX_PAGES);
        assert!(close(slices[0].1, geometry.page_height_px()));
    }

    #[test]
    fn test_page_slices() {
        let geometry = PageGeometry::a4();
        let page_px = geometry.page_height_px();
        let slices = geometry.page_slices(page_px * 1.5);

        assert_eq!(slices.len(), 2);
        assert!(close(slices[0].0, 0.0));
        assert!(close(slices[0].1, page_px));
        assert!(close(slices[1].0, page_px));
        assert!(close(slices[1].1, page_px * 0.5));
    }
}
