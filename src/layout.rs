//! Layout constants for the rendered report.
//!
//! Everything here is presentational: coordinates, font sizes, spacing
//! and colours, all in PDF points with the origin at the bottom-left of
//! the page.  Two presets cover the two report styles in circulation;
//! callers can also build their own [`Layout`] value.

/// A4 portrait, points.
pub const A4_WIDTH_PT: f64 = 595.28;
pub const A4_HEIGHT_PT: f64 = 841.89;

/// Colour with channels in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RgbColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl RgbColor {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: RgbColor = RgbColor::new(1.0, 1.0, 1.0);
    pub const BLACK: RgbColor = RgbColor::new(0.0, 0.0, 0.0);
}

/// Target box for an image, anchored at its bottom-left corner.
///
/// Images are fitted into the box preserving their aspect ratio and
/// centred inside it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ImageBox {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Every coordinate, size and colour the renderer uses.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub page_width: f64,
    pub page_height: f64,

    /// Branding images at the top of the page; each is skipped when the
    /// asset is missing.
    pub logo_box: ImageBox,
    pub arabic_box: ImageBox,

    pub title: String,
    pub title_size: f64,
    pub title_y: f64,

    /// Baseline of the first info-table row; rows step downwards.
    pub info_top_y: f64,
    pub info_row_step: f64,
    pub info_size: f64,
    /// Label x positions of the left and right columns.
    pub info_label_x: [f64; 2],
    /// Value x positions of the left and right columns.
    pub info_value_x: [f64; 2],

    /// Vertical gaps below the info table: heading, subheading, table top.
    pub impact_heading_gap: f64,
    pub impact_heading_size: f64,
    pub impact_subheading_gap: f64,
    pub impact_subheading_size: f64,
    pub impact_table_gap: f64,

    /// Impact table geometry; the table is centred horizontally.
    pub impact_table_width: f64,
    pub impact_row_height: f64,
    pub impact_fill: RgbColor,
    pub impact_text_size: f64,
    pub impact_icon_size: f64,
    /// Icon left inset and distance from the row top to the icon bottom.
    pub impact_icon_inset: f64,
    pub impact_icon_drop: f64,
    /// Label left offset and text baseline drop from the row top.
    pub impact_label_offset: f64,
    pub impact_text_drop: f64,
    /// Right inset of the value column.
    pub impact_value_inset: f64,

    pub footer_size: f64,
    pub footer_color: RgbColor,
    /// Baselines of the three footer lines, top to bottom.
    pub footer_ys: [f64; 3],
}

impl Layout {
    /// The classic report style: generous spacing, shouted title.
    pub fn standard() -> Self {
        Self {
            page_width: A4_WIDTH_PT,
            page_height: A4_HEIGHT_PT,
            logo_box: ImageBox::new(A4_WIDTH_PT / 2.0 - 106.0, A4_HEIGHT_PT - 120.0, 212.0, 80.0),
            arabic_box: ImageBox::new(A4_WIDTH_PT / 2.0 - 185.0, A4_HEIGHT_PT - 180.0, 370.0, 58.0),
            title: "TRIP REPORT".to_owned(),
            title_size: 22.0,
            title_y: A4_HEIGHT_PT - 220.0,
            info_top_y: A4_HEIGHT_PT - 270.0,
            info_row_step: 20.0,
            info_size: 11.0,
            info_label_x: [50.0, 320.0],
            info_value_x: [170.0, 440.0],
            impact_heading_gap: 50.0,
            impact_heading_size: 20.0,
            impact_subheading_gap: 30.0,
            impact_subheading_size: 14.0,
            impact_table_gap: 50.0,
            impact_table_width: 305.0,
            impact_row_height: 50.0,
            impact_fill: RgbColor::new(0.24, 0.64, 0.27),
            impact_text_size: 12.0,
            impact_icon_size: 30.0,
            impact_icon_inset: 20.0,
            impact_icon_drop: 43.0,
            impact_label_offset: 70.0,
            impact_text_drop: 28.0,
            impact_value_inset: 20.0,
            footer_size: 10.0,
            footer_color: RgbColor::new(0.4, 0.4, 0.4),
            footer_ys: [60.0, 45.0, 30.0],
        }
    }

    /// The tighter style used by the template-driven reports.
    pub fn compact() -> Self {
        Self {
            logo_box: ImageBox::new(A4_WIDTH_PT / 2.0 - 90.0, A4_HEIGHT_PT - 108.0, 180.0, 68.0),
            arabic_box: ImageBox::new(A4_WIDTH_PT / 2.0 - 160.0, A4_HEIGHT_PT - 160.0, 320.0, 48.0),
            title: "Trip Report".to_owned(),
            title_size: 20.0,
            title_y: A4_HEIGHT_PT - 196.0,
            info_top_y: A4_HEIGHT_PT - 240.0,
            info_row_step: 18.0,
            info_size: 10.0,
            impact_heading_gap: 42.0,
            impact_heading_size: 18.0,
            impact_subheading_gap: 26.0,
            impact_subheading_size: 13.0,
            impact_table_gap: 42.0,
            impact_table_width: 290.0,
            impact_row_height: 44.0,
            impact_icon_size: 26.0,
            impact_icon_drop: 38.0,
            impact_label_offset: 62.0,
            impact_text_drop: 26.0,
            footer_ys: [56.0, 43.0, 30.0],
            ..Self::standard()
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_differ_only_in_constants() {
        let standard = Layout::standard();
        let compact = Layout::compact();
        assert_eq!(standard.title, "TRIP REPORT");
        assert_eq!(compact.title, "Trip Report");
        assert!(compact.info_row_step < standard.info_row_step);
        assert!(compact.impact_row_height < standard.impact_row_height);
        assert_eq!(standard.impact_fill, compact.impact_fill);
        assert_eq!(standard.page_height, compact.page_height);
    }

    #[test]
    fn standard_is_the_default() {
        assert_eq!(Layout::default(), Layout::standard());
    }
}
