//! Fixed-layout PDF rendering of a trip report.
//!
//! One page, drawn imperatively with absolute coordinates from a
//! [`Layout`].  The render either produces the complete document or
//! fails without output; missing image assets are the only thing that
//! may be silently left out.

use std::io::BufWriter;

use image::{DynamicImage, GenericImageView};
use printpdf::{
    BuiltinFont, Color, ColorBits, ColorSpace, Image, ImageXObject, IndirectFontRef, Line, Mm,
    PdfDocument, PdfLayerReference, Point, Px, Rgb,
};

use crate::assets::{AssetLibrary, ReportAsset};
use crate::error::{ReportError, Result};
use crate::format;
use crate::layout::{ImageBox, Layout, RgbColor};
use crate::metrics::DerivedMetrics;
use crate::model::TripRecord;

const PT_PER_INCH: f64 = 72.0;
const MM_PER_INCH: f64 = 25.4;
const IMAGE_DPI: f64 = 300.0;

const FOOTER_LINES: [&str; 3] = [
    "Mangaf - Block 4 - St 201 - Parcel 5410 - Mall 18 - Floor 1 M - Shop 3",
    "Tel: +965660716969 / +96598888955",
    "Email: Hemam@Hemam.green",
];

fn pt(value: f64) -> Mm {
    Mm(value * MM_PER_INCH / PT_PER_INCH)
}

fn backend<E: std::fmt::Display>(err: E) -> ReportError {
    ReportError::Render(err.to_string())
}

/// A finished report, ready to be offered for download.
#[derive(Clone, Debug)]
pub struct RenderedReport {
    /// The PDF document.
    pub bytes: Vec<u8>,
    /// Download name derived from the print date, see [`format::report_file_name`].
    pub file_name: String,
}

/// Renders trip records into single-page PDF reports.
pub struct ReportRenderer {
    layout: Layout,
    assets: AssetLibrary,
}

impl ReportRenderer {
    /// Creates a renderer with the [`Layout::standard`] preset.
    pub fn new(assets: AssetLibrary) -> Self {
        Self {
            layout: Layout::default(),
            assets,
        }
    }

    /// Replaces the layout preset.
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Renders `trip` into a PDF.
    ///
    /// Requires a positive net weight; trips that do not describe a
    /// billable mass are refused with [`ReportError::Validation`] and no
    /// bytes are produced.
    pub fn render(&self, trip: &TripRecord) -> Result<RenderedReport> {
        let metrics = DerivedMetrics::for_trip(trip);
        if metrics.net_weight <= 0.0 {
            return Err(ReportError::Validation {
                net_weight: metrics.net_weight,
            });
        }

        let layout = &self.layout;
        let (doc, page, layer) = PdfDocument::new(
            "Trip Report",
            pt(layout.page_width),
            pt(layout.page_height),
            "report",
        );
        let layer = doc.get_page(page).get_layer(layer);
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(backend)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(backend)?;

        self.draw_header(&layer);
        self.draw_title(&layer, &bold);
        self.draw_info_table(&layer, &regular, trip, &metrics);
        self.draw_impact_section(&layer, &bold, &metrics);
        self.draw_footer(&layer, &regular);

        let mut writer = BufWriter::new(Vec::new());
        doc.save(&mut writer).map_err(backend)?;
        let bytes = writer.into_inner().map_err(backend)?;
        Ok(RenderedReport {
            bytes,
            file_name: format::report_file_name(trip.print_date),
        })
    }

    fn draw_header(&self, layer: &PdfLayerReference) {
        if let Some(logo) = self.assets.load(ReportAsset::Logo) {
            place_image(layer, &logo, &self.layout.logo_box, RgbColor::WHITE);
        }
        if let Some(arabic) = self.assets.load(ReportAsset::ArabicText) {
            place_image(layer, &arabic, &self.layout.arabic_box, RgbColor::WHITE);
        }
    }

    fn draw_title(&self, layer: &PdfLayerReference, bold: &IndirectFontRef) {
        let layout = &self.layout;
        set_fill(layer, RgbColor::BLACK);
        draw_centered(
            layer,
            bold,
            layout.title_size,
            layout.page_width / 2.0,
            layout.title_y,
            &layout.title,
        );
    }

    fn draw_info_table(
        &self,
        layer: &PdfLayerReference,
        regular: &IndirectFontRef,
        trip: &TripRecord,
        metrics: &DerivedMetrics,
    ) {
        let layout = &self.layout;
        let rows: [[(&str, String); 2]; 5] = [
            [
                ("PRINT DATE", trip.print_date.format("%d/%m/%Y").to_string()),
                ("PRINT TIME", trip.print_time.clone()),
            ],
            [
                ("TICKET NO.", trip.ticket_no.clone()),
                ("VEHICLE NO.", trip.vehicle_no.clone()),
            ],
            [
                ("CUSTOMER", trip.customer.to_string()),
                ("MATERIAL", trip.material.to_string()),
            ],
            [
                ("GROSS WEIGHT (ton)", format::tons(trip.gross_weight)),
                ("TARE WEIGHT (ton)", format::tons(trip.tare_weight)),
            ],
            [
                ("FLOAT GLASS (ton)", metrics.float_glass_display.clone()),
                ("NET WEIGHT (ton)", format::tons(metrics.net_weight)),
            ],
        ];

        set_fill(layer, RgbColor::BLACK);
        let mut y = layout.info_top_y;
        for row in rows {
            for (column, (label, value)) in row.into_iter().enumerate() {
                layer.use_text(
                    label,
                    layout.info_size,
                    pt(layout.info_label_x[column]),
                    pt(y),
                    regular,
                );
                layer.use_text(
                    format!(": {value}"),
                    layout.info_size,
                    pt(layout.info_value_x[column]),
                    pt(y),
                    regular,
                );
            }
            y -= layout.info_row_step;
        }
    }

    fn draw_impact_section(
        &self,
        layer: &PdfLayerReference,
        bold: &IndirectFontRef,
        metrics: &DerivedMetrics,
    ) {
        let layout = &self.layout;
        let center_x = layout.page_width / 2.0;

        // The section flows on below the last info row.
        let info_bottom = layout.info_top_y - 4.0 * layout.info_row_step;
        let heading_y = info_bottom - layout.impact_heading_gap;
        let subheading_y = heading_y - layout.impact_subheading_gap;
        let table_top = subheading_y - layout.impact_table_gap;

        set_fill(layer, RgbColor::BLACK);
        draw_centered(
            layer,
            bold,
            layout.impact_heading_size,
            center_x,
            heading_y,
            "Impact calculation",
        );
        draw_centered(
            layer,
            bold,
            layout.impact_subheading_size,
            center_x,
            subheading_y,
            &format!("{:.2} tons of Recycled Glass Saves:", metrics.net_weight),
        );

        let table_x = (layout.page_width - layout.impact_table_width) / 2.0;
        let table_height = layout.impact_row_height * 4.0;
        set_fill(layer, layout.impact_fill);
        fill_rect(
            layer,
            table_x,
            table_top - table_height,
            layout.impact_table_width,
            table_height,
        );

        layer.set_outline_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
        layer.set_outline_thickness(1.0);
        for divider in 1..4 {
            let y = table_top - layout.impact_row_height * divider as f64;
            stroke_line(layer, table_x, y, table_x + layout.impact_table_width, y);
        }

        let rows: [(ReportAsset, &str, String); 4] = [
            (
                ReportAsset::Water,
                "Water",
                format!("{} Liter", format::grouped(metrics.water_liters)),
            ),
            (
                ReportAsset::Co2,
                "CO2 Emissions",
                format!("{} kg", format::grouped(metrics.co2_kg)),
            ),
            (
                ReportAsset::Energy,
                "Energy",
                format!("{} kWh", format::grouped(metrics.energy_kwh)),
            ),
            (
                ReportAsset::Landfill,
                "Landfill",
                // Builtin Helvetica is WinAnsi-encoded, so the unit stays ASCII.
                format!("{} M3", format::cubic_meters(metrics.landfill_volume)),
            ),
        ];

        set_fill(layer, RgbColor::WHITE);
        for (index, (asset, label, value)) in rows.into_iter().enumerate() {
            let row_top = table_top - layout.impact_row_height * index as f64;
            if let Some(icon) = self.assets.load(asset) {
                let slot = ImageBox::new(
                    table_x + layout.impact_icon_inset,
                    row_top - layout.impact_icon_drop,
                    layout.impact_icon_size,
                    layout.impact_icon_size,
                );
                place_image(layer, &icon, &slot, layout.impact_fill);
            }

            let baseline = row_top - layout.impact_text_drop;
            layer.use_text(
                label,
                layout.impact_text_size,
                pt(table_x + layout.impact_label_offset),
                pt(baseline),
                bold,
            );
            draw_right_aligned(
                layer,
                bold,
                layout.impact_text_size,
                table_x + layout.impact_table_width - layout.impact_value_inset,
                baseline,
                &value,
            );
        }
    }

    fn draw_footer(&self, layer: &PdfLayerReference, regular: &IndirectFontRef) {
        let layout = &self.layout;
        set_fill(layer, layout.footer_color);
        for (line, y) in FOOTER_LINES.iter().zip(layout.footer_ys) {
            draw_centered(
                layer,
                regular,
                layout.footer_size,
                layout.page_width / 2.0,
                y,
                line,
            );
        }
    }
}

fn set_fill(layer: &PdfLayerReference, color: RgbColor) {
    layer.set_fill_color(Color::Rgb(Rgb::new(color.r, color.g, color.b, None)));
}

fn fill_rect(layer: &PdfLayerReference, x: f64, y: f64, width: f64, height: f64) {
    let corners = vec![
        (Point::new(pt(x), pt(y)), false),
        (Point::new(pt(x + width), pt(y)), false),
        (Point::new(pt(x + width), pt(y + height)), false),
        (Point::new(pt(x), pt(y + height)), false),
    ];
    layer.add_shape(Line {
        points: corners,
        is_closed: true,
        has_fill: true,
        has_stroke: false,
        is_clipping_path: false,
    });
}

fn stroke_line(layer: &PdfLayerReference, x1: f64, y1: f64, x2: f64, y2: f64) {
    layer.add_shape(Line {
        points: vec![
            (Point::new(pt(x1), pt(y1)), false),
            (Point::new(pt(x2), pt(y2)), false),
        ],
        is_closed: false,
        has_fill: false,
        has_stroke: true,
        is_clipping_path: false,
    });
}

fn draw_centered(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    size: f64,
    center_x: f64,
    y: f64,
    text: &str,
) {
    let x = center_x - text_width(text, size) / 2.0;
    layer.use_text(text, size, pt(x), pt(y), font);
}

fn draw_right_aligned(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    size: f64,
    right_x: f64,
    y: f64,
    text: &str,
) {
    let x = right_x - text_width(text, size);
    layer.use_text(text, size, pt(x), pt(y), font);
}

// Rough Helvetica-family advances in em.  Centring short headings and
// right-aligning the impact values does not need exact metrics.
fn char_advance(c: char) -> f64 {
    match c {
        ' ' | 'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '\'' | '|' => 0.28,
        'f' | 't' | 'r' | 'I' | '(' | ')' | '[' | ']' | '/' | '-' => 0.34,
        'm' | 'w' | 'M' | 'W' | '@' => 0.89,
        '0'..='9' => 0.556,
        'A'..='Z' | '+' => 0.70,
        _ => 0.52,
    }
}

fn text_width(text: &str, font_size: f64) -> f64 {
    text.chars().map(char_advance).sum::<f64>() * font_size
}

/// Fits `image` into `slot` preserving the aspect ratio, centred in the
/// box, with any alpha flattened onto `backdrop`.
fn place_image(
    layer: &PdfLayerReference,
    image: &DynamicImage,
    slot: &ImageBox,
    backdrop: RgbColor,
) {
    let (px_width, px_height) = image.dimensions();
    if px_width == 0 || px_height == 0 {
        return;
    }

    let natural_width = px_width as f64 / IMAGE_DPI * PT_PER_INCH;
    let natural_height = px_height as f64 / IMAGE_DPI * PT_PER_INCH;
    let scale = (slot.width / natural_width).min(slot.height / natural_height);
    let drawn_width = natural_width * scale;
    let drawn_height = natural_height * scale;
    let x = slot.x + (slot.width - drawn_width) / 2.0;
    let y = slot.y + (slot.height - drawn_height) / 2.0;

    let xobject = ImageXObject {
        width: Px(px_width as usize),
        height: Px(px_height as usize),
        color_space: ColorSpace::Rgb,
        bits_per_component: ColorBits::Bit8,
        interpolate: true,
        image_data: flatten_onto(image, backdrop),
        image_filter: None,
        clipping_bbox: None,
    };
    Image::from(xobject).add_to_layer(
        layer.clone(),
        Some(pt(x)),
        Some(pt(y)),
        None,
        Some(scale),
        Some(scale),
        Some(IMAGE_DPI),
    );
}

// The backend embeds plain RGB, so transparent pixels are blended onto
// the colour they will sit on (white page or the impact-table green).
fn flatten_onto(image: &DynamicImage, backdrop: RgbColor) -> Vec<u8> {
    let rgba = image.to_rgba8();
    let mut data = Vec::with_capacity(rgba.width() as usize * rgba.height() as usize * 3);
    let background = [backdrop.r, backdrop.g, backdrop.b];

    for pixel in rgba.pixels() {
        let [r, g, b, a] = pixel.0;
        let alpha = a as f64 / 255.0;
        for (channel, bg) in [r, g, b].into_iter().zip(background) {
            let mixed = channel as f64 * alpha + bg * 255.0 * (1.0 - alpha);
            data.push(mixed.round().clamp(0.0, 255.0) as u8);
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wider_strings_measure_wider() {
        assert!(text_width("NET WEIGHT", 11.0) > text_width("NET", 11.0));
        assert!(text_width("1,703 Liter", 12.0) > text_width("15 kg", 12.0));
        assert_eq!(text_width("", 12.0), 0.0);
    }

    #[test]
    fn advance_scales_with_font_size() {
        let narrow = text_width("TRIP REPORT", 11.0);
        let wide = text_width("TRIP REPORT", 22.0);
        assert!((wide - narrow * 2.0).abs() < 1e-9);
    }

    #[test]
    fn flattening_blends_alpha_onto_the_backdrop() {
        let pixel = image::Rgba([255u8, 0, 0, 128]);
        let buffer = image::RgbaImage::from_pixel(1, 1, pixel);
        let image = DynamicImage::ImageRgba8(buffer);

        let data = flatten_onto(&image, RgbColor::WHITE);
        assert_eq!(data.len(), 3);
        // Half-transparent red over white: red stays saturated, the other
        // channels pick up roughly half the backdrop.
        assert!(data[0] > 250);
        assert!((data[1] as i32 - 127).abs() <= 2);
        assert!((data[2] as i32 - 127).abs() <= 2);
    }

    #[test]
    fn opaque_pixels_pass_through() {
        let buffer = image::RgbaImage::from_pixel(2, 1, image::Rgba([10u8, 200, 60, 255]));
        let image = DynamicImage::ImageRgba8(buffer);
        let data = flatten_onto(&image, RgbColor::new(0.24, 0.64, 0.27));
        assert_eq!(data, vec![10, 200, 60, 10, 200, 60]);
    }
}
