use crate::foundation::core::Point;
use crate::foundation::error::GlowResult;
use crate::render::figure::FigureLayout;
use crate::render::plan::LabelOp;
use crate::render::text::{PreparedFont, TextBrushRgba8, TextLayoutEngine};
use crate::style::color::Color;

/// Styling for the title and credit labels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnnotationStyle {
    /// Title font size in pixels.
    pub title_size_px: f32,
    /// Credit font size in pixels.
    pub credit_size_px: f32,
    /// Text fill color. `None` uses the theme's pitch line color.
    pub color: Option<Color>,
    /// Outline color drawn behind the fill for legibility.
    pub outline_color: Color,
    /// Outline thickness in pixels.
    pub outline_width: f64,
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self {
            title_size_px: 30.0,
            credit_size_px: 20.0,
            color: None,
            outline_color: Color::rgba(0.0, 0.0, 0.0, 1.0),
            outline_width: 3.0,
        }
    }
}

/// Build the title and credit labels.
///
/// The title is centered in the title band; the credit is right-aligned in
/// the endnote band. Either may be absent.
pub fn build_labels(
    engine: &mut TextLayoutEngine,
    font: &PreparedFont,
    title: Option<&str>,
    credit: Option<&str>,
    style: &AnnotationStyle,
    fill: Color,
    fig: &FigureLayout,
) -> GlowResult<Vec<LabelOp>> {
    let fill8 = fill.to_rgba8();
    let brush = TextBrushRgba8 {
        r: fill8.r,
        g: fill8.g,
        b: fill8.b,
        a: fill8.a,
    };

    let mut labels = Vec::new();

    if let Some(text) = title.filter(|t| !t.is_empty()) {
        let layout = engine.layout_plain(text, font.bytes(), style.title_size_px, brush)?;
        let origin = Point::new(
            fig.title_band.center().x - f64::from(layout.width()) / 2.0,
            fig.title_band.center().y - f64::from(layout.height()) / 2.0,
        );
        labels.push(LabelOp {
            layout,
            font: font.font_data().clone(),
            origin,
            fill: fill8,
            outline: style.outline_color.to_rgba8(),
            outline_width: style.outline_width,
        });
    }

    if let Some(text) = credit.filter(|t| !t.is_empty()) {
        let layout = engine.layout_plain(text, font.bytes(), style.credit_size_px, brush)?;
        let origin = Point::new(
            fig.endnote_band.x1 - f64::from(layout.width()),
            fig.endnote_band.center().y - f64::from(layout.height()) / 2.0,
        );
        labels.push(LabelOp {
            layout,
            font: font.font_data().clone(),
            origin,
            fill: fill8,
            outline: style.outline_color.to_rgba8(),
            outline_width: style.outline_width,
        });
    }

    Ok(labels)
}
