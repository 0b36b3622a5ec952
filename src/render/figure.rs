use crate::foundation::core::{Affine, Canvas, Rect, Vec2};
use crate::foundation::error::{GlowError, GlowResult};
use crate::pitch::markings::PitchSpec;

/// Vertical split of the canvas into title, pitch and endnote bands.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GridSpec {
    /// Title band height as a fraction of the canvas height.
    pub title_height: f64,
    /// Pitch band height as a fraction of the canvas height.
    pub grid_height: f64,
    /// Endnote band height as a fraction of the canvas height.
    pub endnote_height: f64,
    /// Extra pitch units kept visible around the field on every side.
    pub pad_units: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            title_height: 0.06,
            grid_height: 0.9,
            endnote_height: 0.04,
            pad_units: 4.0,
        }
    }
}

/// Resolved figure layout: named canvas regions plus the pitch-units to
/// pixels transform.
///
/// The layout is computed once per render and read-only afterwards; two
/// renders never share one.
#[derive(Clone, Copy, Debug)]
pub struct FigureLayout {
    /// Full canvas.
    pub canvas: Canvas,
    /// Title band at the top of the canvas.
    pub title_band: Rect,
    /// Band the pitch is drawn into.
    pub pitch_band: Rect,
    /// Endnote band at the bottom of the canvas.
    pub endnote_band: Rect,
    /// Maps pitch units to canvas pixels (uniform scale, aspect preserved).
    pub pitch_to_px: Affine,
    /// Pixels per pitch unit of `pitch_to_px`.
    pub px_per_unit: f64,
}

impl FigureLayout {
    /// Split `canvas` per `grid` and fit the padded pitch into the middle
    /// band, centered, preserving aspect ratio.
    pub fn new(canvas: Canvas, pitch: &PitchSpec, grid: &GridSpec) -> GlowResult<Self> {
        canvas.validate()?;
        for (name, frac) in [
            ("title_height", grid.title_height),
            ("grid_height", grid.grid_height),
            ("endnote_height", grid.endnote_height),
        ] {
            if !frac.is_finite() || frac < 0.0 {
                return Err(GlowError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        if grid.title_height + grid.grid_height + grid.endnote_height > 1.0 + 1e-9 {
            return Err(GlowError::validation("grid fractions must sum to <= 1"));
        }

        let w = f64::from(canvas.width);
        let h = f64::from(canvas.height);
        let title_h = h * grid.title_height;
        let pitch_h = h * grid.grid_height;
        let endnote_h = h * grid.endnote_height;

        let title_band = Rect::new(0.0, 0.0, w, title_h);
        let pitch_band = Rect::new(0.0, title_h, w, title_h + pitch_h);
        let endnote_band = Rect::new(0.0, h - endnote_h, w, h);

        let extent = pitch.visible_rect().inflate(grid.pad_units, grid.pad_units);
        if extent.width() <= 0.0 || extent.height() <= 0.0 || pitch_band.height() <= 0.0 {
            return Err(GlowError::validation("pitch area is degenerate"));
        }

        let scale = (pitch_band.width() / extent.width())
            .min(pitch_band.height() / extent.height());
        let band_center = pitch_band.center();
        let extent_center = extent.center();
        let pitch_to_px = Affine::translate(Vec2::new(band_center.x, band_center.y))
            * Affine::scale(scale)
            * Affine::translate(Vec2::new(-extent_center.x, -extent_center.y));

        Ok(Self {
            canvas,
            title_band,
            pitch_band,
            endnote_band,
            pitch_to_px,
            px_per_unit: scale,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/figure.rs"]
mod tests;
