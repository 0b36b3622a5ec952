use std::io::Read;
use std::path::Path;

use crate::foundation::error::{GlowError, GlowResult};
use crate::style::color::Color;

/// Style parameters for one rendering.
///
/// A theme is plain data passed into the pipeline; nothing mutates it during
/// rendering, so independent renders with different themes never interfere.
/// Defaults reproduce the cyberpunk look: one crisp stroke under ten widening
/// translucent re-draws.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GlowTheme {
    /// Width of the crisp base stroke, in pixels.
    pub linewidth: f64,
    /// Amount the stroke width grows per glow layer, in pixels.
    pub glow_linewidth_step: f64,
    /// Number of glow layers. More layers smooth and widen the halo without
    /// changing its overall brightness.
    pub glow_layers: u32,
    /// Total alpha budget for pitch-marking glow, spread across the layers.
    pub pitch_line_alpha: f64,
    /// Total alpha budget for pass-line glow. Kept lower than the pitch value
    /// because round-capped comet pieces overlap where passes meet.
    pub pass_line_alpha: f64,
    /// Pitch background fill.
    pub background: Color,
    /// Pitch marking color.
    pub line_color: Color,
    /// Pass line color.
    pub pass_color: Color,
}

impl Default for GlowTheme {
    fn default() -> Self {
        Self {
            linewidth: 1.0,
            glow_linewidth_step: 1.2,
            glow_layers: 10,
            pitch_line_alpha: 0.3,
            pass_line_alpha: 0.15,
            background: Color::rgba(0x21 as f64 / 255.0, 0x29 as f64 / 255.0, 0x46 as f64 / 255.0, 1.0),
            line_color: Color::rgba(0x08 as f64 / 255.0, 0xf7 as f64 / 255.0, 0xfe as f64 / 255.0, 1.0),
            pass_color: Color::rgba(0xfe as f64 / 255.0, 0x53 as f64 / 255.0, 0xbb as f64 / 255.0, 1.0),
        }
    }
}

impl GlowTheme {
    /// Parse a theme from JSON. Unset fields keep their defaults.
    pub fn from_reader(reader: impl Read) -> GlowResult<Self> {
        let theme: Self = serde_json::from_reader(reader)
            .map_err(|e| GlowError::serde(format!("malformed theme json: {e}")))?;
        theme.validate()?;
        Ok(theme)
    }

    /// Parse a theme from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> GlowResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| {
            GlowError::validation(format!("failed to open theme '{}': {e}", path.display()))
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Reject parameter combinations the rasterizer cannot draw.
    pub fn validate(&self) -> GlowResult<()> {
        if !self.linewidth.is_finite() || self.linewidth <= 0.0 {
            return Err(GlowError::validation("linewidth must be finite and > 0"));
        }
        if !self.glow_linewidth_step.is_finite() || self.glow_linewidth_step < 0.0 {
            return Err(GlowError::validation(
                "glow_linewidth_step must be finite and >= 0",
            ));
        }
        if self.glow_layers == 0 {
            return Err(GlowError::validation("glow_layers must be >= 1"));
        }
        for (name, alpha) in [
            ("pitch_line_alpha", self.pitch_line_alpha),
            ("pass_line_alpha", self.pass_line_alpha),
        ] {
            if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
                return Err(GlowError::validation(format!(
                    "{name} must be within [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// Stroke width of glow layer `i` (1-based).
    pub fn glow_width(&self, i: u32) -> f64 {
        self.linewidth + self.glow_linewidth_step * f64::from(i)
    }

    /// Per-layer alpha for pitch-marking glow.
    ///
    /// Dividing the alpha budget by the layer count keeps the perceived glow
    /// brightness independent of `glow_layers`.
    pub fn pitch_layer_alpha(&self) -> f64 {
        self.pitch_line_alpha / f64::from(self.glow_layers)
    }

    /// Per-layer alpha for pass-line glow.
    pub fn pass_layer_alpha(&self) -> f64 {
        self.pass_line_alpha / f64::from(self.glow_layers)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/theme.rs"]
mod tests;
