use std::path::{Path, PathBuf};

use crate::events::filter::completed_passes;
use crate::events::model::MatchEvents;
use crate::foundation::core::{Canvas, unpremultiply_rgba8_in_place};
use crate::foundation::error::{GlowError, GlowResult};
use crate::pitch::markings::PitchSpec;
use crate::render::annotate::{AnnotationStyle, build_labels};
use crate::render::cpu::{CpuRenderer, FrameRGBA};
use crate::render::figure::{FigureLayout, GridSpec};
use crate::render::plan::{FramePlan, build_plan};
use crate::render::text::{PreparedFont, TextLayoutEngine};
use crate::style::theme::GlowTheme;

/// Title and credit configuration for one render.
#[derive(Clone, Debug)]
pub struct AnnotationRequest {
    /// TTF/OTF font file the labels are shaped with.
    pub font_path: PathBuf,
    /// Title text. `None` derives `"{team} passes versus {opponent}"`.
    pub title: Option<String>,
    /// Credit text for the endnote band, right-aligned.
    pub credit: Option<String>,
    /// Label styling.
    pub style: AnnotationStyle,
}

impl AnnotationRequest {
    /// Annotations with default styling and a derived title.
    pub fn new(font_path: impl Into<PathBuf>) -> Self {
        Self {
            font_path: font_path.into(),
            title: None,
            credit: None,
            style: AnnotationStyle::default(),
        }
    }
}

/// Per-render options besides the theme.
#[derive(Clone, Debug)]
pub struct RenderOpts {
    /// Output dimensions.
    pub canvas: Canvas,
    /// Pitch dimensions.
    pub pitch: PitchSpec,
    /// Canvas band split.
    pub grid: GridSpec,
    /// Optional title/credit labels. Without a font there is no text.
    pub annotations: Option<AnnotationRequest>,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 1280,
                height: 960,
            },
            pitch: PitchSpec::default(),
            grid: GridSpec::default(),
            annotations: None,
        }
    }
}

/// Build the draw plan for one team's completed passes.
///
/// Exposed separately from [`render_pass_map`] so callers and tests can
/// inspect the plan without rasterizing it.
pub fn plan_pass_map(
    events: &MatchEvents,
    team: &str,
    theme: &GlowTheme,
    opts: &RenderOpts,
) -> GlowResult<FramePlan> {
    theme.validate()?;
    let passes = completed_passes(events, team)?;
    tracing::debug!(team, passes = passes.len(), "filtered completed passes");

    let markings = opts.pitch.markings()?;
    let fig = FigureLayout::new(opts.canvas, &opts.pitch, &opts.grid)?;
    let mut plan = build_plan(&markings, &passes, theme, &fig)?;

    if let Some(ann) = &opts.annotations {
        let font = PreparedFont::from_path(&ann.font_path)?;
        let mut engine = TextLayoutEngine::new();
        let title = match &ann.title {
            Some(t) => t.clone(),
            None => derive_title(events, team),
        };
        let fill = ann.style.color.unwrap_or(theme.line_color);
        plan.labels = build_labels(
            &mut engine,
            &font,
            Some(&title),
            ann.credit.as_deref(),
            &ann.style,
            fill,
            &fig,
        )?;
    }

    Ok(plan)
}

/// Render one team's completed passes as a glow pass map.
///
/// Single-shot and synchronous: filter, plan, rasterize, read back. Every
/// failure is fatal; nothing is retried.
#[tracing::instrument(skip(events, theme, opts))]
pub fn render_pass_map(
    events: &MatchEvents,
    team: &str,
    theme: &GlowTheme,
    opts: &RenderOpts,
) -> GlowResult<FrameRGBA> {
    let plan = plan_pass_map(events, team, theme, opts)?;
    let mut renderer = CpuRenderer::new();
    renderer.render(&plan)
}

/// Title used when none is configured: `"{team} passes versus {opponent}"`.
fn derive_title(events: &MatchEvents, team: &str) -> String {
    match events.team_names().iter().find(|n| n.as_str() != team) {
        Some(opponent) => format!("{team} passes versus {opponent}"),
        None => format!("{team} passes"),
    }
}

/// Write a frame as a PNG file, creating parent directories.
///
/// Premultiplied frames are converted back to straight alpha first.
pub fn write_png(frame: &FrameRGBA, path: impl AsRef<Path>) -> GlowResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            GlowError::render(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }

    let mut data = frame.data.clone();
    if frame.premultiplied {
        unpremultiply_rgba8_in_place(&mut data);
    }
    image::save_buffer_with_format(
        path,
        &data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| GlowError::render(format!("write png '{}': {e}", path.display())))?;
    tracing::info!(path = %path.display(), "wrote png");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
