use crate::events::filter::PassSegment;
use crate::foundation::core::{BezPath, Canvas, Point, Rgba8};
use crate::foundation::error::GlowResult;
use crate::pitch::markings::PitchMarkings;
use crate::render::figure::FigureLayout;
use crate::render::text::TextBrushRgba8;
use crate::style::color::Color;
use crate::style::theme::GlowTheme;
use kurbo::{Circle, Shape};

/// Number of pieces a pass segment is subdivided into for comet tapering.
pub const COMET_SEGMENTS: usize = 24;

/// Width of a comet at its start, as a fraction of the layer width.
const COMET_WIDTH_START: f64 = 0.3;
/// Alpha of a comet at its start, as a fraction of the layer alpha.
const COMET_ALPHA_START: f64 = 0.2;

/// Flattening tolerance for circles emitted by the plan, in pixels.
const SPOT_TOLERANCE: f64 = 0.05;

/// Stroke end-cap policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapStyle {
    /// Cut the stroke off exactly at the endpoint.
    Butt,
    /// Extend a half-disc past the endpoint.
    Round,
}

/// What a stroke op belongs to, for inspection and debugging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokeKind {
    /// Pitch markings (boundary, boxes, circle, spots, goals).
    Pitch,
    /// Pass trajectories.
    Pass,
}

/// One flat-alpha, flat-width stroke in canvas pixels.
#[derive(Clone, Debug)]
pub struct StrokeOp {
    /// Geometry in canvas pixels.
    pub path: BezPath,
    /// Stroke width in pixels.
    pub width: f64,
    /// Stroke color; `alpha` multiplies its alpha at paint time.
    pub color: Color,
    /// Layer alpha in `[0, 1]`.
    pub alpha: f64,
    /// Cap at the start of open subpaths.
    pub start_cap: CapStyle,
    /// Cap at the end of open subpaths.
    pub end_cap: CapStyle,
    /// Which geometry family the op belongs to.
    pub kind: StrokeKind,
    /// Glow layer index; 0 is the crisp base layer.
    pub layer: u32,
}

/// One text label with a stroke-outline legibility effect.
pub struct LabelOp {
    /// Shaped text.
    pub layout: parley::Layout<TextBrushRgba8>,
    /// Font to rasterize glyphs with.
    pub font: vello_cpu::peniko::FontData,
    /// Top-left corner of the layout box, in canvas pixels.
    pub origin: Point,
    /// Fill color of the glyphs.
    pub fill: Rgba8,
    /// Outline color drawn behind the fill.
    pub outline: Rgba8,
    /// Outline thickness in pixels.
    pub outline_width: f64,
}

impl std::fmt::Debug for LabelOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelOp")
            .field("layout_width", &self.layout.width())
            .field("layout_height", &self.layout.height())
            .field("font", &self.font)
            .field("origin", &self.origin)
            .field("fill", &self.fill)
            .field("outline", &self.outline)
            .field("outline_width", &self.outline_width)
            .finish()
    }
}

/// An ordered, backend-agnostic draw plan for one frame.
///
/// Building a plan is pure: the same markings, passes, theme and layout
/// always produce the same plan, which is what makes renders idempotent.
#[derive(Debug)]
pub struct FramePlan {
    /// Output dimensions.
    pub canvas: Canvas,
    /// Background fill.
    pub background: Color,
    /// Strokes in paint order: base layers first, then the glow layers.
    pub strokes: Vec<StrokeOp>,
    /// Labels painted on top of everything.
    pub labels: Vec<LabelOp>,
}

/// Build the glow draw plan.
///
/// The base layer paints pitch markings and pass comets once, opaque, at the
/// theme's base width; the opaque pass stroke is butt-capped so the comet
/// ends exactly at the pass end location. Then `glow_layers` re-draws follow
/// at width `base + step * i` and alpha `budget / glow_layers`, round-capped
/// so the halo extends past the geometry. Splitting the alpha budget across
/// the layers keeps the total deposited alpha independent of the layer
/// count; the count only tunes how smooth and wide the halo is.
pub fn build_plan(
    markings: &PitchMarkings,
    passes: &[PassSegment],
    theme: &GlowTheme,
    fig: &FigureLayout,
) -> GlowResult<FramePlan> {
    theme.validate()?;

    let mut strokes = Vec::new();

    push_pitch_layer(
        &mut strokes,
        markings,
        fig,
        theme.linewidth,
        1.0,
        theme.line_color,
        CapStyle::Butt,
        0,
    );
    push_pass_layer(
        &mut strokes,
        passes,
        fig,
        theme.linewidth,
        1.0,
        theme.pass_color,
        CapStyle::Butt,
        0,
    );

    for i in 1..=theme.glow_layers {
        let width = theme.glow_width(i);
        push_pitch_layer(
            &mut strokes,
            markings,
            fig,
            width,
            theme.pitch_layer_alpha(),
            theme.line_color,
            CapStyle::Round,
            i,
        );
        push_pass_layer(
            &mut strokes,
            passes,
            fig,
            width,
            theme.pass_layer_alpha(),
            theme.pass_color,
            CapStyle::Round,
            i,
        );
    }

    Ok(FramePlan {
        canvas: fig.canvas,
        background: theme.background,
        strokes,
        labels: Vec::new(),
    })
}

#[allow(clippy::too_many_arguments)]
fn push_pitch_layer(
    out: &mut Vec<StrokeOp>,
    markings: &PitchMarkings,
    fig: &FigureLayout,
    width: f64,
    alpha: f64,
    color: Color,
    cap: CapStyle,
    layer: u32,
) {
    for outline in &markings.outlines {
        out.push(StrokeOp {
            path: fig.pitch_to_px * outline.clone(),
            width,
            color,
            alpha,
            start_cap: cap,
            end_cap: cap,
            kind: StrokeKind::Pitch,
            layer,
        });
    }

    // Spots are discs, not lines; drawing them as a fat ring (a circle at
    // half the disc radius, stroked as wide as the radius) covers the full
    // disc while still letting the glow width progression apply.
    for spot in &markings.spots {
        let center = fig.pitch_to_px * spot.center;
        let radius_px = spot.radius * fig.px_per_unit;
        let ring = Circle::new(center, radius_px / 2.0);
        let mut path = BezPath::new();
        for el in ring.path_elements(SPOT_TOLERANCE) {
            path.push(el);
        }
        out.push(StrokeOp {
            path,
            width: radius_px + width,
            color,
            alpha,
            start_cap: cap,
            end_cap: cap,
            kind: StrokeKind::Pitch,
            layer,
        });
    }
}

#[allow(clippy::too_many_arguments)]
fn push_pass_layer(
    out: &mut Vec<StrokeOp>,
    passes: &[PassSegment],
    fig: &FigureLayout,
    width: f64,
    alpha: f64,
    color: Color,
    end_cap: CapStyle,
    layer: u32,
) {
    for pass in passes {
        let start = fig.pitch_to_px * pass.start;
        let end = fig.pitch_to_px * pass.end;
        push_comet(out, start, end, width, alpha, color, end_cap, layer);
    }
}

/// Emit one pass as a comet: subdivided with width and alpha ramping up from
/// the start toward the end point, implying direction without an arrowhead.
///
/// Interior joints are butt-capped so the pieces tile; only the final piece
/// carries the layer's end cap.
#[allow(clippy::too_many_arguments)]
fn push_comet(
    out: &mut Vec<StrokeOp>,
    start: Point,
    end: Point,
    width: f64,
    alpha: f64,
    color: Color,
    end_cap: CapStyle,
    layer: u32,
) {
    let n = COMET_SEGMENTS;
    for k in 0..n {
        let t0 = k as f64 / n as f64;
        let t1 = (k + 1) as f64 / n as f64;
        let p0 = start.lerp(end, t0);
        let p1 = start.lerp(end, t1);

        let ramp = t1;
        let seg_width = width * (COMET_WIDTH_START + (1.0 - COMET_WIDTH_START) * ramp);
        let seg_alpha = alpha * (COMET_ALPHA_START + (1.0 - COMET_ALPHA_START) * ramp);

        let mut path = BezPath::new();
        path.move_to(p0);
        path.line_to(p1);
        out.push(StrokeOp {
            path,
            width: seg_width,
            color,
            alpha: seg_alpha,
            start_cap: CapStyle::Butt,
            end_cap: if k == n - 1 { end_cap } else { CapStyle::Butt },
            kind: StrokeKind::Pass,
            layer,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/plan.rs"]
mod tests;
