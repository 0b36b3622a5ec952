use crate::foundation::core::{Canvas, Point, Rgba8};
use crate::foundation::error::{GlowError, GlowResult};
use crate::render::plan::{CapStyle, FramePlan, LabelOp, StrokeOp};

/// Tolerance for stroke-outline expansion, in pixels.
const STROKE_TOLERANCE: f64 = 0.1;

/// A rendered frame as RGBA8 pixels.
///
/// Frames are **premultiplied alpha**; the `premultiplied` flag makes this
/// explicit at API boundaries.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

/// CPU renderer powered by `vello_cpu`.
///
/// The render context is recreated when the canvas size changes and reset
/// between renders; the output pixmap is always fresh, so two renders of the
/// same plan produce byte-identical frames.
pub struct CpuRenderer {
    ctx: Option<vello_cpu::RenderContext>,
}

impl Default for CpuRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuRenderer {
    /// Construct a renderer with no allocated surface.
    pub fn new() -> Self {
        Self { ctx: None }
    }

    /// Execute a plan into a fresh frame.
    pub fn render(&mut self, plan: &FramePlan) -> GlowResult<FrameRGBA> {
        plan.canvas.validate()?;
        let (width, height) = canvas_u16(plan.canvas)?;

        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();

        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        let bg = plan.background.to_rgba8();
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(bg.r, bg.g, bg.b, bg.a));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(plan.canvas.width),
            f64::from(plan.canvas.height),
        ));

        for op in &plan.strokes {
            draw_stroke(&mut ctx, op);
        }
        for label in &plan.labels {
            draw_label(&mut ctx, label);
        }

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.render_to_pixmap(&mut pixmap);
        self.ctx = Some(ctx);

        Ok(FrameRGBA {
            width: plan.canvas.width,
            height: plan.canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn canvas_u16(canvas: Canvas) -> GlowResult<(u16, u16)> {
    let w: u16 = canvas
        .width
        .try_into()
        .map_err(|_| GlowError::render("canvas width exceeds u16"))?;
    let h: u16 = canvas
        .height
        .try_into()
        .map_err(|_| GlowError::render("canvas height exceeds u16"))?;
    Ok((w, h))
}

fn draw_stroke(ctx: &mut vello_cpu::RenderContext, op: &StrokeOp) {
    // `vello_cpu` is only ever asked to fill: the stroke, with its per-op cap
    // styles, is expanded to a fill outline with kurbo first.
    let style = kurbo::Stroke::new(op.width)
        .with_start_cap(cap_to_kurbo(op.start_cap))
        .with_end_cap(cap_to_kurbo(op.end_cap))
        .with_join(kurbo::Join::Round);
    let outline = kurbo::stroke(
        op.path.elements().iter().copied(),
        &style,
        &kurbo::StrokeOpts::default(),
        STROKE_TOLERANCE,
    );

    let c = op.color.with_alpha_mul(op.alpha).to_rgba8();
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
    ctx.fill_path(&bezpath_to_cpu(&outline));
}

fn draw_label(ctx: &mut vello_cpu::RenderContext, label: &LabelOp) {
    // Legibility outline: the glyphs are filled eight times around the label
    // position in the outline color before the centered fill pass.
    let w = label.outline_width;
    let d = w * std::f64::consts::FRAC_1_SQRT_2;
    let offsets = [
        (w, 0.0),
        (-w, 0.0),
        (0.0, w),
        (0.0, -w),
        (d, d),
        (d, -d),
        (-d, d),
        (-d, -d),
    ];
    for (dx, dy) in offsets {
        fill_glyphs_at(
            ctx,
            label,
            Point::new(label.origin.x + dx, label.origin.y + dy),
            label.outline,
        );
    }
    fill_glyphs_at(ctx, label, label.origin, label.fill);
}

fn fill_glyphs_at(
    ctx: &mut vello_cpu::RenderContext,
    label: &LabelOp,
    origin: Point,
    color: Rgba8,
) {
    ctx.set_transform(vello_cpu::kurbo::Affine::translate(
        vello_cpu::kurbo::Vec2::new(origin.x, origin.y),
    ));
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        color.r, color.g, color.b, color.a,
    ));
    for line in label.layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(&label.font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
}

fn cap_to_kurbo(cap: CapStyle) -> kurbo::Cap {
    match cap {
        CapStyle::Butt => kurbo::Cap::Butt,
        CapStyle::Round => kurbo::Cap::Round,
    }
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
