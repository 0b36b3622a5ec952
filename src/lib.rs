//! Pitchglow renders neon "glow" soccer pass maps on the CPU.
//!
//! Given StatsBomb-style match event JSON, the crate filters one team's
//! completed passes and draws them as directional comet lines over a pitch
//! diagram, with the glow simulated by layered translucent re-draws.
//!
//! # Pipeline overview
//!
//! 1. **Load**: `MatchEvents` from an event JSON file.
//! 2. **Filter**: `completed_passes` selects one team's completed passes.
//! 3. **Plan**: `build_plan` turns markings + passes + theme into an ordered
//!    list of flat-alpha stroke ops (one crisp base layer, then N widening
//!    glow layers whose alpha is the theme budget divided by N).
//! 4. **Render**: `CpuRenderer` rasterizes the plan into a premultiplied
//!    RGBA8 frame.
//! 5. **Export**: `write_png` persists the frame.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: planning is pure and rendering the same plan twice
//!   yields byte-identical frames.
//! - **No IO in renderers**: event and font IO is front-loaded; the plan and
//!   render stages only compute.
//! - **Loud failures**: an unknown team or an empty pass selection is a
//!   named error, never a silently empty drawing.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod events;
mod foundation;
mod pitch;
mod render;
mod style;

pub use events::filter::{PassSegment, completed_passes};
pub use events::model::{MatchEvent, MatchEvents};
pub use foundation::core::{Affine, BezPath, Canvas, Line, Point, Rect, Rgba8, Vec2};
pub use foundation::error::{GlowError, GlowResult};
pub use pitch::markings::{PitchMarkings, PitchSpec, Spot};
pub use render::annotate::{AnnotationStyle, build_labels};
pub use render::cpu::{CpuRenderer, FrameRGBA};
pub use render::figure::{FigureLayout, GridSpec};
pub use render::pipeline::{
    AnnotationRequest, RenderOpts, plan_pass_map, render_pass_map, write_png,
};
pub use render::plan::{
    COMET_SEGMENTS, CapStyle, FramePlan, LabelOp, StrokeKind, StrokeOp, build_plan,
};
pub use render::text::{PreparedFont, TextBrushRgba8, TextLayoutEngine};
pub use style::color::Color;
pub use style::theme::GlowTheme;
