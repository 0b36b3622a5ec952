use super::*;
use crate::pitch::markings::PitchSpec;
use crate::render::figure::GridSpec;

fn fixture() -> (PitchMarkings, Vec<PassSegment>, FigureLayout) {
    let pitch = PitchSpec::default();
    let markings = pitch.markings().unwrap();
    let passes = vec![
        PassSegment {
            start: Point::new(10.0, 10.0),
            end: Point::new(50.0, 30.0),
        },
        PassSegment {
            start: Point::new(60.0, 40.0),
            end: Point::new(100.0, 70.0),
        },
    ];
    let fig = FigureLayout::new(
        Canvas {
            width: 640,
            height: 480,
        },
        &pitch,
        &GridSpec::default(),
    )
    .unwrap();
    (markings, passes, fig)
}

#[test]
fn op_count_matches_layers_and_geometry() {
    let theme = GlowTheme::default();
    let (markings, passes, fig) = fixture();
    let plan = build_plan(&markings, &passes, &theme, &fig).unwrap();

    let pitch_ops_per_layer = markings.outlines.len() + markings.spots.len();
    let pass_ops_per_layer = passes.len() * COMET_SEGMENTS;
    let layers = 1 + theme.glow_layers as usize;
    assert_eq!(
        plan.strokes.len(),
        layers * (pitch_ops_per_layer + pass_ops_per_layer)
    );
    assert!(plan.labels.is_empty());
    assert_eq!(plan.canvas.width, 640);
}

#[test]
fn glow_layer_alpha_is_budget_over_count() {
    let theme = GlowTheme::default();
    let (markings, passes, fig) = fixture();
    let plan = build_plan(&markings, &passes, &theme, &fig).unwrap();

    for op in plan.strokes.iter().filter(|op| op.layer > 0) {
        match op.kind {
            StrokeKind::Pitch => {
                assert!((op.alpha - theme.pitch_layer_alpha()).abs() < 1e-12);
            }
            StrokeKind::Pass => {
                // Comet pieces taper up to the full layer alpha.
                assert!(op.alpha <= theme.pass_layer_alpha() + 1e-12);
                assert!(op.alpha > 0.0);
            }
        }
    }
}

#[test]
fn glow_widths_increase_strictly_with_layer_index() {
    let theme = GlowTheme::default();
    let (markings, passes, fig) = fixture();
    let plan = build_plan(&markings, &passes, &theme, &fig).unwrap();

    // Track the boundary outline (the first pitch op of every layer).
    let mut widths = Vec::new();
    for layer in 0..=theme.glow_layers {
        let op = plan
            .strokes
            .iter()
            .find(|op| op.kind == StrokeKind::Pitch && op.layer == layer)
            .unwrap();
        widths.push(op.width);
    }
    for pair in widths.windows(2) {
        assert!(pair[1] > pair[0], "widths not strictly increasing: {widths:?}");
    }
    assert!((widths[0] - theme.linewidth).abs() < 1e-12);
    assert!((widths[1] - (theme.linewidth + theme.glow_linewidth_step)).abs() < 1e-12);
}

#[test]
fn cap_contract_base_butt_glow_round() {
    let theme = GlowTheme::default();
    let (markings, passes, fig) = fixture();
    let plan = build_plan(&markings, &passes, &theme, &fig).unwrap();

    for op in &plan.strokes {
        if op.layer == 0 {
            assert_eq!(op.end_cap, CapStyle::Butt);
        }
        // Comet starts are always butt so the pieces tile seamlessly.
        if op.kind == StrokeKind::Pass {
            assert_eq!(op.start_cap, CapStyle::Butt);
        }
    }
}

#[test]
fn comet_final_piece_carries_layer_cap_and_full_ramp() {
    let theme = GlowTheme::default();
    let (markings, passes, fig) = fixture();
    let plan = build_plan(&markings, &passes, &theme, &fig).unwrap();

    for layer in 0..=theme.glow_layers {
        let pieces: Vec<&StrokeOp> = plan
            .strokes
            .iter()
            .filter(|op| op.kind == StrokeKind::Pass && op.layer == layer)
            .collect();
        assert_eq!(pieces.len(), passes.len() * COMET_SEGMENTS);

        let expected_cap = if layer == 0 { CapStyle::Butt } else { CapStyle::Round };
        let expected_alpha = if layer == 0 {
            1.0
        } else {
            theme.pass_layer_alpha()
        };
        for comet in pieces.chunks(COMET_SEGMENTS) {
            let last = comet.last().unwrap();
            assert_eq!(last.end_cap, expected_cap);
            assert!((last.alpha - expected_alpha).abs() < 1e-12);
            for piece in &comet[..COMET_SEGMENTS - 1] {
                assert_eq!(piece.end_cap, CapStyle::Butt);
                assert!(piece.alpha < last.alpha + 1e-12);
            }
            // Width ramps up toward the pass end.
            assert!(comet[0].width < last.width);
        }
    }
}

#[test]
fn base_layers_are_ordered_before_glow_layers() {
    let theme = GlowTheme::default();
    let (markings, passes, fig) = fixture();
    let plan = build_plan(&markings, &passes, &theme, &fig).unwrap();

    let mut last_layer = 0;
    for op in &plan.strokes {
        assert!(op.layer >= last_layer, "layer order regressed");
        last_layer = op.layer;
    }
    assert_eq!(plan.strokes.first().unwrap().layer, 0);
    assert_eq!(plan.strokes.last().unwrap().layer, theme.glow_layers);
}

#[test]
fn invalid_theme_is_rejected() {
    let theme = GlowTheme {
        glow_layers: 0,
        ..GlowTheme::default()
    };
    let (markings, passes, fig) = fixture();
    assert!(build_plan(&markings, &passes, &theme, &fig).is_err());
}
