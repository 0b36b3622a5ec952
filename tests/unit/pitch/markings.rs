use kurbo::Shape;

use super::*;

#[test]
fn statsbomb_dimensions_are_the_default() {
    let spec = PitchSpec::default();
    assert_eq!(spec.field_rect(), Rect::new(0.0, 0.0, 120.0, 80.0));
    let visible = spec.visible_rect();
    assert_eq!(visible.x0, -2.0);
    assert_eq!(visible.x1, 122.0);
}

#[test]
fn markings_cover_every_feature() {
    let m = PitchSpec::default().markings().unwrap();
    // Boundary, halfway line, center circle, 2 penalty areas, 2 six-yard
    // boxes, 2 goals, 2 penalty arcs, 4 corner arcs.
    assert_eq!(m.outlines.len(), 15);
    // Center spot plus two penalty spots.
    assert_eq!(m.spots.len(), 3);
    assert_eq!(m.spots[1].center, Point::new(12.0, 40.0));
    assert_eq!(m.spots[2].center, Point::new(108.0, 40.0));
}

#[test]
fn markings_stay_within_the_padded_extent() {
    let spec = PitchSpec::default();
    let m = spec.markings().unwrap();
    let bounds = spec.visible_rect();
    // Arc flattening may deviate from the true arc by up to the tolerance.
    let slack = 0.05;
    for outline in &m.outlines {
        let bb = outline.bounding_box();
        assert!(bb.x0 >= bounds.x0 - slack, "x0 {} under {}", bb.x0, bounds.x0);
        assert!(bb.x1 <= bounds.x1 + slack);
        assert!(bb.y0 >= bounds.y0 - slack);
        assert!(bb.y1 <= bounds.y1 + slack);
    }
}

#[test]
fn penalty_arcs_stay_outside_the_penalty_area() {
    let spec = PitchSpec::default();
    let m = spec.markings().unwrap();
    // The two penalty arcs are emitted right after the goals: indexes 9, 10.
    let slack = 0.05;
    let left_arc = &m.outlines[9];
    let bb = left_arc.bounding_box();
    assert!(bb.x0 >= spec.penalty_area_depth - slack);
    assert!(bb.x1 <= spec.penalty_spot_dist + spec.circle_radius + slack);

    let right_arc = &m.outlines[10];
    let bb = right_arc.bounding_box();
    assert!(bb.x1 <= spec.length - spec.penalty_area_depth + slack);
}

#[test]
fn degenerate_pitch_is_rejected() {
    let spec = PitchSpec {
        length: 0.0,
        ..PitchSpec::default()
    };
    assert!(spec.markings().is_err());
}
