use super::*;
use crate::foundation::core::Point;

fn canvas(w: u32, h: u32) -> Canvas {
    Canvas {
        width: w,
        height: h,
    }
}

#[test]
fn bands_split_the_canvas_top_to_bottom() {
    let fig = FigureLayout::new(canvas(1000, 1000), &PitchSpec::default(), &GridSpec::default())
        .unwrap();
    assert_eq!(fig.title_band, Rect::new(0.0, 0.0, 1000.0, 60.0));
    assert_eq!(fig.pitch_band, Rect::new(0.0, 60.0, 1000.0, 960.0));
    assert_eq!(fig.endnote_band, Rect::new(0.0, 960.0, 1000.0, 1000.0));
}

#[test]
fn pitch_fits_centered_and_aspect_preserved() {
    let fig = FigureLayout::new(canvas(1280, 960), &PitchSpec::default(), &GridSpec::default())
        .unwrap();

    // The padded extent is 132 x 88 units; this canvas is width-bound.
    let band_w = fig.pitch_band.width();
    assert!((fig.px_per_unit - band_w / 132.0).abs() < 1e-9);

    // The pitch center maps to the band center.
    let center = fig.pitch_to_px * Point::new(60.0, 40.0);
    assert!((center.x - fig.pitch_band.center().x).abs() < 1e-9);
    assert!((center.y - fig.pitch_band.center().y).abs() < 1e-9);

    // Uniform scale in both axes.
    let dx = fig.pitch_to_px * Point::new(61.0, 40.0) - center;
    let dy = fig.pitch_to_px * Point::new(60.0, 41.0) - center;
    assert!((dx.x - fig.px_per_unit).abs() < 1e-9);
    assert!((dy.y - fig.px_per_unit).abs() < 1e-9);
    // y is not flipped: StatsBomb's origin is already top-left.
    assert!(dy.y > 0.0);
}

#[test]
fn corners_stay_inside_the_pitch_band() {
    let fig = FigureLayout::new(canvas(640, 480), &PitchSpec::default(), &GridSpec::default())
        .unwrap();
    for p in [
        Point::new(-2.0, 0.0),
        Point::new(122.0, 0.0),
        Point::new(122.0, 80.0),
        Point::new(-2.0, 80.0),
    ] {
        let px = fig.pitch_to_px * p;
        assert!(fig.pitch_band.contains(px), "{p:?} mapped outside band");
    }
}

#[test]
fn rejects_bad_grids_and_canvases() {
    let pitch = PitchSpec::default();
    assert!(FigureLayout::new(canvas(0, 100), &pitch, &GridSpec::default()).is_err());

    let grid = GridSpec {
        title_height: 0.5,
        grid_height: 0.6,
        ..GridSpec::default()
    };
    assert!(FigureLayout::new(canvas(100, 100), &pitch, &grid).is_err());

    let grid = GridSpec {
        grid_height: -0.1,
        ..GridSpec::default()
    };
    assert!(FigureLayout::new(canvas(100, 100), &pitch, &grid).is_err());
}
