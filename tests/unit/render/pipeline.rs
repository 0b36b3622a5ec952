use super::*;

const TWO_TEAMS: &str = r#"[
  {
    "type": {"id": 30, "name": "Pass"},
    "team": {"id": 217, "name": "Barcelona"},
    "location": [40.0, 30.0],
    "pass": {"end_location": [60.0, 35.0]}
  },
  {
    "type": {"id": 30, "name": "Pass"},
    "team": {"id": 206, "name": "Deportivo Alavés"},
    "location": [80.0, 50.0],
    "pass": {"end_location": [70.0, 45.0]}
  }
]"#;

fn events() -> MatchEvents {
    MatchEvents::from_reader(TWO_TEAMS.as_bytes()).unwrap()
}

#[test]
fn derived_title_names_the_opponent() {
    assert_eq!(
        derive_title(&events(), "Barcelona"),
        "Barcelona passes versus Deportivo Alavés"
    );
    assert_eq!(
        derive_title(&events(), "Deportivo Alavés"),
        "Deportivo Alavés passes versus Barcelona"
    );
}

#[test]
fn derived_title_without_an_opponent_drops_the_versus() {
    let solo = r#"[
      {
        "type": {"id": 30, "name": "Pass"},
        "team": {"id": 217, "name": "Barcelona"},
        "location": [40.0, 30.0],
        "pass": {"end_location": [60.0, 35.0]}
      }
    ]"#;
    let events = MatchEvents::from_reader(solo.as_bytes()).unwrap();
    assert_eq!(derive_title(&events, "Barcelona"), "Barcelona passes");
}

#[test]
fn plan_has_strokes_and_no_labels_without_annotations() {
    let theme = GlowTheme::default();
    let opts = RenderOpts::default();
    let plan = plan_pass_map(&events(), "Barcelona", &theme, &opts).unwrap();
    assert!(!plan.strokes.is_empty());
    assert!(plan.labels.is_empty());
    assert_eq!(plan.canvas.width, 1280);
    assert_eq!(plan.canvas.height, 960);
}

#[test]
fn unknown_team_fails_before_planning() {
    let theme = GlowTheme::default();
    let opts = RenderOpts::default();
    let err = plan_pass_map(&events(), "Juventus", &theme, &opts).unwrap_err();
    assert!(matches!(err, GlowError::UnknownTeam { .. }));
}

#[test]
fn missing_font_file_fails_the_plan() {
    let theme = GlowTheme::default();
    let opts = RenderOpts {
        annotations: Some(AnnotationRequest::new("does/not/exist.ttf")),
        ..RenderOpts::default()
    };
    let err = plan_pass_map(&events(), "Barcelona", &theme, &opts).unwrap_err();
    assert!(matches!(err, GlowError::Data(_)));
}

#[test]
fn renders_a_small_frame_end_to_end() {
    let theme = GlowTheme::default();
    let opts = RenderOpts {
        canvas: Canvas {
            width: 160,
            height: 120,
        },
        ..RenderOpts::default()
    };
    let frame = render_pass_map(&events(), "Barcelona", &theme, &opts).unwrap();
    assert_eq!(frame.width, 160);
    assert_eq!(frame.height, 120);
    assert_eq!(frame.data.len(), 160 * 120 * 4);
}

#[test]
fn write_png_creates_parents_and_a_decodable_file() {
    let theme = GlowTheme::default();
    let opts = RenderOpts {
        canvas: Canvas {
            width: 64,
            height: 48,
        },
        ..RenderOpts::default()
    };
    let frame = render_pass_map(&events(), "Barcelona", &theme, &opts).unwrap();

    let dir = std::env::temp_dir().join(format!("pitchglow-test-{}", std::process::id()));
    let path = dir.join("nested").join("map.png");
    write_png(&frame, &path).unwrap();

    let img = image::open(&path).unwrap();
    assert_eq!(img.width(), 64);
    assert_eq!(img.height(), 48);

    std::fs::remove_dir_all(&dir).ok();
}
