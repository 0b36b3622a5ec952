use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GlowError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(GlowError::data("x").to_string().contains("event data error:"));
    assert!(GlowError::render("x").to_string().contains("render error:"));
    assert!(
        GlowError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn selection_errors_name_the_team() {
    let err = GlowError::UnknownTeam {
        team: "Arsenal".to_owned(),
        available: vec!["Barcelona".to_owned(), "Deportivo Alavés".to_owned()],
    };
    let msg = err.to_string();
    assert!(msg.contains("Arsenal"));
    assert!(msg.contains("Barcelona"));

    let err = GlowError::EmptySelection {
        team: "Barcelona".to_owned(),
    };
    assert!(err.to_string().contains("no completed passes"));
    assert!(err.to_string().contains("Barcelona"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GlowError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
