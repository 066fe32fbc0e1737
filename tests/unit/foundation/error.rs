use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        KeepsakeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        KeepsakeError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        KeepsakeError::layout("x")
            .to_string()
            .contains("layout error:")
    );
    assert!(
        KeepsakeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(
        KeepsakeError::render("x")
            .to_string()
            .contains("render error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = KeepsakeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: KeepsakeError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, KeepsakeError::Serde(_)));
}
