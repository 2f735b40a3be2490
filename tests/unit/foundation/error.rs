use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(MazeError::config("x").to_string().contains("config error:"));
    assert!(MazeError::render("x").to_string().contains("render error:"));
    assert!(MazeError::encode("x").to_string().contains("encode error:"));
    assert!(
        MazeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = MazeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
