use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ScrollError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ScrollError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(
        ScrollError::missing_dependency("viewport")
            .to_string()
            .contains("missing dependency: viewport")
    );
    assert_eq!(
        ScrollError::NoElements.to_string(),
        "no elements to arrange"
    );
}

#[test]
fn index_out_of_range_names_both_bounds() {
    let msg = ScrollError::IndexOutOfRange { index: 7, len: 3 }.to_string();
    assert!(msg.contains('7'));
    assert!(msg.contains('3'));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ScrollError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
