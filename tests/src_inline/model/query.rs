use super::*;

#[test]
fn valid_query_exposes_fields() {
    let query = PanelQuery::new(137, "Hereditary haemorrhagic telangiectasia", 3)
        .expect("valid query");
    assert_eq!(query.id(), 137);
    assert_eq!(query.name(), "Hereditary haemorrhagic telangiectasia");
    assert_eq!(query.confidence_level(), 3);
}

#[test]
fn all_valid_confidence_levels_accepted() {
    for level in 1..=3u8 {
        assert!(PanelQuery::new(1, "Intellectual disability", level).is_ok());
    }
}

#[test]
fn out_of_range_confidence_level_rejected() {
    for level in [0u8, 4, 200] {
        let err = PanelQuery::new(1, "Intellectual disability", level).unwrap_err();
        assert!(matches!(
            err,
            FormatError::ConfidenceLevelOutOfRange(got) if got == level
        ));
    }
}
