use air_forecast::aqi::AqiCategory;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(0.0, "Good")]
#[case(12.0, "Good")]
#[case(12.1, "Moderate")]
#[case(35.4, "Moderate")]
#[case(35.5, "Unhealthy for Sensitive Groups")]
#[case(55.4, "Unhealthy for Sensitive Groups")]
#[case(55.5, "Unhealthy")]
#[case(150.4, "Unhealthy")]
#[case(150.5, "Very Unhealthy")]
#[case(250.4, "Very Unhealthy")]
#[case(250.5, "Hazardous")]
#[case(400.0, "Hazardous")]
fn test_breakpoints_fall_on_the_lower_category_side(#[case] pm25: f64, #[case] expected: &str) {
    assert_eq!(AqiCategory::from_pm25(pm25).label(), expected);
}

#[test]
fn test_categories_are_ordered_by_severity() {
    assert!(AqiCategory::Good < AqiCategory::Moderate);
    assert!(AqiCategory::Moderate < AqiCategory::UnhealthyForSensitiveGroups);
    assert!(AqiCategory::UnhealthyForSensitiveGroups < AqiCategory::Unhealthy);
    assert!(AqiCategory::Unhealthy < AqiCategory::VeryUnhealthy);
    assert!(AqiCategory::VeryUnhealthy < AqiCategory::Hazardous);
}

#[test]
fn test_display_matches_label() {
    let category = AqiCategory::from_pm25(150.0);
    assert_eq!(format!("{}", category), "Unhealthy");
}

#[test]
fn test_every_category_has_an_advisory() {
    let categories = [
        AqiCategory::Good,
        AqiCategory::Moderate,
        AqiCategory::UnhealthyForSensitiveGroups,
        AqiCategory::Unhealthy,
        AqiCategory::VeryUnhealthy,
        AqiCategory::Hazardous,
    ];

    for category in categories {
        assert!(!category.advisory().is_empty());
    }
}
