use super::*;

use crate::content::PRICING_TIERS;

#[test]
fn popular_tier_uses_white_button() {
    assert_eq!(tier_button_variant(true), ButtonVariant::White);
    assert_eq!(tier_button_variant(false), ButtonVariant::Soft);
}

#[test]
fn tier_class_marks_popular() {
    assert_eq!(tier_class(true), "tier tier--popular");
    assert_eq!(tier_class(false), "tier");
}

#[test]
fn excluded_feature_is_struck_regardless_of_tier() {
    let line = FeatureLine::parse("Личный разбор блога (нет)");
    assert_eq!(feature_class(&line, true), "tier__feature-text tier__feature-text--excluded");
    assert_eq!(feature_class(&line, false), "tier__feature-text tier__feature-text--excluded");
}

#[test]
fn included_feature_class_depends_on_popularity() {
    let line = FeatureLine::parse("Закрытый чат");
    assert_eq!(feature_class(&line, true), "tier__feature-text tier__feature-text--popular");
    assert_eq!(feature_class(&line, false), "tier__feature-text");
}

#[test]
fn spots_label_only_when_present() {
    let with_spots = PRICING_TIERS.iter().find(|t| t.spots.is_some()).copied();
    let without_spots = PRICING_TIERS.iter().find(|t| t.spots.is_none()).copied();

    let tier = with_spots.expect("a tier with limited spots");
    assert_eq!(spots_label(&tier), Some(format!("Мест: {}", tier.spots.unwrap_or_default())));
    assert_eq!(spots_label(&without_spots.expect("a tier without spots")), None);
}
