use super::*;

use std::collections::HashSet;

use crate::state::ui::DEFAULT_OPEN_MODULE;
use crate::util::format::FeatureLine;

#[test]
fn module_ids_are_unique() {
    let ids: HashSet<u32> = PROGRAM_MODULES.iter().map(|m| m.id).collect();
    assert_eq!(ids.len(), PROGRAM_MODULES.len());
}

#[test]
fn default_open_module_exists() {
    assert!(PROGRAM_MODULES.iter().any(|m| m.id == DEFAULT_OPEN_MODULE));
}

#[test]
fn every_module_has_points_and_result() {
    for module in PROGRAM_MODULES {
        assert!(!module.points.is_empty(), "module {} has no points", module.id);
        assert!(!module.result.is_empty(), "module {} has no result", module.id);
    }
}

#[test]
fn pain_point_ids_are_unique() {
    let ids: HashSet<u32> = PAIN_POINTS.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), PAIN_POINTS.len());
}

#[test]
fn at_most_one_popular_tier() {
    assert!(PRICING_TIERS.iter().filter(|t| t.popular).count() <= 1);
}

#[test]
fn tiers_are_discounted() {
    for tier in PRICING_TIERS {
        assert!(tier.price < tier.old_price, "{} is not discounted", tier.name);
    }
}

#[test]
fn every_tier_includes_something() {
    for tier in PRICING_TIERS {
        assert!(tier.features.iter().any(|f| FeatureLine::parse(f).included));
    }
}

#[test]
fn listed_assistants_fit_total() {
    assert!(ASSISTANTS.len() <= ASSISTANTS_TOTAL as usize);
}

#[test]
fn nav_links_target_page_sections() {
    let targets: Vec<&str> = NAV_LINKS.iter().map(|l| l.section_id).collect();
    assert_eq!(targets, vec!["program", "results", "pricing"]);
}

#[test]
fn hero_stats_match_program_length() {
    let program = HERO_STATS.iter().find(|s| s.label == "Программа").map(|s| s.value);
    assert_eq!(program, Some("5 модулей"));
    assert_eq!(PROGRAM_MODULES.len(), 5);
}

#[test]
fn accent_classes_are_distinct() {
    let classes: HashSet<&str> =
        [Accent::Lime, Accent::Pink, Accent::Purple, Accent::Cyan].iter().map(|a| a.class()).collect();
    assert_eq!(classes.len(), 4);
}
