use super::*;

#[test]
fn group_digits_leaves_short_numbers_alone() {
    assert_eq!(group_digits(0), "0");
    assert_eq!(group_digits(990), "990");
}

#[test]
fn group_digits_inserts_nbsp_every_three() {
    assert_eq!(group_digits(1000), "1\u{a0}000");
    assert_eq!(group_digits(24_900), "24\u{a0}900");
    assert_eq!(group_digits(149_000), "149\u{a0}000");
    assert_eq!(group_digits(1_234_567), "1\u{a0}234\u{a0}567");
}

#[test]
fn feature_line_without_marker_is_included() {
    let line = FeatureLine::parse("Доступ к 13 GPT-ассистентам");
    assert!(line.included);
    assert_eq!(line.text, "Доступ к 13 GPT-ассистентам");
}

#[test]
fn feature_line_with_marker_is_excluded_and_stripped() {
    let line = FeatureLine::parse("Личный разбор блога (нет)");
    assert!(!line.included);
    assert_eq!(line.text, "Личный разбор блога");
}
