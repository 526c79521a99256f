use std::collections::HashSet;

use super::sqlstate::{
    SQLSTATE_CLASSES, SQLSTATE_CODES, lookup_class, lookup_condition, lookup_sqlstate,
};

#[test]
fn registry_has_unique_codes() {
    let mut codes = HashSet::new();
    for item in SQLSTATE_CODES {
        assert!(codes.insert(item.code), "duplicate SQLSTATE {}", item.code);
        assert_eq!(item.code.len(), 5, "malformed SQLSTATE {}", item.code);
    }
}

#[test]
fn every_code_belongs_to_a_known_class() {
    for item in SQLSTATE_CODES {
        assert!(
            item.class_title().is_some(),
            "no class for {}",
            item.code
        );
    }
    let classes: HashSet<_> = SQLSTATE_CLASSES.iter().map(|(code, _)| *code).collect();
    assert_eq!(classes.len(), SQLSTATE_CLASSES.len());
}

#[test]
fn looks_up_common_codes() {
    let undefined_table = lookup_sqlstate("42P01").expect("42P01");
    assert_eq!(undefined_table.condition, "undefined_table");
    assert_eq!(undefined_table.class_code(), "42");
    assert_eq!(
        undefined_table.class_title(),
        Some("Syntax Error or Access Rule Violation")
    );

    assert_eq!(lookup_sqlstate("23505").map(|c| c.condition), Some("unique_violation"));
    assert_eq!(lookup_sqlstate("42p01").map(|c| c.code), Some("42P01"));
    assert!(lookup_sqlstate("ZZ999").is_none());
}

#[test]
fn looks_up_by_condition_and_class() {
    assert_eq!(lookup_condition("division_by_zero").map(|c| c.code), Some("22012"));
    assert_eq!(
        lookup_condition("string_data_right_truncation").map(|c| c.code),
        Some("01004")
    );
    assert_eq!(lookup_class("XX"), Some("Internal Error"));
    assert!(lookup_class("ZZ").is_none());
}
