use std::fs;

use doc_tests::{documented_codes, error_variants, extract_section, extract_urls, section_exists};

const SECURITY_MD: &str = "../SECURITY.md";
const ERROR_RS: &str = "../contracts/token_sale/src/error.rs";

fn security_md() -> String {
    fs::read_to_string(SECURITY_MD).expect("SECURITY.md must exist at the repository root")
}

#[test]
fn test_required_sections_present() {
    let content = security_md();
    for section in [
        "Overview",
        "Error Codes",
        "Known Limitations",
        "Operational Security Guidance",
        "References",
    ] {
        assert!(section_exists(&content, section), "missing section {section}");
    }
}

#[test]
fn test_front_running_section_structure() {
    let section = extract_section(&security_md(), "Revocation Front-Running");
    for sub in [
        "Attack Description",
        "Technical Background",
        "Risk Assessment",
        "Mitigation Strategies",
    ] {
        assert!(section_exists(&section, sub), "missing subsection {sub}");
    }
}

#[test]
fn test_known_limitations_cover_owner_and_schedule_rules() {
    let section = extract_section(&security_md(), "Known Limitations");
    assert!(section.contains("`LastOwner`"));
    assert!(section.contains("`AlreadyAllocated`"));
    assert!(section_exists(&section, "Initialization Front-Running"));
}

#[test]
fn test_every_error_variant_is_documented_with_its_code() {
    let source = fs::read_to_string(ERROR_RS).expect("failed to read error.rs");
    let variants = error_variants(&source);
    assert!(!variants.is_empty(), "no variants parsed from error.rs");

    let documented = documented_codes(&extract_section(&security_md(), "Error Codes"));
    for (name, code) in &variants {
        assert!(
            documented.contains(&(*code, name.clone())),
            "{name} = {code} is not in the Error Codes table"
        );
    }
    assert_eq!(documented.len(), variants.len(), "table lists unknown codes");
}

#[test]
fn test_references_are_https() {
    let refs = extract_section(&security_md(), "References");
    let urls = extract_urls(&refs);
    assert!(!urls.is_empty());
    assert!(urls.iter().all(|u| u.starts_with("https://")));
}
