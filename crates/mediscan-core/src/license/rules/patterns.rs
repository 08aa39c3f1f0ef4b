//! Common regex patterns for license field extraction.
//!
//! All patterns are case-insensitive and unanchored; extractors take the
//! first occurrence in the text. Capture classes use a literal space rather
//! than `\s` so a labeled value never swallows the following line.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Name patterns
    pub static ref NAME_LABELED: Regex = Regex::new(
        r"(?i)\bname\s*:\s*([A-Za-z][A-Za-z .]*)"
    ).unwrap();

    pub static ref NAME_HONORIFIC: Regex = Regex::new(
        r"(?i)\bdr\.?\s+([A-Za-z][A-Za-z .]*)"
    ).unwrap();

    // License number patterns
    pub static ref LICENSE_LABELED: Regex = Regex::new(
        r"(?i)\blic(?:ense)?\s*#?[\s:]+([A-Z0-9-]+)"
    ).unwrap();

    pub static ref LICENSE_MEDICAL: Regex = Regex::new(
        r"(?i)\bmedical\s+license[\s:]+([A-Z0-9-]+)"
    ).unwrap();

    pub static ref LICENSE_GENERIC: Regex = Regex::new(
        r"(?i)\blicense[\s:]+([A-Z0-9-]+)"
    ).unwrap();

    // Specialization patterns
    pub static ref SPECIALTY_LABELED: Regex = Regex::new(
        r"(?i)\bspecial(?:ization|ity)\s*:\s*([A-Za-z][A-Za-z ]*)"
    ).unwrap();

    pub static ref SPECIALTY_FIELD: Regex = Regex::new(
        r"(?i)\bfield\s*:\s*([A-Za-z][A-Za-z ]*)"
    ).unwrap();

    // Experience patterns
    pub static ref EXPERIENCE_LABELED: Regex = Regex::new(
        r"(?i)\bexperience[\s:]+(\d+)\s*years?"
    ).unwrap();

    pub static ref EXPERIENCE_SUFFIX: Regex = Regex::new(
        r"(?i)(\d+)\s*years?(?:\s+of)?\s+experience"
    ).unwrap();
}
