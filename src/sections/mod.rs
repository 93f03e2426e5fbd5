//! Password evaluation sections
//!
//! Each section scores a specific aspect of password strength. The
//! evaluator runs them in a fixed order and concatenates their tips.

mod common;
mod entropy;
mod length;
mod pattern;
mod variety;

pub use common::common_pattern_section;
pub use entropy::estimate_entropy;
pub use length::length_section;
pub use pattern::pattern_analysis_section;
pub use variety::character_variety_section;

use crate::wordlist::WordList;

/// Single-pass classification of a password.
///
/// Classes are ASCII only: anything that is not `a-z`, `A-Z` or `0-9`
/// counts as a symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile<'a> {
    pub password: &'a str,
    /// ASCII-lowercased copy used for case-insensitive matching.
    pub lowered: String,
    /// Number of Unicode scalar values.
    pub length: usize,
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
}

impl<'a> Profile<'a> {
    pub fn scan(password: &'a str) -> Self {
        let mut profile = Profile {
            password,
            lowered: password.to_ascii_lowercase(),
            length: 0,
            has_lower: false,
            has_upper: false,
            has_digit: false,
            has_symbol: false,
        };
        for c in password.chars() {
            profile.length += 1;
            match c {
                'a'..='z' => profile.has_lower = true,
                'A'..='Z' => profile.has_upper = true,
                '0'..='9' => profile.has_digit = true,
                _ => profile.has_symbol = true,
            }
        }
        profile
    }
}

/// Everything a section may look at.
pub struct SectionContext<'a> {
    pub profile: &'a Profile<'a>,
    pub extra_words: Option<&'a WordList>,
}

/// Contribution of one section to the final result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionOutcome {
    /// Points added to (or removed from) the randomness score.
    pub bonus: i32,
    /// Tips in the order they must appear.
    pub tips: Vec<&'static str>,
    /// Upper bound applied after the raw score is computed.
    pub cap: Option<u8>,
}

impl SectionOutcome {
    pub(crate) fn add(&mut self, points: i32) {
        self.bonus += points;
    }

    pub(crate) fn tip(&mut self, tip: &'static str) {
        self.tips.push(tip);
    }
}

/// Signature shared by every scoring section.
pub type Section = fn(&SectionContext<'_>) -> SectionOutcome;

/// Runs one section against a password with no extra word list.
#[cfg(test)]
pub(crate) fn run_section(section: Section, password: &str) -> SectionOutcome {
    let profile = Profile::scan(password);
    let ctx = SectionContext {
        profile: &profile,
        extra_words: None,
    };
    section(&ctx)
}
