//! Pattern analysis section - detects repeated characters, ascending sequences and dates.

use std::collections::HashMap;

use super::{SectionContext, SectionOutcome};
use crate::tables::{SEQUENCE_REFERENCES, SEQUENCE_WINDOW};

const REPEAT_THRESHOLD: usize = 3;
const REPEAT_PENALTY: i32 = -8;
const SEQUENCE_PENALTY: i32 = -8;
const DATE_PENALTY: i32 = -5;
/// Digit counts that look like a year, `MMDDYY` or `MMDDYYYY`.
const DATE_DIGIT_COUNTS: [usize; 3] = [4, 6, 8];

/// Analyzes the password for repeats, simple sequences and date-like digit runs.
pub fn pattern_analysis_section(ctx: &SectionContext<'_>) -> SectionOutcome {
    let mut outcome = SectionOutcome::default();

    if has_repeated_char(ctx.profile.password) {
        outcome.add(REPEAT_PENALTY);
        outcome.tip("Avoid repeating the same character many times.");
    }
    if has_simple_sequence(&ctx.profile.lowered) {
        outcome.add(SEQUENCE_PENALTY);
        outcome.tip("Avoid simple sequences like abc or 123.");
    }
    if looks_like_date(ctx.profile.password) {
        outcome.add(DATE_PENALTY);
        outcome.tip("Don't use dates like birthdays.");
    }
    outcome
}

/// True if any character occurs [`REPEAT_THRESHOLD`] times or more, adjacent or not.
fn has_repeated_char(password: &str) -> bool {
    let mut counts: HashMap<char, usize> = HashMap::new();
    password.chars().any(|c| {
        let count = counts.entry(c).or_insert(0);
        *count += 1;
        *count >= REPEAT_THRESHOLD
    })
}

/// True if any 3-character window of a reference run appears in `lowered`.
fn has_simple_sequence(lowered: &str) -> bool {
    SEQUENCE_REFERENCES.iter().any(|reference| {
        (0..=reference.len() - SEQUENCE_WINDOW)
            .any(|start| lowered.contains(&reference[start..start + SEQUENCE_WINDOW]))
    })
}

/// Only the number of digits is checked, not whether they form a valid date.
fn looks_like_date(password: &str) -> bool {
    let digits = password.chars().filter(|c| c.is_ascii_digit()).count();
    DATE_DIGIT_COUNTS.contains(&digits)
}
