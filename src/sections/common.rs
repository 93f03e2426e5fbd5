//! Common pattern section - caps passwords built on well-known weak words.

use super::{SectionContext, SectionOutcome};
use crate::tables::{COMMON_BASES, KEYBOARD_RUNS};

/// Highest score a password containing a common pattern can reach.
pub const COMMON_PATTERN_CAP: u8 = 20;

pub const COMMON_PATTERN_TIP: &str =
    "Avoid common words or keyboard patterns like 'password' or 'qwerty'.";

/// Checks whether the password contains a common base, a keyboard run
/// or an entry of the configured word list (case-insensitive substring match).
///
/// # Returns
/// - cap at [`COMMON_PATTERN_CAP`] plus a tip if any pattern is found
/// - an empty outcome otherwise
pub fn common_pattern_section(ctx: &SectionContext<'_>) -> SectionOutcome {
    let lowered = ctx.profile.lowered.as_str();
    let builtin = COMMON_BASES
        .iter()
        .chain(KEYBOARD_RUNS)
        .any(|pattern| lowered.contains(pattern));
    let configured = ctx.extra_words.is_some_and(|words| words.matches(lowered));

    let mut outcome = SectionOutcome::default();
    if builtin || configured {
        outcome.cap = Some(COMMON_PATTERN_CAP);
        outcome.tip(COMMON_PATTERN_TIP);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::{Profile, run_section};
    use crate::wordlist::WordList;

    #[test]
    fn test_common_section_base_word() {
        let outcome = run_section(common_pattern_section, "password123");
        assert_eq!(outcome.cap, Some(COMMON_PATTERN_CAP));
        assert_eq!(outcome.tips, vec![COMMON_PATTERN_TIP]);
        assert_eq!(outcome.bonus, 0);
    }

    #[test]
    fn test_common_section_case_insensitive() {
        let outcome = run_section(common_pattern_section, "xXDrAgOnXx");
        assert_eq!(outcome.cap, Some(COMMON_PATTERN_CAP));
    }

    #[test]
    fn test_common_section_keyboard_run() {
        let outcome = run_section(common_pattern_section, "My-AsDf-Key");
        assert_eq!(outcome.cap, Some(COMMON_PATTERN_CAP));
    }

    #[test]
    fn test_common_section_clean_password() {
        let outcome = run_section(common_pattern_section, "Gh7#kP2!vX9qLm");
        assert_eq!(outcome, SectionOutcome::default());
    }

    #[test]
    fn test_common_section_extra_words() {
        let words = WordList::from_words(["Hunter"]);
        let profile = Profile::scan("xHUNTERx!9");
        let ctx = SectionContext {
            profile: &profile,
            extra_words: Some(&words),
        };
        let outcome = common_pattern_section(&ctx);
        assert_eq!(outcome.cap, Some(COMMON_PATTERN_CAP));
        assert_eq!(outcome.tips, vec![COMMON_PATTERN_TIP]);
    }

    #[test]
    fn test_common_section_extra_words_miss() {
        let words = WordList::from_words(["hunter"]);
        let profile = Profile::scan("Gh7#kP2!vX9qLm");
        let ctx = SectionContext {
            profile: &profile,
            extra_words: Some(&words),
        };
        assert_eq!(common_pattern_section(&ctx).cap, None);
    }
}
