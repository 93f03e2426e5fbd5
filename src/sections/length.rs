//! Length section - rewards passwords of recommended length.

use super::{SectionContext, SectionOutcome};

const RECOMMENDED_LENGTH: usize = 12;
const LENGTH_BONUS: i32 = 3;

/// Awards a bonus at [`RECOMMENDED_LENGTH`] characters or more, otherwise asks for more.
pub fn length_section(ctx: &SectionContext<'_>) -> SectionOutcome {
    let mut outcome = SectionOutcome::default();
    if ctx.profile.length >= RECOMMENDED_LENGTH {
        outcome.add(LENGTH_BONUS);
    } else {
        outcome.tip("Use at least 12 characters.");
    }
    outcome
}
