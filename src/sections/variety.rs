//! Character variety section - rewards mixing character classes.

use super::{SectionContext, SectionOutcome};

/// Scores the character classes present and asks for the missing ones.
///
/// Bonuses: +5 for mixed case, +5 for digits, +7 for symbols.
pub fn character_variety_section(ctx: &SectionContext<'_>) -> SectionOutcome {
    let p = ctx.profile;
    let mut outcome = SectionOutcome::default();

    if p.has_lower && p.has_upper {
        outcome.add(5);
    }
    if p.has_digit {
        outcome.add(5);
    }
    if p.has_symbol {
        outcome.add(7);
    }

    if !p.has_upper {
        outcome.tip("Add some UPPERCASE letters.");
    }
    if !p.has_lower {
        outcome.tip("Add some lowercase letters.");
    }
    if !p.has_digit {
        outcome.tip("Add a few numbers.");
    }
    if !p.has_symbol {
        outcome.tip("Add symbols like !, ?, or #.");
    }
    outcome
}
