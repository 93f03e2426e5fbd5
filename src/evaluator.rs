//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    Profile, Section, SectionContext, character_variety_section, common_pattern_section,
    estimate_entropy, length_section, pattern_analysis_section,
};
use crate::types::{EvaluationResult, StrengthLabel};
use crate::wordlist::{WORDLIST_PATH_ENV, WordList, WordListError};

/// Sections in the order their tips appear in the feedback.
const SECTIONS: [Section; 4] = [
    common_pattern_section,
    length_section,
    character_variety_section,
    pattern_analysis_section,
];

/// Delay before a debounced evaluation runs.
#[cfg(feature = "async")]
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Password evaluator with an optional extra word list.
///
/// The default evaluator only uses the built-in tables and gives the same
/// result as [`evaluate`].
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    extra_words: Option<WordList>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treats every word of `words` like a built-in common pattern.
    pub fn with_word_list(words: WordList) -> Self {
        Self {
            extra_words: Some(words),
        }
    }

    /// Builds an evaluator from the environment.
    ///
    /// If `PWD_SCORE_WORDLIST_PATH` is set, the word list is loaded from it;
    /// otherwise only the built-in tables are used.
    ///
    /// # Errors
    ///
    /// Returns the [`WordListError`] raised while loading the configured file.
    pub fn from_env() -> Result<Self, WordListError> {
        if std::env::var_os(WORDLIST_PATH_ENV).is_none() {
            return Ok(Self::new());
        }
        WordList::load().map(Self::with_word_list)
    }

    pub fn word_list(&self) -> Option<&WordList> {
        self.extra_words.as_ref()
    }

    /// Evaluates a password. Never fails.
    pub fn evaluate(&self, password: &str) -> EvaluationResult {
        if password.is_empty() {
            return EvaluationResult::empty();
        }

        let profile = Profile::scan(password);
        let entropy = estimate_entropy(&profile);
        let ctx = SectionContext {
            profile: &profile,
            extra_words: self.extra_words.as_ref(),
        };

        let mut bonus = 0;
        let mut cap: Option<u8> = None;
        let mut feedback: Vec<String> = Vec::new();

        // Orchestrator: execute sections in sequence
        for section_fn in SECTIONS {
            let outcome = section_fn(&ctx);
            bonus += outcome.bonus;
            if let Some(limit) = outcome.cap {
                cap = Some(cap.map_or(limit, |c| c.min(limit)));
            }
            for tip in outcome.tips {
                if !feedback.iter().any(|t| t == tip) {
                    feedback.push(tip.to_string());
                }
            }
        }

        let raw = (entropy.randomness_points + f64::from(bonus))
            .floor()
            .clamp(0.0, 100.0) as u8;
        let score = cap.map_or(raw, |c| raw.min(c));

        EvaluationResult {
            score,
            label: StrengthLabel::from_score(score),
            feedback,
            entropy_bits: entropy.bits,
        }
    }

    /// Same as [`Evaluator::evaluate`], reading the password from a secret.
    pub fn evaluate_secret(&self, password: &SecretString) -> EvaluationResult {
        self.evaluate(password.expose_secret())
    }
}

/// Evaluates a password with the built-in tables.
///
/// # Returns
/// An `EvaluationResult` with score, label, tips and entropy estimate.
pub fn evaluate(password: &str) -> EvaluationResult {
    Evaluator::new().evaluate(password)
}

/// Evaluates a secret password with the built-in tables.
pub fn evaluate_password_strength(password: &SecretString) -> EvaluationResult {
    evaluate(password.expose_secret())
}

/// Debounced evaluation that sends the result via channel.
///
/// Waits [`DEBOUNCE`] first; if `token` is cancelled in the meantime (typically
/// because the user typed again) nothing is sent.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    evaluator: &Evaluator,
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<EvaluationResult>,
) {
    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled before debounce elapsed");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let evaluation = evaluator.evaluate_secret(password);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
