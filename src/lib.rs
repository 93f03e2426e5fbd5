//! Password strength scoring library
//!
//! Scores a password from 0 to 100, maps the score to a label, estimates its
//! entropy and lists tips to improve it. Evaluation is offline, deterministic
//! and never fails.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_SCORE_WORDLIST_PATH`: Optional file of extra weak words, read by
//!   [`Evaluator::from_env`] (default for [`WordList::load`]: `./assets/weak-words.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_score::{evaluate, StrengthLabel, DISPLAYED_TIPS};
//!
//! let result = evaluate("Gh7#kP2!vX9qLm");
//! assert_eq!(result.label, StrengthLabel::Excellent);
//!
//! println!("{}", result.summary());
//! println!("Estimated randomness: {}", result.entropy_display());
//! for tip in result.tips(DISPLAYED_TIPS) {
//!     println!("• {}", tip);
//! }
//! ```

// Internal modules
mod evaluator;
mod sections;
mod tables;
mod types;
mod wordlist;

// Public API
pub use evaluator::{Evaluator, evaluate, evaluate_password_strength};
pub use types::{BandColor, DISPLAYED_TIPS, EvaluationResult, ParseLabelError, StrengthLabel};
pub use wordlist::{WORDLIST_PATH_ENV, WordList, WordListError, get_wordlist_path};

#[cfg(feature = "async")]
pub use evaluator::{DEBOUNCE, evaluate_password_strength_tx};

pub use secrecy::SecretString;
