//! Evaluation result and strength label types.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of tips a presentation layer is expected to show.
pub const DISPLAYED_TIPS: usize = 5;

/// Categorical strength derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Fair,
    Strong,
    Excellent,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown strength label: {0}")]
pub struct ParseLabelError(pub String);

/// RGB colour of a score band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BandColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl BandColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the colour as `#RRGGBB`.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl StrengthLabel {
    /// All labels, weakest first.
    pub const ALL: [StrengthLabel; 5] = [
        StrengthLabel::VeryWeak,
        StrengthLabel::Weak,
        StrengthLabel::Fair,
        StrengthLabel::Strong,
        StrengthLabel::Excellent,
    ];

    /// Maps a score to its band.
    ///
    /// Bands are inclusive: 0-19, 20-39, 40-59, 60-79, 80-100.
    /// Anything above 100 is treated as `Excellent`.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=19 => StrengthLabel::VeryWeak,
            20..=39 => StrengthLabel::Weak,
            40..=59 => StrengthLabel::Fair,
            60..=79 => StrengthLabel::Strong,
            _ => StrengthLabel::Excellent,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Fair => "Fair",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::Excellent => "Excellent",
        }
    }

    /// Bar colour for this band: red, yellow, amber, green, blue.
    pub fn color(&self) -> BandColor {
        match self {
            StrengthLabel::VeryWeak => BandColor::new(0xE5, 0x39, 0x35),
            StrengthLabel::Weak => BandColor::new(0xFD, 0xD8, 0x35),
            StrengthLabel::Fair => BandColor::new(0xFF, 0xB3, 0x00),
            StrengthLabel::Strong => BandColor::new(0x43, 0xA0, 0x47),
            StrengthLabel::Excellent => BandColor::new(0x1E, 0x88, 0xE5),
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrengthLabel {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrengthLabel::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| ParseLabelError(s.to_string()))
    }
}

/// Outcome of a single password evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    /// Final score in `0..=100`.
    pub score: u8,
    pub label: StrengthLabel,
    /// Distinct tips in the order they were raised.
    pub feedback: Vec<String>,
    /// Uncapped entropy estimate in bits.
    pub entropy_bits: f64,
}

impl EvaluationResult {
    /// Result returned for an empty input.
    pub fn empty() -> Self {
        Self {
            score: 0,
            label: StrengthLabel::VeryWeak,
            feedback: vec!["Enter a password".to_string()],
            entropy_bits: 0.0,
        }
    }

    /// First `limit` tips.
    pub fn tips(&self, limit: usize) -> &[String] {
        &self.feedback[..self.feedback.len().min(limit)]
    }

    pub fn entropy_display(&self) -> String {
        format!("{:.1} bits", self.entropy_bits)
    }

    pub fn summary(&self) -> String {
        format!("{} • Score {}/100", self.label, self.score)
    }

    /// Fraction of the strength bar to fill.
    pub fn fill_ratio(&self) -> f32 {
        f32::from(self.score.min(100)) / 100.0
    }
}
