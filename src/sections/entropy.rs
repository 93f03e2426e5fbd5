//! Entropy section - brute-force search space estimate.

use super::Profile;

/// Randomness points are capped so long passwords cannot dominate the score.
pub const MAX_RANDOMNESS_POINTS: f64 = 60.0;

const LOWER_SIZE: u32 = 26;
const UPPER_SIZE: u32 = 26;
const DIGIT_SIZE: u32 = 10;
const SYMBOL_SIZE: u32 = 33;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntropyEstimate {
    /// Upper bound on the alphabet size, summed over the classes present.
    pub charset_size: u32,
    /// `length * log2(charset_size)`, uncapped.
    pub bits: f64,
    /// `bits` clamped to `0..=MAX_RANDOMNESS_POINTS`.
    pub randomness_points: f64,
}

/// Estimates entropy assuming each character is drawn uniformly and
/// independently from every class the password uses.
pub fn estimate_entropy(profile: &Profile<'_>) -> EntropyEstimate {
    let charset_size = [
        (profile.has_lower, LOWER_SIZE),
        (profile.has_upper, UPPER_SIZE),
        (profile.has_digit, DIGIT_SIZE),
        (profile.has_symbol, SYMBOL_SIZE),
    ]
    .iter()
    .filter(|(present, _)| *present)
    .map(|(_, size)| size)
    .sum::<u32>();

    let bits = if charset_size > 0 {
        profile.length as f64 * f64::from(charset_size).log2()
    } else {
        0.0
    };

    EntropyEstimate {
        charset_size,
        bits,
        randomness_points: bits.clamp(0.0, MAX_RANDOMNESS_POINTS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate(password: &str) -> EntropyEstimate {
        estimate_entropy(&Profile::scan(password))
    }

    #[test]
    fn test_entropy_empty_is_zero() {
        let e = estimate("");
        assert_eq!(e.charset_size, 0);
        assert_eq!(e.bits, 0.0);
        assert_eq!(e.randomness_points, 0.0);
    }

    #[test]
    fn test_entropy_charset_sizes() {
        assert_eq!(estimate("abc").charset_size, 26);
        assert_eq!(estimate("aB").charset_size, 52);
        assert_eq!(estimate("a1").charset_size, 36);
        assert_eq!(estimate("aB3!").charset_size, 95);
        assert_eq!(estimate("€").charset_size, 33);
    }

    #[test]
    fn test_entropy_bits() {
        let e = estimate("a");
        assert!((e.bits - 26f64.log2()).abs() < 1e-9);

        let e = estimate("aaaaaaaaaaaa");
        assert!((e.bits - 12.0 * 26f64.log2()).abs() < 1e-9);
    }

    #[test]
    fn test_entropy_randomness_points_capped() {
        let e = estimate("Tr0ub4dor&3xyz!!");
        assert!(e.bits > 100.0);
        assert_eq!(e.randomness_points, MAX_RANDOMNESS_POINTS);
    }
}
