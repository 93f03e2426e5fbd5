//! Constant lookup tables used by the pattern checks.

/// Common weak password bases, matched as lowercase substrings.
pub const COMMON_BASES: &[&str] = &[
    "password", "qwerty", "abc123", "letmein", "welcome", "dragon", "iloveyou", "admin",
    "login", "football", "monkey", "starwars", "princess", "passw0rd",
];

/// Short keyboard runs, matched as lowercase substrings.
pub const KEYBOARD_RUNS: &[&str] = &["qwerty", "asdf", "zxcv", "12345", "09876"];

/// Reference strings for ascending sequence detection.
pub const SEQUENCE_REFERENCES: &[&str] = &["abcdefghijklmnopqrstuvwxyz", "0123456789"];

/// Length of the window slid over each sequence reference.
pub const SEQUENCE_WINDOW: usize = 3;
