//! Reproducible generation seeds.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{RngCore as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed identifying one generated puzzle.
///
/// The seed fully determines the generator's random stream, so a puzzle can
/// be reproduced from its seed alone. Seeds render as 64 lowercase hex
/// characters and parse back from the same form.
///
/// # Examples
///
/// ```
/// use gridlock_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("daily puzzle 2026-08-29");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<PuzzleSeed>().unwrap(), seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

/// Error from parsing a seed out of its hex form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedError {
    /// The text was not exactly 64 characters.
    #[display("seed must be 64 hex characters, got {len}")]
    InvalidLength {
        /// Length of the rejected text in bytes.
        len: usize,
    },
    /// A character was not a hex digit.
    #[display("invalid hex digit in seed: {ch:?}")]
    InvalidHexDigit {
        /// The rejected character.
        ch: char,
    },
}

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Creates a fresh random seed from the thread-local entropy source.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Derives a seed deterministically from a human-readable phrase.
    ///
    /// The phrase is hashed with SHA-256, so any string maps to a full-entropy
    /// seed and equal phrases always name the same puzzle.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        let digest = Sha256::digest(phrase.as_bytes());
        let mut bytes = [0; 32];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Creates the deterministic random number generator for this seed.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(SeedError::InvalidLength { len: s.len() });
        }
        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
            let hi = hex_value(pair[0])?;
            let lo = hex_value(pair[1])?;
            *byte = hi << 4 | lo;
        }
        Ok(Self(bytes))
    }
}

fn hex_value(byte: u8) -> Result<u8, SeedError> {
    char::from(byte)
        .to_digit(16)
        .and_then(|value| u8::try_from(value).ok())
        .ok_or(SeedError::InvalidHexDigit {
            ch: char::from(byte),
        })
}
