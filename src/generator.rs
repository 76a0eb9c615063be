//! Constrained password generator
//!
//! Passwords are drawn from the operating system CSPRNG. Every requested
//! character class is covered by construction: one position is reserved per
//! class, the rest are drawn from the whole alphabet, and the result is
//! shuffled with the same generator.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng, RngCore};
use secrecy::SecretString;
use thiserror::Error;
use zeroize::Zeroize;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::CharClass;

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 128;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}";
/// Characters easily confused with one another in common fonts.
pub const AMBIGUOUS: &str = "0O1lI|";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Password length must be between 8 and 128 characters, got {length}")]
    InvalidParameter { length: usize },
    #[error("No {0} characters left after exclusions")]
    AlphabetExhausted(CharClass),
}

/// Parameters for a single generated password.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct GenerationRequest {
    pub length: usize,
    pub include_symbols: bool,
    pub exclude_ambiguous: bool,
    /// Extra characters removed from every class.
    pub excluded: String,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: 16,
            include_symbols: true,
            exclude_ambiguous: true,
            excluded: String::new(),
        }
    }
}

impl GenerationRequest {
    pub fn new(length: usize, include_symbols: bool, exclude_ambiguous: bool) -> Self {
        Self {
            length,
            include_symbols,
            exclude_ambiguous,
            excluded: String::new(),
        }
    }

    pub fn excluding(mut self, chars: impl Into<String>) -> Self {
        self.excluded = chars.into();
        self
    }

    pub fn validate(&self) -> Result<(), GenerateError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            return Err(GenerateError::InvalidParameter {
                length: self.length,
            });
        }
        Ok(())
    }

    /// Classes the output must cover, in a fixed order.
    pub fn required_classes(&self) -> Vec<CharClass> {
        let mut classes = vec![CharClass::Lowercase, CharClass::Uppercase, CharClass::Digit];
        if self.include_symbols {
            classes.push(CharClass::Symbol);
        }
        classes
    }

    /// Builds the alphabet after exclusions.
    ///
    /// # Errors
    ///
    /// `AlphabetExhausted` if a required class has no characters left.
    pub fn alphabet(&self) -> Result<Alphabet, GenerateError> {
        let is_excluded = |c: &char| {
            (self.exclude_ambiguous && AMBIGUOUS.contains(*c)) || self.excluded.contains(*c)
        };

        let mut classes = Vec::new();
        for class in self.required_classes() {
            let chars: Vec<char> = class_chars(class).chars().filter(|c| !is_excluded(c)).collect();
            if chars.is_empty() {
                return Err(GenerateError::AlphabetExhausted(class));
            }
            classes.push((class, chars));
        }

        let pool = classes.iter().flat_map(|(_, chars)| chars.iter().copied()).collect();
        Ok(Alphabet { classes, pool })
    }
}

fn class_chars(class: CharClass) -> &'static str {
    match class {
        CharClass::Lowercase => LOWERCASE,
        CharClass::Uppercase => UPPERCASE,
        CharClass::Digit => DIGITS,
        CharClass::Symbol => SYMBOLS,
    }
}

/// The characters a request may draw from, grouped by class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    classes: Vec<(CharClass, Vec<char>)>,
    pool: Vec<char>,
}

impl Alphabet {
    /// Characters of one class, if the class is part of the alphabet.
    pub fn class(&self, class: CharClass) -> Option<&[char]> {
        self.classes
            .iter()
            .find(|(c, _)| *c == class)
            .map(|(_, chars)| chars.as_slice())
    }

    /// Every character, all classes concatenated.
    pub fn chars(&self) -> &[char] {
        &self.pool
    }

    pub fn contains(&self, c: char) -> bool {
        self.pool.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }
}

/// `gen_range` samples with a rejection zone, so no modulo bias.
fn pick<R: RngCore + CryptoRng>(chars: &[char], rng: &mut R) -> char {
    chars[rng.gen_range(0..chars.len())]
}

/// Generates a password from the operating system CSPRNG.
///
/// # Errors
///
/// - `InvalidParameter` if the length is outside `8..=128`
/// - `AlphabetExhausted` if exclusions empty a required class
pub fn generate(request: &GenerationRequest) -> Result<SecretString, GenerateError> {
    generate_with_rng(request, &mut OsRng)
}

/// Generates a password with a caller-supplied cryptographic generator.
pub fn generate_with_rng<R: RngCore + CryptoRng>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<SecretString, GenerateError> {
    request.validate()?;
    let alphabet = request.alphabet()?;

    let mut chars: Vec<char> = Vec::with_capacity(request.length);
    for (_, members) in &alphabet.classes {
        chars.push(pick(members, rng));
    }
    while chars.len() < request.length {
        chars.push(pick(alphabet.chars(), rng));
    }
    chars.shuffle(rng);

    let password: String = chars.iter().collect();
    chars.zeroize();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "generated password: length={}, alphabet={}",
        request.length,
        alphabet.len()
    );

    Ok(SecretString::new(password.into_boxed_str()))
}

/// Shorthand for [`generate`] with no extra exclusions.
pub fn generate_password(
    length: usize,
    include_symbols: bool,
    exclude_ambiguous: bool,
) -> Result<SecretString, GenerateError> {
    generate(&GenerationRequest::new(length, include_symbols, exclude_ambiguous))
}
