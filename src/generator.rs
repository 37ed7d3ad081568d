use std::fmt;

use log::debug;
use rand::Rng;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::charset::CharacterClass;

/// The length a password gets when nothing else is specified.
pub const DEFAULT_LENGTH: usize = 12;

/// What kind of password to generate.
///
/// The class flags are visited in the order of `CharacterClass::ALL` when the
/// charset and the mandatory characters are assembled, so two generators fed
/// the same random numbers always produce the same password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSettings {
    pub length: usize,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_lowercase: true,
            include_uppercase: true,
            include_numbers: true,
            include_symbols: false,
        }
    }
}

impl GenerationSettings {
    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Digits => self.include_numbers,
            CharacterClass::Symbols => self.include_symbols,
        }
    }

    pub fn set(&mut self, class: CharacterClass, included: bool) {
        match class {
            CharacterClass::Lowercase => self.include_lowercase = included,
            CharacterClass::Uppercase => self.include_uppercase = included,
            CharacterClass::Digits => self.include_numbers = included,
            CharacterClass::Symbols => self.include_symbols = included,
        }
    }

    /// The classes that will be represented in the password. When no class is
    /// selected this is lowercase alone.
    pub fn active_classes(&self) -> Vec<CharacterClass> {
        let selected: Vec<CharacterClass> = CharacterClass::ALL
            .iter()
            .copied()
            .filter(|class| self.includes(*class))
            .collect();

        if selected.is_empty() {
            vec![CharacterClass::Lowercase]
        } else {
            selected
        }
    }

    /// The number of characters a generated password will have, that is the
    /// requested length or the number of mandatory characters if that is larger.
    pub fn effective_length(&self) -> usize {
        self.length.max(self.active_classes().len())
    }
}

/// A generated password. The backing memory is wiped when it's dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the password.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.len())
    }
}

/// Generates a password with the thread local random generator.
pub fn generate(settings: &GenerationSettings) -> Password {
    let mut rng = rand::thread_rng();
    generate_with(settings, &mut rng)
}

/// Generates a password drawing all randomness from `rng`.
///
/// One character from every selected class is placed in the password first,
/// the rest is filled from the combined charset, and the whole sequence is then
/// shuffled. If more classes are selected than the requested length allows,
/// the password is longer than requested rather than missing a class.
pub fn generate_with<R: Rng + ?Sized>(settings: &GenerationSettings, rng: &mut R) -> Password {
    let classes = settings.active_classes();

    let charset: Vec<u8> = classes
        .iter()
        .flat_map(|class| class.alphabet().bytes())
        .collect();

    let mut chars: Vec<u8> = Vec::with_capacity(settings.effective_length());
    for class in &classes {
        chars.push(pick(class.alphabet().as_bytes(), rng));
    }

    while chars.len() < settings.length {
        chars.push(pick(&charset, rng));
    }

    shuffle(&mut chars, rng);

    let password = Password(chars.iter().map(|&b| b as char).collect());
    chars.zeroize();

    debug!(
        "generated password: requested length {}, classes {:?}, charset size {}, length {}",
        settings.length,
        classes,
        charset.len(),
        password.len()
    );

    password
}

fn pick<R: Rng + ?Sized>(alphabet: &[u8], rng: &mut R) -> u8 {
    alphabet[rng.gen_range(0..alphabet.len())]
}

// Fisher-Yates, walking from the last index down to 1.
fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
#[path = "tests/generator.rs"]
mod generator_tests;
