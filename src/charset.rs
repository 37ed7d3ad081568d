use std::fmt;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// A category of characters that can be requested in a generated password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// All classes, in the order they are visited when a charset is assembled.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    /// The characters a generator draws from for this class.
    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    /// Returns true if `c` is a member of this class's alphabet.
    pub fn contains(self, c: char) -> bool {
        self.alphabet().contains(c)
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterClass::Lowercase => write!(f, "lowercase"),
            CharacterClass::Uppercase => write!(f, "uppercase"),
            CharacterClass::Digits => write!(f, "digits"),
            CharacterClass::Symbols => write!(f, "symbols"),
        }
    }
}

#[cfg(test)]
#[path = "tests/charset.rs"]
mod charset_tests;
