use std::collections::HashSet;
use std::fmt;

const MAX_SCORE: u32 = 100;
const LENGTH_CAP: u32 = 30;
const POINTS_PER_CLASS: u32 = 10;
const UNIQUENESS_CAP: u32 = 30;

/// Rates `password` on a scale from 0 to 100.
///
/// The score is the sum of three parts: two points per character up to 30,
/// ten points for each of lowercase, uppercase, digits and symbols that appear,
/// and up to 30 points for the share of distinct characters. Anything that isn't
/// an ASCII letter or digit counts as a symbol.
pub fn score(password: &str) -> u8 {
    let length = password.chars().count() as u32;
    if length == 0 {
        return 0;
    }

    let length_points = (length * 2).min(LENGTH_CAP);

    let classes = [
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    let variety_points =
        classes.iter().filter(|present| **present).count() as u32 * POINTS_PER_CLASS;

    let unique = password.chars().collect::<HashSet<char>>().len() as u32;
    let uniqueness_points = (unique * UNIQUENESS_CAP / length).min(UNIQUENESS_CAP);

    (length_points + variety_points + uniqueness_points).min(MAX_SCORE) as u8
}

/// One of the five bands a score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthTier {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthTier {
    /// Lower bounds are inclusive, so 20, 40, 60 and 80 belong to the higher tier.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=19 => StrengthTier::VeryWeak,
            20..=39 => StrengthTier::Weak,
            40..=59 => StrengthTier::Moderate,
            60..=79 => StrengthTier::Strong,
            _ => StrengthTier::VeryStrong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::VeryWeak => "Very Weak",
            StrengthTier::Weak => "Weak",
            StrengthTier::Moderate => "Moderate",
            StrengthTier::Strong => "Strong",
            StrengthTier::VeryStrong => "Very Strong",
        }
    }

    pub fn color(self) -> ColorTier {
        match self {
            StrengthTier::VeryWeak => ColorTier::Red,
            StrengthTier::Weak => ColorTier::Orange,
            StrengthTier::Moderate => ColorTier::Yellow,
            StrengthTier::Strong => ColorTier::Lime,
            StrengthTier::VeryStrong => ColorTier::Green,
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Display color of a strength indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorTier {
    Red,
    Orange,
    Yellow,
    Lime,
    Green,
}

impl ColorTier {
    /// 1 for the weakest tier up to 5 for the strongest.
    pub fn tier(self) -> u8 {
        match self {
            ColorTier::Red => 1,
            ColorTier::Orange => 2,
            ColorTier::Yellow => 3,
            ColorTier::Lime => 4,
            ColorTier::Green => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorTier::Red => "red",
            ColorTier::Orange => "orange",
            ColorTier::Yellow => "yellow",
            ColorTier::Lime => "lime",
            ColorTier::Green => "green",
        }
    }

    /// Style class for web front ends.
    pub fn css_class(self) -> &'static str {
        match self {
            ColorTier::Red => "bg-red-500",
            ColorTier::Orange => "bg-orange-500",
            ColorTier::Yellow => "bg-yellow-500",
            ColorTier::Lime => "bg-lime-500",
            ColorTier::Green => "bg-green-500",
        }
    }

    /// The closest color in the 256 color terminal palette.
    pub fn ansi256(self) -> u8 {
        match self {
            ColorTier::Red => 196,
            ColorTier::Orange => 208,
            ColorTier::Yellow => 226,
            ColorTier::Lime => 154,
            ColorTier::Green => 46,
        }
    }
}

impl fmt::Display for ColorTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tier-{} ({})", self.tier(), self.name())
    }
}

pub fn label_for(score: u8) -> &'static str {
    StrengthTier::from_score(score).label()
}

pub fn color_tier_for(score: u8) -> ColorTier {
    StrengthTier::from_score(score).color()
}

#[cfg(test)]
#[path = "tests/strength.rs"]
mod strength_tests;
