use std::{fmt::Display, str::FromStr};

use serde::Deserialize;

use super::error::{ParseLabelError, normalize_label};

/// Musical classification of a track.
///
/// `Undefined` doubles as the "no genre" marker and is never printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    #[default]
    Undefined,
    Pop,
    Rock,
    HipHop,
    Rnb,
    Jazz,
    Instrumentals,
    Clowncore,
}

impl Genre {
    pub const ALL: [Genre; 8] = [
        Genre::Undefined,
        Genre::Pop,
        Genre::Rock,
        Genre::HipHop,
        Genre::Rnb,
        Genre::Jazz,
        Genre::Instrumentals,
        Genre::Clowncore,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Genre::Undefined => "UNDEFINED",
            Genre::Pop => "POP",
            Genre::Rock => "ROCK",
            Genre::HipHop => "HIP_HOP",
            Genre::Rnb => "RNB",
            Genre::Jazz => "JAZZ",
            Genre::Instrumentals => "INSTRUMENTALS",
            Genre::Clowncore => "CLOWNCORE",
        }
    }

    pub fn is_defined(&self) -> bool {
        *self != Genre::Undefined
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Genre {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_label(s);
        Genre::ALL
            .into_iter()
            .find(|g| g.label() == normalized)
            .ok_or_else(|| ParseLabelError {
                kind: "genre",
                label: s.to_string(),
            })
    }
}
