//! Fixed lookup tables: the selectable species and the color scheme per type.

use std::fmt;

use crate::error::InputError;

/// One of the four species offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeciesChoice {
    Pichu,
    Charmander,
    Squirtle,
    Bulbasaur,
}

impl SpeciesChoice {
    /// All choices in menu order; position + 1 is the menu key.
    pub const ALL: [SpeciesChoice; 4] = [
        SpeciesChoice::Pichu,
        SpeciesChoice::Charmander,
        SpeciesChoice::Squirtle,
        SpeciesChoice::Bulbasaur,
    ];

    /// Maps a menu key (1–4) to its species.
    pub fn from_key(key: i64) -> Result<Self, InputError> {
        match key {
            1 => Ok(Self::Pichu),
            2 => Ok(Self::Charmander),
            3 => Ok(Self::Squirtle),
            4 => Ok(Self::Bulbasaur),
            other => Err(InputError::OutOfRange(other)),
        }
    }

    /// Parses raw user input (surrounding whitespace ignored).
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NotANumber`] for anything that is not an integer and
    /// [`InputError::OutOfRange`] for integers outside 1–4.
    pub fn parse(input: &str) -> Result<Self, InputError> {
        let trimmed = input.trim();
        let key: i64 = trimmed
            .parse()
            .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
        Self::from_key(key)
    }

    pub fn key(self) -> u8 {
        match self {
            Self::Pichu => 1,
            Self::Charmander => 2,
            Self::Squirtle => 3,
            Self::Bulbasaur => 4,
        }
    }

    /// Canonical lowercase species name, as used by the API and the output file.
    pub fn name(self) -> &'static str {
        match self {
            Self::Pichu => "pichu",
            Self::Charmander => "charmander",
            Self::Squirtle => "squirtle",
            Self::Bulbasaur => "bulbasaur",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pichu => "Pichu",
            Self::Charmander => "Charmander",
            Self::Squirtle => "Squirtle",
            Self::Bulbasaur => "Bulbasaur",
        }
    }
}

impl fmt::Display for SpeciesChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}) {}", self.key(), self.label())
    }
}

/// Page colors keyed by primary type.
///
/// Types without an entry get empty strings, which the template renders as
/// empty CSS values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypeStyle {
    pub bg: &'static str,
    pub fg: &'static str,
}

const STYLE_BY_TYPE: &[(&str, TypeStyle)] = &[
    (
        "fire",
        TypeStyle {
            bg: "#d62828",
            fg: "white",
        },
    ),
    (
        "water",
        TypeStyle {
            bg: "#1d4ed8",
            fg: "white",
        },
    ),
    (
        "electric",
        TypeStyle {
            bg: "#fde047",
            fg: "#000000",
        },
    ),
    (
        "grass",
        TypeStyle {
            bg: "#22c55e",
            fg: "#000000",
        },
    ),
];

impl TypeStyle {
    pub fn for_type(type_name: &str) -> Self {
        STYLE_BY_TYPE
            .iter()
            .find(|(name, _)| *name == type_name)
            .map(|(_, style)| *style)
            .unwrap_or_default()
    }
}
