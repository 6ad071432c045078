use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Text that could not be normalized to a canonical numeric id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdParseError {
    pub input: String,
}

impl fmt::Display for IdParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a numeric record id: {:?}", self.input)
    }
}

impl std::error::Error for IdParseError {}

/// Normalizes textual id input to the canonical numeric form.
///
/// Surrounding whitespace is ignored; anything else that is not an unsigned
/// decimal integer is rejected.
pub fn parse_canonical_id(text: &str) -> Result<u64, IdParseError> {
    text.trim().parse::<u64>().map_err(|_| IdParseError {
        input: text.to_string(),
    })
}

/// Parses a selection value where blank text, `none` and `all` mean "no selection".
pub fn parse_selection<T>(text: &str) -> Result<Option<T>, IdParseError>
where
    T: FromStr<Err = IdParseError>,
{
    let trimmed = text.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("none")
        || trimmed.eq_ignore_ascii_case("all")
    {
        return Ok(None);
    }
    trimmed.parse::<T>().map(Some)
}

// Wire ids show up as JSON numbers or as numeric strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

impl RawId {
    fn canonical(self) -> Result<u64, IdParseError> {
        match self {
            RawId::Number(n) => Ok(n),
            RawId::Text(s) => parse_canonical_id(&s),
        }
    }
}

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            pub const fn new(n: u64) -> Self {
                Self(n)
            }

            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_canonical_id(s).map(Self)
            }
        }

        impl From<u64> for $name {
            fn from(n: u64) -> Self {
                Self(n)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                RawId::deserialize(deserializer)?
                    .canonical()
                    .map(Self)
                    .map_err(serde::de::Error::custom)
            }
        }
    };
}

record_id!(
    /// Identity of a point of interest.
    SpotId
);
record_id!(
    /// Identity of a curated route.
    RouteId
);
record_id!(
    /// Identity of a spot category. Category filters compare on this type only.
    CategoryId
);
