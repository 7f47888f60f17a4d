use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Project complexity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    A,
    B,
    C,
    D,
    E,
    S,
}

impl Level {
    pub fn code(&self) -> &'static str {
        match self {
            Level::A => "A",
            Level::B => "B",
            Level::C => "C",
            Level::D => "D",
            Level::E => "E",
            Level::S => "S",
        }
    }

    /// Exact wire code → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "A" => Some(Level::A),
            "B" => Some(Level::B),
            "C" => Some(Level::C),
            "D" => Some(Level::D),
            "E" => Some(Level::E),
            "S" => Some(Level::S),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        Level::from_db_str(&code.trim().to_uppercase())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// Wire reader for the optional `level` field.
/// `null`, `""` and codes outside A/B/C/D/E/S all read as "no level".
pub(crate) fn deserialize_level<'de, D>(deserializer: D) -> Result<Option<Level>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Level::from_db_str))
}
