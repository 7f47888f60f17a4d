use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The eleven design phases, in display order. A phase is identified by its name.
pub const PHASE_NAMES: [&str; 11] = [
    "Flowchart",
    "BV mạch lực",
    "Layout",
    "LKTC",
    "Đặt GS",
    "HTBV",
    "Nameplate",
    "Test LK",
    "Bật nguồn",
    "Check GH",
    "Giao hàng",
];

pub const PHASE_COUNT: usize = PHASE_NAMES.len();

/// Placeholder text of an actual date not reached yet.
pub const NO_DATE: &str = "-";

/// Position of a phase name in [`PHASE_NAMES`].
pub fn phase_index(name: &str) -> Option<usize> {
    PHASE_NAMES.iter().position(|n| *n == name)
}

/// Phase status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PhaseStatus {
    /// O: on track, in progress
    #[default]
    OnTrack,
    /// S: delayed, in progress
    Delayed,
    /// F: completed on time
    Finished,
    /// FD: completed late
    FinishedLate,
}

impl PhaseStatus {
    pub const ALL: [PhaseStatus; 4] = [
        PhaseStatus::OnTrack,
        PhaseStatus::Delayed,
        PhaseStatus::Finished,
        PhaseStatus::FinishedLate,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            PhaseStatus::OnTrack => "O",
            PhaseStatus::Delayed => "S",
            PhaseStatus::Finished => "F",
            PhaseStatus::FinishedLate => "FD",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "O" => Some(PhaseStatus::OnTrack),
            "S" => Some(PhaseStatus::Delayed),
            "F" => Some(PhaseStatus::Finished),
            "FD" => Some(PhaseStatus::FinishedLate),
            _ => None,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        PhaseStatus::from_db_str(&code.trim().to_uppercase())
    }

    pub fn describe(&self) -> &'static str {
        match self {
            PhaseStatus::OnTrack => "In progress (on track)",
            PhaseStatus::Delayed => "In progress (delayed)",
            PhaseStatus::Finished => "Completed on time",
            PhaseStatus::FinishedLate => "Completed late",
        }
    }

    /// F and FD: the phase is done.
    pub fn is_completion(&self) -> bool {
        matches!(self, PhaseStatus::Finished | PhaseStatus::FinishedLate)
    }

    /// S and FD count a project as delayed.
    pub fn is_late(&self) -> bool {
        matches!(self, PhaseStatus::Delayed | PhaseStatus::FinishedLate)
    }
}

impl fmt::Display for PhaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for PhaseStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for PhaseStatus {
    /// Unknown or missing codes fall back to `O`, the store's column default.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw
            .as_deref()
            .and_then(PhaseStatus::from_db_str)
            .unwrap_or_default())
    }
}

/// One tracked design phase of a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    pub name: String,
    #[serde(default)]
    pub status: PhaseStatus,
    /// Planned date, free text ("dd/mm"), may be empty.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub due_date: String,
    #[serde(default)]
    pub actual_date: ActualDate,
    /// Percentage as stored; `None` when the record carried a non-numeric value.
    /// Form edits keep it within 0..=100, values read from a record are not
    /// altered.
    #[serde(default = "default_progress", deserialize_with = "deserialize_progress")]
    pub progress: Option<f64>,
}

fn default_progress() -> Option<f64> {
    Some(0.0)
}

impl Phase {
    /// Fresh phase for a draft: status O, no dates, progress 0.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            status: PhaseStatus::OnTrack,
            due_date: String::new(),
            actual_date: ActualDate::Pending,
            progress: Some(0.0),
        }
    }

    pub fn has_due_date(&self) -> bool {
        !self.due_date.trim().is_empty()
    }

    pub fn has_actual_date(&self) -> bool {
        self.actual_date.date().is_some()
    }

    /// Actual date for tables: "-" whenever no date is set.
    pub fn actual_date_display(&self) -> &str {
        self.actual_date.date().unwrap_or(NO_DATE)
    }
}

/// Actual completion date of a phase.
///
/// The three "no date" shapes a record may carry are kept apart so that a
/// record read and written back is unchanged, and so the export can print
/// exactly what was stored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActualDate {
    /// `null` or missing on the wire, NULL in the store.
    #[default]
    Absent,
    /// Empty text, typically a cleared field.
    Blank,
    /// The "-" placeholder of a phase not finished yet (fresh drafts).
    Pending,
    On(String),
}

impl ActualDate {
    /// Parse user or stored text. Surrounding blanks are ignored when
    /// classifying, a real date is kept as typed.
    pub fn from_text(s: &str) -> Self {
        match s.trim() {
            "" => ActualDate::Blank,
            NO_DATE => ActualDate::Pending,
            _ => ActualDate::On(s.to_string()),
        }
    }

    /// The date, when one is set.
    pub fn date(&self) -> Option<&str> {
        match self {
            ActualDate::On(d) => Some(d),
            _ => None,
        }
    }

    /// Stored text: `None` for [`ActualDate::Absent`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ActualDate::Absent => None,
            ActualDate::Blank => Some(""),
            ActualDate::Pending => Some(NO_DATE),
            ActualDate::On(d) => Some(d),
        }
    }
}

impl From<Option<&str>> for ActualDate {
    fn from(raw: Option<&str>) -> Self {
        raw.map_or(ActualDate::Absent, ActualDate::from_text)
    }
}

impl Serialize for ActualDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_text() {
            Some(t) => serializer.serialize_str(t),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for ActualDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(ActualDate::from(raw.as_deref()))
    }
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default())
}

fn deserialize_progress<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(match raw {
        serde_json::Value::Number(n) => n.as_f64(),
        _ => None,
    })
}
