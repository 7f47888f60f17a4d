use super::level::{Level, deserialize_level};
use super::phase::{PHASE_NAMES, Phase, PhaseStatus};
use serde::{Deserialize, Deserializer, Serialize};

/// A tracked project and its eleven phases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Server-assigned; `None` until the draft is persisted.
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: String,
    #[serde(default)]
    pub code_sale: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default, deserialize_with = "deserialize_level")]
    pub level: Option<Level>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub current_status: String,
    /// Server-set, display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub phases: Vec<Phase>,
}

impl Default for Project {
    fn default() -> Self {
        Self::draft()
    }
}

impl Project {
    /// Unsaved project: no id, empty fields, all phases defaulted.
    pub fn draft() -> Self {
        Self {
            id: None,
            name: String::new(),
            code_sale: None,
            owner: None,
            level: None,
            current_status: String::new(),
            updated_at: None,
            phases: default_phases(),
        }
    }

    /// Rebuild `phases` in the fixed order, matching entries by name.
    /// Missing phases get defaults; names outside the fixed list are dropped.
    pub fn normalize_phases(&mut self) {
        let mut incoming = std::mem::take(&mut self.phases);
        self.phases = PHASE_NAMES
            .iter()
            .map(|name| match incoming.iter().position(|p| p.name == *name) {
                Some(pos) => incoming.swap_remove(pos),
                None => Phase::new(name),
            })
            .collect();
    }

    /// Phase by fixed name.
    pub fn phase(&self, name: &str) -> Option<&Phase> {
        self.phases.iter().find(|p| p.name == name)
    }

    pub fn has_status(&self, status: PhaseStatus) -> bool {
        self.phases.iter().any(|p| p.status == status)
    }

    /// Every phase is F.
    pub fn is_completed(&self) -> bool {
        self.phases
            .iter()
            .all(|p| p.status == PhaseStatus::Finished)
    }

    /// At least one phase is S or FD.
    pub fn is_delayed(&self) -> bool {
        self.phases.iter().any(|p| p.status.is_late())
    }

    pub fn owner_str(&self) -> &str {
        self.owner.as_deref().unwrap_or("")
    }

    pub fn code_sale_str(&self) -> &str {
        self.code_sale.as_deref().unwrap_or("")
    }

    pub fn level_str(&self) -> &str {
        self.level.map(|l| l.code()).unwrap_or("")
    }
}

pub fn default_phases() -> Vec<Phase> {
    PHASE_NAMES.iter().map(|name| Phase::new(name)).collect()
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default())
}
