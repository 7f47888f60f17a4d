use crate::models::{Level, PhaseStatus, Project};

/// Filter criteria for the project list. Empty/`None` fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of name or sale code.
    pub search: String,
    /// Exact owner.
    pub owner: Option<String>,
    pub level: Option<Level>,
    /// At least one phase with this status.
    pub status: Option<PhaseStatus>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.owner.as_deref().is_none_or(str::is_empty)
            && self.level.is_none()
            && self.status.is_none()
    }

    pub fn matches(&self, project: &Project) -> bool {
        self.matches_search(project)
            && self.matches_owner(project)
            && self.level.is_none_or(|l| project.level == Some(l))
            && self.status.is_none_or(|s| project.has_status(s))
    }

    fn matches_search(&self, project: &Project) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        project.name.to_lowercase().contains(&needle)
            || project
                .code_sale
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(&needle))
    }

    fn matches_owner(&self, project: &Project) -> bool {
        match self.owner.as_deref() {
            None | Some("") => true,
            Some(owner) => project.owner.as_deref() == Some(owner),
        }
    }
}

/// Projects matching `criteria`, in list order.
pub fn filter_projects<'a>(projects: &'a [Project], criteria: &FilterCriteria) -> Vec<&'a Project> {
    projects.iter().filter(|p| criteria.matches(p)).collect()
}

/// Distinct non-blank owners in first-seen order.
pub fn distinct_owners(projects: &[Project]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for owner in projects.iter().filter_map(|p| p.owner.as_deref()) {
        if owner.trim().is_empty() || out.iter().any(|o| o == owner) {
            continue;
        }
        out.push(owner.to_string());
    }
    out
}
