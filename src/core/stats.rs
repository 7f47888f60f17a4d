use crate::models::Project;
use serde::Serialize;

/// Summary counters over the unfiltered project list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    /// Every phase F.
    pub completed: usize,
    /// Some phase S or FD.
    pub delayed: usize,
}

pub fn compute_stats(projects: &[Project]) -> Stats {
    Stats {
        total: projects.len(),
        completed: projects.iter().filter(|p| p.is_completed()).count(),
        delayed: projects.iter().filter(|p| p.is_delayed()).count(),
    }
}
