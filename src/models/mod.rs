//! Domain records exchanged with the backend: projects, phases, levels and status codes.

pub mod level;
pub mod phase;
pub mod project;

pub use level::Level;
pub use phase::{ActualDate, PHASE_COUNT, PHASE_NAMES, Phase, PhaseStatus};
pub use project::Project;
