//! View-model logic: filtering, statistics, the edit form and the
//! controller that ties them to a backend.

pub mod filter;
pub mod form;
pub mod log;
pub mod stats;
pub mod view_model;

pub use filter::FilterCriteria;
pub use form::{FormMode, FormState, PhaseField, ProjectField};
pub use stats::Stats;
pub use view_model::{LoadTicket, ProjectViewModel};
