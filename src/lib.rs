//! In-memory management of students, their grades and derived rankings.

pub mod config;
pub mod display;
pub mod error;
pub mod menu;
pub mod model;
pub mod stats;

pub use error::{GradeError, RosterError};
pub use model::{Roster, Status, Student, StudentId, StudentPatch, StudentSummary};
pub use stats::ClassStatistics;
