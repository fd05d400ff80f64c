pub use self::roster::{Roster, StudentPatch};
pub use self::student::{PASSING_AVERAGE, Status, Student, StudentId, StudentSummary};

mod roster;
mod student;
