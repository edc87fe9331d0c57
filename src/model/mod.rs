pub use self::roster::RosterResponse;
pub use self::student::{MISSING_POINTS, Student, StudentId};

mod roster;
mod student;
