//! Fetch a roster of students from a remote endpoint and pick a random
//! sample of it.

pub mod config;
pub mod display;
pub mod error;
pub mod loader;
pub mod model;
pub mod sample;

pub use error::FetchError;
pub use loader::Loader;
pub use model::{RosterResponse, Student, StudentId};
pub use sample::{choose, sample};
