pub mod student;

pub use student::{SharedRegistry, Student, StudentError, StudentRegistry};
