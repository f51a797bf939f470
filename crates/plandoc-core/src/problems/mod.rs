//! Problems document: entries, markdown parser/serializer, and file operations.

pub mod entry;
pub mod parser;
pub mod service;

pub use entry::{DEFAULT_SEVERITY, DEFAULT_STATUS, NewProblem, ProblemEntry};
pub use parser::{parse_problems, render_problem};
pub use service::{append_problem, load_problems};
