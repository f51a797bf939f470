//! State document: model, markdown parser/serializer, and file operations.

pub mod document;
pub mod parser;
pub mod service;

pub use document::{PartialState, StateDocument, StateSection, StateSectionParseError};
pub use parser::{parse_state, serialize_state};
pub use service::{append_checkpoint, load_state, load_state_sections, save_state};
