pub mod catalog;
pub mod question;
mod questions;

pub use catalog::{missing_required, question, questions_for};
pub use question::{InputKind, QuestionDefinition};
