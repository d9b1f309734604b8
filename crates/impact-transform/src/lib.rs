pub mod answers;
pub mod row;

pub use answers::{SubmittedAnswers, SubmittedValue};
pub use row::build_row;
