pub mod chat_model;
pub mod loaders;
pub mod question;

pub use chat_model::ChatModel;
pub use loaders::load_questions;
pub use question::{group_by_category, AnswerOutcome, AnsweredRecord, QuestionRecord};
