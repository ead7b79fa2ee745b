pub mod answer;
pub mod question;
pub mod resource;

pub use answer::{Answer, AnswerSheet, QuestionResult, SubmitOutcome};
pub use question::{Question, QuestionListResponse};
pub use resource::{Resource, ResourceListResponse};
