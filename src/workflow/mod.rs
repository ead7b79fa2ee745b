pub mod quiz_session;
pub mod reconcile;

pub use quiz_session::{QuizSession, SessionState};
pub use reconcile::{reconcile, QuestionFeedback};
