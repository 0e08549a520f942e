use crate::game::quiz::{AnswerResult, Question, QuizError, Summary};

#[cfg(test)]
pub mod mock;
pub mod terminal;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    AnswerReveal(Question, AnswerResult),
    CannotBuildQuiz(QuizError),
    QuestionBegins {
        index: usize,
        total: usize,
        question: Question,
    },
    QuizResults(Summary),
}

pub trait GameOutput {
    fn say(&self, message: &Message);
}
