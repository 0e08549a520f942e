use anyhow::{anyhow, Result};

use crate::game::map::MapResolution;
use crate::game::quiz::generator::Question;
use crate::game::quiz::State;
use crate::output::{GameOutput, Message};

#[cfg(test)]
mod tests;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Selection {
    Choice(String),
    Region(String),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AnswerResult {
    pub selection: Selection,
    pub is_correct: bool,
}

pub struct QuestionState<O> {
    question: Question,
    index: usize,
    total: usize,
    answer: Option<AnswerResult>,
    output: O,
}

impl<O: GameOutput> QuestionState<O> {
    pub fn new(question: Question, index: usize, total: usize, output: O) -> Self {
        QuestionState {
            question,
            index,
            total,
            answer: None,
            output,
        }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn answer(&self) -> Option<&AnswerResult> {
        self.answer.as_ref()
    }

    pub fn select(&mut self, selection: &str) -> Result<AnswerResult> {
        self.ensure_unanswered()?;
        let is_correct = self.question.is_correct(selection);
        Ok(self.record(AnswerResult {
            selection: Selection::Choice(selection.to_owned()),
            is_correct,
        }))
    }

    pub fn click(&mut self, resolution: MapResolution) -> Result<AnswerResult> {
        self.ensure_unanswered()?;
        if !resolution.is_resolved() {
            return Err(anyhow!("Clicked shape has no name"));
        }
        Ok(self.record(AnswerResult {
            selection: Selection::Region(resolution.resolved_id),
            is_correct: resolution.is_correct,
        }))
    }

    fn ensure_unanswered(&self) -> Result<()> {
        if self.answer.is_some() {
            return Err(anyhow!("Question was already answered"));
        }
        Ok(())
    }

    fn record(&mut self, answer_result: AnswerResult) -> AnswerResult {
        self.answer = Some(answer_result.clone());
        self.output.say(&Message::AnswerReveal(
            self.question.clone(),
            answer_result.clone(),
        ));
        answer_result
    }
}

impl<O: GameOutput> State for QuestionState<O> {
    fn on_begin(&mut self) {
        self.output.say(&Message::QuestionBegins {
            index: self.index,
            total: self.total,
            question: self.question.clone(),
        });
    }

    fn on_end(&mut self) {}

    fn is_over(&self) -> bool {
        self.answer.is_some()
    }
}
