use std::fmt;

use crate::game::quiz::State;
use crate::output::{GameOutput, Message};


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Feedback {
    Excellent,
    Great,
    Good,
    NeedsWork,
}

impl Feedback {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Feedback::Excellent
        } else if percentage >= 70.0 {
            Feedback::Great
        } else if percentage >= 50.0 {
            Feedback::Good
        } else {
            Feedback::NeedsWork
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tier = match self {
            Feedback::Excellent => "excellent",
            Feedback::Great => "great",
            Feedback::Good => "good",
            Feedback::NeedsWork => "needs work",
        };
        write!(f, "{}", tier)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Summary {
    pub score: u32,
    pub total_questions: usize,
    pub elapsed_seconds: u64,
}

impl Summary {
    pub fn percentage(&self) -> f64 {
        if self.total_questions == 0 {
            return 0.0;
        }
        self.score as f64 / self.total_questions as f64 * 100.0
    }

    pub fn feedback(&self) -> Feedback {
        Feedback::from_percentage(self.percentage())
    }

    pub fn average_seconds_per_question(&self) -> u64 {
        if self.total_questions == 0 {
            return 0;
        }
        self.elapsed_seconds / self.total_questions as u64
    }
}

/// Renders seconds as `m:ss`.
pub fn format_time(total_seconds: u64) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

pub struct ResultsState<O> {
    summary: Summary,
    output: O,
}

impl<O> ResultsState<O> {
    pub fn new(summary: Summary, output: O) -> Self {
        ResultsState { summary, output }
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }
}

impl<O: GameOutput> State for ResultsState<O> {
    fn on_begin(&mut self) {
        self.output.say(&Message::QuizResults(self.summary));
    }

    fn on_end(&mut self) {}

    fn is_over(&self) -> bool {
        false
    }
}
