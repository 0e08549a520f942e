use itertools::Itertools;
use std::sync::Arc;

use crate::game::catalog::Catalog;
use crate::game::quiz::{format_time, Feedback, QuestionMode, Selection};
use crate::output::{GameOutput, Message};

#[derive(Clone, Debug)]
pub struct TerminalOutput {
    catalog: Arc<Catalog>,
    mode: QuestionMode,
}

impl TerminalOutput {
    pub fn new(catalog: Arc<Catalog>, mode: QuestionMode) -> Self {
        TerminalOutput { catalog, mode }
    }

    fn country_name(&self, id: &str) -> String {
        self.catalog
            .find(id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| id.to_owned())
    }

    fn interpret_message(&self, message: &Message) -> String {
        use Message::*;
        match message {
            QuestionBegins {
                index,
                total,
                question,
            } => {
                let mut text = format!("❓ Question {}/{}\n", index + 1, total);
                if self.mode == QuestionMode::Flags {
                    if let Some(country) = self.catalog.find(&question.country_id) {
                        text += &format!("{}\n", country.flag);
                    }
                }
                text += &question.prompt;
                if self.mode == QuestionMode::Locations {
                    text += "\nType the name of the country you would click on the map.";
                } else {
                    let options = question
                        .options
                        .iter()
                        .enumerate()
                        .map(|(i, option)| format!("  {}. {}", i + 1, option))
                        .join("\n");
                    text += &format!("\n{}", options);
                }
                text
            }
            AnswerReveal(question, answer_result) => {
                let picked = match &answer_result.selection {
                    Selection::Choice(option) => option.clone(),
                    Selection::Region(id) => self.country_name(id),
                };
                if answer_result.is_correct {
                    format!("✅ {} is correct! Press `n` for the next question.", picked)
                } else {
                    format!(
                        "❌ {} is wrong, the answer was {}. Press `n` for the next question.",
                        picked, question.correct_answer
                    )
                }
            }
            QuizResults(summary) => {
                let feedback = match summary.feedback() {
                    Feedback::Excellent => "Excellent! You're a geography expert!",
                    Feedback::Great => "Great job! You know your European geography well.",
                    Feedback::Good => "Good effort! Keep learning about Europe.",
                    Feedback::NeedsWork => "Keep practicing to improve your knowledge of Europe.",
                };
                format!(
                    "🎊 Quiz complete! You scored {} / {} ({:.0}%)\n{}\n🕒 Total time {}, {} per question\nPress `r` to take another quiz.",
                    summary.score,
                    summary.total_questions,
                    summary.percentage(),
                    feedback,
                    format_time(summary.elapsed_seconds),
                    format_time(summary.average_seconds_per_question())
                )
            }
            CannotBuildQuiz(error) => format!("⚠️ Cannot build a quiz: {}", error),
        }
    }
}

impl GameOutput for TerminalOutput {
    fn say(&self, message: &Message) {
        println!("{}\n", self.interpret_message(message));
    }
}
