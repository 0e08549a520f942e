use anyhow::anyhow;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::sync::Arc;
use std::time::Duration;

use self::phase::*;
use self::stopwatch::{Stopwatch, TickSource};
use crate::game::catalog::Catalog;
use crate::game::labels::{Labels, Untranslated};
use crate::game::map::{self, Geography};
use crate::output::{GameOutput, Message};

pub use self::error::QuizError;
pub use self::generator::{Question, QuestionMode};
pub use self::phase::{format_time, AnswerResult, Feedback, Selection, Summary};
pub use self::settings::Settings;

mod error;
pub mod generator;
mod phase;
mod settings;
pub mod stopwatch;


trait State {
    fn on_begin(&mut self);
    fn on_end(&mut self);
    fn is_over(&self) -> bool;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionState {
    Loading,
    Active,
    Revealed,
    Complete,
}

enum Phase<O> {
    Loading,
    Question(QuestionState<O>),
    Results(ResultsState<O>),
}

impl<O: GameOutput> Phase<O> {
    fn get_state(&mut self) -> Option<&mut dyn State> {
        match self {
            Phase::Loading => None,
            Phase::Question(s) => Some(s),
            Phase::Results(s) => Some(s),
        }
    }
}

pub struct Quiz<O: GameOutput> {
    catalog: Arc<Catalog>,
    mode: QuestionMode,
    settings: Settings,
    labels: Arc<dyn Labels + Send + Sync>,
    rng: Box<dyn RngCore + Send>,
    questions: Vec<Question>,
    current_phase: Phase<O>,
    index: usize,
    score: u32,
    questions_answered: usize,
    stopwatch: Stopwatch,
    tick_source: Option<TickSource>,
    output: O,
}

impl<O: GameOutput + Clone> Quiz<O> {
    pub fn new(catalog: Arc<Catalog>, mode: QuestionMode, settings: Settings, output: O) -> Self {
        Quiz {
            catalog,
            mode,
            settings,
            labels: Arc::new(Untranslated),
            rng: Box::new(StdRng::from_entropy()),
            questions: Vec::new(),
            current_phase: Phase::Loading,
            index: 0,
            score: 0,
            questions_answered: 0,
            stopwatch: Stopwatch::new(),
            tick_source: None,
            output,
        }
    }

    pub fn with_rng<R: RngCore + Send + 'static>(mut self, rng: R) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn with_labels<L: Labels + Send + Sync + 'static>(mut self, labels: L) -> Self {
        self.labels = Arc::new(labels);
        self
    }

    pub fn state(&self) -> SessionState {
        match &self.current_phase {
            Phase::Loading => SessionState::Loading,
            Phase::Question(s) if s.is_over() => SessionState::Revealed,
            Phase::Question(_) => SessionState::Active,
            Phase::Results(_) => SessionState::Complete,
        }
    }

    pub fn is_over(&self) -> bool {
        self.state() == SessionState::Complete
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn mode(&self) -> QuestionMode {
        self.mode
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_question(&self) -> Option<&Question> {
        match &self.current_phase {
            Phase::Question(s) => Some(s.question()),
            _ => None,
        }
    }

    pub fn current_answer(&self) -> Option<&AnswerResult> {
        match &self.current_phase {
            Phase::Question(s) => s.answer(),
            _ => None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn questions_answered(&self) -> usize {
        self.questions_answered
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.stopwatch.elapsed_seconds()
    }

    pub fn summary(&self) -> Option<Summary> {
        match &self.current_phase {
            Phase::Results(s) => Some(*s.summary()),
            _ => None,
        }
    }

    fn set_current_phase(&mut self, phase: Phase<O>) {
        if let Some(state) = self.current_phase.get_state() {
            state.on_end();
        }

        self.current_phase = phase;
        debug!("Entering quiz phase: {:?}", self.state());

        if let Some(state) = self.current_phase.get_state() {
            state.on_begin();
        }
    }

    /// Generates a fresh set of questions and starts answering them.
    pub fn begin(&mut self) -> Result<(), QuizError> {
        let generated = generator::generate(
            self.catalog.countries(),
            self.mode,
            self.settings.sample_size,
            &*self.labels,
            &mut self.rng,
        );
        let started = generated.and_then(|questions| self.start(questions));
        if let Err(e) = &started {
            warn!("Could not build {} quiz: {}", self.mode, e);
            self.output.say(&Message::CannotBuildQuiz(e.clone()));
        }
        started
    }

    pub fn start(&mut self, questions: Vec<Question>) -> Result<(), QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptySession);
        }

        info!("Starting {} quiz with {} questions", self.mode, questions.len());
        self.questions = questions;
        self.index = 0;
        self.score = 0;
        self.questions_answered = 0;
        self.stopwatch.reset();
        self.tick_source = Some(self.stopwatch.start());
        self.begin_question();
        Ok(())
    }

    pub fn restart(&mut self) -> Result<(), QuizError> {
        self.stopwatch.reset();
        self.tick_source = None;
        self.questions.clear();
        self.set_current_phase(Phase::Loading);
        self.begin()
    }

    /// The source currently allowed to advance the stopwatch. Changes on every start and restart.
    pub fn tick_source(&self) -> Option<TickSource> {
        self.tick_source
    }

    pub fn tick(&mut self, dt: Duration) {
        if let Some(source) = self.tick_source {
            self.stopwatch.tick(&source, dt);
        }
    }

    pub fn answer(&mut self, selection: &str) -> Option<AnswerResult> {
        let answer_result = match &mut self.current_phase {
            Phase::Question(state) => state.select(selection),
            _ => Err(anyhow!("There is no active question")),
        };
        self.record(answer_result)
    }

    pub fn answer_on_map(&mut self, geography: &Geography) -> Option<AnswerResult> {
        let catalog = &self.catalog;
        let answer_result = match &mut self.current_phase {
            Phase::Question(state) => match catalog.find(&state.question().country_id) {
                Some(target) => {
                    let resolution = map::resolve(geography, target);
                    if resolution.is_resolved() && catalog.find(&resolution.resolved_id).is_none() {
                        Err(anyhow!("`{}` is not part of this quiz", resolution.resolved_id))
                    } else {
                        state.click(resolution)
                    }
                }
                None => Err(anyhow!(
                    "Country `{}` is missing from the catalog",
                    state.question().country_id
                )),
            },
            _ => Err(anyhow!("There is no active question")),
        };
        self.record(answer_result)
    }

    fn record(&mut self, answer_result: anyhow::Result<AnswerResult>) -> Option<AnswerResult> {
        match answer_result {
            Ok(answer_result) => {
                self.questions_answered += 1;
                if answer_result.is_correct {
                    self.score += 1;
                }
                Some(answer_result)
            }
            Err(e) => {
                debug!("Ignoring answer: {}", e);
                None
            }
        }
    }

    pub fn advance(&mut self) {
        if self.state() != SessionState::Revealed {
            debug!("Ignoring advance while {:?}", self.state());
            return;
        }
        if self.index + 1 < self.questions.len() {
            self.index += 1;
            self.begin_question();
        } else {
            self.complete();
        }
    }

    fn begin_question(&mut self) {
        let state = QuestionState::new(
            self.questions[self.index].clone(),
            self.index,
            self.questions.len(),
            self.output.clone(),
        );
        self.set_current_phase(Phase::Question(state));
    }

    fn complete(&mut self) {
        self.stopwatch.stop();
        self.tick_source = None;
        let summary = Summary {
            score: self.score,
            total_questions: self.questions.len(),
            elapsed_seconds: self.stopwatch.elapsed_seconds(),
        };
        info!(
            "Quiz complete: {}/{} in {}",
            summary.score,
            summary.total_questions,
            format_time(summary.elapsed_seconds)
        );
        self.set_current_phase(Phase::Results(ResultsState::new(
            summary,
            self.output.clone(),
        )));
    }
}
