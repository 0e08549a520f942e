use anyhow::anyhow;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

use crate::game::catalog::Country;
use crate::game::labels::Labels;
use crate::game::quiz::QuizError;


pub const OPTION_COUNT: usize = 4;

const CAPITAL_QUESTION: (&str, &str) = ("quiz.capitalQuestion", "What is the capital of {{country}}?");
const FLAG_QUESTION: (&str, &str) = ("quiz.flagQuestion", "Which country does this flag belong to?");
const LOCATION_QUESTION: (&str, &str) = ("quiz.locationQuestion", "Where is {{country}} on the map?");

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum QuestionMode {
    Capitals,
    Flags,
    Locations,
}

impl QuestionMode {
    fn answer_for(self, country: &Country, labels: &dyn Labels) -> String {
        match self {
            QuestionMode::Capitals => labels.capital_name(country),
            QuestionMode::Flags | QuestionMode::Locations => labels.country_name(country),
        }
    }

    fn prompt_for(self, country: &Country, labels: &dyn Labels) -> String {
        let (key, fallback) = match self {
            QuestionMode::Capitals => CAPITAL_QUESTION,
            QuestionMode::Flags => FLAG_QUESTION,
            QuestionMode::Locations => LOCATION_QUESTION,
        };
        labels.prompt(key, fallback, &labels.country_name(country))
    }
}

impl FromStr for QuestionMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_ref() {
            "capitals" => Ok(QuestionMode::Capitals),
            "flags" => Ok(QuestionMode::Flags),
            "locations" => Ok(QuestionMode::Locations),
            other => Err(anyhow!(
                "Unknown quiz type `{}`, expected capitals, flags or locations",
                other
            )),
        }
    }
}

impl fmt::Display for QuestionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuestionMode::Capitals => "capitals",
            QuestionMode::Flags => "flags",
            QuestionMode::Locations => "locations",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    pub prompt: String,
    pub correct_answer: String,
    pub options: Vec<String>,
    pub country_id: String,
}

impl Question {
    pub fn is_correct(&self, selection: &str) -> bool {
        self.correct_answer == selection
    }
}

/// Builds `min(sample_size, countries.len())` questions, one per randomly sampled country.
///
/// Wrong answers are drawn from a single shuffle of the other countries, so generation
/// always terminates. Question order is the sampling order.
pub fn generate<R: Rng + ?Sized>(
    countries: &[Country],
    mode: QuestionMode,
    sample_size: usize,
    labels: &dyn Labels,
    rng: &mut R,
) -> Result<Vec<Question>, QuizError> {
    if countries.len() < OPTION_COUNT {
        return Err(QuizError::InsufficientCatalog {
            required: OPTION_COUNT,
            available: countries.len(),
        });
    }

    let subjects: Vec<&Country> = countries
        .choose_multiple(rng, sample_size.min(countries.len()))
        .collect();

    subjects
        .into_iter()
        .map(|subject| build_question(countries, subject, mode, labels, rng))
        .collect()
}

fn build_question<R: Rng + ?Sized>(
    countries: &[Country],
    subject: &Country,
    mode: QuestionMode,
    labels: &dyn Labels,
    rng: &mut R,
) -> Result<Question, QuizError> {
    let correct_answer = mode.answer_for(subject, labels);

    let mut candidates: Vec<&Country> = countries.iter().filter(|c| c.id != subject.id).collect();
    candidates.shuffle(rng);

    let mut options = vec![correct_answer.clone()];
    for candidate in candidates {
        if options.len() == OPTION_COUNT {
            break;
        }
        let option = mode.answer_for(candidate, labels);
        if !options.contains(&option) {
            options.push(option);
        }
    }

    if options.len() < OPTION_COUNT {
        return Err(QuizError::InsufficientDistractorPool {
            country_id: subject.id.clone(),
            required: OPTION_COUNT - 1,
            found: options.len() - 1,
        });
    }

    options.shuffle(rng);

    Ok(Question {
        prompt: mode.prompt_for(subject, labels),
        correct_answer,
        options,
        country_id: subject.id.clone(),
    })
}
