use thiserror::Error;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum QuizError {
    #[error("A quiz needs at least {required} countries but the catalog only has {available}")]
    InsufficientCatalog { required: usize, available: usize },
    #[error("Could only find {found} of {required} distinct wrong answers for `{country_id}`")]
    InsufficientDistractorPool {
        country_id: String,
        required: usize,
        found: usize,
    },
    #[error("Cannot start a quiz without questions")]
    EmptySession,
}
