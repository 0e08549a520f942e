use parking_lot::Mutex;
use std::sync::Arc;

pub mod catalog;
pub mod labels;
pub mod map;
pub mod quiz;

pub type QuizHandle<O> = Arc<Mutex<quiz::Quiz<O>>>;
