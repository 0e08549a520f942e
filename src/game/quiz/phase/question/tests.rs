use super::*;
use crate::output::mock::MockGameOutput;

fn question() -> Question {
    Question {
        prompt: "What is the capital of Austria?".to_owned(),
        correct_answer: "Vienna".to_owned(),
        options: vec![
            "Berlin".to_owned(),
            "Vienna".to_owned(),
            "Riga".to_owned(),
            "Zagreb".to_owned(),
        ],
        country_id: "austria".to_owned(),
    }
}

fn state() -> (QuestionState<MockGameOutput>, MockGameOutput) {
    let output = MockGameOutput::new();
    (QuestionState::new(question(), 2, 10, output.clone()), output)
}

#[test]
fn announces_question() {
    let (mut state, output) = state();
    state.on_begin();
    assert_eq!(
        output.flush(),
        [Message::QuestionBegins {
            index: 2,
            total: 10,
            question: question(),
        }]
    );
}

#[test]
fn correct_selection() {
    let (mut state, output) = state();
    assert!(!state.is_over());
    let result = state.select("Vienna").unwrap();
    assert!(result.is_correct);
    assert_eq!(result.selection, Selection::Choice("Vienna".to_owned()));
    assert!(state.is_over());
    assert!(output.contains_message(&Message::AnswerReveal(question(), result)));
}

#[test]
fn selection_is_case_sensitive() {
    let (mut state, _output) = state();
    let result = state.select("vienna").unwrap();
    assert!(!result.is_correct);
}

#[test]
fn cannot_answer_twice() {
    let (mut state, output) = state();
    let first = state.select("Riga").unwrap();
    assert!(state.select("Vienna").is_err());
    assert!(state
        .click(MapResolution {
            is_correct: true,
            resolved_id: "austria".to_owned(),
        })
        .is_err());
    assert_eq!(state.answer(), Some(&first));
    assert_eq!(output.flush().len(), 1);
}

#[test]
fn click_uses_resolution() {
    let (mut state, _output) = state();
    let result = state
        .click(MapResolution {
            is_correct: false,
            resolved_id: "hungary".to_owned(),
        })
        .unwrap();
    assert!(!result.is_correct);
    assert_eq!(result.selection, Selection::Region("hungary".to_owned()));
    assert!(state.is_over());
}

#[test]
fn unresolved_click_leaves_question_open() {
    let (mut state, output) = state();
    assert!(state
        .click(MapResolution {
            is_correct: false,
            resolved_id: crate::game::map::UNRESOLVED_ID.to_owned(),
        })
        .is_err());
    assert!(!state.is_over());
    assert!(output.flush().is_empty());
}
