use tempfile::{tempdir, TempDir};

use super::*;
use crate::output::mock::MockGameOutput;

fn bank_of(question_count: usize) -> QuestionBank {
    let source: String = (0..question_count)
        .map(|i| {
            format!(
                "Question {}?\nfirst\nsecond\nthird\nfourth\n{}\n",
                i + 1,
                correct_answer(i)
            )
        })
        .collect();
    QuestionBank::parse(&source)
}

fn correct_answer(question_index: usize) -> char {
    Label::ALL[question_index % 4].as_char()
}

fn wrong_answer(question_index: usize) -> char {
    Label::ALL[(question_index + 1) % 4].as_char()
}

struct ContextBuilder {
    question_count: usize,
}

impl ContextBuilder {
    fn new() -> Self {
        ContextBuilder { question_count: 3 }
    }

    fn question_count(mut self, question_count: usize) -> Self {
        self.question_count = question_count;
        self
    }

    fn build(self) -> Context {
        let dir = tempdir().unwrap();
        let bank = bank_of(self.question_count);
        let history = HistoryStore::new(dir.path().join("history.txt"));
        let output = MockGameOutput::new();
        let session = Session::new(bank.clone(), history.clone(), output.clone()).unwrap();
        Context {
            session,
            bank,
            history,
            output,
            _dir: dir,
        }
    }
}

struct Context {
    session: Session<MockGameOutput>,
    bank: QuestionBank,
    history: HistoryStore,
    output: MockGameOutput,
    _dir: TempDir,
}

#[test]
fn rejects_empty_bank() {
    let dir = tempdir().unwrap();
    let history = HistoryStore::new(dir.path().join("history.txt"));
    assert!(Session::new(bank_of(0), history, MockGameOutput::new()).is_err());
}

#[test]
fn rejects_invalid_names() {
    let mut ctx = ContextBuilder::new().build();
    assert!(ctx.session.provide_name("").is_err());
    assert!(ctx.session.provide_name("alice99").is_err());
    assert!(ctx.session.provide_name("mary jane").is_err());
    assert_eq!(*ctx.session.phase(), Phase::AwaitingName);
}

#[test]
fn accepting_a_name_announces_the_first_question() {
    let mut ctx = ContextBuilder::new().build();
    ctx.session.provide_name("Alice").unwrap();
    let expected = Message::QuestionBegins(1, ctx.bank.get(0).unwrap().clone());
    assert_eq!(ctx.output.flush(), [expected]);
}

#[test]
fn folds_accented_names_to_ascii() {
    let mut ctx = ContextBuilder::new().build();
    ctx.session.provide_name("Zoé").unwrap();
}

#[test]
fn answering_before_name_entry_errs() {
    let mut ctx = ContextBuilder::new().build();
    assert!(ctx.session.answer('a').is_err());
    assert!(ctx.session.use_hint().is_err());
}

#[test]
fn perfect_run_completes_with_full_score() {
    let mut ctx = ContextBuilder::new().question_count(3).build();
    ctx.session.provide_name("Alice").unwrap();
    for i in 0..3 {
        let result = ctx.session.answer(correct_answer(i)).unwrap();
        assert!(result.is_correct);
    }

    assert!(ctx.session.is_over());
    assert_eq!(ctx.session.score(), 3.0);
    assert_eq!(*ctx.session.phase(), Phase::Completed(3.0));
    assert!(ctx.output.contains_message(&Message::GameComplete(3.0)));

    let entries = ctx.history.load_all();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "Alice");
    assert_eq!(entries[0].score, 3.0);
}

#[test]
fn wrong_answer_ends_the_session() {
    let mut ctx = ContextBuilder::new().question_count(3).build();
    ctx.session.provide_name("Bob").unwrap();
    ctx.session.answer(correct_answer(0)).unwrap();
    let result = ctx.session.answer(wrong_answer(1)).unwrap();

    assert!(!result.is_correct);
    assert_eq!(ctx.session.score(), 1.0);
    assert_eq!(*ctx.session.phase(), Phase::GameOver(1.0));
    assert!(ctx.session.current_question().is_none());
    assert!(ctx
        .output
        .contains_message(&Message::GuessIncorrect(ctx.bank.get(1).unwrap().correct)));
    assert!(ctx.output.contains_message(&Message::GameOver(1.0)));

    let entries = ctx.history.load_all();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].score, 1.0);
}

#[test]
fn answers_after_game_over_err() {
    let mut ctx = ContextBuilder::new().question_count(2).build();
    ctx.session.provide_name("Bob").unwrap();
    ctx.session.answer(wrong_answer(0)).unwrap();
    assert!(ctx.session.answer(correct_answer(0)).is_err());
    assert_eq!(ctx.history.load_all().len(), 1);
}

#[test]
fn hint_halves_the_reward_for_that_question_only() {
    let mut ctx = ContextBuilder::new().question_count(2).build();
    ctx.session.provide_name("Carol").unwrap();

    let revealed = ctx.session.use_hint().unwrap();
    assert_eq!(revealed, ctx.bank.get(0).unwrap().correct);
    let result = ctx.session.answer(correct_answer(0)).unwrap();
    assert_eq!(result.score_delta, 0.5);

    let result = ctx.session.answer(correct_answer(1)).unwrap();
    assert_eq!(result.score_delta, 1.0);

    assert_eq!(*ctx.session.phase(), Phase::Completed(1.5));
    assert_eq!(ctx.history.load_all()[0].score, 1.5);
}

#[test]
fn hint_does_not_advance_the_session() {
    let mut ctx = ContextBuilder::new().build();
    ctx.session.provide_name("Carol").unwrap();
    let before = ctx.session.current_question().unwrap().clone();
    ctx.session.use_hint().unwrap();
    assert_eq!(*ctx.session.current_question().unwrap(), before);
}

#[test]
fn hint_is_usable_once_per_question() {
    let mut ctx = ContextBuilder::new().question_count(2).build();
    ctx.session.provide_name("Carol").unwrap();
    ctx.session.use_hint().unwrap();
    assert!(ctx.session.use_hint().is_err());

    // A fresh question gets a fresh hint.
    ctx.session.answer(correct_answer(0)).unwrap();
    assert!(ctx.session.use_hint().is_ok());
}

#[test]
fn wrong_answer_after_hint_ends_the_session() {
    let mut ctx = ContextBuilder::new().question_count(2).build();
    ctx.session.provide_name("Dave").unwrap();
    ctx.session.use_hint().unwrap();
    ctx.session.answer(wrong_answer(0)).unwrap();

    assert_eq!(*ctx.session.phase(), Phase::GameOver(0.0));
    assert_eq!(ctx.history.load_all()[0].score, 0.0);
}

#[test]
fn answers_are_case_insensitive() {
    let mut ctx = ContextBuilder::new().question_count(1).build();
    ctx.session.provide_name("Eve").unwrap();
    let choice = correct_answer(0).to_ascii_lowercase();
    let result = ctx.session.answer(choice).unwrap();
    assert!(result.is_correct);
}

#[test]
fn session_without_answers_records_nothing() {
    let mut ctx = ContextBuilder::new().build();
    ctx.session.provide_name("Frank").unwrap();
    assert!(ctx.history.load_all().is_empty());
}

#[test]
fn advancing_announces_the_next_question() {
    let mut ctx = ContextBuilder::new().question_count(2).build();
    ctx.session.provide_name("Grace").unwrap();
    ctx.output.flush();
    ctx.session.answer(correct_answer(0)).unwrap();

    let expected = Message::QuestionBegins(2, ctx.bank.get(1).unwrap().clone());
    assert!(ctx.output.contains_message(&expected));
}
