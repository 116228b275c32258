use crate::game::bank::{Label, Question};

#[cfg(test)]
pub mod mock;
pub mod terminal;

/// Everything the session engine wants the player to see. Formatting and
/// colors are the output implementation's business.
#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    QuestionBegins(usize, Question),
    GuessCorrect(f32),
    GuessIncorrect(Label),
    HintReveal(Label),
    GameComplete(f32),
    GameOver(f32),
    HistorySaveFailed,
}

pub trait GameOutput {
    fn say(&mut self, message: &Message);
}
