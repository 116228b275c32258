use anyhow::{anyhow, Context, Result};

use crate::game::bank::{Label, Question, QuestionBank};
use crate::game::player;
use crate::history::HistoryStore;
use crate::output::{GameOutput, Message};

#[cfg(test)]
mod tests;

const FULL_SCORE_VALUE: f32 = 1.0;
const HINT_SCORE_VALUE: f32 = 0.5;

#[derive(Clone, Debug, PartialEq)]
pub enum Phase {
    AwaitingName,
    InProgress(ProgressState),
    Completed(f32),
    GameOver(f32),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressState {
    question_index: usize,
    score: f32,
    hint_used: bool,
}

#[derive(Clone, Debug)]
pub struct GuessResult {
    pub is_correct: bool,
    pub score_delta: f32,
}

/// One quiz attempt by a single player, from name entry to termination.
///
/// The first wrong answer ends the session. Reaching a terminal phase
/// records the result in the history log exactly once; a session that never
/// produced an answer records nothing.
pub struct Session<O: GameOutput> {
    bank: QuestionBank,
    history: HistoryStore,
    output: O,
    player_name: Option<String>,
    current_phase: Phase,
}

impl<O: GameOutput> Session<O> {
    pub fn new(bank: QuestionBank, history: HistoryStore, output: O) -> Result<Session<O>> {
        if bank.is_empty() {
            return Err(anyhow!("No questions loaded"));
        }
        Ok(Session {
            bank,
            history,
            output,
            player_name: None,
            current_phase: Phase::AwaitingName,
        })
    }

    pub fn provide_name(&mut self, raw: &str) -> Result<()> {
        match self.current_phase {
            Phase::AwaitingName => (),
            _ => return Err(anyhow!("A player name was already provided")),
        }
        let name = player::sanitize_name(raw)?;
        self.player_name = Some(name);
        self.set_current_phase(Phase::InProgress(ProgressState {
            question_index: 0,
            score: 0.0,
            hint_used: false,
        }));
        Ok(())
    }

    /// Reveals the correct label and halves the reward for the answer that
    /// follows on this question. Usable once per question; does not advance
    /// the session by itself.
    pub fn use_hint(&mut self) -> Result<Label> {
        let state = match &mut self.current_phase {
            Phase::InProgress(state) => state,
            _ => return Err(anyhow!("There is no active question")),
        };
        if state.hint_used {
            return Err(anyhow!("The 50/50 help was already used on this question"));
        }
        state.hint_used = true;
        let index = state.question_index;
        let correct = self
            .bank
            .get(index)
            .context("Question index out of bounds")?
            .correct;
        self.output.say(&Message::HintReveal(correct));
        Ok(correct)
    }

    /// Evaluates a single-character answer against the current question.
    /// Anything that is not the correct label, case-insensitively, is a
    /// wrong answer and ends the session.
    pub fn answer(&mut self, choice: char) -> Result<GuessResult> {
        let state = match &self.current_phase {
            Phase::InProgress(state) => state.clone(),
            _ => return Err(anyhow!("There is no active question")),
        };
        let question = self
            .bank
            .get(state.question_index)
            .context("Question index out of bounds")?;
        let is_correct = question.is_guess_correct(choice);
        let correct = question.correct;
        let score_delta = match (is_correct, state.hint_used) {
            (false, _) => 0.0,
            (true, true) => HINT_SCORE_VALUE,
            (true, false) => FULL_SCORE_VALUE,
        };

        if is_correct {
            let score = state.score + score_delta;
            self.output.say(&Message::GuessCorrect(score_delta));
            let next_index = state.question_index + 1;
            if next_index >= self.bank.len() {
                self.output.say(&Message::GameComplete(score));
                self.finalize(Phase::Completed(score), score);
            } else {
                self.set_current_phase(Phase::InProgress(ProgressState {
                    question_index: next_index,
                    score,
                    hint_used: false,
                }));
            }
        } else {
            self.output.say(&Message::GuessIncorrect(correct));
            self.output.say(&Message::GameOver(state.score));
            self.finalize(Phase::GameOver(state.score), state.score);
        }

        Ok(GuessResult {
            is_correct,
            score_delta,
        })
    }

    pub fn is_over(&self) -> bool {
        match self.current_phase {
            Phase::Completed(_) | Phase::GameOver(_) => true,
            _ => false,
        }
    }

    pub fn score(&self) -> f32 {
        match &self.current_phase {
            Phase::AwaitingName => 0.0,
            Phase::InProgress(state) => state.score,
            Phase::Completed(score) | Phase::GameOver(score) => *score,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.current_phase
    }

    pub fn current_question(&self) -> Option<&Question> {
        match &self.current_phase {
            Phase::InProgress(state) => self.bank.get(state.question_index),
            _ => None,
        }
    }

    fn set_current_phase(&mut self, phase: Phase) {
        self.current_phase = phase;
        if let Phase::InProgress(state) = &self.current_phase {
            if let Some(question) = self.bank.get(state.question_index) {
                let message = Message::QuestionBegins(state.question_index + 1, question.clone());
                self.output.say(&message);
            }
        }
    }

    fn finalize(&mut self, phase: Phase, score: f32) {
        self.current_phase = phase;
        if let Some(name) = &self.player_name {
            if let Err(err) = self.history.append(name, score) {
                log::warn!("Could not record session result: {:#}", err);
                self.output.say(&Message::HistorySaveFailed);
            }
        }
    }
}
