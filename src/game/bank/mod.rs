use anyhow::{Context, Result};
use itertools::Itertools;
use std::fs;
use std::path::Path;

pub mod question;


pub use question::{Label, Question};

pub const MAX_QUESTIONS: usize = 100;

/// Ordered set of questions loaded for one run of the game.
///
/// Question files are flat text: each question spans exactly 6 lines
/// (prompt, options A through D, then a marker line whose first character
/// names the correct option).
#[derive(Clone, Debug, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn load(source: &Path) -> Result<QuestionBank> {
        let content = fs::read_to_string(source)
            .with_context(|| format!("Could not read question bank at {}", source.display()))?;
        Ok(Self::parse(&content))
    }

    /// Greedily consumes 6-line blocks from the start of the source.
    /// Malformed blocks are skipped, a trailing partial block is dropped.
    pub fn parse(source: &str) -> QuestionBank {
        let mut questions = Vec::new();
        for block in &source.lines().chunks(6) {
            let block: Vec<&str> = block.collect();
            if block.len() < 6 {
                break;
            }
            match Self::parse_block(&block) {
                Some(question) => {
                    questions.push(question);
                    if questions.len() >= MAX_QUESTIONS {
                        break;
                    }
                }
                None => log::debug!("Skipping malformed question block: {:?}", block[0]),
            }
        }
        QuestionBank { questions }
    }

    fn parse_block(block: &[&str]) -> Option<Question> {
        let marker = block[5].chars().next()?;
        let correct = Label::from_char(marker)?;
        Some(Question {
            prompt: block[0].to_owned(),
            options: [
                block[1].to_owned(),
                block[2].to_owned(),
                block[3].to_owned(),
                block[4].to_owned(),
            ],
            correct,
        })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}
