use anyhow::{Context, Result};
use std::cmp::Ordering;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;


pub const MAX_HISTORY: usize = 100;
pub const LEADERBOARD_SIZE: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub name: String,
    pub score: f32,
}

/// Append-only log of finished sessions, one `name score` pair per line.
/// Entries are never edited or deleted.
#[derive(Clone, Debug)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> HistoryStore {
        HistoryStore { path: path.into() }
    }

    pub fn append(&self, name: &str, score: f32) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Could not open history log at {}", self.path.display()))?;
        writeln!(file, "{} {}", name, score)
            .with_context(|| format!("Could not write to history log at {}", self.path.display()))?;
        Ok(())
    }

    /// Re-reads the whole log. A missing file is an empty history. The scan
    /// stops at the first line that does not parse as a `name score` pair,
    /// and at most the first `MAX_HISTORY` entries are returned.
    pub fn load_all(&self) -> Vec<HistoryEntry> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(_) => return Vec::new(),
        };
        let mut entries = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };
            match Self::parse_entry(&line) {
                Some(entry) => entries.push(entry),
                None => break,
            }
            if entries.len() >= MAX_HISTORY {
                break;
            }
        }
        entries
    }

    /// Highest scores first. The sort is stable so equal scores keep their
    /// append order.
    pub fn top_n(&self, n: usize) -> Vec<HistoryEntry> {
        let mut entries = self.load_all();
        entries.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        entries.truncate(n);
        entries
    }

    fn parse_entry(line: &str) -> Option<HistoryEntry> {
        let mut fields = line.split_whitespace();
        let name = fields.next()?.to_owned();
        let score = fields.next()?.parse::<f32>().ok()?;
        Some(HistoryEntry { name, score })
    }
}
