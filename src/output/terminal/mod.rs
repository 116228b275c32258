use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use std::io;

use crate::game::bank::Label;
use crate::history::HistoryEntry;
use crate::output::{GameOutput, Message};

/// Renders session messages to the terminal with the same palette the game
/// has always used: yellow prompts, blue options, green/red feedback.
pub struct TerminalOutput;

impl GameOutput for TerminalOutput {
    fn say(&mut self, message: &Message) {
        match message {
            Message::QuestionBegins(number, question) => {
                println!("\nQ{}: {}", number, question.prompt.as_str().yellow());
                for (label, option) in Label::ALL.iter().zip(question.options.iter()) {
                    println!("{}. {}", label, option.as_str().blue());
                }
            }
            Message::GuessCorrect(points) => {
                println!("{}", "CORRECT!".green());
                if (points - 1.0).abs() < f32::EPSILON {
                    println!("+1 point.");
                } else {
                    println!("+{} points.", points);
                }
            }
            Message::GuessIncorrect(correct) => {
                println!(
                    "{}",
                    format!("Wrong! The correct answer was {}.", correct).red()
                );
            }
            Message::HintReveal(correct) => {
                println!("50/50 Help: The correct answer is {}.", correct);
                println!("You now get 0.5 points if correct.");
            }
            Message::GameComplete(score) => {
                println!(
                    "\nCongratulations! You finished all questions. Total score: {} points.",
                    score
                );
            }
            Message::GameOver(score) => {
                println!("\nGame over! You scored {} points.", score);
            }
            Message::HistorySaveFailed => {
                println!("{}", "Error opening history file!".red());
            }
        }
    }
}

pub fn clear_screen() {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0)).ok();
}

pub fn print_title(title: &str) {
    println!("=== {} ===", title);
}

pub fn print_error(text: &str) {
    println!("{}", text.red());
}

pub fn print_menu() {
    print_title("Main Menu");
    let choices = ["Play Game", "Game History", "Leaderboard", "Help", "Exit"];
    for (index, choice) in choices.iter().enumerate() {
        println!("{}. {}", index + 1, choice.blue());
    }
}

pub fn print_history(entries: &[HistoryEntry]) {
    print_title("Game History");
    if entries.is_empty() {
        println!("No history found.");
    } else {
        for entry in entries {
            println!("Player: {}, Score: {}", entry.name, entry.score);
        }
    }
}

pub fn print_leaderboard(entries: &[HistoryEntry]) {
    print_title("Leaderboard");
    if entries.is_empty() {
        println!("No players yet.");
    } else {
        for (rank, entry) in entries.iter().enumerate() {
            println!(
                "{}. {} - {} points",
                rank + 1,
                entry.name.as_str().blue(),
                entry.score
            );
        }
    }
}

pub fn print_help() {
    print_title("Help");
    println!("1. Play Game: Answer quiz questions from file. One wrong answer = game over.");
    println!("2. Game History: See all past player scores.");
    println!("3. Leaderboard: View top 5 players with highest scores.");
    println!("4. Help: Shows this help menu.");
    println!("5. Exit: Quit the application.");
}

pub fn print_usage(program: &str) {
    println!("Usage: {} [OPTION]", program);
    println!("Options:");
    println!("  --history      View game history");
    println!("  --leaderboard  View leaderboard");
    println!("  --help         Show help menu");
}
