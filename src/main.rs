use anyhow::{bail, Result};
use std::env;
use std::io::{self, Write};
use std::path::Path;

mod game;
mod history;
mod output;

use crate::game::bank::QuestionBank;
use crate::game::session::Session;
use crate::history::{HistoryStore, LEADERBOARD_SIZE};
use crate::output::terminal::{self, TerminalOutput};

const QUESTIONS_FILE: &str = "questions.txt";
const HISTORY_FILE: &str = "history.txt";

fn main() -> Result<()> {
    pretty_env_logger::init();
    terminal::clear_screen();

    let history = HistoryStore::new(HISTORY_FILE);

    let args: Vec<String> = env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--history" => {
                view_history(&history)?;
                return Ok(());
            }
            "--leaderboard" => {
                view_leaderboard(&history)?;
                return Ok(());
            }
            "--help" => {
                help()?;
                return Ok(());
            }
            other => {
                println!("Unknown argument: {}", other);
                terminal::print_usage(&args[0]);
                pause_and_clear()?;
            }
        }
    }

    let bank = load_bank();
    if bank.is_empty() {
        println!("No questions loaded. Please check '{}' file.", QUESTIONS_FILE);
        return Ok(());
    }

    loop {
        terminal::print_menu();
        let choice = prompt("Choose an option: ")?;
        match parse_menu_choice(&choice) {
            MenuChoice::Play => play_game(&bank, &history)?,
            MenuChoice::History => view_history(&history)?,
            MenuChoice::Leaderboard => view_leaderboard(&history)?,
            MenuChoice::Help => help()?,
            MenuChoice::Exit => {
                println!("Exiting... Goodbye!");
                break;
            }
            MenuChoice::OutOfRange => {
                println!("Invalid option. Redirecting to Help...");
                help()?;
            }
            MenuChoice::NotANumber => {
                println!("Invalid input. Redirecting to Help...");
                help()?;
            }
        }
    }

    Ok(())
}

#[derive(Debug, PartialEq)]
enum MenuChoice {
    Play,
    History,
    Leaderboard,
    Help,
    Exit,
    OutOfRange,
    NotANumber,
}

fn parse_menu_choice(input: &str) -> MenuChoice {
    match input.trim().parse::<u32>() {
        Ok(1) => MenuChoice::Play,
        Ok(2) => MenuChoice::History,
        Ok(3) => MenuChoice::Leaderboard,
        Ok(4) => MenuChoice::Help,
        Ok(5) => MenuChoice::Exit,
        Ok(_) => MenuChoice::OutOfRange,
        Err(_) => MenuChoice::NotANumber,
    }
}

fn load_bank() -> QuestionBank {
    match QuestionBank::load(Path::new(QUESTIONS_FILE)) {
        Ok(bank) => {
            log::info!("Loaded {} questions from {}", bank.len(), QUESTIONS_FILE);
            bank
        }
        Err(err) => {
            log::warn!("{:#}", err);
            terminal::print_error("Error opening questions file!");
            QuestionBank::default()
        }
    }
}

fn play_game(bank: &QuestionBank, history: &HistoryStore) -> Result<()> {
    terminal::clear_screen();
    terminal::print_title("Play Game");

    let mut session = match Session::new(bank.clone(), history.clone(), TerminalOutput) {
        Ok(session) => session,
        Err(err) => {
            terminal::print_error(&format!("Error: {}. Cannot start the game.", err));
            return pause_and_clear();
        }
    };

    loop {
        let name = prompt("Enter your name (letters only): ")?;
        match session.provide_name(name.trim_end()) {
            Ok(()) => break,
            Err(_) => terminal::print_error("Invalid input. Please use letters only."),
        }
    }

    while !session.is_over() {
        let choice = prompt_char("Your answer (A/B/C/D, or H for 50/50 help): ")?;
        if choice.eq_ignore_ascii_case(&'h') {
            match session.use_hint() {
                Ok(_) => {
                    let choice = prompt_char("Your answer (A/B/C/D): ")?;
                    if let Err(err) = session.answer(choice) {
                        log::warn!("{:#}", err);
                    }
                }
                Err(err) => terminal::print_error(&err.to_string()),
            }
        } else if let Err(err) = session.answer(choice) {
            log::warn!("{:#}", err);
        }
    }

    pause_and_clear()
}

fn view_history(history: &HistoryStore) -> Result<()> {
    terminal::clear_screen();
    terminal::print_history(&history.load_all());
    pause_and_clear()
}

fn view_leaderboard(history: &HistoryStore) -> Result<()> {
    terminal::clear_screen();
    terminal::print_leaderboard(&history.top_n(LEADERBOARD_SIZE));
    pause_and_clear()
}

fn help() -> Result<()> {
    terminal::clear_screen();
    terminal::print_help();
    pause_and_clear()
}

fn pause_and_clear() -> Result<()> {
    print!("\nPress ENTER to continue...");
    io::stdout().flush()?;
    read_line()?;
    terminal::clear_screen();
    Ok(())
}

fn prompt(text: &str) -> Result<String> {
    print!("{}", text);
    io::stdout().flush()?;
    read_line()
}

fn prompt_char(text: &str) -> Result<char> {
    loop {
        let line = prompt(text)?;
        if let Some(c) = line.trim().chars().next() {
            return Ok(c);
        }
    }
}

fn read_line() -> Result<String> {
    let mut line = String::new();
    let bytes = io::stdin().read_line(&mut line)?;
    if bytes == 0 {
        bail!("Input stream closed");
    }
    Ok(line)
}
