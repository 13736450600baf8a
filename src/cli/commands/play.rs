//! Play command - Interactive game on the terminal

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    GameSession, SessionConfig,
    cli::{
        commands::parse_automated,
        output::{describe_outcome, write_board},
    },
};

#[derive(Parser, Debug)]
#[command(about = "Play a game on the terminal")]
pub struct PlayArgs {
    /// JSON session config; the flags below override its fields
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Name of the first player (plays X)
    #[arg(long)]
    pub player_one: Option<String>,

    /// Name of the second player (plays O)
    #[arg(long)]
    pub player_two: Option<String>,

    /// Which player the computer controls: `one`, `two` or `none`
    #[arg(long, short = 'a')]
    pub automated: Option<String>,
}

/// A line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Move { row: usize, column: usize },
    Restart,
    Quit,
}

fn parse_command(line: &str) -> std::result::Result<Command, String> {
    match line.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        "r" | "restart" => return Ok(Command::Restart),
        _ => {}
    }

    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();
    match parts.as_slice() {
        [row, column] => match (row.parse::<usize>(), column.parse::<usize>()) {
            (Ok(row), Ok(column)) => Ok(Command::Move { row, column }),
            _ => Err(format!("Could not read '{line}' as 'row column'")),
        },
        _ => Err(format!(
            "Unknown input '{line}'. Enter 'row column' (0-2 each), 'restart' or 'quit'"
        )),
    }
}

/// Default setup is a human against the computer playing O.
fn build_config(args: &PlayArgs) -> Result<SessionConfig> {
    let mut config = match &args.config {
        Some(path) => SessionConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => SessionConfig::new("Human", "Computer").with_automated(Some(1)),
    };

    if let Some(name) = &args.player_one {
        config.player_one = name.clone();
    }
    if let Some(name) = &args.player_two {
        config.player_two = name.clone();
    }
    if let Some(value) = &args.automated {
        config.automated = parse_automated(value)?;
    }

    Ok(config)
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = build_config(&args)?;
    let mut session = GameSession::from_config(&config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut session, stdin.lock(), stdout.lock())
}

/// Drive a session from line-based input until it ends or the player quits.
pub fn run<R: BufRead, W: Write>(session: &mut GameSession, input: R, mut out: W) -> Result<()> {
    start_game(session, &mut out)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_command(line) {
            Ok(Command::Quit) => break,
            Ok(Command::Restart) => {
                session.restart();
                start_game(session, &mut out)?;
            }
            Ok(Command::Move { row, column }) => match session.apply_move(row, column) {
                Ok(_) => {
                    show(session, &mut out)?;
                    if session.is_terminal() {
                        writeln!(out, "Type 'restart' to play again or 'quit' to leave")?;
                    }
                }
                Err(err) if err.is_illegal_move() => writeln!(out, "{err}")?,
                Err(err) => return Err(err.into()),
            },
            Err(message) => writeln!(out, "{message}")?,
        }
    }

    Ok(())
}

fn start_game(session: &mut GameSession, out: &mut impl Write) -> Result<()> {
    if session.is_automated_turn() {
        session.play_automated_turn()?;
    }
    show(session, out)?;
    Ok(())
}

fn show(session: &GameSession, out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    write_board(out, session.board())?;
    writeln!(out, "{}", describe_outcome(session))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::{Mark, Outcome, create_session};

    fn play(session: &mut GameSession, input: &str) -> String {
        let mut out = Vec::new();
        run(session, Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(
            parse_command("1 2"),
            Ok(Command::Move { row: 1, column: 2 })
        );
        assert_eq!(
            parse_command("0,1"),
            Ok(Command::Move { row: 0, column: 1 })
        );
        assert_eq!(parse_command("Restart"), Ok(Command::Restart));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert!(parse_command("a b").is_err());
        assert!(parse_command("1 2 3").is_err());
    }

    #[test]
    fn test_run_against_computer() {
        let mut session = create_session("Ada", "Computer", Some(1)).unwrap();
        let text = play(&mut session, "1 1\nquit\n2 2\n");

        assert_eq!(session.board().occupied_count(), 2);
        assert_eq!(session.board().cell_at(0, 0).unwrap().mark(), Mark::O);
        assert!(text.contains("Ada (X) to move"));
    }

    #[test]
    fn test_run_reports_illegal_moves() {
        let mut session = create_session("Ada", "Grace", None).unwrap();
        let text = play(&mut session, "1 1\n1 1\n5 5\nhello\n");

        assert_eq!(session.board().occupied_count(), 1);
        assert!(text.contains("already occupied"));
        assert!(text.contains("off the board"));
        assert!(text.contains("Unknown input 'hello'"));
    }

    #[test]
    fn test_run_plays_automated_opening_and_restart() {
        let mut session = create_session("Computer", "Ada", Some(0)).unwrap();
        play(&mut session, "restart\n");

        assert_eq!(session.board().occupied_count(), 1);
        assert_eq!(session.board().cell_at(0, 0).unwrap().mark(), Mark::X);
        assert_eq!(session.outcome(), &Outcome::InProgress);
    }

    #[test]
    fn test_build_config_overrides() {
        let args = PlayArgs {
            config: None,
            player_one: Some("Ada".to_string()),
            player_two: None,
            automated: Some("none".to_string()),
        };
        let config = build_config(&args).unwrap();
        assert_eq!(config.player_one, "Ada");
        assert_eq!(config.player_two, "Computer");
        assert_eq!(config.automated, None);
    }
}
