//! Parse text commands typed at the prompt
//!
//! Agent commands name the agent first (`Zug attack Pat`); world commands
//! start with a keyword (`status`, `go`, `create Zug Soldier 0 0`).

use crate::core::error::{Result, SimError};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Attack { agent: String, target: String },
    Stop { agent: String },
    Move { agent: String, x: f64, y: f64 },
    Describe { agent: String },
    Status,
    /// One tick
    Go,
    Run(u32),
    Create {
        name: String,
        kind: String,
        x: f64,
        y: f64,
    },
    Structure { name: String, x: f64, y: f64 },
    Quit,
}

fn number<T: std::str::FromStr>(word: &str, line: &str) -> Result<T> {
    word.parse()
        .map_err(|_| SimError::Parse(format!("expected a number, got '{}' in '{}'", word, line)))
}

pub fn parse_command(line: &str) -> Result<Command> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let parse_error = || SimError::Parse(line.trim().to_string());

    let command = match words.as_slice() {
        ["quit" | "q"] => Command::Quit,
        ["status" | "s"] => Command::Status,
        ["go" | "tick" | "t"] => Command::Go,
        ["run", n] => Command::Run(number(n, line)?),
        ["describe", agent] => Command::Describe {
            agent: agent.to_string(),
        },
        ["create", name, kind, x, y] => Command::Create {
            name: name.to_string(),
            kind: kind.to_string(),
            x: number(x, line)?,
            y: number(y, line)?,
        },
        ["structure", name, x, y] => Command::Structure {
            name: name.to_string(),
            x: number(x, line)?,
            y: number(y, line)?,
        },
        [agent, "attack", target] => Command::Attack {
            agent: agent.to_string(),
            target: target.to_string(),
        },
        [agent, "stop"] => Command::Stop {
            agent: agent.to_string(),
        },
        [agent, "move", x, y] => Command::Move {
            agent: agent.to_string(),
            x: number(x, line)?,
            y: number(y, line)?,
        },
        _ => return Err(parse_error()),
    };
    Ok(command)
}
