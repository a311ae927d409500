//! Console commands typed at the prompt or passed with `--script`.

use std::time::Duration;

use shared::{domain::HolderKind, error::CommandError};

pub const HELP_TEXT: &str = "\
commands:
  1 | live      set the observable value
  2 | state     set the state stream
  3 | shared    emit on the event stream
  4 | flow      collect a fresh cold sequence run
  rotate        destroy and recreate the screen
  status        print the store snapshot as JSON
  wait <ms>     pause before the next command
  help          show this list
  quit          exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    Trigger(HolderKind),
    Rotate,
    Status,
    Wait(Duration),
    Help,
    Quit,
}

impl ConsoleCommand {
    pub fn name(&self) -> &'static str {
        match self {
            ConsoleCommand::Trigger(kind) => kind.as_str(),
            ConsoleCommand::Rotate => "rotate",
            ConsoleCommand::Status => "status",
            ConsoleCommand::Wait(_) => "wait",
            ConsoleCommand::Help => "help",
            ConsoleCommand::Quit => "quit",
        }
    }
}

pub fn parse_command(input: &str) -> Result<ConsoleCommand, CommandError> {
    let lower = input.trim().to_ascii_lowercase();
    let mut words = lower.split_whitespace();
    let Some(word) = words.next() else {
        return Err(CommandError::Empty);
    };

    let command = match word {
        "1" | "live" | "livedata" | "observable" => {
            ConsoleCommand::Trigger(HolderKind::ObservableValue)
        }
        "2" | "state" | "stateflow" => ConsoleCommand::Trigger(HolderKind::StateStream),
        "3" | "shared" | "sharedflow" | "event" => ConsoleCommand::Trigger(HolderKind::EventStream),
        "4" | "flow" | "cold" => ConsoleCommand::Trigger(HolderKind::ColdSequence),
        "rotate" => ConsoleCommand::Rotate,
        "status" => ConsoleCommand::Status,
        "help" | "?" => ConsoleCommand::Help,
        "quit" | "exit" | "q" => ConsoleCommand::Quit,
        "wait" => {
            let argument = words.next().unwrap_or_default();
            let millis = argument
                .parse::<u64>()
                .map_err(|_| CommandError::InvalidArgument {
                    command: "wait",
                    argument: argument.to_string(),
                })?;
            ConsoleCommand::Wait(Duration::from_millis(millis))
        }
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(command)
}

#[cfg(test)]
#[path = "tests/events_tests.rs"]
mod tests;
