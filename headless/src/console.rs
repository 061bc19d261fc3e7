/// ----- CONSOLE MODULE -----
/// This module reads the command protocol from stdin on a dedicated thread
/// and hands parsed commands to the main loop over a channel. One command
/// per line; replies are written by the main loop as JSON lines.

use std::io::{self, BufRead};
use std::thread::spawn;

use crossbeam_channel::{unbounded, Receiver};
use dispatch::Call;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Register { floor: u8, call: Call },
    Status,
    Ping,
    Quit,
    Invalid { message: String },
}

pub fn init() -> Receiver<Command> {
    let (command_tx, command_rx) = unbounded();
    spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };
            if line.trim().is_empty() {
                continue;
            }
            if command_tx.send(parse(&line)).is_err() {
                return;
            }
        }
        // EOF counts as a request to shut down.
        let _ = command_tx.send(Command::Quit);
    });
    command_rx
}

pub fn parse(line: &str) -> Command {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words[..] {
        ["status"] => Command::Status,
        ["ping"] => Command::Ping,
        ["quit"] | ["exit"] => Command::Quit,
        ["call", floor] => register(floor, Call::Cab),
        ["up", floor] => register(floor, Call::HallUp),
        ["down", floor] => register(floor, Call::HallDown),
        _ => Command::Invalid {
            message: format!("unknown command: {}", line.trim()),
        },
    }
}

fn register(floor: &str, call: Call) -> Command {
    match floor.parse::<u8>() {
        Ok(floor) => Command::Register { floor, call },
        Err(_) => Command::Invalid {
            message: format!("invalid floor: {}", floor),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_queries() {
        assert_eq!(parse("status"), Command::Status);
        assert_eq!(parse("ping"), Command::Ping);
        assert_eq!(parse("quit"), Command::Quit);
        assert_eq!(parse("exit"), Command::Quit);
    }

    #[test]
    fn parses_registrations() {
        assert_eq!(
            parse("call 5"),
            Command::Register {
                floor: 5,
                call: Call::Cab
            }
        );
        assert_eq!(
            parse("up 0"),
            Command::Register {
                floor: 0,
                call: Call::HallUp
            }
        );
        assert_eq!(
            parse("  down  9 "),
            Command::Register {
                floor: 9,
                call: Call::HallDown
            }
        );
    }

    #[test]
    fn negative_and_non_numeric_floors_are_invalid() {
        assert_eq!(
            parse("call -1"),
            Command::Invalid {
                message: String::from("invalid floor: -1")
            }
        );
        assert_eq!(
            parse("call x"),
            Command::Invalid {
                message: String::from("invalid floor: x")
            }
        );
        assert_eq!(
            parse("call 300"),
            Command::Invalid {
                message: String::from("invalid floor: 300")
            }
        );
    }

    #[test]
    fn unknown_commands_are_invalid() {
        assert_eq!(
            parse("open sesame"),
            Command::Invalid {
                message: String::from("unknown command: open sesame")
            }
        );
    }
}
