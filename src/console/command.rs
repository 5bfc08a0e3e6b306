use crate::board::{Move, Position, Square};

use super::CommandError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Board,
    Select(Square),
    Move(Move),
    Moves(Option<Square>),
    Status,
    Fen,
    Position(Box<Position>),
    Reset,
    History,
    Flip,
    AutoFlip(bool),
    Debug(bool),
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_console_command(line: &str) -> Result<Option<ConsoleCommand>, CommandError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = parts.split_first() else {
        return Ok(None);
    };

    let arg = |idx: usize| required(args, idx, name);

    let cmd = match name {
        "board" | "d" => ConsoleCommand::Board,
        "select" => ConsoleCommand::Select(arg(0)?.parse()?),
        "move" => ConsoleCommand::Move(arg(0)?.parse()?),
        "moves" => ConsoleCommand::Moves(args.first().map(|s| s.parse()).transpose()?),
        "status" => ConsoleCommand::Status,
        "fen" => ConsoleCommand::Fen,
        "position" => match arg(0)? {
            "startpos" => ConsoleCommand::Position(Box::new(Position::new())),
            "fen" => {
                let fen = args[1..].join(" ");
                ConsoleCommand::Position(Box::new(Position::try_from_fen(&fen)?))
            }
            other => {
                return Err(CommandError::InvalidArgument {
                    command: name.to_string(),
                    found: other.to_string(),
                })
            }
        },
        "reset" | "new" => ConsoleCommand::Reset,
        "history" => ConsoleCommand::History,
        "flip" => ConsoleCommand::Flip,
        "set" => match (arg(0)?, arg(1)?) {
            ("flip", value) => ConsoleCommand::AutoFlip(parse_switch(name, value)?),
            (other, _) => {
                return Err(CommandError::InvalidArgument {
                    command: name.to_string(),
                    found: other.to_string(),
                })
            }
        },
        "debug" => ConsoleCommand::Debug(parse_switch(name, arg(0)?)?),
        "help" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        // A bare coordinate move is accepted as shorthand for `move`.
        other => match other.parse::<Move>() {
            Ok(mv) => ConsoleCommand::Move(mv),
            Err(_) => return Err(CommandError::Unknown(other.to_string())),
        },
    };

    Ok(Some(cmd))
}

fn required<'a>(args: &[&'a str], idx: usize, command: &str) -> Result<&'a str, CommandError> {
    args.get(idx).copied().ok_or(CommandError::MissingArgument {
        command: command.to_string(),
    })
}

fn parse_switch(command: &str, value: &str) -> Result<bool, CommandError> {
    match value {
        "on" => Ok(true),
        "off" => Ok(false),
        other => Err(CommandError::InvalidArgument {
            command: command.to_string(),
            found: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(parse_console_command("   "), Ok(None));
        assert_eq!(
            parse_console_command("board"),
            Ok(Some(ConsoleCommand::Board))
        );
        assert_eq!(
            parse_console_command("move e2e4"),
            Ok(Some(ConsoleCommand::Move("e2e4".parse().unwrap())))
        );
        assert_eq!(
            parse_console_command("e7e5"),
            Ok(Some(ConsoleCommand::Move("e7e5".parse().unwrap())))
        );
        assert_eq!(
            parse_console_command("moves"),
            Ok(Some(ConsoleCommand::Moves(None)))
        );
        assert_eq!(
            parse_console_command("set flip on"),
            Ok(Some(ConsoleCommand::AutoFlip(true)))
        );
    }

    #[test]
    fn test_parse_position_fen() {
        let cmd = parse_console_command("position fen 4k3/8/8/8/8/8/8/4K3 b - - 0 1")
            .unwrap()
            .unwrap();
        let ConsoleCommand::Position(pos) = cmd else {
            panic!("expected position");
        };
        assert_eq!(pos.turn(), crate::board::Color::Black);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_console_command("select"),
            Err(CommandError::MissingArgument {
                command: "select".to_string()
            })
        );
        assert!(matches!(
            parse_console_command("select z9"),
            Err(CommandError::Square(_))
        ));
        assert!(matches!(
            parse_console_command("debug maybe"),
            Err(CommandError::InvalidArgument { .. })
        ));
        assert_eq!(
            parse_console_command("castle"),
            Err(CommandError::Unknown("castle".to_string()))
        );
    }
}
