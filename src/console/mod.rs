//! Line-oriented text front end.
//!
//! Stands in for a graphical board: each input line is a command, answers go
//! to the output writer, diagnostics go through `log`.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::board::{FenError, MoveParseError, SquareError};
use crate::game::{Game, Selection};

pub mod command;
mod logger;

pub use command::{parse_console_command, ConsoleCommand};
pub use logger::StderrLogger;

/// Error type for console input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// First word is not a known command or a coordinate move
    Unknown(String),
    /// The command needs another argument
    MissingArgument { command: String },
    /// An argument has the wrong value
    InvalidArgument { command: String, found: String },
    Square(SquareError),
    Move(MoveParseError),
    Fen(FenError),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Unknown(cmd) => write!(f, "Unknown command '{cmd}'"),
            CommandError::MissingArgument { command } => {
                write!(f, "Missing argument for '{command}'")
            }
            CommandError::InvalidArgument { command, found } => {
                write!(f, "Invalid argument '{found}' for '{command}'")
            }
            CommandError::Square(e) => write!(f, "{e}"),
            CommandError::Move(e) => write!(f, "{e}"),
            CommandError::Fen(e) => write!(f, "Invalid FEN: {e}"),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<SquareError> for CommandError {
    fn from(e: SquareError) -> Self {
        CommandError::Square(e)
    }
}

impl From<MoveParseError> for CommandError {
    fn from(e: MoveParseError) -> Self {
        CommandError::Move(e)
    }
}

impl From<FenError> for CommandError {
    fn from(e: FenError) -> Self {
        CommandError::Fen(e)
    }
}

const HELP: &str = "\
commands:
  board                 show the board
  select <sq>           click a square (select, then click a target)
  move <from><to>       play a move, e.g. move e2e4 (or just e2e4)
  moves [sq]            legal moves for the side to move or one piece
  status                side to move and game status
  fen                   print the position as FEN
  position startpos     start position
  position fen <fen>    load a FEN position
  reset                 new game
  history               moves played so far
  flip                  turn the board around
  set flip on|off       face the side to move after every move
  debug on|off          verbose logging to stderr
  quit";

/// Whether the loop should keep reading.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Flow {
    Continue,
    Quit,
}

/// Execute one command against `game`, writing the response to `out`.
pub fn execute<W: Write>(game: &mut Game, cmd: ConsoleCommand, out: &mut W) -> io::Result<Flow> {
    match cmd {
        ConsoleCommand::Board => write_board(game, out)?,
        ConsoleCommand::Select(sq) => match game.select_square(sq) {
            Selection::Selected(sq) => {
                let targets: Vec<String> = game
                    .selected_destinations()
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                writeln!(out, "selected {sq}: {}", targets.join(" "))?;
            }
            Selection::Moved(record) => {
                writeln!(out, "{record}")?;
                write_status(game, out)?;
            }
            Selection::Cleared => writeln!(out, "selection cleared")?,
            Selection::Ignored => writeln!(out, "ignored")?,
        },
        ConsoleCommand::Move(mv) => match game.attempt_move(mv.from, mv.to) {
            Some(record) => {
                writeln!(out, "{record}")?;
                write_status(game, out)?;
            }
            None => writeln!(out, "illegal move {mv}")?,
        },
        ConsoleCommand::Moves(None) => {
            let moves: Vec<String> = game.legal_moves().iter().map(ToString::to_string).collect();
            writeln!(out, "{} legal moves: {}", moves.len(), moves.join(" "))?;
        }
        ConsoleCommand::Moves(Some(sq)) => {
            let targets: Vec<String> = game
                .legal_destinations(sq)
                .iter()
                .map(ToString::to_string)
                .collect();
            writeln!(out, "{sq}: {}", targets.join(" "))?;
        }
        ConsoleCommand::Status => write_status(game, out)?,
        ConsoleCommand::Fen => writeln!(out, "{}", game.position().to_fen())?,
        ConsoleCommand::Position(position) => {
            game.load_position(*position);
            write_status(game, out)?;
        }
        ConsoleCommand::Reset => {
            game.reset_game();
            write_status(game, out)?;
        }
        ConsoleCommand::History => {
            for (ply, record) in game.history().iter().enumerate() {
                writeln!(out, "{:>3}. {record}", ply + 1)?;
            }
        }
        ConsoleCommand::Flip => {
            game.flip_board();
            write_board(game, out)?;
        }
        ConsoleCommand::AutoFlip(on) => {
            game.set_auto_flip(on);
            writeln!(out, "auto flip {}", if on { "on" } else { "off" })?;
        }
        ConsoleCommand::Debug(on) => {
            StderrLogger::global().set_verbose(on);
            writeln!(out, "debug {}", if on { "on" } else { "off" })?;
        }
        ConsoleCommand::Help => writeln!(out, "{HELP}")?,
        ConsoleCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn write_status<W: Write>(game: &Game, out: &mut W) -> io::Result<()> {
    match game.winner() {
        Some(winner) => writeln!(out, "status: checkmate, {winner} wins"),
        None => writeln!(out, "status: {}, {} to move", game.status(), game.turn()),
    }
}

/// Draw the board in the game's current orientation, marking the selection,
/// the last move, the en passant target and a checked king.
fn write_board<W: Write>(game: &Game, out: &mut W) -> io::Result<()> {
    let last = game.last_move();
    for row in 0..8 {
        let mut line = String::new();
        for col in 0..8 {
            let Some(sq) = game.view_to_square(col, row) else {
                continue;
            };
            let c = match game.piece_at(sq) {
                Some(p) => p.piece.to_fen_char(p.color),
                None => '.',
            };
            let mark = if game.king_highlight() == Some(sq) {
                '!'
            } else if game.selected() == Some(sq) {
                '*'
            } else if last.is_some_and(|mv| mv.from == sq || mv.to == sq) {
                '\''
            } else if game.en_passant_target() == Some(sq) {
                '~'
            } else {
                ' '
            };
            line.push(c);
            line.push(mark);
        }
        let rank_label = game
            .view_to_square(0, row)
            .map_or(0, |sq| sq.rank() + 1);
        writeln!(out, "{rank_label} {}", line.trim_end())?;
    }
    let files: String = (0..8)
        .filter_map(|col| game.view_to_square(col, 0))
        .map(|sq| format!("{} ", (b'a' + sq.file() as u8) as char))
        .collect();
    writeln!(out, "  {}", files.trim_end())
}

/// Read commands from `input` until EOF or `quit`.
pub fn run_session<R: BufRead, W: Write>(game: &mut Game, input: R, out: &mut W) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        match parse_console_command(&line) {
            Ok(None) => {}
            Ok(Some(cmd)) => {
                if execute(game, cmd, out)? == Flow::Quit {
                    break;
                }
            }
            Err(e) => writeln!(out, "error: {e}")?,
        }
        out.flush()?;
    }
    Ok(())
}

/// Run the console on stdin/stdout with a fresh game.
pub fn run_console_loop() -> io::Result<()> {
    StderrLogger::install();
    let mut game = Game::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(&mut game, stdin.lock(), &mut stdout)
}
