//! Draw scripts
//!
//! One command per line, `#` starts a comment:
//!
//! ```text
//! tool fill          # pencil | eraser | fill
//! color #ff0000      # any color Color::from_hex accepts
//! pick 3             # palette swatch as current color
//! paint 0 0          # current tool + color at (row, col)
//! down 1 1           # pointer stroke: down / move / up
//! move 1 5
//! up
//! fill 2 2 #00ff00   # one-shot tools, color optional for fill
//! erase 0 0
//! clear
//! resize 8
//! show               # print the grid now
//! ```

use std::io::Write;

use pixel_engine_edit::{ChangedCell, Color, DrawingSession, Tool};
use thiserror::Error;

use crate::{options::OutputFormat, render};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Tool(Tool),
    Color(Color),
    Pick(usize),
    Paint { row: i32, col: i32 },
    Down { row: i32, col: i32 },
    Move { row: i32, col: i32 },
    Up,
    Fill { row: i32, col: i32, color: Option<Color> },
    Erase { row: i32, col: i32 },
    Clear,
    Resize(i32),
    Show,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("line {line}: {message}")]
pub struct ParseError {
    pub line: usize,
    pub message: String,
}

impl ParseError {
    fn new(line: usize, message: impl Into<String>) -> Self {
        Self { line, message: message.into() }
    }
}

/// Parses a whole script. Line numbers in errors are 1 based.
pub fn parse_script(text: &str) -> Result<Vec<Command>, ParseError> {
    let mut commands = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if let Some(cmd) = parse_line(line).map_err(|message| ParseError::new(idx + 1, message))? {
            commands.push(cmd);
        }
    }
    Ok(commands)
}

/// Parses one line; `Ok(None)` for blank and comment lines.
pub fn parse_line(line: &str) -> Result<Option<Command>, String> {
    let words = code_words(line);
    let Some((keyword, args)) = words.split_first() else {
        return Ok(None);
    };

    let cmd = match (keyword.to_ascii_lowercase().as_str(), args) {
        ("tool", [name]) => Command::Tool(name.parse().map_err(|e| format!("{e}"))?),
        ("color", [color]) => Command::Color(parse_color(color)?),
        ("pick", [index]) => Command::Pick(parse_number(index)?),
        ("paint", [row, col]) => Command::Paint {
            row: parse_number(row)?,
            col: parse_number(col)?,
        },
        ("down", [row, col]) => Command::Down {
            row: parse_number(row)?,
            col: parse_number(col)?,
        },
        ("move", [row, col]) => Command::Move {
            row: parse_number(row)?,
            col: parse_number(col)?,
        },
        ("up", []) => Command::Up,
        ("fill", [row, col]) => Command::Fill {
            row: parse_number(row)?,
            col: parse_number(col)?,
            color: None,
        },
        ("fill", [row, col, color]) => Command::Fill {
            row: parse_number(row)?,
            col: parse_number(col)?,
            color: Some(parse_color(color)?),
        },
        ("erase", [row, col]) => Command::Erase {
            row: parse_number(row)?,
            col: parse_number(col)?,
        },
        ("clear", []) => Command::Clear,
        ("resize", [size]) => Command::Resize(parse_number(size)?),
        ("show", []) => Command::Show,
        (keyword, args) => return Err(format!("can't parse '{keyword}' with {} argument(s)", args.len())),
    };
    Ok(Some(cmd))
}

/// Splits a line into words, dropping the comment.
///
/// A word starting with `#` begins a comment, except in the one argument
/// slot that takes a color (`color <c>`, `fill <row> <col> <c>`) when it
/// parses as one. So `paint 0 0 #abc` is `paint 0 0` plus a comment.
fn code_words(line: &str) -> Vec<&str> {
    let mut words: Vec<&str> = Vec::new();
    for word in line.split_whitespace() {
        if word.starts_with('#') {
            let color_slot = words.first().and_then(|keyword| color_argument_slot(keyword));
            if color_slot != Some(words.len()) || Color::from_hex(word).is_err() {
                break;
            }
        }
        words.push(word);
    }
    words
}

/// Word index of the color argument for commands that take one
fn color_argument_slot(keyword: &str) -> Option<usize> {
    match keyword.to_ascii_lowercase().as_str() {
        "color" => Some(1),
        "fill" => Some(3),
        _ => None,
    }
}

fn parse_color(text: &str) -> Result<Color, String> {
    Color::from_hex(text).map_err(|e| format!("{e}"))
}

fn parse_number<T: std::str::FromStr>(text: &str) -> Result<T, String> {
    text.parse().map_err(|_| format!("'{text}' is not a number"))
}

/// Outcome of running a script
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub commands: usize,
    pub changed_cells: usize,
    pub rejected: usize,
}

/// Runs `commands` against `session`, writing `show` output to `out`.
///
/// Commands the core rejects (stale coordinates, bad sizes) are logged as
/// warnings, which the logger also puts on stderr, then counted and skipped;
/// the session is unchanged by them.
pub fn run(session: &mut DrawingSession, commands: &[Command], format: OutputFormat, out: &mut dyn Write) -> anyhow::Result<RunReport> {
    let mut report = RunReport::default();
    for cmd in commands {
        report.commands += 1;
        let result: pixel_engine_edit::Result<Vec<ChangedCell>> = match cmd {
            Command::Tool(tool) => {
                session.set_tool(*tool);
                Ok(Vec::new())
            }
            Command::Color(color) => {
                session.set_color(*color);
                Ok(Vec::new())
            }
            Command::Pick(index) => session.select_palette(*index).map(|_| Vec::new()),
            Command::Paint { row, col } => session.apply(*row, *col),
            Command::Down { row, col } => session.begin_stroke(*row, *col),
            Command::Move { row, col } => Ok(session.continue_stroke(*row, *col)),
            Command::Up => {
                session.end_stroke();
                Ok(Vec::new())
            }
            Command::Fill { row, col, color } => session.paint(Tool::Fill, *row, *col, color.unwrap_or(session.color())),
            Command::Erase { row, col } => session.paint(Tool::Eraser, *row, *col, session.color()),
            Command::Clear => Ok(session.clear()),
            Command::Resize(size) => session.resize_grid(*size).map(|()| Vec::new()),
            Command::Show => {
                render::write_grid(out, session, format)?;
                writeln!(out)?;
                Ok(Vec::new())
            }
        };

        match result {
            Ok(changed) => report.changed_cells += changed.len(),
            Err(err) => {
                log::warn!("skipped {cmd:?}: {err}");
                report.rejected += 1;
            }
        }
    }
    Ok(report)
}
