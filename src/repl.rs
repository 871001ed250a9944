//! Line-oriented front end for a [`Session`].
//!
//! Each input line is one command, executed to completion before the next
//! line is read:
//!
//! ```text
//! name REST API integration
//! reach 100
//! impact 2
//! confidence 80
//! effort 7
//! kano performance
//! moscow should
//! submit
//! list
//! delete 0
//! ```

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use thiserror::Error;

use crate::models::{Kano, Moscow, ParseTagError, RiceField};
use crate::render::{rows_json, Renderer};
use crate::session::Session;

const PROMPT: &str = "> ";

const HELP_HEAD: &str = "\
Commands:
  name <text>                 set the idea name
";

const HELP_TAIL: &str = "\
  kano <tag>                  basic | performance | excitement
  moscow <tag>                must | should | could | won't
  submit                      add the draft to the list
  delete <position>           remove an idea by its list position
  list                        show all ideas with their RICE score
  json                        show all ideas as JSON
  draft                       show the idea being edited
  help                        show this message
  quit                        leave (ideas are not saved)
";

/// Command summary, with one line per RICE input. Leave a number empty to
/// clear it.
pub fn help_text() -> String {
    let mut help = HELP_HEAD.to_string();
    for field in RiceField::ALL {
        help.push_str(&format!(
            "  {:<28}{}\n",
            format!("{} <number>", field),
            field.help()
        ));
    }
    help.push_str(HELP_TAIL);
    help
}

/// A parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Name(String),
    Rice(RiceField, Option<f64>),
    Kano(Kano),
    Moscow(Moscow),
    Submit,
    Delete(usize),
    List,
    Json,
    Draft,
    Help,
    Quit,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CommandError {
    #[error("unknown command '{0}' (type 'help' for a list)")]
    Unknown(String),

    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    #[error("{field} must be a number, got '{input}'")]
    InvalidNumber { field: RiceField, input: String },

    #[error("position must be a non-negative integer, got '{0}'")]
    InvalidPosition(String),

    #[error(transparent)]
    Tag(#[from] ParseTagError),
}

/// Parse a numeric input box. Empty input means "unset".
pub fn parse_rice_input(field: RiceField, input: &str) -> Result<Option<f64>, CommandError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    match input.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(CommandError::InvalidNumber {
            field,
            input: input.to_string(),
        }),
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        let (word, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (trimmed, ""),
        };
        let keyword = word.to_lowercase();

        if let Some(field) = RiceField::from_str(&keyword) {
            return Ok(Self::Rice(field, parse_rice_input(field, rest)?));
        }

        match keyword.as_str() {
            // The name keeps its spacing; blank names are caught at submit.
            "name" => Ok(Self::Name(rest.to_string())),
            "kano" => Ok(Self::Kano(Kano::parse(require(rest, "kano")?)?)),
            "moscow" => Ok(Self::Moscow(Moscow::parse(require(rest, "moscow")?)?)),
            "submit" | "add" => Ok(Self::Submit),
            "delete" | "rm" => {
                let arg = require(rest, "delete")?.trim();
                arg.parse()
                    .map(Self::Delete)
                    .map_err(|_| CommandError::InvalidPosition(arg.to_string()))
            }
            "list" | "ls" => Ok(Self::List),
            "json" => Ok(Self::Json),
            "draft" => Ok(Self::Draft),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}

fn require<'a>(rest: &'a str, command: &'static str) -> Result<&'a str, CommandError> {
    if rest.trim().is_empty() {
        Err(CommandError::MissingArgument(command))
    } else {
        Ok(rest)
    }
}

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Quit,
}

pub struct Repl {
    session: Session,
    renderer: Renderer,
}

impl Repl {
    pub fn new(renderer: Renderer) -> Self {
        Self {
            session: Session::new(),
            renderer,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Execute one command against the session and return its output.
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        let output = match command {
            Command::Name(name) => {
                self.session.set_name(name);
                String::new()
            }
            Command::Rice(field, value) => {
                self.session.set_rice(field, value);
                String::new()
            }
            Command::Kano(kano) => {
                self.session.set_kano(kano);
                String::new()
            }
            Command::Moscow(moscow) => {
                self.session.set_moscow(moscow);
                String::new()
            }
            Command::Submit => match self.session.submit() {
                Ok(_) => {
                    let rows = self.session.rows();
                    self.renderer.rows(&rows)
                }
                Err(_) => self
                    .renderer
                    .draft(self.session.draft(), self.session.error()),
            },
            Command::Delete(position) => match self.session.delete(position) {
                Some(idea) => format!("Removed '{}'.\n", idea.name()),
                None => format!("No idea at position {}.\n", position),
            },
            Command::List => self.renderer.rows(&self.session.rows()),
            Command::Json => {
                let mut json = rows_json(&self.session.rows())?;
                json.push('\n');
                json
            }
            Command::Draft => self
                .renderer
                .draft(self.session.draft(), self.session.error()),
            Command::Help => help_text(),
            Command::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Continue(output))
    }

    /// Read commands until end of input or `quit`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            if !line.trim().is_empty() {
                match line.parse::<Command>() {
                    Ok(command) => {
                        tracing::debug!(?command, "executing");
                        match self.execute(command)? {
                            Outcome::Continue(text) => write!(output, "{}", text)?,
                            Outcome::Quit => break,
                        }
                    }
                    Err(e) => writeln!(output, "error: {}", e)?,
                }
            }
            write!(output, "{}", PROMPT)?;
            output.flush()?;
        }

        Ok(())
    }
}
