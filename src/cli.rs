//! Command dispatch for the dtutils binary

use std::fmt::Display;
use std::io::{self, Write};
use std::num::ParseIntError;

use serde::Serialize;
use strum::{EnumMessage, IntoEnumIterator};
use strum_macros::{EnumIter, EnumMessage, EnumString, IntoStaticStr};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    banner,
    color::{self, ColorError, ColorFormat},
    random,
};

/// Hint printed with the banner and after an unknown command
pub const HELP_HINT: &str = "Run 'dtutils help' to see all commands.";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unknown command. {}", HELP_HINT)]
    UnknownCommand(String),
    #[error("Invalid color: {0}")]
    InvalidColor(String, #[source] ColorError),
    #[error("Invalid integer: {0}")]
    InvalidInteger(String, #[source] ParseIntError),
    #[error("Usage: dtutils {0}")]
    Usage(&'static str),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Known commands, in the order they are listed by `help`
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr, EnumIter, EnumMessage)]
pub enum Command {
    #[strum(
        serialize = "dtutils help <command>",
        message = "Show help for a specific command"
    )]
    Help,
    #[strum(serialize = "rgbtohex", message = "Convert RGB values to HEX color code")]
    RgbToHex,
    #[strum(serialize = "hextorgb", message = "Convert HEX color code to RGB values")]
    HexToRgb,
    #[strum(serialize = "rgbtohsl", message = "Convert RGB values to HSL")]
    RgbToHsl,
    #[strum(serialize = "hextohsl", message = "Convert HEX color code to HSL")]
    HexToHsl,
    #[strum(
        serialize = "random",
        message = "Generate a random integer in an inclusive range"
    )]
    Random,
}

impl Command {
    /// Look up a command by name
    pub fn lookup(name: &str) -> Result<Self, CliError> {
        name.parse().map_err(|_| CliError::UnknownCommand(name.to_owned()))
    }

    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn description(self) -> &'static str {
        self.get_message().unwrap_or_default()
    }

    fn target_format(self) -> Option<ColorFormat> {
        match self {
            Command::RgbToHex => Some(ColorFormat::Hex),
            Command::HexToRgb => Some(ColorFormat::Rgb),
            Command::RgbToHsl | Command::HexToHsl => Some(ColorFormat::Hsl),
            Command::Help | Command::Random => None,
        }
    }

    fn execute<W: Write>(
        self,
        args: &[String],
        options: &Options,
        out: &mut W,
    ) -> Result<(), CliError> {
        if let Some(format) = self.target_format() {
            return match args.first() {
                Some(input) => {
                    let output = color::try_convert(input.as_str(), format)
                        .map_err(|error| CliError::InvalidColor(input.clone(), error))?;
                    emit(out, options, &output)
                }
                None => Ok(()),
            };
        }

        match (self, args) {
            (Command::Random, []) => Ok(()),
            (Command::Random, [min, max]) => {
                let value = random::random_int(parse_integer(min)?, parse_integer(max)?);
                emit(out, options, &value)
            }
            (Command::Random, _) => Err(CliError::Usage("random <min> <max>")),
            _ => Ok(()),
        }
    }
}

fn parse_integer(arg: &str) -> Result<i64, CliError> {
    arg.trim()
        .parse()
        .map_err(|error| CliError::InvalidInteger(arg.to_owned(), error))
}

fn emit<W: Write, T: Display + Serialize>(
    out: &mut W,
    options: &Options,
    value: &T,
) -> Result<(), CliError> {
    if options.json {
        serde_json::to_writer(&mut *out, value)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", value)?;
    }

    Ok(())
}

/// Output options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Print results as JSON
    pub json: bool,
    /// Color the banner
    pub color: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            json: false,
            color: true,
        }
    }
}

/// Outcome of a dispatched command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Success,
    Failure,
    Usage,
}

impl Exit {
    /// Process exit code
    pub fn code(self) -> i32 {
        match self {
            Exit::Success => 0,
            Exit::Failure => 1,
            Exit::Usage => 2,
        }
    }
}

/// Run the command line `args` (without the program name), writing to `out`
///
/// Command failures are reported on `out` and turned into [`Exit::Failure`]; only i/o
/// errors on `out` itself are returned.
pub fn run<W: Write>(args: &[String], options: &Options, out: &mut W) -> io::Result<Exit> {
    match dispatch(args, options, out) {
        Ok(exit) => Ok(exit),
        Err(CliError::Io(error)) => Err(error),
        Err(error) => {
            warn!(error = %error, "command failed");
            writeln!(out, "{}", error)?;
            Ok(Exit::Failure)
        }
    }
}

fn dispatch<W: Write>(
    args: &[String],
    options: &Options,
    out: &mut W,
) -> Result<Exit, CliError> {
    let (cmd, rest) = match args.split_first() {
        Some(split) => split,
        None => {
            banner::render(out, options.color)?;
            writeln!(out, "{}", HELP_HINT)?;
            return Ok(Exit::Usage);
        }
    };

    if cmd == "help" {
        match rest.first() {
            None => {
                writeln!(out, "Available commands:")?;
                for command in Command::iter() {
                    writeln!(out, "  {}: {}", command.name(), command.description())?;
                }
            }
            Some(name) => {
                let command = Command::lookup(name)?;
                writeln!(out, "{}: {}", command.name(), command.description())?;
            }
        }

        return Ok(Exit::Success);
    }

    let command = Command::lookup(cmd)?;
    debug!(command = command.name(), args = ?rest, "running command");

    writeln!(out, "Running command: {}", command.name())?;
    command.execute(rest, options, out)?;

    Ok(Exit::Success)
}
