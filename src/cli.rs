//! Command-line arguments for the `expense` binary

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::ffi::OsString;

use crate::utils::app_config::DEFAULT_DATABASE_URL;

/// An expense recording system
#[derive(Parser, Debug)]
#[command(name = "expense", version, about)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Postgres connection string
    #[arg(long, global = true, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Arguments are optional at the parser level so the dispatcher can report
/// missing ones with its own messages. Anything past the last named argument
/// lands in `extra` and is ignored.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// list all expenses
    List {
        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        extra: Vec<String>,
    },
    /// record a new expense
    Add {
        #[arg(allow_negative_numbers = true)]
        amount: Option<String>,
        #[arg(allow_hyphen_values = true)]
        memo: Option<String>,
        /// YYYY-MM-DD, defaults to today
        date: Option<String>,
        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        extra: Vec<String>,
    },
    /// list expenses with a matching memo field
    Search {
        #[arg(allow_hyphen_values = true)]
        query: Option<String>,
        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        extra: Vec<String>,
    },
    /// remove expense with id NUMBER
    Delete {
        #[arg(allow_hyphen_values = true)]
        id: Option<String>,
        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        extra: Vec<String>,
    },
    /// delete all expenses
    Clear {
        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        extra: Vec<String>,
    },
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

impl Cli {
    /// Parses `args`, treating unrecognised flags or commands as a request
    /// for the command overview rather than a usage error.
    ///
    /// `--help`, `--version` and malformed known options still surface as
    /// clap errors.
    pub fn parse_lenient<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) => Ok(cli),
            Err(err) if matches!(err.kind(), ErrorKind::UnknownArgument | ErrorKind::InvalidSubcommand) => {
                Ok(Self {
                    database_url: std::env::var("DATABASE_URL")
                        .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
                    verbose: false,
                    command: None,
                })
            }
            Err(err) => Err(err),
        }
    }
}
