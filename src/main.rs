use dotenvy::dotenv;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::Cli;
use expense_tracker::cli_utils::{CliError, CliResult, TerminalKeys, print_error};
use expense_tracker::dispatcher::CommandDispatcher;
use expense_tracker::expenses::{ExpenseStore, PgExpenseBackend};
use expense_tracker::utils::app_config::AppConfig;

fn main() -> ExitCode {
    let _ = dotenv();
    let cli = Cli::parse_lenient(std::env::args_os()).unwrap_or_else(|err| err.exit());

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::UserCancelled) => ExitCode::FAILURE,
        Err(CliError::Store(err)) => {
            print_error(&format!("{:#}", err));
            ExitCode::FAILURE
        }
        Err(err) => {
            print_error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let app_config = AppConfig::new(cli.database_url);
    let conn = app_config.connect()?;
    tracing::debug!("Application configuration loaded successfully");

    let store = ExpenseStore::new(PgExpenseBackend::new(conn))?;
    let mut dispatcher = CommandDispatcher::new(store);

    let stdout = io::stdout();
    dispatcher.run(cli.command, &mut TerminalKeys::new(), &mut stdout.lock())
}
