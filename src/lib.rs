// Public library interface for expense-tracker
pub mod cli;
pub mod cli_utils;
pub mod dispatcher;
pub mod expenses;
pub mod schema;
pub mod utils;
