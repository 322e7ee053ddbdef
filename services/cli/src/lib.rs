mod cli;
mod demo;
mod infra;
mod search;

use consultant_directory::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
