mod cli;
mod infra;
mod speech;

use wellness_checkin::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
