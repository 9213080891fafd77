mod assets;
mod cli;
mod infra;
mod report;
mod routes;
mod server;
mod take;

use maturity_check::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
