mod cli;
mod commands;
mod infra;
mod routes;
mod server;

use vibeworks_hub::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
