mod cli;
mod core;
mod i18n;
mod models;
mod utils;

use std::process::ExitCode;

use crate::utils::logger::Logger;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match cli::run_cli().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<crate::core::RunError>() {
                Some(err) => Logger::error(err.localized()),
                None => Logger::error(format!("{:#}", e)),
            }
            ExitCode::FAILURE
        }
    }
}
