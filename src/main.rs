/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use clap::Parser;
use extendz::cli::{Cli, run};
use extendz::config::Config;
use extendz::utils::logger::setup_logger;
use std::process::ExitCode;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    setup_logger();
    let cli = Cli::parse();

    match run(cli, Config::new()).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
