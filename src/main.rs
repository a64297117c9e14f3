use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

mod api;
mod cli;
mod core;
mod education;
mod generators;
mod logging;
mod models;
mod utils;

use crate::cli::{Args, CliCommand};
use crate::cli::handlers;
use crate::core::config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let mut config = Config::load();
    if args.log_file.is_some() {
        config.log_file = args.log_file.clone();
    }

    if let Err(e) = logging::init(&config, args.verbose) {
        eprintln!("❌ Could not open log file: {}", e);
        return ExitCode::FAILURE;
    }

    log::debug!("Loaded config: {:?}", config);

    let result = match args.command {
        Some(CliCommand::Generate(generate_args)) => handlers::handle_generate(&config, &generate_args),
        Some(CliCommand::Score { password, json }) => handlers::handle_score(&password, json),
        Some(CliCommand::Tips { rotate, interval, count }) => handlers::handle_tips(rotate, interval, count).await,
        Some(CliCommand::Topics) => handlers::handle_topics(),
        Some(CliCommand::Topic { id }) => handlers::handle_topic(&id),
        Some(CliCommand::CheckEmail { address }) => handlers::handle_check_email(&address),
        Some(CliCommand::CheckPolicy { password }) => handlers::handle_check_policy(&password),
        Some(CliCommand::Settings { action }) => handlers::handle_settings(&config, &action),
        Some(CliCommand::Serve { port, address }) => {
            let port = port.unwrap_or(config.web_port);
            let address = address.unwrap_or_else(|| config.web_address.clone());
            let state = api::AppState { default_length: config.default_password_length };

            println!("🚀 API en http://{}:{} (documentación en /swagger-ui/)", address, port);
            api::start_server(state, &address, port).await.map_err(|e| -> Box<dyn std::error::Error> {
                log::error!("API server failed: {}", e);
                Box::new(e)
            })
        }
        None => cli::menu::run_cli_menu(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}
