// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "CiberConsejos: generador de contraseñas y consejos de ciberseguridad", long_about = None)]
pub struct Args {
    /// Log debug output
    #[arg(long, short)]
    pub verbose: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, env = "LOG_FILE")]
    pub log_file: Option<std::path::PathBuf>,

    /// Command to execute; without one the interactive menu starts
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0")]
    #[case("-2")]
    fn count_must_be_positive(#[case] count: &str) {
        let parsed = Args::try_parse_from(["ciberconsejos", "generate", "--count", count]);
        assert!(parsed.is_err());
    }

    #[test]
    fn count_defaults_to_one() {
        let args = Args::try_parse_from(["ciberconsejos", "generate"]).unwrap();
        match args.command {
            Some(CliCommand::Generate(generate)) => assert_eq!(generate.count, 1),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
