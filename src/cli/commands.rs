// src/cli/commands.rs
use clap::{Args, Subcommand};

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate(GenerateArgs),

    /// Score the strength of a password
    Score {
        /// Password to analyze
        #[arg(required = true)]
        password: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show security tips
    Tips {
        /// Keep printing one tip per interval
        #[arg(long)]
        rotate: bool,

        /// Seconds between tips when rotating
        #[arg(long, default_value_t = 10)]
        interval: u64,

        /// Stop after this many tips when rotating
        #[arg(long)]
        count: Option<usize>,
    },

    /// List education topics
    Topics,

    /// Show one education topic
    Topic {
        /// Topic ID, as listed by `topics`
        #[arg(required = true)]
        id: String,
    },

    /// Check that an e-mail address looks valid
    CheckEmail {
        #[arg(required = true)]
        address: String,
    },

    /// Check a password against the strict site policy
    CheckPolicy {
        #[arg(required = true)]
        password: String,
    },

    /// Show or change saved generator preferences
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Run the HTTP API
    Serve {
        /// API server port
        #[arg(long, env = "WEB_PORT")]
        port: Option<u16>,

        /// Address to bind
        #[arg(long, env = "WEB_ADDRESS")]
        address: Option<String>,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct GenerateArgs {
    /// Password length (clamped to 8-32)
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// How many passwords to generate
    #[arg(long, short, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub count: u64,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Remember these options for next time
    #[arg(long)]
    pub save: bool,
}

#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    /// Print the saved preferences
    Show,

    /// Forget the saved preferences
    Reset,

    /// Change saved preferences
    Set {
        #[arg(long)]
        length: Option<usize>,
        #[arg(long)]
        uppercase: Option<bool>,
        #[arg(long)]
        lowercase: Option<bool>,
        #[arg(long)]
        digits: Option<bool>,
        #[arg(long)]
        symbols: Option<bool>,
    },
}
