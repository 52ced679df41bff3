//! Command-line definition

use clap::{Parser, Subcommand};
use fourletterdisplay_core::types::{MAX_BRIGHTNESS, MIN_BRIGHTNESS};
use fourletterdisplay_core::DEFAULT_MODULE;
use fourletterdisplay_rpc::{DEFAULT_TIMEOUT_SECS, DEFAULT_URL, ENV_TIMEOUT_SECS, ENV_URL};

#[derive(Parser, Debug)]
#[command(name = "fourletterdisplay")]
#[command(author, version, about = "Control the four-letter display of a Cleep device", long_about = None)]
pub struct Cli {
    /// Device base URL
    #[arg(long, env = ENV_URL, default_value = DEFAULT_URL, global = true)]
    pub url: String,

    /// Target module name
    #[arg(long, env = "CLEEP_MODULE", default_value = DEFAULT_MODULE, global = true)]
    pub module: String,

    /// Request timeout in seconds
    #[arg(long, env = ENV_TIMEOUT_SECS, default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout: u64,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Display a message (scrolls when longer than four characters)
    Message {
        /// Text to display
        text: String,
    },

    /// Light the given dots (0 = most left .. 3 = most right), others off
    Dots {
        #[arg(value_parser = clap::value_parser!(u8).range(0..=3))]
        indices: Vec<u8>,
    },

    /// Set brightness
    Brightness {
        #[arg(value_parser = clap::value_parser!(i64).range(MIN_BRIGHTNESS..=MAX_BRIGHTNESS))]
        value: i64,
    },

    /// Set night mode brightness
    NightBrightness {
        #[arg(value_parser = clap::value_parser!(i64).range(MIN_BRIGHTNESS..=MAX_BRIGHTNESS))]
        value: i64,
    },

    /// Enable or disable night mode
    NightMode {
        #[arg(action = clap::ArgAction::Set)]
        enable: bool,
    },

    /// Clear the display
    Clear,

    /// Display the current local time as HHMM
    Time,

    /// Print the module configuration
    Status {
        /// Compute the effective brightness as if it were night
        #[arg(long)]
        night: bool,
    },
}
