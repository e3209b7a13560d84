/// CLI argument parsing and command handling.
use anyhow::Result;
use clap::{Parser, Subcommand};
use swatchr::{ColorSource, color::RandomColors, encode_fragment};

pub const DEFAULT_SWATCHES: u8 = 5;

#[derive(Parser, Debug)]
#[command(
    name = "swatchr",
    version,
    about = "Swatchr - A terminal palette generator",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
    /// Share string or URL to reload, e.g. '#264653-2a9d8f-e9c46a'
    pub fragment: Option<String>,
    /// Number of swatches
    #[arg(
        short = 'n',
        long = "count",
        default_value_t = DEFAULT_SWATCHES,
        value_parser = clap::value_parser!(u8).range(1..=10)
    )]
    pub count: u8,
    /// Write a debug log to the cache directory
    #[arg(long)]
    pub log: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print a fresh share string and exit
    Random {
        #[arg(
            short = 'n',
            long = "count",
            default_value_t = DEFAULT_SWATCHES,
            value_parser = clap::value_parser!(u8).range(1..=10)
        )]
        count: u8,
    },
}

/// Execute a CLI command.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Random { count } => {
            println!("{}", random_fragment(usize::from(count), &mut RandomColors::new()));
        }
    }
    Ok(())
}

pub fn random_fragment(count: usize, colors: &mut impl ColorSource) -> String {
    let palette: Vec<String> = (0..count).map(|_| colors.random_color()).collect();
    format!("#{}", encode_fragment(&palette))
}
