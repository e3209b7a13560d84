mod app;
mod cli;
mod event;
mod logging;
mod tui;
mod ui;

use anyhow::Result;
use clap::Parser;
use swatchr::{ShareLocation, clipboard::SystemClipboard, color::RandomColors};

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    if cli_opts.log {
        logging::init(&logging::default_log_path())?;
    }
    if let Some(command) = cli_opts.command {
        return cli::run(command);
    }

    let location = ShareLocation::from_input(cli_opts.fragment.as_deref().unwrap_or_default());
    let mut app = app::App::new(
        usize::from(cli_opts.count),
        location,
        RandomColors::new(),
        SystemClipboard::detect(),
    );
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);

    tui::restore()?;
    println!("{}", app.share_string());

    result
}
