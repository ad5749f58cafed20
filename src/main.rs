// Entry point: program main
// Handles one-shot search/history from the command line, otherwise runs the TUI
//
// TUI Docs: https://github.com/whit3rabbit/bubbletea-rs look for related crates there and examples on each of them.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use moviesearch::api::{ApiClient, DEFAULT_BASE_URL};
use moviesearch::logging;
use moviesearch::ui::{OneShot, run_interactive, run_once};

#[derive(Parser, Debug)]
#[command(
    name = "moviesearch",
    version,
    about = "Search movies and browse your search history from the terminal"
)]
struct Cli {
    /// Title to search for once and print; starts the interactive UI when omitted.
    #[arg(value_name = "TITLE")]
    title: Vec<String>,

    /// Print the search history and exit.
    #[arg(long, conflicts_with = "title")]
    history: bool,

    /// Append diagnostic logs to this file. The interactive UI otherwise logs to
    /// moviesearch/moviesearch.log under the user's state directory.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn one_shot(&self) -> Option<OneShot> {
        if self.history {
            Some(OneShot::History)
        } else if !self.title.is_empty() {
            Some(OneShot::Search(self.title.join(" ")))
        } else {
            None
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let client = ApiClient::new(DEFAULT_BASE_URL)?;

    let Some(job) = cli.one_shot() else {
        // the terminal belongs to the TUI, so logs always go to a file
        match &cli.log_file {
            Some(path) => logging::init_file(path)?,
            None => {
                let path = logging::default_log_path();
                if let Err(e) = logging::init_file(&path) {
                    eprintln!("warning: logging disabled: {e:#}");
                }
            }
        }
        return run_interactive(client).await;
    };

    match &cli.log_file {
        Some(path) => logging::init_file(path)?,
        None => logging::init_stderr()?,
    }
    match run_once(&client, job).await {
        Ok(out) => {
            if !out.is_empty() {
                println!("{out}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("{e:#}");
        process::exit(2);
    }
}
