use anyhow::{Context, Result};
use std::fs::OpenOptions;

use rusty_golf_live::args::{self, CleanArgs, RunMode};
use rusty_golf_live::controller::espn::{EspnClient, Selectors};
use rusty_golf_live::controller::live::{fetch_once, run_live};
use rusty_golf_live::view::score::{build_display_table, render_json, render_plain};

fn init_logging(args: &CleanArgs) -> Result<()> {
    // a live table owns the terminal, so stderr logging is opt-in there
    let default_filter = match (args.mode, &args.log_file) {
        (RunMode::Live, None) => "off",
        _ => "info",
    };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    if let Some(path) = &args.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.try_init().context("init logger")?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = args::args_checks()?;
    init_logging(&args)?;

    let selectors = Selectors::compile(&args.selectors)?;
    let client = EspnClient::new(&args.url, args.timeout)?;

    match args.mode {
        RunMode::Live => run_live(&args, &client, selectors).await?,
        RunMode::Once => {
            let board = fetch_once(&client, selectors)
                .await
                .with_context(|| format!("fetch leaderboard from {}", client.url()))?;
            print!("{}", render_plain(&build_display_table(&board, args.top)));
        }
        RunMode::Json => {
            let board = fetch_once(&client, selectors)
                .await
                .with_context(|| format!("fetch leaderboard from {}", client.url()))?;
            println!("{}", render_json(&board, args.top)?);
        }
    }
    Ok(())
}
