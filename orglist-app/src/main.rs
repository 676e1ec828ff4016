mod args;
mod error;
mod output;
mod token;

use crate::args::Args;
use crate::error::AppError;
use clap::{CommandFactory, Parser};
use env_logger::Env;
use log::{debug, Level};
use orglist_lib::GitHubClient;
use std::io::{stdout, IsTerminal, Write};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::from(e.exit_code())
        }
    }
}

// stdout may already be closed (e.g. `orglist acme | head`), so nothing here may panic.
fn report(e: &AppError) {
    let mut out = stdout().lock();
    _ = writeln!(out, "{e}");
    if let AppError::Usage = e {
        _ = writeln!(out);
        drop(out);
        _ = Args::command().print_help();
    }
}

async fn run(args: &Args) -> Result<(), AppError> {
    let token = token::load_token()?;

    let github =
        GitHubClient::new(args.api_url.as_str(), &token, Level::Debug).map_err(AppError::Client)?;

    // Always made: a failure here means the token was rejected.
    let rate_limits = github.rate_limits().await.map_err(AppError::RateLimit)?;
    if args.limits {
        output::write_rate_limits(&mut stdout().lock(), rate_limits.core())?;
        return Ok(());
    }
    debug!(
        "{} of {} API requests remaining",
        rate_limits.core().remaining,
        rate_limits.core().limit
    );

    if args.version {
        println!("{} {}", env!("CARGO_BIN_NAME"), env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let organization = args.organization()?;

    let repos = github
        .list_org_repos(organization)
        .await
        .map_err(AppError::PageFetch)?;

    let styled = stdout().is_terminal();
    output::write_repos(&mut stdout().lock(), &repos, styled)?;

    Ok(())
}
