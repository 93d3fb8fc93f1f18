use anyhow::Context;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

mod access_log;
mod download;
mod extract;
mod fetch;
mod logging;
mod order;
mod render;

use fetch::{FetchError, FetchSettings, ReqwestFetcher};
use order::OrderMode;

pub type Result<T> = anyhow::Result<T>;

const EXIT_USAGE: u8 = 1;
const EXIT_IO: u8 = 2;
const EXIT_FETCH: u8 = 3;

#[derive(Parser, Debug)]
#[command(name = "logpuzzle")]
#[command(about = "Find puzzle image URLs in an access log and download them", long_about = None)]
struct Cli {
    /// Destination directory for downloaded images.
    #[arg(short = 'd', long, value_name = "DIR")]
    todir: Option<PathBuf>,

    /// How to order the extracted URLs.
    #[arg(long, value_enum, default_value_t = OrderMode::Auto)]
    order: OrderMode,

    /// More log output on stderr (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Access log to extract urls from; the hostname follows the first `_` in its name.
    logfile: PathBuf,
}

fn main() -> ExitCode {
    let code = cli_main(std::env::args_os(), &mut io::stdout().lock());
    ExitCode::from(code)
}

/// Parse `args`, run, and return the process exit code. URL listings go to `out`.
fn cli_main<I, T>(args: I, out: &mut impl Write) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() <= 1 {
        eprintln!("{}", Cli::command().render_usage());
        return EXIT_USAGE;
    }

    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() { EXIT_USAGE } else { 0 };
        }
    };

    if let Err(err) = logging::init(cli.verbose) {
        eprintln!("warning: logger unavailable: {:#}", err);
    }

    match run(cli, out) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {:#}", err);
            exit_code(&err)
        }
    }
}

fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    // 1) Extract + order.
    let urls = extract::read_urls(&cli.logfile, cli.order)?;

    // 2) Either print or download.
    match cli.todir {
        Some(dir) => {
            let fetcher = ReqwestFetcher::new(&FetchSettings::default())?;
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .context("start async runtime")?;
            runtime.block_on(download::download_images(&urls, &dir, &fetcher))?;
        }
        None => {
            for url in &urls {
                writeln!(out, "{}", url)?;
            }
            out.flush()?;
        }
    }

    Ok(())
}

/// Fetch failures anywhere in the chain map to [`EXIT_FETCH`]; everything else is I/O.
fn exit_code(err: &anyhow::Error) -> u8 {
    if err.chain().any(|cause| cause.downcast_ref::<FetchError>().is_some()) {
        EXIT_FETCH
    } else {
        EXIT_IO
    }
}
