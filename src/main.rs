#[macro_use]
extern crate tracing;

use std::io::Write;

use structopt::{clap::AppSettings, StructOpt};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "dtutils",
    about = "Developer utilities",
    settings = &[AppSettings::TrailingVarArg, AppSettings::AllowNegativeNumbers]
)]
struct Opts {
    /// Increase logging verbosity
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u32,
    /// Print command results as JSON
    #[structopt(long)]
    json: bool,
    /// Print the banner without colors
    #[structopt(long)]
    no_color: bool,
    /// Command to run, followed by its arguments
    #[structopt(name = "COMMAND")]
    args: Vec<String>,
}

fn install_tracing(opts: &Opts) -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_error::ErrorLayer;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let fmt_layer = fmt::layer().with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_from_env("DTUTILS_LOG").unwrap_or_else(|_| {
        EnvFilter::new(match opts.verbose {
            0 => "dtutils=warn",
            1 => "dtutils=info",
            2 => "dtutils=debug",
            _ => "dtutils=trace",
        })
    });

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .try_init()
}

#[paw::main]
fn main(opts: Opts) -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    install_tracing(&opts)?;

    let options = dtutils::cli::Options {
        json: opts.json,
        color: !opts.no_color,
    };

    let exit = {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let exit = dtutils::cli::run(&opts.args, &options, &mut out)?;
        out.flush()?;
        exit
    };

    debug!(code = exit.code(), "exiting");
    std::process::exit(exit.code())
}
