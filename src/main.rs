use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use procstat_log::{AnalysisError, Result, analysis, logging, render};
use std::io::{self, Write};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "procstat-log")]
#[command(version, about = "Per-user process and resource summary for a process log", long_about = None)]
struct Cli {
    /// Log file with lines of `<timestamp> <username> <process> <cpu> <mem>`.
    log: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Raise log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => return fail(AnalysisError::Usage(e.render().to_string()).into()),
        },
    };

    logging::init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(e),
    }
}

fn run(cli: &Cli) -> Result<()> {
    // 1) Parse + aggregate, 2) averages from both workers, 3) report.
    let report = analysis::analyze_file(&cli.log)?;

    let out = match cli.format {
        OutputFormat::Text => render::render_text_report(&report),
        OutputFormat::Json => render::render_json_report(&report)?,
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn fail(err: anyhow::Error) -> ExitCode {
    match err.downcast_ref::<AnalysisError>() {
        // clap already rendered "error: ..." plus the usage line.
        Some(AnalysisError::Usage(usage)) => eprint!("{usage}"),
        _ => eprintln!("error: {err:#}"),
    }
    ExitCode::from(1)
}
