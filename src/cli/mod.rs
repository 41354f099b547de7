use anyhow::Result;

pub mod args;
mod exit_status;
mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use run::{Job, RunSummary};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_files_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let job = Job::from_args(args)?;
    let quiet = job.quiet;
    let summary = run::run(job)?;
    if !quiet {
        report::print_summary(&summary);
    }

    Ok(ExitStatus::Success)
}
