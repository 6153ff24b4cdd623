//! # slackmerge CLI
//!
//! Command-line interface for the slackmerge library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use slackmerge::cancel::CancelToken;
use slackmerge::cli::Args;
use slackmerge::config::MergeConfig;
use slackmerge::core::run;
use slackmerge::SlackmergeError;

fn main() {
    let args = match <Args as ClapParser>::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version are not errors
            let _ = e.print();
            process::exit(i32::from(e.use_stderr()));
        }
    };

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(level) = args.log_level() {
        builder.filter_level(level);
    }
    builder.target(env_logger::Target::Stderr).init();

    if let Err(e) = execute(&args) {
        if e.is_aborted() {
            log::warn!("aborted");
        } else {
            eprintln!("❌ Error: {}", e);
        }
        process::exit(e.exit_code());
    }
}

fn execute(args: &Args) -> Result<(), SlackmergeError> {
    let start = Instant::now();
    let Some(data_dir) = args.data.as_deref() else {
        return Err(SlackmergeError::Usage(
            "data dir missing (use -d/--data <DIR>)".to_string(),
        ));
    };

    let cancel = CancelToken::new();
    let handler_token = cancel.clone();
    if let Err(e) = ctrlc::set_handler(move || handler_token.cancel()) {
        log::warn!("Cannot install Ctrl-C handler: {}", e);
    }

    let summary = run(data_dir, &MergeConfig::new(), &cancel)?;

    if let Some(path) = &summary.output {
        if summary.wrote_output() {
            log::info!(
                "✅ Done! {} lines from {} files saved to {} ({:.2}s)",
                summary.lines,
                summary.files,
                path.display(),
                start.elapsed().as_secs_f64()
            );
        } else {
            log::info!("No messages found, {} not written", path.display());
        }
    }

    Ok(())
}
