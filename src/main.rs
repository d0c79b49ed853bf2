use std::process::exit;

use anyhow::Result;
use clap::ArgMatches;
use human_panic::setup_panic;
use log::info;

use module_build::prelude::*;

fn main() {
    setup_panic!();

    if let Err(e) = run() {
        // The logger may not be up yet, so report on stderr directly.
        eprintln!("Error: {e}");
        check_for_stdout_stream();
        exit(1);
    }

    check_for_stdout_stream();
}

fn run() -> Result<()> {
    let matches = get_matches()?;
    let verbosity = get_verbosity(&matches);
    let log_file = get_log_file(&matches)?;
    init_logger(verbosity, &log_file)?;

    let dry_run = matches.get_flag("dry");

    // Single-file mode: run the transformer once and exit.
    if let Some(file) = matches.get_one::<String>("file") {
        return transform_single_file(file, dry_run);
    }

    let root = expand_path(root_argument(&matches)?);
    let context = run_build(ProcessingOptions { root, dry_run })?;

    if context.stats.errors > 0 {
        info!(
            "Completed with {} failed transformations, see the log for details",
            context.stats.errors
        );
    }

    Ok(())
}

fn transform_single_file(file: &str, dry_run: bool) -> Result<()> {
    let path = expand_path(file);
    let result = transform_file(&path, !dry_run)?;
    info!(
        "{} {} -> {} + {}",
        if result.written {
            "Transformed"
        } else {
            "Planned transform"
        },
        result.source_path.display(),
        result.esm_path.display(),
        result.commonjs_path.display()
    );
    Ok(())
}

fn root_argument(matches: &ArgMatches) -> Result<&str> {
    matches
        .get_one::<String>("root")
        .map(String::as_str)
        .ok_or_else(|| generic_error("Root directory argument not found").into())
}
