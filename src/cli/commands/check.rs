use std::process::ExitCode;

use log::info;

use crate::cli::Context;
use crate::report::check_site;
use crate::utils::error::{FolioError, Result};

/// Handle the 'check' command
pub fn handle_check_command(ctx: &Context, json: bool) -> Result<ExitCode> {
    info!("Checking site at {}", ctx.paths.root.display());
    let report = check_site(&ctx.paths, ctx.config_files.clone());

    if json {
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| FolioError::Generic(format!("Failed to serialize report: {}", e)))?;
        println!("{}", out);
    } else {
        for issue in &report.issues {
            println!("{}", issue);
        }
        println!("{}", report.summary());
    }

    Ok(if report.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
