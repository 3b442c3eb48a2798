pub mod types;
pub mod commands;
pub mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::config::SitePaths;

/// Site locations and config layers shared by every command
#[derive(Debug, Clone)]
pub struct Context {
    pub paths: SitePaths,
    pub config_files: Option<Vec<PathBuf>>,
}

impl Context {
    pub fn from_cli(cli: &types::Cli) -> Self {
        let root = cli.source.clone().unwrap_or_else(|| PathBuf::from("./"));
        let mut paths = SitePaths::new(&root);
        if let Some(content) = &cli.content {
            paths = paths.with_content_dir(content);
        }
        if let Some(public) = &cli.public {
            paths = paths.with_public_dir(public);
        }

        let config_files = if cli.config.is_empty() {
            None
        } else {
            Some(cli.config.iter().map(|c| root.join(c)).collect())
        };

        Context { paths, config_files }
    }
}

/// Run the command-line interface
pub fn run() -> ExitCode {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug, cli.quiet);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    let ctx = Context::from_cli(&cli);

    let result = match &cli.command {
        types::Commands::Check { json } => commands::handle_check_command(&ctx, *json),
        types::Commands::List { sort, tag, json } => {
            commands::handle_list_command(&ctx, (*sort).into(), tag.as_deref(), *json)
        }
        types::Commands::Tags { json } => commands::handle_tags_command(&ctx, *json),
        types::Commands::Show { slug } => commands::handle_show_command(&ctx, slug),
        command @ types::Commands::New { .. } => commands::handle_new_command(&ctx, command),
        types::Commands::Config { key } => commands::handle_config_command(&ctx, key.as_deref()),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
