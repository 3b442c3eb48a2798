use std::process::ExitCode;

fn main() -> ExitCode {
    // Run the CLI
    folio::cli::run()
}
