//! Diagnostic message generator: `diagmsg-codegen INPUT OUTPUT`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use diagmsg_codegen::{CodegenError, Config, pipeline};

#[derive(Parser, Debug)]
#[command(
    name = "diagmsg-codegen",
    version,
    about = "Generate Go diagnostic message constructors from a YAML catalogue"
)]
struct Cli {
    /// YAML message catalogue to read.
    input: PathBuf,
    /// Go source file to write (overwritten if it exists).
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help / --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            return fail(&CodegenError::Usage(format!(
                "{}; usage: diagmsg-codegen <INPUT> <OUTPUT>",
                e.kind()
            )));
        }
    };

    match pipeline::generate(&cli.input, &cli.output, &Config::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(&e),
    }
}

/// Report a fatal error on one line and turn it into the stage's exit code.
fn fail(err: &CodegenError) -> ExitCode {
    let stage = err.stage();
    log::debug!("aborting in {stage:?} stage");
    eprintln!("{}: {err}", stage.prefix());
    ExitCode::from(stage.exit_code())
}
