use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use pyspace::commands;
use pyspace::output::{Output, print_error};

#[derive(Parser)]
#[command(name = "pyspace")]
#[command(about = "Generate a VS Code workspace and PYTHONPATH .env for a Python source tree")]
#[command(version)]
struct Cli {
    /// Root of the source tree (default: current directory)
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    path: Option<PathBuf>,

    /// Anything after PATH is ignored
    #[arg(hide = true, num_args = 0.., allow_hyphen_values = true, trailing_var_arg = true)]
    _rest: Vec<OsString>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let out = Output::new();

    let opts = commands::generate::GenerateOptions { path: cli.path };
    if let Err(e) = commands::generate(opts, &out) {
        print_error(&e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
