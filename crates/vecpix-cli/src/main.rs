use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use vecpix_engine::logging::{init_logging, LoggingConfig};

const USAGE: &str = "usage: vecpix <input.svg> <output.png>";

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    let Some((input, output)) = parse_args(std::env::args_os().skip(1)) else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    match run(&input, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(mut args: impl Iterator<Item = OsString>) -> Option<(PathBuf, PathBuf)> {
    let input = args.next()?;
    let output = args.next()?;
    if args.next().is_some() {
        return None;
    }
    Some((input.into(), output.into()))
}

fn run(input: &Path, output: &Path) -> anyhow::Result<()> {
    log::debug!("converting {} -> {}", input.display(), output.display());
    vecpix_scene::convert(input, output)
}
