use depix::telemetry::init_default_tracing;
use depix::{ConversionConfig, DepixError, DepixResult, convert_file};
use std::path::PathBuf;

const USAGE: &str = "depix <input.svg|input.txt> <output>";

#[derive(Debug, PartialEq, Eq)]
struct CliArgs {
    input: PathBuf,
    output: PathBuf,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        let code = if matches!(err, DepixError::Usage(_)) { 2 } else { 1 };
        std::process::exit(code);
    }
}

fn run() -> DepixResult<()> {
    let args = parse_args(std::env::args().skip(1))?;
    convert_file(&args.input, &args.output, &ConversionConfig::default())?;
    Ok(())
}

fn parse_args(args: impl IntoIterator<Item = String>) -> DepixResult<CliArgs> {
    let args: Vec<String> = args.into_iter().collect();
    match <[String; 2]>::try_from(args) {
        Ok([input, output]) => Ok(CliArgs {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
        }),
        Err(args) => Err(DepixError::Usage(format!(
            "expected 2 arguments, got {}\n  {USAGE}",
            args.len()
        ))),
    }
}
