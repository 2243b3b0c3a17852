use clap::Parser;
use std::io::{self, Read, Write};
use tracing::Level;

use swift_mapper_compiler::{run_plugin, MapperError};

/// protoc runs the plugin without arguments and talks to it over stdin/stdout.
#[derive(Parser)]
#[command(name = "protoc-gen-swift-mapper", version)]
#[command(
    about = "protoc plugin mapping protobuf full names to swift-protobuf generated names",
    long_about = "Reads a CodeGeneratorRequest from stdin and writes a CodeGeneratorResponse \
                  holding mapper.txt to stdout. Pass options with --swift-mapper_opt, e.g. \
                  --swift-mapper_opt=abbreviations=url:http:https:id"
)]
struct Cli {}

fn main() -> Result<(), MapperError> {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::WARN)
        .with_target(false)
        .init();

    run().inspect_err(|err| tracing::error!("{}", err))
}

fn run() -> Result<(), MapperError> {
    // Read the CodeGeneratorRequest
    let mut input = Vec::new();
    io::stdin().lock().read_to_end(&mut input)?;

    // Nothing reaches stdout unless the whole table was computed
    let (table, output) = run_plugin(&input)?;

    // Echo the table for whoever watches the build
    let mut stderr = io::stderr().lock();
    for record in table.records() {
        writeln!(stderr, "{}", record)?;
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(&output)?;
    stdout.flush()?;
    Ok(())
}
