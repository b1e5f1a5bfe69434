//! Generate an rspec-puppet spec from a compiled catalog.
//!
//! Usage:
//!   create-specs -c catalog.json
//!   create-specs -c catalog.json -o spec/classes/ntp_spec.rb -x Stage -x '/^Anchor$/'
//!   create-specs -c catalog.json -I 'File[/etc/ntp.conf]' -m

use anyhow::{Context, Result};
use catalog_specgen::{
    DEFAULT_OUTPUT, ExplicitClass, Options, SpecGenerator, load_catalog_from_path, write_spec,
};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "create-specs")]
#[command(about = "Write an rspec-puppet spec asserting every resource in a compiled catalog")]
struct Cli {
    /// Path to the catalog JSON file.
    #[arg(short = 'c', long = "catalog", value_name = "CATALOG")]
    catalog: Option<PathBuf>,
    /// Path to the output rspec file.
    #[arg(short = 'o', long = "output", value_name = "OUTPUTFILE", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Resources to exclude. String or /Regexp/. Repeat to exclude several.
    #[arg(short = 'x', long = "exclude", value_name = "RESOURCE")]
    exclude: Vec<String>,
    /// Resources to include despite the exclude list.
    #[arg(short = 'i', long = "include", value_name = "RESOURCE")]
    include: Vec<String>,
    /// Only include these resources and exclude everything else.
    #[arg(short = 'I', long = "only-include", value_name = "RESOURCE")]
    only_include: Vec<String>,
    /// Use md5sums instead of full file content to validate file content.
    #[arg(short = 'm', long = "md5sums")]
    md5sums: bool,
    /// Fail when a file's content cannot be turned into a check.
    #[arg(long = "strict-content")]
    strict_content: bool,
    /// Class the catalog was compiled for; inferred from the catalog when omitted.
    #[arg(long = "class", value_name = "CLASS")]
    class: Option<String>,
    /// Config file with default excludes (defaults to config.yml next to the binary).
    #[arg(long = "config", value_name = "FILE")]
    config: Option<PathBuf>,
    /// Log more; repeat for debug output.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(catalog) = cli.catalog.clone() else {
        eprintln!("You must specify a catalog file via -c");
        std::process::exit(1);
    };
    if !catalog.exists() {
        eprintln!("{}: not found", catalog.display());
        std::process::exit(1);
    }

    if let Err(err) = run(&cli, catalog) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli, catalog_path: PathBuf) -> Result<()> {
    let options = build_options(cli)?;
    let catalog = load_catalog_from_path(&catalog_path)?;

    let mut generator = SpecGenerator::new(options);
    if let Some(class) = &cli.class {
        generator = generator.with_resolver(ExplicitClass(class.clone()));
    }
    let spec = generator
        .generate(catalog)
        .with_context(|| format!("generating spec from {}", catalog_path.display()))?;

    println!("Writing out as {}", cli.output.display());
    write_spec(&cli.output, &spec)
}

fn build_options(cli: &Cli) -> Result<Options> {
    let mut options = Options::load_or_default(cli.config.as_deref())?;
    for entry in &cli.exclude {
        options.exclude(entry);
    }
    for entry in &cli.include {
        options.include(entry);
    }
    for reference in &cli.only_include {
        options.only_include(reference);
    }
    options.md5sums |= cli.md5sums;
    options.strict_content |= cli.strict_content;
    Ok(options)
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .init();
}
