use clap::{Parser, Subcommand};
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    time::Instant,
};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use zyxt::{
    config::{CliConfig, OutputFormat, DEFAULT_CONFIG_FILE},
    Error, InternalResult, Token, Tokenizer,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE, global = true)]
    config: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Token output format (overrides the config file)
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Print how long tokenizing took
    #[arg(long, global = true)]
    timings: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize a source file and print its tokens
    Run(FileArgs),

    /// Compile a source file
    Compile(FileArgs),

    /// Interpret a source file
    Interpret(FileArgs),

    /// Print the Zyxt version
    Version,
}

#[derive(Parser)]
struct FileArgs {
    /// Path to the source file
    file: Option<PathBuf>,
}

fn read_source(path: &Path) -> InternalResult<String> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    std::fs::read_to_string(path).map_err(|source| Error::Unreadable {
        path: path.to_path_buf(),
        source,
    })
}

fn write_tokens(tokens: &[Token], format: OutputFormat) -> InternalResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Debug => {
            for token in tokens {
                writeln!(out, "{:?}", token).map_err(|e| Error::Output(e.to_string()))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, tokens)
                .map_err(|e| Error::Output(e.to_string()))?;
            writeln!(out).map_err(|e| Error::Output(e.to_string()))?;
        }
    }
    Ok(())
}

fn run_file(args: &FileArgs, config: &CliConfig) -> InternalResult<()> {
    let path = args.file.as_deref().ok_or(Error::NoFile)?;
    let source = read_source(path)?;
    debug!("Tokenizing {:?} ({} bytes)", path, source.len());

    let started = Instant::now();
    let tokens = Tokenizer::new().tokenize(&source);
    let elapsed = started.elapsed().as_micros();
    info!(count = tokens.len(), elapsed_us = elapsed as u64, "tokenized");

    write_tokens(&tokens, config.output)?;

    if config.timings {
        println!("Lexing time: {}µs", elapsed);
    }
    Ok(())
}

fn run(cli: &Cli, config: &CliConfig) -> InternalResult<()> {
    match &cli.command {
        Commands::Run(args) => run_file(args, config),
        Commands::Compile(_) | Commands::Interpret(_) => {
            println!("Coming soon!");
            Ok(())
        }
        Commands::Version => {
            println!("Zyxt version {}", VERSION);
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> InternalResult<CliConfig> {
    let mut config = CliConfig::load_or_default(&cli.config)?;
    if let Some(format) = cli.format {
        config.output = format;
    }
    if cli.timings {
        config.timings = true;
    }
    if cli.verbose {
        config.log_filter = "debug".to_string();
    }
    Ok(config)
}

fn fail(e: Error) -> ! {
    eprintln!("Error: [{}] {}", e.code(), e);
    std::process::exit(1);
}

fn main() {
    let cli = Cli::parse();

    let config = load_config(&cli).unwrap_or_else(|e| fail(e));

    let filter = if cli.verbose {
        EnvFilter::new(&config.log_filter)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    // Loading happens before the subscriber exists, so report the fallback here.
    if !cli.config.exists() {
        debug!("no config at {}, using defaults", cli.config.display());
    }
    debug!("config: {:?}", config);

    if let Err(e) = run(&cli, &config) {
        fail(e);
    }
}
