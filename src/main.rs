use std::process::ExitCode;

use clap::Parser;
use mdconf::{
    generate_init_file, logging, run, should_use_colors, CliOverlay, FormatterArgs,
    OutputContext, OutputMode, SourceStrategy,
};

#[derive(Parser)]
#[command(name = "mdconf")]
#[command(
    version,
    about = "Show the markdown formatter options that apply to each file"
)]
struct Cli {
    #[command(flatten)]
    formatter: FormatterArgs,

    /// Which config files to consult
    #[arg(long, value_enum, default_value_t = SourceStrategy::Precedence)]
    source: SourceStrategy,

    /// Print resolved options as JSON
    #[arg(long, conflicts_with = "quiet")]
    json: bool,

    /// Output only file names and the config file that applies
    #[arg(short, long)]
    quiet: bool,

    /// Log each lookup decision
    #[arg(short, long)]
    verbose: bool,

    /// Force colored output
    #[arg(long)]
    color: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Generate a template .mdformat.toml in the current directory
    #[arg(long)]
    init: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("Warning: failed to initialize logging: {e}");
    }

    // Handle --init command
    if cli.init {
        return handle_init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };
    let use_colors = output_mode == OutputMode::Normal && should_use_colors(cli.color, cli.no_color);
    let ctx = OutputContext::new(output_mode, use_colors);

    // Only flags given explicitly override config files
    let overlay = CliOverlay::from_args(&cli.formatter);

    let paths = if cli.formatter.paths.is_empty() {
        vec![".".to_string()]
    } else {
        cli.formatter.paths.clone()
    };

    match run(&paths, &overlay, cli.source, &ctx) {
        Ok(result) => {
            if result.has_errors() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

fn handle_init() -> ExitCode {
    match generate_init_file() {
        Ok(path) => {
            println!("Created {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}
