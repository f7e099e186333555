use clap::{Parser, ValueEnum};
use kiseki::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;

/// Output format for the generated frames.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Pretty-printed JSON array of frames
    Json,
    /// Plain-text transcript with highlighted code lines
    Text,
}

/// Runs a data-structure scenario and prints its animation frames
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the scenario JSON file (`{"input": ..., "action": ...}`)
    scenario_path: Option<String>,

    /// Optional layout JSON file overriding the default geometry
    #[arg(short, long)]
    layout: Option<String>,

    /// How to print the frames
    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,

    /// Write the output to this file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    if cli.human {
        run_interactive();
    } else {
        run_non_interactive(cli);
    }
}

fn run_scenario(scenario_path: String, layout_path: Option<String>, format: Format, output: Option<String>) {
    let total_start = Instant::now();

    // --- 1. File Loading ---
    let load_start = Instant::now();
    let scenario = Scenario::from_file(&scenario_path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to load scenario from '{}': {}", scenario_path, e))
    });
    let layout = match layout_path {
        Some(path) => LayoutConfig::from_file(&path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load layout from '{}': {}", path, e))),
        None => LayoutConfig::default(),
    };
    let load_duration = load_start.elapsed();

    // --- 2. Tracing ---
    let operation = scenario.action.operation();
    log::info!("Tracing {} on {} input", operation, scenario.input.kind());
    let trace_start = Instant::now();
    let engine = Engine::builder().layout(layout).build();
    let frames = engine
        .try_generate(&scenario.input, &scenario.action)
        .unwrap_or_else(|e| exit_with_error(&format!("Cannot trace {}: {}", operation, e)));
    let trace_duration = trace_start.elapsed();

    // --- 3. Rendering ---
    let rendered = match format {
        Format::Json => serde_json::to_string_pretty(&frames)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize frames: {}", e))),
        Format::Text => TraceFormatter::format_frames(&frames, Some(operation)),
    };
    match &output {
        Some(path) => fs::write(path, &rendered)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to write '{}': {}", path, e))),
        None => println!("{}", rendered),
    }

    // --- 4. Summary ---
    let total_duration = total_start.elapsed();
    log::info!("Generated {} frames for {}", frames.len(), operation);
    if let Some(path) = output {
        log::info!("Frames written to {}", path);
    }
    log::info!(
        "Loading: {:?}, tracing: {:?}, total: {:?}",
        load_duration,
        trace_duration,
        total_duration
    );
}

/// Runs the CLI in non-interactive mode, taking all arguments from the command line.
fn run_non_interactive(cli: Cli) {
    let scenario_path = cli.scenario_path.unwrap_or_else(|| {
        exit_with_error("Scenario path is required in non-interactive mode.");
    });
    run_scenario(scenario_path, cli.layout, cli.format, cli.output);
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive() {
    println!("--- Kiseki Interactive Mode ---");

    let scenario_path = prompt_for_input("Enter scenario path", Some("data/scenario.json"));
    let layout_str = prompt_for_input("Enter layout path (optional)", None);
    let layout_path = if layout_str.is_empty() {
        None
    } else {
        Some(layout_str)
    };

    let format = loop {
        println!("\nPlease select an output format:");
        println!("  1: Text transcript");
        println!("  2: JSON frames");
        let choice_str = prompt_for_input("Enter choice", Some("1"));

        match choice_str.trim() {
            "1" => break Format::Text,
            "2" => break Format::Json,
            _ => println!("Invalid choice. Please enter 1 or 2."),
        }
    };

    run_scenario(scenario_path, layout_path, format, None);
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    if let Err(e) = io::stdout().flush() {
        exit_with_error(&format!("Failed to flush stdout: {}", e));
    }

    if let Err(e) = io::stdin().read_line(&mut line) {
        exit_with_error(&format!("Failed to read line: {}", e));
    }
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
