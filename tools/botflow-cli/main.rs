use botflow::prelude::*;
use clap::{Parser, Subcommand};
use std::fs;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Compile chatbot graphs and step through them from the command line
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Optional session config JSON with walk limits
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a builder graph into a node map
    Compile {
        /// Path to the graph JSON ({ nodes, edges })
        graph_path: String,
        /// Where to write the node map; printed to stdout when omitted
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Walk a compiled node map and print what would be sent
    Walk {
        /// Path to the node map JSON
        map_path: String,
        /// Node to start from; defaults to the start node
        #[arg(short, long)]
        start: Option<String>,
    },
    /// Resolve a button or option click against a compiled node map
    Click {
        /// Path to the node map JSON
        map_path: String,
        /// Id of the clicked button or option node
        button_id: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let walk_config = match &cli.config {
        Some(path) => {
            SessionConfig::from_file(path)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e)))
                .walk
        }
        None => WalkConfig::default(),
    };

    match cli.command {
        Command::Compile { graph_path, output } => run_compile(&graph_path, output.as_deref()),
        Command::Walk { map_path, start } => run_walk(&map_path, start.as_deref(), walk_config),
        Command::Click {
            map_path,
            button_id,
        } => run_click(&map_path, &button_id, walk_config),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_compile(graph_path: &str, output: Option<&str>) {
    let graph_json = fs::read_to_string(graph_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read graph file '{}': {}",
            graph_path, e
        ))
    });
    let graph: BotGraph = serde_json::from_str(&graph_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse graph JSON: {}", e)));

    let compile_start = Instant::now();
    let artifacts = Compiler::builder(graph).build().compile();
    let compile_duration = compile_start.elapsed();

    eprintln!(
        "Compiled {} nodes in {:?} with {} warning(s)",
        artifacts.node_map.len(),
        compile_duration,
        artifacts.warnings.len()
    );
    for warning in &artifacts.warnings {
        eprintln!("  - {}", warning);
    }

    let compiled = artifacts.into_compiled_bot();
    match output {
        Some(path) => compiled
            .save(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to save node map: {}", e))),
        None => {
            let json = compiled
                .to_json()
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to render node map: {}", e)));
            println!("{}", json);
        }
    }
}

fn run_walk(map_path: &str, start: Option<&str>, config: WalkConfig) {
    let engine = load_engine(map_path, config);
    let start_id = match start {
        Some(start) => start.to_string(),
        None => engine
            .map()
            .start_node()
            .map(|node| node.node_id.clone())
            .unwrap_or_else(|| exit_with_error("Node map has no start node; pass --start")),
    };

    let walked = engine.walk(&start_id);
    println!("Walk: {}", WalkFormatter::format_walk(&walked));
    let resolution = Resolution::from_walk(&walked);
    print_resolution(&resolution);
}

fn run_click(map_path: &str, button_id: &str, config: WalkConfig) {
    let engine = load_engine(map_path, config);
    match engine.resolve_interaction(None, button_id) {
        Ok(resolution) => {
            println!("Walked: {}", resolution.walked.join(" -> "));
            print_resolution(&resolution);
        }
        Err(e) => exit_with_error(&format!("Click not resolved: {}", e)),
    }
}

fn load_engine(map_path: &str, config: WalkConfig) -> FlowEngine {
    let compiled = CompiledBot::from_file(map_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load node map: {}", e)));
    for (owner, target) in compiled.node_map.dangling_references() {
        eprintln!("Warning: '{}' references missing node '{}'", owner, target);
    }
    FlowEngine::with_config(compiled.node_map, config)
}

fn print_resolution(resolution: &Resolution) {
    println!("\nIntents:");
    if resolution.intents.is_empty() {
        println!("  (nothing to send)");
    } else {
        println!("{}", WalkFormatter::format_intents(&resolution.intents));
    }
    match &resolution.parked_node_id {
        Some(parked) => println!("\nParked at: {}", parked),
        None => println!("\nFlow finished"),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
