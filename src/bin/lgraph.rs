//! CLI entry point for the `lgraph` command-line tool.

use std::process;

use clap::{Args, Parser, Subcommand};

use lockgraph::cli::{commands, parse_edge, GraphInput};
use lockgraph::{Directedness, TraversalOrder};

#[derive(Parser)]
#[command(
    name = "lgraph",
    about = "lgraph: build small graphs and run BFS/DFS over them"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Graph description shared by several subcommands.
#[derive(Args)]
struct GraphArgs {
    /// Edges are one-directional
    #[arg(long)]
    directed: bool,
    /// Vertex to register before any edge (repeatable)
    #[arg(long = "vertex")]
    vertices: Vec<String>,
    /// Edge as SRC:DEST (repeatable)
    #[arg(long = "edge")]
    edges: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Traverse the built-in A/B/C graph from A
    Demo {
        /// Edges are one-directional
        #[arg(long)]
        directed: bool,
    },
    /// Build a graph from arguments and traverse it
    Traverse {
        #[command(flatten)]
        graph: GraphArgs,
        /// Starting vertex
        #[arg(long)]
        start: String,
        /// Order: bfs, dfs, or both
        #[arg(long, default_value = "both")]
        order: String,
    },
    /// Build a graph from arguments and print its adjacency
    Show {
        #[command(flatten)]
        graph: GraphArgs,
    },
}

fn graph_input(args: GraphArgs) -> GraphInput {
    let mut edges = Vec::with_capacity(args.edges.len());
    for raw in &args.edges {
        match parse_edge(raw) {
            Some(edge) => edges.push(edge),
            None => {
                eprintln!("Invalid edge: {} (expected SRC:DEST)", raw);
                process::exit(3);
            }
        }
    }
    GraphInput {
        directedness: Directedness::from_flag(args.directed),
        vertices: args.vertices,
        edges,
    }
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }

    let result = match cli.command {
        Commands::Demo { directed } => {
            commands::cmd_demo(Directedness::from_flag(directed), json)
        }
        Commands::Traverse {
            graph,
            start,
            order,
        } => {
            let orders = match order.to_lowercase().as_str() {
                "both" => vec![TraversalOrder::BreadthFirst, TraversalOrder::DepthFirst],
                other => match TraversalOrder::from_name(other) {
                    Some(o) => vec![o],
                    None => {
                        eprintln!("Invalid order: {}", order);
                        process::exit(3);
                    }
                },
            };
            commands::cmd_traverse(&graph_input(graph), &start, &orders, json)
        }
        Commands::Show { graph } => commands::cmd_show(&graph_input(graph), json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
