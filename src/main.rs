use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use dispersion::{Dispersion, DispersionParams, Graph, Strategy};

/// Selects the k most spread-out nodes of a tree or forest.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Input file: a `node_count edge_count` header line, then one
    /// 0-indexed `a b` edge pair per line.
    path: PathBuf,
    /// Number of nodes to choose.
    k: usize,
    /// Selection strategy.
    #[arg(value_enum)]
    strategy: StrategyArg,
    /// Do not print the chosen nodes.
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Copy, Clone, ValueEnum)]
enum StrategyArg {
    Greedy,
    Exact,
}

fn main() {
    let args = Args::parse();

    let contents = fs::read_to_string(&args.path).expect("Unable to read file");
    let graph = parse_graph(&contents);

    let strategy = match args.strategy {
        StrategyArg::Greedy => Strategy::Greedy,
        StrategyArg::Exact => Strategy::Exact,
    };
    let params = DispersionParams::builder().strategy(strategy).build();
    let solver = Dispersion::new(&graph, params);

    let start = Instant::now();
    let result = solver.solve::<i64>(args.k);
    let elapsed = start.elapsed();

    match result {
        Ok(selection) => {
            let name = match args.strategy {
                StrategyArg::Greedy => "GREEDY",
                StrategyArg::Exact => "EXACT",
            };
            println!("{name}:");
            println!("\tscore: {}", selection.score);
            println!("\ttime: {:.6}", elapsed.as_secs_f64());
            if !args.quiet {
                let nodes = selection.nodes.iter()
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                println!("Chosen: {nodes}");
            }
        }
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    }
}

fn parse_graph(contents: &str) -> Graph {
    let mut tokens = contents.split_whitespace()
        .map(|t| t.parse::<usize>().expect("Malformed integer in input"));
    let n_nodes = tokens.next().expect("Missing node count");
    let n_edges = tokens.next().expect("Missing edge count");
    let mut edges = Vec::with_capacity(n_edges);
    for _ in 0..n_edges {
        let a = tokens.next().expect("Missing edge endpoint");
        let b = tokens.next().expect("Missing edge endpoint");
        edges.push((a, b));
    }
    Graph::from_edges(n_nodes, &edges).expect("Invalid edge list")
}
