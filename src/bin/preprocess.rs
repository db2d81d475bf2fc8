use std::io::{self, BufRead, Write};

use clap::Parser;
use dispersion::ForestBuilder;

/// Converts a delimited record stream on stdin into the spanning-forest
/// edge list the solver consumes: a `node_count edge_count` header line,
/// then one 0-indexed `a b` pair per line on stdout.
///
/// Fields at positions 1 and 3 of each record are taken as vertex names;
/// either may be absent. Names are deduplicated into dense ids, and a pair
/// only becomes an edge when its endpoints are not yet connected.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Field delimiter within each record.
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,
    /// Treat the first line as data instead of a header.
    #[arg(long)]
    no_header: bool,
}

fn main() {
    let args = Args::parse();

    let mut builder = ForestBuilder::new();
    let stdin = io::stdin();
    for (n, line) in stdin.lock().lines().enumerate() {
        let line = line.expect("Unable to read stdin");
        if n == 0 && !args.no_header {
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(args.delimiter).collect();
        let first = fields.get(1).copied().unwrap_or("");
        let second = fields.get(3).copied().unwrap_or("");
        match (first.is_empty(), second.is_empty()) {
            (false, false) => {
                builder.add_pair(first, second);
            }
            (false, true) => {
                builder.add_vertex(first);
            }
            (true, false) => {
                builder.add_vertex(second);
            }
            (true, true) => {}
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{} {}", builder.n_vertices(), builder.edges().len())
        .expect("Unable to write stdout");
    for &(a, b) in builder.edges() {
        writeln!(out, "{a} {b}").expect("Unable to write stdout");
    }
}
