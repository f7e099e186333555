use clap::{Parser, ValueEnum};
use kiseki::prelude::*;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::fs;

/// Which structure to generate a scenario for
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    Array,
    LinkedList,
    Stack,
    Queue,
    Traversal,
    Bst,
    Graph,
    Grid,
}

/// A CLI tool to generate random scenarios for the kiseki trace engine
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The structure to generate
    #[arg(value_enum)]
    kind: Kind,

    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "scenario.json")]
    output: String,

    /// Number of records, graph nodes or grid cells
    #[arg(short, long, default_value_t = 8)]
    size: usize,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.size == 0 {
        eprintln!("Error: --size must be at least 1");
        std::process::exit(1);
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!("Generating a {:?} scenario with {} elements...", cli.kind, cli.size);

    let scenario = match cli.kind {
        Kind::Array => generate_array(&mut rng, cli.size),
        Kind::LinkedList => generate_list(&mut rng, cli.size),
        Kind::Stack => generate_stack(&mut rng, cli.size),
        Kind::Queue => generate_queue(&mut rng, cli.size),
        Kind::Traversal => generate_traversal(&mut rng, cli.size),
        Kind::Bst => generate_bst(&mut rng, cli.size),
        Kind::Graph => generate_graph(&mut rng, cli.size),
        Kind::Grid => generate_grid(&mut rng, cli.size),
    };

    fs::write(&cli.output, scenario.to_json()?)?;

    println!(
        "-> {} on {} input, saved to '{}'",
        scenario.action.operation(),
        scenario.input.kind(),
        cli.output
    );

    Ok(())
}

fn random_values(rng: &mut StdRng, size: usize) -> Vec<f64> {
    (0..size).map(|_| rng.random_range(1..100) as f64).collect()
}

/// Distinct values, so a BST built from them has no duplicate counters.
fn distinct_values(rng: &mut StdRng, size: usize) -> Vec<f64> {
    let mut pool: Vec<f64> = (1..=(size.max(1) * 4)).map(|v| v as f64).collect();
    pool.shuffle(rng);
    pool.truncate(size);
    pool
}

fn generate_array(rng: &mut StdRng, size: usize) -> Scenario {
    let values = random_values(rng, size);
    let op = match rng.random_range(0..3) {
        0 => ArrayOp::Insert {
            index: rng.random_range(0..=size as i64),
            value: rng.random_range(1..100) as f64,
        },
        1 => ArrayOp::Delete {
            index: rng.random_range(0..size as i64),
        },
        _ => ArrayOp::Search {
            value: values[rng.random_range(0..size)],
        },
    };
    Scenario::new(Input::from_values(&values), Action::Array(op))
}

fn generate_list(rng: &mut StdRng, size: usize) -> Scenario {
    let values = random_values(rng, size);
    let value = rng.random_range(1..100) as f64;
    let op = match rng.random_range(0..7) {
        0 => ListOp::InsertHead { value },
        1 => ListOp::InsertTail { value },
        2 => ListOp::InsertAt {
            index: rng.random_range(0..=size as i64),
            value,
        },
        3 => ListOp::DeleteHead,
        4 => ListOp::DeleteTail,
        5 => ListOp::DeleteAt {
            index: rng.random_range(0..size as i64),
        },
        _ => ListOp::Search {
            value: values[rng.random_range(0..size)],
        },
    };
    let action = Action::LinkedList(ListAction {
        op,
        tail_pointer: rng.random_bool(0.5),
    });
    Scenario::new(Input::from_values(&values), action)
}

fn generate_stack(rng: &mut StdRng, size: usize) -> Scenario {
    let op = match rng.random_range(0..3) {
        0 => StackOp::Push {
            value: rng.random_range(1..100) as f64,
        },
        1 => StackOp::Pop,
        _ => StackOp::Peek,
    };
    Scenario::new(Input::from_values(&random_values(rng, size)), Action::Stack(op))
}

fn generate_queue(rng: &mut StdRng, size: usize) -> Scenario {
    let op = match rng.random_range(0..3) {
        0 => QueueOp::Enqueue {
            value: rng.random_range(1..100) as f64,
        },
        1 => QueueOp::Dequeue,
        _ => QueueOp::Peek,
    };
    Scenario::new(Input::from_values(&random_values(rng, size)), Action::Queue(op))
}

/// Level-order records with roughly one hole in five below the root.
fn generate_traversal(rng: &mut StdRng, size: usize) -> Scenario {
    let records = (0..size)
        .map(|i| {
            if i > 0 && rng.random_bool(0.2) {
                Record::hole(format!("n{}", i))
            } else {
                Record::new(format!("n{}", i), rng.random_range(1..100) as f64)
            }
        })
        .collect();
    let mode = match rng.random_range(0..4) {
        0 => TraversalOrder::Preorder,
        1 => TraversalOrder::Inorder,
        2 => TraversalOrder::Postorder,
        _ => TraversalOrder::LevelOrder,
    };
    Scenario::new(Input::Records(records), Action::Traversal { mode })
}

fn generate_bst(rng: &mut StdRng, size: usize) -> Scenario {
    let values = distinct_values(rng, size);
    let existing = values[rng.random_range(0..size)];
    let probe = rng.random_range(1..(size * 4 + 1)) as f64;
    let op = match rng.random_range(0..7) {
        0 => BstOp::Insert { value: probe },
        1 => BstOp::Delete { value: existing },
        2 => BstOp::Search { value: probe },
        3 => BstOp::Min,
        4 => BstOp::Max,
        5 => BstOp::Floor { value: probe },
        _ => BstOp::Ceil { value: probe },
    };
    Scenario::new(Input::from_values(&values), Action::Bst(op))
}

fn node_name(i: usize) -> String {
    let letter = (b'A' + (i % 26) as u8) as char;
    if i < 26 {
        letter.to_string()
    } else {
        format!("{}{}", letter, i / 26)
    }
}

/// A random spanning tree plus a few extra edges, so every node is reachable.
fn generate_graph(rng: &mut StdRng, size: usize) -> Scenario {
    let names: Vec<String> = (0..size).map(node_name).collect();
    let mut edges = Vec::new();
    for i in 1..size {
        let parent = rng.random_range(0..i);
        edges.push(EdgeRecord {
            source: names[parent].clone(),
            target: names[i].clone(),
        });
    }
    for _ in 0..size / 2 {
        let u = rng.random_range(0..size);
        let v = rng.random_range(0..size);
        if u != v {
            edges.push(EdgeRecord {
                source: names[u].clone(),
                target: names[v].clone(),
            });
        }
    }
    let nodes = names
        .iter()
        .map(|id| GraphNodeRecord {
            id: id.clone(),
            value: None,
            x: None,
            y: None,
        })
        .collect();
    let action = Action::Graph(GraphAction {
        op: if rng.random_bool(0.5) { Algorithm::Bfs } else { Algorithm::Dfs },
        start: names[0].clone(),
        end: names[size - 1].clone(),
        directed: false,
    });
    Scenario::new(Input::Graph(GraphRecord {
            nodes,
            edges: Some(edges),
        }), action)
}

/// A square-ish maze; the first and last cells are always open.
fn generate_grid(rng: &mut StdRng, size: usize) -> Scenario {
    let cols = (size as f64).sqrt().ceil().max(1.0) as usize;
    let cells: Vec<Record> = (0..size)
        .map(|i| {
            let open = i == 0 || i == size - 1 || !rng.random_bool(0.25);
            Record::new(format!("c{}", i), if open { 0.0 } else { 1.0 })
        })
        .collect();
    let action = Action::Grid(GridAction {
        op: if rng.random_bool(0.5) { Algorithm::Bfs } else { Algorithm::Dfs },
        cols,
        start: cells[0].id.clone(),
        end: cells[size - 1].id.clone(),
    });
    Scenario::new(Input::Records(cells), action)
}
