use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use quarterturn::{
    apply_all, scramble_moves, Algorithm, Color, CubeState, Face, Move, PolicyTable,
    SearchSignal, SolveOutcome, SolveReport, Solver, Variant,
};
use quarterturn::types::{coord_values, shell};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariantOpt {
    Normal,
    Mirror,
}

impl From<VariantOpt> for Variant {
    fn from(v: VariantOpt) -> Self {
        match v {
            VariantOpt::Normal => Variant::Normal,
            VariantOpt::Mirror => Variant::Mirror,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AlgorithmOpt {
    Bfs,
    Ida,
}

impl From<AlgorithmOpt> for Algorithm {
    fn from(a: AlgorithmOpt) -> Self {
        match a {
            AlgorithmOpt::Bfs => Algorithm::Bfs,
            AlgorithmOpt::Ida => Algorithm::Ida,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "solve", about = "Scramble a cube and run the bounded solver on it")]
struct Args {
    /// Cube order (2..=5)
    #[arg(long, default_value_t = 3)]
    order: u8,

    /// Build variant (move semantics are identical)
    #[arg(long, value_enum, default_value_t = VariantOpt::Normal)]
    variant: VariantOpt,

    /// Scramble length when no explicit moves are given
    #[arg(long, default_value_t = 8)]
    scramble_len: usize,

    /// Seed for the deterministic scramble
    #[arg(long, default_value_t = 0x00C0_FFEE_u64)]
    seed: u64,

    /// Explicit scramble as space-separated axis:slice:dir notation
    /// (overrides --scramble-len/--seed). Example: "y:0.5:+ x:-0.5:-"
    #[arg(long)]
    moves: Option<String>,

    /// JSON policy override file merged over the builtin table
    #[arg(long)]
    policy_file: Option<PathBuf>,

    /// Override the policy's engine choice
    #[arg(long, value_enum)]
    algorithm: Option<AlgorithmOpt>,

    /// Override the policy's depth cap
    #[arg(long)]
    max_depth: Option<u32>,

    /// Override the policy's node cap
    #[arg(long)]
    max_nodes: Option<u64>,

    /// Override the policy's wall-clock cap in milliseconds
    #[arg(long)]
    max_millis: Option<u64>,

    /// Override the policy's IDA* threshold cap
    #[arg(long)]
    threshold_max: Option<u32>,

    /// Emit a single JSON report instead of human-readable output
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Suppress the progress spinner
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    order: u8,
    variant: Variant,
    scramble: &'a [Move],
    report: &'a SolveReport,
    verified: bool,
}

fn parse_moves(text: &str) -> Result<Vec<Move>, Box<dyn std::error::Error>> {
    let mut out = Vec::new();
    for tok in text.split_whitespace() {
        out.push(tok.parse::<Move>()?);
    }
    Ok(out)
}

fn notation(moves: &[Move]) -> String {
    moves
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Faces of the unfolded net with their right/down sampling directions.
const NET: [(Face, Face, Face); 6] = [
    (Face::PosY, Face::PosX, Face::PosZ),
    (Face::NegX, Face::PosZ, Face::NegY),
    (Face::PosZ, Face::PosX, Face::NegY),
    (Face::PosX, Face::NegZ, Face::NegY),
    (Face::NegZ, Face::NegX, Face::NegY),
    (Face::NegY, Face::PosX, Face::NegZ),
];

fn face_rows(state: &CubeState, face: Face, right: Face, down: Face) -> Vec<String> {
    let order = usize::from(state.order());
    let coords: Vec<i8> = coord_values(state.order()).collect();
    let span = shell(state.order());
    let mut rows = Vec::with_capacity(order);
    for r in 0..order {
        let mut row = String::with_capacity(order);
        for c in 0..order {
            let mut pos = [0i8; 3];
            pos[face.axis().index()] = face.sign() * span;
            pos[right.axis().index()] = right.sign() * coords[c];
            pos[down.axis().index()] = down.sign() * coords[r];
            row.push(
                state
                    .sticker_at(pos, face)
                    .map_or('.', Color::letter),
            );
        }
        rows.push(row);
    }
    rows
}

/// Classic cross layout: up on top, then left/front/right/back, down last.
fn render_net(state: &CubeState) -> String {
    let order = usize::from(state.order());
    let pad = " ".repeat(order + 1);
    let up = face_rows(state, NET[0].0, NET[0].1, NET[0].2);
    let band: Vec<Vec<String>> = NET[1..5]
        .iter()
        .map(|&(f, r, d)| face_rows(state, f, r, d))
        .collect();
    let down = face_rows(state, NET[5].0, NET[5].1, NET[5].2);

    let mut out = String::new();
    for row in &up {
        out.push_str(&pad);
        out.push_str(row);
        out.push('\n');
    }
    for r in 0..order {
        let line: Vec<&str> = band.iter().map(|rows| rows[r].as_str()).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    for row in &down {
        out.push_str(&pad);
        out.push_str(row);
        out.push('\n');
    }
    out
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut table = PolicyTable::builtin();
    if let Some(path) = &args.policy_file {
        table.load_overrides(path)?;
    }
    let variant = Variant::from(args.variant);
    let mut policy = *table
        .get(args.order, variant)
        .ok_or_else(|| format!("no policy for order {} {:?}", args.order, variant))?;
    if let Some(a) = args.algorithm {
        policy.algorithm = a.into();
    }
    if let Some(d) = args.max_depth {
        policy.budget.max_depth = d;
    }
    if let Some(n) = args.max_nodes {
        policy.budget.max_nodes = n;
    }
    if let Some(ms) = args.max_millis {
        policy.budget.max_millis = Some(ms);
    }
    if let Some(t) = args.threshold_max {
        policy.budget.threshold_max = t;
    }
    table.insert(args.order, variant, policy);

    let scramble = match &args.moves {
        Some(text) => parse_moves(text)?,
        None => scramble_moves(args.order, args.scramble_len, args.seed)?,
    };
    let start = CubeState::new(args.order, variant)?;
    let scrambled = apply_all(&start, &scramble)?;

    if !args.json {
        println!(
            "[solve] order {} ({:?}), scramble [{}]",
            args.order,
            variant,
            notation(&scramble)
        );
        print!("{}", render_net(&scrambled));
    }

    let spinner = if args.json || args.quiet {
        None
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::with_template("[{elapsed_precise}] {msg}").unwrap());
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    };

    let solver = Solver::new(table);
    let report = solver.solve_with(&scrambled, |progress| {
        if let Some(pb) = &spinner {
            pb.set_message(progress.to_string());
        }
        SearchSignal::Continue
    })?;
    if let Some(pb) = &spinner {
        pb.finish_and_clear();
    }

    let verified = match &report.outcome {
        SolveOutcome::Solved(solution) => apply_all(&scrambled, solution)?.is_solved(),
        _ => false,
    };

    if args.json {
        let doc = JsonReport {
            order: args.order,
            variant,
            scramble: &scramble,
            report: &report,
            verified,
        };
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        match &report.outcome {
            SolveOutcome::Solved(solution) => {
                println!(
                    "[solve] solved in {} moves: [{}]",
                    solution.len(),
                    notation(solution)
                );
                if verified {
                    println!("[solve] replay verified against the scrambled state");
                } else {
                    eprintln!("[solve] replay FAILED to reach the solved state");
                }
            }
            SolveOutcome::Exhausted(kind) => {
                println!("[solve] budget exhausted ({kind:?}), no solution within limits");
            }
            SolveOutcome::NotFound => {
                println!("[solve] search space exhausted, no solution exists within limits");
            }
            SolveOutcome::Cancelled => println!("[solve] cancelled"),
        }
        let s = &report.stats;
        println!(
            "[solve] {}: {} nodes, depth {}, {} dedup hits, peak queue {}, {} iteration(s), {} ms",
            report.algorithm,
            s.nodes_expanded,
            s.max_depth,
            s.dedup_hits,
            s.peak_frontier,
            s.iterations,
            s.elapsed_millis
        );
    }

    match &report.outcome {
        SolveOutcome::Solved(_) if verified => Ok(()),
        SolveOutcome::Solved(_) => std::process::exit(1),
        _ => std::process::exit(2),
    }
}
