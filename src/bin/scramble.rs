use clap::Parser;

use quarterturn::{scramble_moves, Move};

#[derive(Debug, Parser)]
#[command(name = "scramble", about = "Emit deterministic scramble move lists")]
struct Args {
    /// Cube order (2..=5)
    #[arg(long, default_value_t = 3)]
    order: u8,

    /// Moves per scramble
    #[arg(long, default_value_t = 20)]
    len: usize,

    /// Base seed; scramble i uses seed + i
    #[arg(long, default_value_t = 0x00C0_FFEE_u64)]
    seed: u64,

    /// Number of scrambles to emit, one per line
    #[arg(long, default_value_t = 1)]
    count: u64,

    /// Emit a JSON array of move lists instead of notation lines
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut all: Vec<Vec<Move>> = Vec::new();
    for i in 0..args.count {
        all.push(scramble_moves(args.order, args.len, args.seed.wrapping_add(i))?);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&all)?);
    } else {
        for moves in &all {
            let line = moves
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            println!("{line}");
        }
    }
    Ok(())
}
