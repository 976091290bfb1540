//! Diagram inspector - prints a summary of a saved block diagram.
//!
//! Usage: cargo run --release --bin diagram_info -- <FILE> [OPTIONS]
//!
//! Options:
//!   --blocks <PATH>   Block registry (blocks.json) used to name block types
//!   --level <Y>       Also list every block on level Y

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process;

use blockplan::blocks::BlockRegistry;
use blockplan::core::logging;
use blockplan::core::types::Result;
use blockplan::diagram::{Diagram, DiagramConfig};

fn main() {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    let Some(path) = args.get(1).filter(|a| !a.starts_with("--")).map(PathBuf::from) else {
        eprintln!("Usage: diagram_info <file.mcdiagram> [--blocks blocks.json] [--level Y]");
        process::exit(2);
    };
    let blocks_path = parse_str_arg(&args, "--blocks");
    let level = parse_i32_arg(&args, "--level");

    if let Err(e) = run(path, blocks_path, level) {
        log::error!("{}", e);
        process::exit(1);
    }
}

fn run(path: PathBuf, blocks_path: Option<String>, level: Option<i32>) -> Result<()> {
    let registry = match blocks_path {
        Some(p) => Some(BlockRegistry::load_from_path(p)?),
        None => None,
    };
    let config = match &registry {
        Some(r) => DiagramConfig::default().with_block_type_limit(r.block_type_limit()),
        None => DiagramConfig::default(),
    };

    let mut diagram = Diagram::with_config(config);
    {
        let mut reader = BufReader::new(File::open(&path)?);
        diagram.load(&mut reader)?;
    }

    println!("=== {} ===", path.display());
    println!("Blocks: {}", diagram.block_count());
    let levels = diagram.levels();
    match (levels.first(), levels.last()) {
        (Some(lo), Some(hi)) => println!("Levels: {} occupied ({}..={})", levels.len(), lo, hi),
        _ => println!("Levels: none"),
    }

    println!();
    println!("Bill of materials:");
    let counts = diagram.block_counts();
    match &registry {
        Some(r) => {
            for line in r.bill_of_materials(&counts) {
                println!("  {:>8}  {}", line.count, line.name);
            }
        }
        None => {
            let mut lines: Vec<_> = counts.into_iter().collect();
            lines.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
            for (block_type, count) in lines {
                println!("  {:>8}  {}", count, block_type);
            }
        }
    }

    if let Some(y) = level {
        let mut blocks: Vec<_> = diagram.level(y).into_values().collect();
        blocks.sort_by_key(|b| b.position);
        println!();
        println!("Level {} ({} blocks):", y, blocks.len());
        for b in blocks {
            let name = registry
                .as_ref()
                .and_then(|r| r.name_of(b.block_type))
                .map_or_else(|| b.block_type.to_string(), str::to_owned);
            println!("  {}  {}  {:?}", b.position, name, b.orientation);
        }
    }

    Ok(())
}

fn parse_i32_arg(args: &[String], flag: &str) -> Option<i32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
