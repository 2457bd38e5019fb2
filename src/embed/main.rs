//! Command-line interface for the binary asset embedder
//!
//! Usage: embed-binaries [<file>=<skip> ...]
//!
//! This program is unlicensed and dedicated to the public domain.
//! Developed by Tommy Olsen.

use std::env;
use std::path::Path;
use std::process;

use d2ef_build_tools::config::{AssetEntry, VERSION, default_asset_table};
use d2ef_build_tools::embed_binaries::{EmbedBinaries, HEADER_FILE, SOURCE_FILE};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.contains(&"--help".to_string()) || args.contains(&"-h".to_string()) {
        print_usage(&args[0]);
        process::exit(0);
    }

    // No arguments selects the stock asset table; otherwise each argument
    // is one <file>=<skip> entry, embedded in argument order.
    let assets = if args.len() == 1 {
        default_asset_table()
    } else {
        let mut assets = Vec::new();
        for spec in &args[1..] {
            match AssetEntry::parse(spec) {
                Ok(entry) => assets.push(entry),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    eprintln!();
                    print_usage(&args[0]);
                    process::exit(1);
                }
            }
        }
        assets
    };

    let embedder = EmbedBinaries::new(assets);
    if let Err(e) = embedder.run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn print_usage(program_name: &str) {
    let name = Path::new(program_name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("embed-binaries");

    println!("D2EF Binary Asset Embedder v{}", VERSION);
    println!();
    println!("USAGE:");
    println!("  {} [<file>=<skip> ...]", name);
    println!();
    println!("DESCRIPTION:");
    println!("  Reads binary asset files from the current directory and writes");
    println!("  {} and {} with one byte-array constant and one", SOURCE_FILE, HEADER_FILE);
    println!("  <name>_size define per asset. The first <skip> bytes of each");
    println!("  file (e.g. a PRG load address) are dropped before embedding.");
    println!();
    println!("  Without arguments the stock EasyFlash asset table is used.");
    println!();
    println!("ARGUMENTS:");
    println!("  <file>=<skip>  Asset file name and header-skip byte count");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help     Show this help message");
    println!();
    println!("EXAMPLES:");
    println!("  {}", name);
    println!("  {} kapi_hi.prg=2 sprites.bin=0", name);
    println!();
}
