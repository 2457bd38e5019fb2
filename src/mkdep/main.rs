//! Command-line interface for the assembly dependency scanner
//!
//! Usage: mkdep <target-source> [excluded-path ...]
//!
//! This program is unlicensed and dedicated to the public domain.
//! Developed by Tommy Olsen.

use std::env;
use std::path::Path;
use std::process;

use d2ef_build_tools::config::VERSION;
use d2ef_build_tools::scan_deps::{DependencyScanner, rule_line};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage(&args[0]);
        process::exit(if args.len() >= 2 { 0 } else { 1 });
    }

    let root = &args[1];
    let exclude = args[2..].to_vec();

    // A missing root is not an error: the rule line simply has no
    // prerequisites and the build tool deals with the rest.
    let scanner = DependencyScanner::new(exclude);
    let deps = scanner.scan(root);

    println!("{}", rule_line(root, &deps));
}

fn print_usage(program_name: &str) {
    let name = Path::new(program_name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("mkdep");

    println!("D2EF Assembly Dependency Scanner v{}", VERSION);
    println!();
    println!("USAGE:");
    println!("  {} <target-source> [excluded-path ...]", name);
    println!();
    println!("DESCRIPTION:");
    println!("  Scans an assembly source file for .import directives, follows");
    println!("  them transitively and prints a single make-style rule line:");
    println!();
    println!("    <target>.prg: <dep1> <dep2> ...");
    println!();
    println!("ARGUMENTS:");
    println!("  <target-source>   Root assembly source file");
    println!("  [excluded-path]   Dependencies to treat as already satisfied");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help        Show this help message");
    println!();
    println!("EXAMPLES:");
    println!("  {} kapi_hi.s", name);
    println!("  {} kapi_hi.s macros.s zeropage.s", name);
    println!();
}
