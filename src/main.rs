use mo_reader::{parse, Entry, ParseOptions};
use std::env;
use std::fs;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <path-to-mo-file> [--domain <NAME>] [--encoding <LABEL>]", args[0]);
        std::process::exit(1);
    }

    let mo_path = &args[1];
    let mut options = ParseOptions::default();

    if let Some(domain) = flag_value(&args, "--domain") {
        options = options.with_domain(domain);
    }
    if let Some(encoding) = flag_value(&args, "--encoding") {
        options = options.with_encoding(encoding);
    }

    let bytes = match fs::read(mo_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("ERROR: Failed to read {}: {}", mo_path, e);
            std::process::exit(1);
        }
    };

    println!("Reading MO catalog: {}", mo_path);
    println!("{}", "=".repeat(60));

    let catalog = match parse(&bytes, &options) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("\nERROR: Failed to parse MO catalog");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    let Some(table) = catalog.domain(&options.domain) else {
        eprintln!("ERROR: Domain '{}' missing from parsed catalog", options.domain);
        std::process::exit(1);
    };

    println!("\nCatalog Information:");
    println!("  Domain: {}", options.domain);
    if let Some(header) = table.header() {
        println!("  Language: {}", header.lang.as_deref().unwrap_or("(none)"));
        println!("  Plural-Forms: {}", header.plural_forms.as_deref().unwrap_or("(none)"));
    }

    let mut messages: Vec<(&String, &Vec<String>)> = table
        .iter()
        .filter_map(|(key, entry)| match entry {
            Entry::Translation(variants) => Some((key, variants)),
            Entry::Header(_) => None,
        })
        .collect();
    messages.sort_by(|a, b| a.0.cmp(b.0));

    println!("\nStatistics:");
    println!("  Total messages: {}", messages.len());

    println!("\nSample Messages (first 10):");
    for (i, (key, variants)) in messages.iter().take(10).enumerate() {
        println!("  {}. {:?} -> {:?}", i + 1, key, variants);
    }
    if messages.len() > 10 {
        println!("  ... and {} more", messages.len() - 10);
    }
}

/// Returns the argument following `flag`, exiting if the flag has none.
fn flag_value(args: &[String], flag: &str) -> Option<String> {
    let idx = args.iter().position(|arg| arg == flag)?;
    match args.get(idx + 1) {
        Some(value) => Some(value.clone()),
        None => {
            eprintln!("ERROR: {} flag requires an argument.", flag);
            std::process::exit(1);
        }
    }
}
