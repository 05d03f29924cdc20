//! Renders a serialized context and prints the generated C# files.
//!
//! Usage: cargo run --example generate -- <context.json> [namespace]

use schemagen::prelude::*;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next().map(PathBuf::from) else {
        eprintln!("usage: generate <context.json> [namespace]");
        std::process::exit(2);
    };

    let mut options = GenerateOptions::new();
    if let Some(namespace) = args.next() {
        options = options.with_namespace(namespace);
    }

    for file in generate_from_file(&path, &options)? {
        println!("// ---- {} ----", file.name);
        println!("{}", file.content);
    }

    Ok(())
}
