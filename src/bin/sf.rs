//! Command-line interface for sf
//! This binary compiles SF documents and prints the resulting element tree
//! for inspection.
//!
//! Usage:
//!   sf parse `<path>` [--format `<format>`]  - Compile a document and print its elements
//!   sf inline `<text>`                     - Resolve inline markers in a text payload

use clap::{Arg, Command};
use sf::sf::formats::{elements_to_json, nodes_to_json, render_tree};
use sf::sf::inlines::resolve_inline;
use sf::sf::pipeline::compile_with;
use std::fs;

fn main() {
    let matches = Command::new("sf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for compiling and inspecting SF documents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Compile an SF document and print its element tree")
                .arg(
                    Arg::new("path")
                        .help("Path to the SF document")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('tree' or 'json')")
                        .default_value("tree"),
                ),
        )
        .subcommand(
            Command::new("inline")
                .about("Resolve inline bold/italic/underline markers in a text payload")
                .arg(
                    Arg::new("text")
                        .help("Text payload with \\B / \\I / \\U markers")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let path = parse_matches.get_one::<String>("path").unwrap();
            let format = parse_matches.get_one::<String>("format").unwrap();
            handle_parse_command(path, format);
        }
        Some(("inline", inline_matches)) => {
            let text = inline_matches.get_one::<String>("text").unwrap();
            handle_inline_command(text);
        }
        _ => unreachable!(),
    }
}

/// Handle the parse command
fn handle_parse_command(path: &str, format: &str) {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {}: {}", path, e);
            std::process::exit(1);
        }
    };

    let mut background: Option<String> = None;
    let elements = match compile_with(&source, |color| background = Some(color.to_string())) {
        Ok(elements) => elements,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let rendered = match format {
        "json" => elements_to_json(&elements).map_err(|e| e.to_string()),
        "tree" => {
            let mut out = String::new();
            if let Some(color) = &background {
                out.push_str(&format!("background: {}\n", color));
            }
            render_tree(&elements)
                .map(|tree| {
                    out.push_str(&tree);
                    out
                })
                .map_err(|e| e.to_string())
        }
        other => Err(format!("unknown format '{}'", other)),
    };

    match rendered {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the inline command
fn handle_inline_command(text: &str) {
    let nodes = match resolve_inline(text) {
        Ok(nodes) => nodes,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    match nodes_to_json(&nodes) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
