//! dirsketch CLI
//!
//! Usage:
//!   dirsketch [OPTIONS] [FILE]
//!
//! Options:
//!   -s, --stylesheet <FILE>  Stylesheet file for color palette (TOML format)
//!   -o, --output [<FILE>]    Write SVG to a file (default name: tree.svg)
//!       --pretty             Keep indented, readable SVG output
//!   -e, --example            Show an example input document
//!   -h, --help               Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use dirsketch::{export, render_with_config, RenderConfig, RenderError, Stylesheet, SvgConfig};

#[derive(Parser)]
#[command(name = "dirsketch")]
#[command(about = "Render a JSON directory description as an SVG tree diagram")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Stylesheet file for color palette (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Write the SVG to a file instead of stdout
    #[arg(short, long, num_args = 0..=1, default_missing_value = "tree.svg")]
    output: Option<PathBuf>,

    /// Keep indented, readable SVG instead of minified output
    #[arg(long)]
    pretty: bool,

    /// Show an example input document
    #[arg(short, long)]
    example: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.example {
        print_example();
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load stylesheet
    let stylesheet = match &cli.stylesheet {
        Some(path) => match Stylesheet::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading stylesheet '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Stylesheet::default(),
    };

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let filename = cli
        .input
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_string());

    let config = RenderConfig::new()
        .with_stylesheet(stylesheet)
        .with_svg(SvgConfig::default().with_pretty_print(cli.pretty))
        .with_optimize(!cli.pretty);

    let svg = match render_with_config(&source, config) {
        Ok(svg) => svg,
        Err(RenderError::Parse(e)) => {
            eprintln!("{}", e.format(&source, &filename));
            std::process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = export::write_file(&svg, path) {
                eprintln!("Error writing '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => {
            println!("{}", svg);
        }
    }
}

fn print_intro() {
    println!(
        r#"dirsketch - render a JSON directory description as an SVG tree diagram

USAGE:
    dirsketch [OPTIONS] [FILE]
    cat tree.json | dirsketch

OPTIONS:
    -e, --example      Show an example input document
    -s, --stylesheet   Custom color palette (TOML file)
    -o, --output       Write to a file (default name: tree.svg)
        --pretty       Keep indented, readable SVG output
    -h, --help         Print help

QUICK START:
    dirsketch --example | dirsketch -o tree.svg

Folders sort before files and siblings sort alphabetically, so the order
entries appear in the JSON does not matter. Each entry may carry a
"comment" shown next to its name."#
    );
}

fn print_example() {
    println!(
        r#"{{
  "type": "folder",
  "name": "seller-dashboard",
  "children": [
    {{
      "type": "folder",
      "name": "src",
      "children": [
        {{
          "type": "folder",
          "name": "apis",
          "children": [
            {{ "type": "folder", "name": "graphql", "children": [], "comment": "graphql apis" }},
            {{ "type": "folder", "name": "rest", "children": [], "comment": "rest apis" }}
          ]
        }},
        {{
          "type": "folder",
          "name": "constants",
          "children": [
            {{ "type": "file", "name": "orders.js", "comment": "order tabs and path constants" }},
            {{ "type": "file", "name": "settings.js", "comment": "settings tabs" }}
          ]
        }},
        {{ "type": "folder", "name": "components", "children": [], "comment": "custom components" }},
        {{ "type": "folder", "name": "helpers", "children": [], "comment": "helper functions" }},
        {{ "type": "folder", "name": "pages", "children": [], "comment": "pages for the seller dashboard" }},
        {{ "type": "file", "name": "App.js", "comment": "app router root" }},
        {{ "type": "file", "name": "index.js", "comment": "entry point" }}
      ]
    }},
    {{ "type": "file", "name": "package.json" }}
  ]
}}"#
    );
}
