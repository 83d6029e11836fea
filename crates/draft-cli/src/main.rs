use clap::{Parser, Subcommand};
use draft_html::Config;
use draft_model::Document;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "draft2html")]
#[command(about = "Convert Draft.js raw content to HTML")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a raw content .json file to an HTML fragment
    Build {
        /// Input raw content file
        path: String,

        /// Inline style configuration file
        #[arg(short, long)]
        styles: Option<String>,

        /// Write the HTML here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that the input and style files parse without generating output
    Check {
        /// Input raw content file
        path: String,

        /// Inline style configuration file
        #[arg(short, long)]
        styles: Option<String>,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Build {
            path,
            styles,
            output,
        } => cmd_build(&path, styles.as_deref(), output.as_deref()),
        Command::Check { path, styles } => cmd_check(&path, styles.as_deref()),
    }
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn load_document(path: &str) -> Document {
    let source = read_source(path);
    match draft_model::Parser::parse(&source) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("{path}: {e}");
            std::process::exit(1);
        }
    }
}

fn load_config(styles: Option<&str>) -> Config {
    let Some(path) = styles else {
        return Config::default();
    };
    let source = read_source(path);
    match Config::from_json(&source) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{path}: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_build(path: &str, styles: Option<&str>, output: Option<&Path>) {
    let doc = load_document(path);
    let config = load_config(styles);

    let fragment = draft_html::convert(&doc, &config);
    if fragment.is_empty() {
        log::warn!("{path} has no blocks, output is empty");
    }
    let html = fragment.to_html();
    log::info!("converted {} block(s) from {path}", doc.blocks.len());

    match output {
        Some(out) => {
            if let Err(e) = std::fs::write(out, &html) {
                eprintln!("Error writing {}: {e}", out.display());
                std::process::exit(1);
            }
            eprintln!("Built: {}", out.display());
        }
        None => println!("{html}"),
    }
}

fn cmd_check(path: &str, styles: Option<&str>) {
    let doc = load_document(path);
    let config = load_config(styles);

    eprintln!(
        "OK: {path} ({} blocks, {} entities, {} styles)",
        doc.blocks.len(),
        doc.entity_map.len(),
        config.style_order().len()
    );
}
