use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};

use pathquill::config::{Config, OutputFormat};
use pathquill::document::parser::parse_literal;
use pathquill::document::tree::Document;
use pathquill::file::loader::{load_document, load_from_stdin};
use pathquill::file::saver::{output_format_for, save_document, serialize_node};
use pathquill::{Node, Segment};

/// PathQuill - read and patch YAML/JSON documents with dotted paths
#[derive(Parser)]
#[command(name = "pathquill")]
#[command(version)]
#[command(about = "Read and patch YAML/JSON documents with dotted/bracketed paths", long_about = None)]
struct Cli {
    /// Output format (default: from config, or yaml)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the value at PATH
    Get {
        path: String,
        /// Document to read (omit to read from stdin)
        file: Option<String>,
    },
    /// Write VALUE at PATH and print the resulting document
    Set {
        path: String,
        /// Value, read as YAML (`9`, `true`, `[1, 2]`, `{a: 1}`)
        value: String,
        /// Document to patch (omit to read from stdin)
        file: Option<String>,
        /// Write the result back to FILE instead of printing it
        #[arg(short, long, requires = "file")]
        in_place: bool,
        /// Treat VALUE as a plain string
        #[arg(short, long)]
        string: bool,
    },
    /// Show how PATH is split into segments
    Parse { path: String },
}

fn load(file: Option<&str>) -> Result<Document> {
    match file {
        Some(path) => load_document(path),
        None => load_from_stdin(),
    }
}

fn print(node: &Node, config: &Config) -> Result<()> {
    let mut text = serialize_node(node, config.output_format, config.indent_size)?;
    if !text.ends_with('\n') {
        text.push('\n');
    }
    io::stdout()
        .write_all(text.as_bytes())
        .context("Failed to write to stdout")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = Config::try_load();
    let log_level = match &loaded {
        Ok(config) => config.log_level.clone(),
        Err(_) => Config::default().log_level,
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = loaded.unwrap_or_else(|e| {
        log::warn!("{:#}", e);
        Config::default()
    });

    match cli.command {
        Command::Get { path, file } => {
            let doc = load(file.as_deref())?;
            config.output_format =
                output_format_for(cli.format, file.as_deref(), config.output_format);
            let node = doc.get(&path)?;
            print(node, &config)?;
        }
        Command::Set {
            path,
            value,
            file,
            in_place,
            string,
        } => {
            let mut doc = load(file.as_deref())?;
            let value = if string {
                Node::from(value)
            } else {
                parse_literal(&value)
            };
            doc.set(&path, value)?;

            if in_place {
                if let Some(format) = cli.format {
                    config.output_format = format;
                }
                let target = file.context("--in-place requires a file")?;
                if doc.has_changes() {
                    save_document(&target, &doc, &config)?;
                } else {
                    log::info!("{} unchanged, not rewriting", target);
                }
            } else {
                config.output_format =
                    output_format_for(cli.format, file.as_deref(), config.output_format);
                print(doc.root(), &config)?;
            }
        }
        Command::Parse { path } => {
            let parsed = pathquill::parse(&path)?;
            for segment in parsed.segments() {
                match segment {
                    Segment::Key(name) => println!("key      {:?}", name),
                    Segment::Index(i) => println!("index    {}", i),
                    Segment::Wildcard => println!("wildcard"),
                }
            }
            println!("canonical {}", parsed);
        }
    }

    Ok(())
}
