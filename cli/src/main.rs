//! docrumb CLI - chunk structured document JSON into retrieval-ready chunks

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use docrumb::{Chunk, ChunkMapper, Chunker, Document};

#[derive(Parser)]
#[command(name = "docrumb")]
#[command(version)]
#[command(about = "Chunk structured document JSON into retrieval-ready chunks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chunk a document and emit the chunks
    Chunk {
        /// Input document JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "jsonl")]
        format: OutputFormat,

        /// JSON file mapping picture ids to extracted image paths
        #[arg(long, value_name = "FILE")]
        image_map: Option<PathBuf>,

        /// Caption search window, in sequence positions
        #[arg(long, default_value = "2")]
        caption_distance: usize,

        /// Keep page furniture (headers, footers) in the output
        #[arg(long)]
        keep_furniture: bool,
    },

    /// Chunk a document and emit standardized persistence records
    Records {
        /// Input document JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Document id written into every record
        #[arg(long)]
        doc_id: Option<String>,

        /// JSON file mapping picture ids to extracted image paths
        #[arg(long, value_name = "FILE")]
        image_map: Option<PathBuf>,

        /// Override the creator tool tag
        #[arg(long)]
        creator_tool: Option<String>,

        /// Stamp records with the mapping time
        #[arg(long)]
        timestamps: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One JSON object per line
    Jsonl,
    /// A single pretty-printed JSON array
    Json,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Chunk {
            input,
            output,
            format,
            image_map,
            caption_distance,
            keep_furniture,
        } => {
            let chunks = chunk_input(&input, image_map.as_deref(), caption_distance, keep_furniture)?;
            write_items(&chunks, output.as_deref(), format)?;
            summarize(&chunks, output.as_deref());
            Ok(())
        }
        Commands::Records {
            input,
            output,
            format,
            doc_id,
            image_map,
            creator_tool,
            timestamps,
        } => {
            let chunks = chunk_input(&input, image_map.as_deref(), 2, false)?;

            let mut mapper = ChunkMapper::new();
            if let Some(tool) = creator_tool {
                mapper = mapper.with_creator_tool(tool);
            }
            if timestamps {
                mapper = mapper.with_timestamps();
            }
            let records = mapper.map_all(&chunks, doc_id.as_deref());

            write_items(&records, output.as_deref(), format)?;
            eprintln!(
                "{} mapped {} chunks to records",
                "done:".green().bold(),
                records.len()
            );
            Ok(())
        }
    }
}

fn chunk_input(
    input: &Path,
    image_map: Option<&Path>,
    caption_distance: usize,
    keep_furniture: bool,
) -> Result<Vec<Chunk>, Box<dyn std::error::Error>> {
    let json = fs::read_to_string(input)?;
    let doc = Document::from_json(&json)?;

    let mut chunker = Chunker::new().with_caption_distance(caption_distance);
    if keep_furniture {
        chunker = chunker.keep_furniture();
    }
    if let Some(path) = image_map {
        let map_json = fs::read_to_string(path)?;
        let refs: HashMap<String, String> = serde_json::from_str(&map_json)?;
        chunker = chunker.with_image_refs(refs);
    }

    let stream = chunker.chunk(&doc);
    let pb = ProgressBar::new(stream.sequence_len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} items")?
            .progress_chars("=>-"),
    );

    let mut chunks = Vec::new();
    let mut claimed = 0u64;
    for chunk in stream {
        claimed += chunk.doc_items.len() as u64;
        pb.set_position(claimed.min(pb.length().unwrap_or(0)));
        chunks.push(chunk);
    }
    pb.finish_and_clear();

    Ok(chunks)
}

fn write_items<T: serde::Serialize>(
    items: &[T],
    output: Option<&Path>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(items)?,
        OutputFormat::Jsonl => items
            .iter()
            .map(serde_json::to_string)
            .collect::<Result<Vec<_>, _>>()?
            .join("\n"),
    };

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, rendered)?;
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn summarize(chunks: &[Chunk], output: Option<&Path>) {
    use docrumb::ChunkKind;

    let count = |kind: ChunkKind| chunks.iter().filter(|c| c.is_kind(kind)).count();
    let destination = output
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdout".to_string());

    eprintln!(
        "{} {} chunks ({} text, {} table, {} image) -> {}",
        "done:".green().bold(),
        chunks.len(),
        count(ChunkKind::Text),
        count(ChunkKind::Table),
        count(ChunkKind::Image),
        destination
    );
}
