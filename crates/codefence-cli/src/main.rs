use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codefence::{CodefenceConfig, LanguageTag, SeoCollector, Snippet, anchor_slug, detect};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser)]
#[command(name = "codefence", about = "Code snippet presentation toolkit", version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Increase log verbosity
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Detect the programming language of a snippet
    Detect {
        /// File to classify; reads stdin when omitted
        file: Option<PathBuf>,

        /// Emit the result as JSON (language plus anchor slug)
        #[arg(long)]
        json: bool,
    },

    /// List the supported language tags
    Languages,

    /// Build the JSON-LD structured-data payload for a snippet
    Jsonld {
        /// Snippet file; reads stdin when omitted
        file: Option<PathBuf>,

        /// Canonical page URL recorded as codeRepository
        #[arg(long)]
        url: String,

        /// schema.org name for the code sample
        #[arg(long)]
        title: Option<String>,

        /// schema.org description for the code sample
        #[arg(long)]
        description: Option<String>,

        /// Author name recorded on the entry
        #[arg(long)]
        author: Option<String>,

        /// Explicit language tag; skips detection
        #[arg(long)]
        language: Option<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.command {
        Command::Detect { file, json } => run_detect(file.as_deref(), json),
        Command::Languages => run_languages(),
        Command::Jsonld {
            file,
            url,
            title,
            description,
            author,
            language,
        } => run_jsonld(file.as_deref(), &url, title, description, author.as_deref(), language),
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_filter = if verbose { "codefence=debug" } else { "codefence=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_sample(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read snippet from stdin")?;
            Ok(buffer)
        }
    }
}

fn run_detect(file: Option<&Path>, json: bool) -> Result<()> {
    let sample = read_sample(file)?;
    let language = detect(&sample);
    debug!(language = language.as_str(), bytes = sample.len(), "classified sample");

    if json {
        let payload = serde_json::json!({
            "language": language,
            "label": language.label(),
            "anchor": anchor_slug(None, language, &sample),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{language}");
    }
    Ok(())
}

fn run_languages() -> Result<()> {
    for tag in LanguageTag::all() {
        println!("{:<12} {}", tag.as_str(), tag.label());
    }
    Ok(())
}

fn run_jsonld(
    file: Option<&Path>,
    url: &str,
    title: Option<String>,
    description: Option<String>,
    author: Option<&str>,
    language: Option<String>,
) -> Result<()> {
    let config = CodefenceConfig::discover()
        .context("failed to load codefence.toml")?
        .unwrap_or_default();

    let mut snippet = Snippet::new(read_sample(file)?);
    snippet.language = language;
    snippet.seo.title = title;
    snippet.seo.description = description;

    let resolved = snippet.resolve(&config);
    debug!(language = resolved.language.as_str(), anchor = resolved.anchor.as_str(), "resolved snippet");

    let mut collector = SeoCollector::new();
    collector.record(&resolved, url, author);

    let data = collector
        .finish(&config)
        .context("structured data is disabled (seo_enabled = false in codefence.toml)")?;

    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}
