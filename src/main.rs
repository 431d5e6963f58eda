//! git-glyph - annotate a source file with the commits behind its lines
//!
//! # Usage
//! ```bash
//! git-glyph src/main.rs                 # Anchors for every annotated line
//! git-glyph src/main.rs --line 12       # A single line
//! git-glyph src/main.rs --json          # Machine-readable output
//! git-glyph lib.rs --repo ~/myproject   # Explicit repository
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use git_glyph::{AttributorConfig, GitRepository, LineAttributor, LineContext};

/// Annotate source lines with the commit that last changed them
#[derive(Parser)]
#[command(name = "git-glyph")]
#[command(about = "Annotate source lines with the commit that last changed them", long_about = None)]
struct Cli {
    /// Source file to annotate
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Repository to read history from (defaults to the one containing FILE)
    #[arg(short, long, value_name = "REPO_PATH")]
    repo: Option<PathBuf>,

    /// Only annotate this line (1-indexed)
    #[arg(short, long)]
    line: Option<u32>,

    /// Print a JSON array instead of HTML anchors
    #[arg(long)]
    json: bool,

    /// Subject pre-filled in the mail link
    #[arg(long)]
    subject: Option<String>,
}

/// One annotated line in `--json` output
#[derive(Serialize)]
struct AnnotatedLine {
    line: u32,
    author: String,
    email: String,
    subject: String,
    body: String,
    mailto: String,
}

fn count_lines(path: &Path) -> anyhow::Result<u32> {
    let content = fs::read(path)?;
    Ok(String::from_utf8_lossy(&content).lines().count() as u32)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let repo_path = cli.repo.clone().unwrap_or_else(|| {
        cli.file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    });

    let repo = match GitRepository::open(&repo_path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("✗ Failed to open repository: {}", e);
            eprintln!("  Path: {}", repo_path.display());
            std::process::exit(1);
        }
    };

    let mut config = AttributorConfig::default();
    if let Some(subject) = cli.subject {
        config = config.with_subject(subject);
    }
    let mut attributor = LineAttributor::with_config(repo, config);

    let lines: Vec<u32> = match cli.line {
        Some(line) => vec![line],
        None => (1..=count_lines(&cli.file)?).collect(),
    };

    let mut annotated = Vec::new();
    for line in lines {
        let ctx = LineContext::new(&cli.file, line);
        if let Some(attribution) = attributor.resolve(&ctx)? {
            if cli.json {
                annotated.push(AnnotatedLine {
                    line,
                    mailto: attribution.mailto_uri(),
                    author: attribution.author.name,
                    email: attribution.author.email,
                    subject: attribution.subject,
                    body: attribution.body,
                });
            } else {
                println!("{}: {}", line, attribution);
            }
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&annotated)?);
    }

    tracing::debug!("{:?}", attributor.cache().stats());

    Ok(())
}
