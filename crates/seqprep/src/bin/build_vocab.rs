//! Vocabulary Builder CLI
//!
//! Scans CoNLL-style tagged corpora and writes the words.txt / chars.txt /
//! tags.txt files consumed by the training pipeline. Optionally restricts
//! the word vocabulary to words covered by a pretrained embedding file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use seqprep::dataset::Split;
use seqprep::vocab::{SpecialTokens, build_vocab, load_embedding_vocab};

/// CLI arguments
#[derive(Parser)]
#[command(name = "build-vocab")]
#[command(about = "Build word/char/tag vocabularies from tagged corpora")]
#[command(version)]
struct Cli {
    /// Training split (token and tag per line, blank line between sentences)
    #[arg(long)]
    train: PathBuf,

    /// Validation split
    #[arg(long)]
    valid: PathBuf,

    /// Test split
    #[arg(long)]
    test: PathBuf,

    /// Pretrained embedding file; restricts the word vocabulary to covered words
    #[arg(long)]
    embeddings: Option<PathBuf>,

    /// Output directory for words.txt / chars.txt / tags.txt
    #[arg(long, default_value = "data/vocab")]
    out: PathBuf,
}

fn load_split(path: &PathBuf) -> Result<Split> {
    Split::from_conll_file(path).with_context(|| format!("loading {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let train = load_split(&cli.train)?;
    let valid = load_split(&cli.valid)?;
    let test = load_split(&cli.test)?;
    info!(
        train = train.len(),
        valid = valid.len(),
        test = test.len(),
        "loaded corpora"
    );

    let embedding_vocab = match &cli.embeddings {
        Some(path) => Some(
            load_embedding_vocab(path)
                .with_context(|| format!("loading embedding vocabulary {}", path.display()))?,
        ),
        None => None,
    };

    std::fs::create_dir_all(&cli.out)
        .with_context(|| format!("creating output directory {}", cli.out.display()))?;

    let vocab = build_vocab(
        &[&train, &valid, &test],
        &train,
        embedding_vocab.as_ref(),
        None,
        &SpecialTokens::default(),
        &cli.out,
    )?;

    info!(
        words = vocab.words.len(),
        chars = vocab.chars.len(),
        tags = vocab.tags.len(),
        out = %cli.out.display(),
        "vocabularies written"
    );
    Ok(())
}
