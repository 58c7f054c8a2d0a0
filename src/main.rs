use anyhow::bail;
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::time::Instant;
use svara::{ArtifactStore, Prophecy, ProphecyError, Prophet};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Names to read, one prophecy each
    #[arg(required = true)]
    names: Vec<String>,

    /// Directory holding model.json, binarizer.json and phonemes.json
    #[arg(short, long)]
    artifacts: Option<PathBuf>,

    /// Seed for template selection, for reproducible narratives
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let store = match &args.artifacts {
        Some(dir) => ArtifactStore::new(dir),
        None => ArtifactStore::new_default(),
    };
    info!("Loading artifacts from {:?}", store.artifacts_dir());

    let start_time = Instant::now();
    let prophet = match Prophet::builder().with_store(&store).and_then(|b| b.build()) {
        Ok(prophet) => prophet,
        Err(e) => {
            eprintln!("Failed to load artifacts: {}", e);
            eprintln!("Expected files in {:?}:", store.artifacts_dir());
            eprintln!("  model.json      - network weights");
            eprintln!("  binarizer.json  - label groups");
            eprintln!("  phonemes.json   - phoneme vocabulary");
            return Err(e.into());
        }
    };
    info!("=== Prophet ready (took {:.2?}) ===", start_time.elapsed());

    let summary = prophet.info();
    info!(
        "Vocabulary: {} phonemes, output: {} labels across {:?}",
        summary.vocabulary_size, summary.output_size, summary.group_names
    );

    let mut rng = args.seed.map(StdRng::seed_from_u64);
    let mut failures = 0;
    for (i, name) in args.names.iter().enumerate() {
        info!("Reading {}/{}: {}", i + 1, args.names.len(), name);
        let result = match rng.as_mut() {
            Some(rng) => prophet.predict_with_rng(name, rng),
            None => prophet.predict(name),
        };
        match result {
            Ok(prophecy) => print_prophecy(&prophecy),
            Err(e) => {
                report_error(name, &e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} names failed", failures, args.names.len());
    }
    Ok(())
}

fn print_prophecy(prophecy: &Prophecy) {
    println!("\n=== {} ===", prophecy.name);
    println!("  Chakra: {}", prophecy.chakra);
    println!("  Rasa:   {}", prophecy.rasa);
    println!("  Bhava:  {}", prophecy.bhava);
    println!("  Deva:   {}", prophecy.deva);
    println!("  Phonemes: {}", prophecy.phonemes.join(", "));
    println!("\n{}\n", prophecy.narrative);
}

fn report_error(name: &str, error: &ProphecyError) {
    eprintln!("\nError reading '{}': {}", name, error);
    if matches!(error, ProphecyError::EmptyFeatures(_)) {
        eprintln!("Try a name with letters a-z or symbols like @.");
    }
}
