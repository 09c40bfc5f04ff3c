use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use log::info;
use serde_json::json;

use soundalike::{
    vocabulary_source, MatcherSettings, PhoneticMatcher, TimingHelper, VocabularyIndex,
};

/// Flag custom words that a transcription probably misheard.
#[derive(Parser, Debug)]
#[command(name = "soundalike", version, about)]
struct Args {
    /// Custom word list: one word per line, or a JSON array for `.json` files.
    /// Falls back to `vocabulary_path` from the config, then the default location.
    #[arg(short = 'w', long)]
    vocab: Option<PathBuf>,

    /// Settings file (TOML). Defaults to the platform config directory.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip prefix verification and print the raw fuzzy ranking.
    #[arg(long)]
    raw: bool,

    /// Exact phonetic matching only (implies --raw).
    #[arg(long)]
    exact: bool,

    /// Print `word:score` instead of bare words (implies --raw).
    #[arg(long)]
    scores: bool,

    /// One JSON object per sentence.
    #[arg(long)]
    json: bool,

    /// Debug logging, including the per-stage match trace.
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Report index build and per-sentence timings at the end.
    #[arg(long)]
    timings: bool,

    /// Sentences to check. Reads one sentence per stdin line when omitted.
    sentences: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_level = if args.verbose {
        "debug"
    } else if args.timings {
        "info"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => MatcherSettings::default_config_path()?,
    };
    let mut settings = MatcherSettings::load_or_default(&config_path)?;
    if args.verbose {
        settings.diagnostics = true;
    }

    let vocab_path = match (&args.vocab, &settings.vocabulary_path) {
        (Some(path), _) => path.clone(),
        (None, Some(path)) => path.clone(),
        (None, None) => vocabulary_source::default_vocabulary_path()?,
    };

    let mut timing = TimingHelper::new();
    timing.start("build index");
    let words = vocabulary_source::load_words(&vocab_path)?;
    let index = VocabularyIndex::build_with(&words, &settings.encoder());
    timing.stop("build index")?;

    let matcher = PhoneticMatcher::new(index, settings);
    info!("Matching against {} custom words", matcher.index().len());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut run = |sentence: &str, out: &mut dyn Write| -> io::Result<()> {
        let line = timing.time("match sentence", || render(&matcher, &args, sentence));
        writeln!(out, "{}", line)
    };

    if args.sentences.is_empty() {
        for line in io::stdin().lock().lines() {
            run(&line?, &mut out)?;
        }
    } else {
        for sentence in &args.sentences {
            run(sentence, &mut out)?;
        }
    }

    if args.timings {
        timing.report();
    }
    Ok(())
}

fn render(matcher: &PhoneticMatcher, args: &Args, sentence: &str) -> String {
    let fuzzy = !args.exact;

    if args.scores {
        let scored = matcher.scored_matches(sentence, fuzzy);
        return if args.json {
            json!({ "sentence": sentence, "matches": scored }).to_string()
        } else {
            scored
                .iter()
                .map(|m| format!("{}:{}", m.word, m.score))
                .collect::<Vec<_>>()
                .join(", ")
        };
    }

    let matches = if args.raw || args.exact {
        matcher.find_matches(sentence, fuzzy)
    } else {
        matcher.filtered_matches(sentence)
    };

    if args.json {
        json!({ "sentence": sentence, "matches": matches }).to_string()
    } else {
        matches.join(", ")
    }
}
