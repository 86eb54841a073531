use std::env;
use std::error::Error;
use std::fs;

use fuzzrank::{Ranker, ScoreModel, select};

/// Demo candidate list used when no JSON file is supplied.
const SAMPLE_APPS: &[&str] = &[
    "Activity Monitor",
    "App Store",
    "Disk Utility",
    "Safari",
    "Spotify",
    "System Settings",
    "Terminal",
    "TextEdit",
];

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let query = args.next().unwrap_or_default();

    let candidates: Vec<String> = match args.next() {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => SAMPLE_APPS.iter().map(|s| s.to_string()).collect(),
    };

    let ranker = Ranker::new(ScoreModel::default())?;
    let ranking = ranker.rank(&query, &candidates);
    let hits = select(&ranking, 20);

    println!("{}/{} candidates match \"{query}\"", hits.len(), candidates.len());
    for (n, hit) in hits.iter().enumerate() {
        if let Some(candidate) = candidates.get(hit.index) {
            println!("{:>3}. score={:>7.2}  {candidate}", n + 1, hit.score);
        }
    }

    Ok(())
}
