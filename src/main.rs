use std::env;
use std::process;

use game_common::json::{self, Json, JsonError, JsonSerializable};
use game_common::settings::Settings;
use game_common::{Folder, LinkedList};
use log::{error, info, warn};
use serde_json::json;
use simple_logger::SimpleLogger;

const SCORES_FILE: &str = "scores.json";
const MAX_SCORES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Score {
    name: String,
    points: u64,
}

/// Best scores first, at most `MAX_SCORES` of them.
#[derive(Debug, Default)]
struct HighScores {
    entries: LinkedList<Score>,
}

impl HighScores {
    /// Records a score and returns its 0-based rank, or `None` if it did not
    /// make the table.
    fn record(&mut self, name: &str, points: u64) -> Option<usize> {
        let rank = self
            .entries
            .iter()
            .position(|s| s.points < points)
            .unwrap_or_else(|| self.entries.len());
        if rank >= MAX_SCORES {
            return None;
        }
        self.entries.insert_at(
            rank,
            Score {
                name: name.to_string(),
                points,
            },
        );
        while self.entries.len() > MAX_SCORES {
            self.entries.pop_back();
        }
        Some(rank)
    }
}

impl JsonSerializable for HighScores {
    fn serialize(&self) -> Json {
        self.entries
            .iter()
            .map(|s| json!({ "name": s.name, "points": s.points }))
            .collect()
    }

    fn deserialize(&mut self, doc: &Json) -> json::Result<()> {
        let items = doc
            .as_array()
            .ok_or_else(|| JsonError::new("score table must be an array"))?;
        let mut entries = LinkedList::new();
        for item in items {
            entries.push_back(Score {
                name: json::opt(item, "name", String::from("???"))?,
                points: json::opt(item, "points", 0)?,
            });
        }
        self.entries = entries;
        Ok(())
    }
}

fn main() {
    let settings = Settings::from_env();
    if let Err(e) = SimpleLogger::new().with_level(settings.log_level).init() {
        eprintln!("logger already initialised: {}", e);
    }
    if let Some(level) = &settings.rejected_log_level {
        warn!("ignoring unknown log level {:?}", level);
    }

    let mut args = env::args().skip(1);
    let name = args.next().unwrap_or_else(|| String::from("PAC"));
    let points = args.next().and_then(|p| p.parse().ok()).unwrap_or(0);

    let folder = Folder::new(settings.data_dir.clone());
    let mut scores = HighScores::default();
    match folder.read_into(SCORES_FILE, &mut scores) {
        Ok(true) => info!("loaded {} scores", scores.entries.len()),
        Ok(false) => info!(
            "no score table at {}, starting fresh",
            folder.path_of(SCORES_FILE).display()
        ),
        Err(e) => {
            error!("score table {} is corrupt: {}", folder.path_of(SCORES_FILE).display(), e);
            process::exit(1);
        }
    }

    match scores.record(&name, points) {
        Some(rank) => info!("{} placed #{} with {} points", name, rank + 1, points),
        None => info!("{} points did not make the table", points),
    }

    match folder.write_from(SCORES_FILE, &scores) {
        Ok(true) => info!("saved {}", folder.path_of(SCORES_FILE).display()),
        Ok(false) => warn!("cannot write {}", folder.path_of(SCORES_FILE).display()),
        Err(e) => {
            error!("failed to save scores: {}", e);
            process::exit(1);
        }
    }

    for (rank, score) in scores.entries.iter().enumerate() {
        println!("{:>2}. {:<12} {}", rank + 1, score.name, score.points);
    }
}

#[test]
fn record_keeps_table_sorted_and_bounded() {
    let mut scores = HighScores::default();
    assert_eq!(scores.record("a", 10), Some(0));
    assert_eq!(scores.record("b", 30), Some(0));
    assert_eq!(scores.record("c", 20), Some(1));
    let points: Vec<u64> = scores.entries.iter().map(|s| s.points).collect();
    assert_eq!(points, vec![30, 20, 10]);

    for i in 0..20 {
        scores.record("filler", 100 + i);
    }
    assert_eq!(scores.entries.len(), MAX_SCORES);
    assert_eq!(scores.record("low", 1), None);
}

#[test]
fn scores_round_trip_through_folder() {
    let dir = tempfile::tempdir().unwrap();
    let folder = Folder::from(dir.path());
    let mut scores = HighScores::default();
    scores.record("inky", 300);
    scores.record("pinky", 500);
    assert!(folder.write_from(SCORES_FILE, &scores).unwrap());

    let mut loaded = HighScores::default();
    assert!(folder.read_into(SCORES_FILE, &mut loaded).unwrap());
    assert_eq!(loaded.entries, scores.entries);

    std::fs::write(folder.path_of(SCORES_FILE), r#"{"name": "x"}"#).unwrap();
    assert!(folder.read_into(SCORES_FILE, &mut loaded).is_err());
}
