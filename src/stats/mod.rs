use crate::game::GameResult;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Aggregate win/loss/draw counters persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsCounters {
    pub human_wins: u64,
    pub bot_wins: u64,
    pub draws: u64,
}

impl StatsCounters {
    pub fn total(&self) -> u64 {
        self.human_wins + self.bot_wins + self.draws
    }
}

/// Owns the results file; all reads and writes go through here.
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        StatsStore {
            path: dir.as_ref().join("results.txt"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the stats directory and seed a zeroed file if none exists.
    /// Called once at startup.
    pub fn init(&self) -> io::Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        if !self.path.exists() {
            self.save(StatsCounters::default())?;
        }
        Ok(())
    }

    /// A missing or unreadable file loads as all zeros. Malformed lines and
    /// unknown keys are skipped.
    pub fn load(&self) -> StatsCounters {
        let mut stats = StatsCounters::default();
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(_) => return stats,
        };
        for line in contents.lines() {
            let (key, value) = match line.split_once(':') {
                Some(pair) => pair,
                None => continue,
            };
            let count = match value.trim().parse::<u64>() {
                Ok(count) => count,
                Err(_) => continue,
            };
            match key.trim() {
                "human_wins" => stats.human_wins = count,
                "bot_wins" => stats.bot_wins = count,
                "draws" => stats.draws = count,
                _ => {}
            }
        }
        stats
    }

    /// Whole-file rewrite: the three keys in fixed order, written to a temp
    /// file and renamed over the target.
    pub fn save(&self, stats: StatsCounters) -> io::Result<()> {
        let tmp = self.path.with_extension("tmp");
        let mut file = fs::File::create(&tmp)?;
        write!(
            file,
            "human_wins: {}\nbot_wins: {}\ndraws: {}\n",
            stats.human_wins, stats.bot_wins, stats.draws
        )?;
        fs::rename(&tmp, &self.path)
    }

    /// Load, bump the counter matching `result`, save.
    pub fn record(&self, result: &GameResult) -> io::Result<()> {
        let mut stats = self.load();
        match result {
            GameResult::HumanWin(_) => stats.human_wins += 1,
            GameResult::BotWin => stats.bot_wins += 1,
            GameResult::Draw => stats.draws += 1,
        }
        self.save(stats)
    }
}
