//! League file management: load, atomic replace, per-season locking.

use crate::cli::types::Year;
use crate::error::{LeagueError, Result};
use crate::model::{League, Season};
use dirs::data_dir;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Flat-file JSON store holding every season of the league.
///
/// The whole league lives in one JSON document mapping year strings to
/// seasons. Writes replace the file atomically (temp sibling + rename), so
/// a reader that races a writer sees the old document or the new one,
/// never a torn mix. Writers to the same season must hold that season's
/// lock across their read-modify-write.
pub struct LeagueStore {
    path: PathBuf,
    season_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
    // Serializes the load-insert-write in put_season. Per-season locks
    // keep edits to one year from interleaving, but every season shares
    // the one file, so concurrent writers to different years would
    // otherwise clobber each other's rename.
    write_lock: Mutex<()>,
}

impl LeagueStore {
    /// Open the store at the default location, honoring the
    /// `FFL_KEEPER_DATA_FILE` env var override.
    pub fn open() -> Result<Self> {
        let path = match std::env::var(crate::DATA_FILE_ENV_VAR) {
            Ok(p) if !p.is_empty() => PathBuf::from(p),
            _ => Self::default_path(),
        };
        Ok(Self::open_at(path))
    }

    /// Open the store against an explicit file path.
    pub fn open_at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            season_locks: Mutex::new(HashMap::new()),
            write_lock: Mutex::new(()),
        }
    }

    /// Path: ~/.local/share/ffl-keeper/league.json (platform equivalent).
    fn default_path() -> PathBuf {
        let base = data_dir().unwrap_or_else(|| {
            let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.push(".local/share");
            home
        });
        base.join("ffl-keeper").join("league.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full league document. A missing file is an empty league,
    /// not an error; a season must still be initialized explicitly before
    /// it can be read back.
    pub fn load(&self) -> Result<League> {
        match read_league_file(&self.path) {
            Ok(league) => Ok(league),
            Err(e) => Err(LeagueError::Storage {
                message: e.to_string(),
            }),
        }
    }

    /// Fetch one season. Missing years are reported, never auto-created.
    pub fn get_season(&self, year: &Year) -> Result<Season> {
        let league = self.load()?;
        league
            .get(&year.as_key())
            .cloned()
            .ok_or_else(|| LeagueError::SeasonNotFound {
                year: year.as_key(),
            })
    }

    /// Replace one season and persist the whole document atomically.
    /// Holds the store-wide write lock across the read-modify-write so a
    /// concurrent `put_season` for another year cannot be lost.
    pub fn put_season(&self, year: &Year, season: &Season) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap();
        let mut league = self.load()?;
        league.insert(year.as_key(), season.clone());
        write_league_file(&self.path, &league).map_err(|e| LeagueError::Storage {
            message: e.to_string(),
        })
    }

    /// Years with a stored season, ascending. BTreeMap keys are already
    /// sorted; year keys are zero-padded-free decimal strings so the
    /// lexicographic order matches numeric order for four-digit years.
    pub fn list_years(&self) -> Result<Vec<String>> {
        Ok(self.load()?.keys().cloned().collect())
    }

    /// The mutual-exclusion handle for one season. Callers hold the guard
    /// for the duration of a read-modify-write; plain reads skip it.
    pub fn season_lock(&self, year: &Year) -> Arc<Mutex<()>> {
        let mut locks = self.season_locks.lock().unwrap();
        locks
            .entry(year.as_key())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

/// Read and parse the league file; missing file means empty league.
fn read_league_file(path: &Path) -> anyhow::Result<League> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(serde_json::from_str(&contents)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(League::new()),
        Err(e) => Err(e.into()),
    }
}

/// Serialize and atomically replace the league file.
fn write_league_file(path: &Path, league: &League) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(league)?;

    // Write a temp sibling and rename over the target so concurrent
    // readers never observe a partially written document.
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, contents.as_bytes())?;
    fs::rename(&tmp, path)?;
    Ok(())
}
