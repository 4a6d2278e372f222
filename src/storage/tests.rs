//! Unit tests for the storage layer

use super::*;
use crate::cli::types::Year;
use crate::error::LeagueError;
use crate::model::{Matchup, Season, StandingRow, Team, Week};
use tempfile::TempDir;

fn temp_store() -> (TempDir, LeagueStore) {
    let dir = TempDir::new().unwrap();
    let store = LeagueStore::open_at(dir.path().join("league.json"));
    (dir, store)
}

fn sample_season() -> Season {
    let mut season = Season::with_teams(vec![Team::new("a", "Alphas"), Team::new("b", "Bravos")]);
    season.weeks.insert(
        "1".to_string(),
        Week::new(vec![Matchup::played("a", 100.0, "b", 90.0)]),
    );
    season
}

#[cfg(test)]
mod store_tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty_league() {
        let (_dir, store) = temp_store();
        assert!(store.load().unwrap().is_empty());
        assert!(store.list_years().unwrap().is_empty());
    }

    #[test]
    fn test_missing_season_not_found() {
        let (_dir, store) = temp_store();
        match store.get_season(&Year::new(2020)) {
            Err(LeagueError::SeasonNotFound { year }) => assert_eq!(year, "2020"),
            other => panic!("expected SeasonNotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_put_and_get_season_roundtrip() {
        let (_dir, store) = temp_store();
        let season = sample_season();
        store.put_season(&Year::new(2023), &season).unwrap();

        let loaded = store.get_season(&Year::new(2023)).unwrap();
        assert_eq!(loaded.teams.len(), 2);
        assert_eq!(loaded.weeks["1"], season.weeks["1"]);
    }

    #[test]
    fn test_put_season_replaces_only_that_year() {
        let (_dir, store) = temp_store();
        store.put_season(&Year::new(2022), &sample_season()).unwrap();
        store.put_season(&Year::new(2023), &Season::default()).unwrap();

        let mut edited = sample_season();
        edited.standings = vec![StandingRow::zeroed("a".into(), 1)];
        store.put_season(&Year::new(2023), &edited).unwrap();

        assert_eq!(store.list_years().unwrap(), vec!["2022", "2023"]);
        assert_eq!(store.get_season(&Year::new(2022)).unwrap().teams.len(), 2);
        assert_eq!(
            store.get_season(&Year::new(2023)).unwrap().standings.len(),
            1
        );
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let (dir, store) = temp_store();
        store.put_season(&Year::new(2023), &sample_season()).unwrap();
        assert!(dir.path().join("league.json").exists());
        assert!(!dir.path().join("league.json.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_is_storage_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("league.json");
        std::fs::write(&path, "} not json {").unwrap();
        let store = LeagueStore::open_at(&path);

        match store.load() {
            Err(LeagueError::Storage { .. }) => (),
            other => panic!("expected Storage error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_concurrent_writes_to_different_years_both_land() {
        let dir = TempDir::new().unwrap();
        let store = std::sync::Arc::new(LeagueStore::open_at(dir.path().join("league.json")));

        let handles: Vec<_> = (2020u16..2028)
            .map(|year| {
                let store = std::sync::Arc::clone(&store);
                std::thread::spawn(move || {
                    store.put_season(&Year::new(year), &sample_season()).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // Every writer's year survives the interleaving; no rename wins
        // by erasing another's insert.
        let years = store.list_years().unwrap();
        assert_eq!(
            years,
            (2020u16..2028).map(|y| y.to_string()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_season_lock_is_per_year() {
        let (_dir, store) = temp_store();
        let lock_a = store.season_lock(&Year::new(2023));
        let lock_b = store.season_lock(&Year::new(2023));
        let lock_other = store.season_lock(&Year::new(2024));

        // Same year hands out the same mutex; a different year does not.
        assert!(std::sync::Arc::ptr_eq(&lock_a, &lock_b));
        assert!(!std::sync::Arc::ptr_eq(&lock_a, &lock_other));

        let _guard = lock_a.lock().unwrap();
        assert!(lock_b.try_lock().is_err());
        assert!(lock_other.try_lock().is_ok());
    }
}

#[cfg(test)]
mod cache_tests {
    use super::*;

    #[test]
    fn test_put_then_get() {
        let cache = StandingsCache::default();
        assert!(cache.get("2023").is_none());

        cache.put("2023", vec![StandingRow::zeroed("a".into(), 1)]);
        assert_eq!(cache.get("2023").unwrap().len(), 1);
    }

    #[test]
    fn test_lru_eviction() {
        let cache = StandingsCache::new(2);
        cache.put("2021", vec![]);
        cache.put("2022", vec![]);
        cache.put("2023", vec![]);

        assert!(cache.get("2021").is_none());
        assert!(cache.get("2022").is_some());
        assert!(cache.get("2023").is_some());
    }
}
