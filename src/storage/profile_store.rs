//! Player profile store
//!
//! Profiles are kept in insertion order and written out in full after every
//! mutation. The file is line-oriented JSON: a header naming the format and
//! version, then one profile per line.
//!
//! ```text
//! {"format":"cham-profiles","version":1}
//! {"name":"Alice","games_played":10,"wins":6,"losses":4}
//! {"name":"Bob","games_played":0,"wins":0,"losses":0}
//! ```

use crate::core::{PlayerName, Profile};
use crate::game::GameSession;
use crate::{ChamError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Fixed upper bound on the number of profiles
pub const MAX_PROFILES: usize = 100;

const PROFILE_FORMAT: &str = "cham-profiles";
const PROFILE_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct FileHeader {
    format: String,
    version: u32,
}

/// Outcome of writing the store back to disk after a mutation
///
/// A failed save never undoes the in-memory change; callers report it as a
/// warning and carry on.
#[derive(Debug)]
#[must_use]
pub enum Persistence {
    Saved,
    Unsaved(ChamError),
}

impl Persistence {
    pub fn is_saved(&self) -> bool {
        matches!(self, Persistence::Saved)
    }

    /// The save error, if any
    pub fn warning(self) -> Option<ChamError> {
        match self {
            Persistence::Saved => None,
            Persistence::Unsaved(e) => Some(e),
        }
    }
}

/// Read every persisted profile
///
/// A missing file is an empty store. Records that are malformed, invalid,
/// duplicated or beyond `capacity` are skipped with a warning. An unreadable
/// header is an error.
pub fn load_profiles(path: &Path, capacity: usize) -> Result<Vec<Profile>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut lines = content.lines().filter(|line| !line.trim().is_empty());
    let Some(header_line) = lines.next() else {
        return Ok(Vec::new());
    };
    let header: FileHeader = serde_json::from_str(header_line)?;
    if header.format != PROFILE_FORMAT || header.version != PROFILE_FORMAT_VERSION {
        return Err(ChamError::UnsupportedFormat {
            format: header.format,
            version: header.version,
        });
    }

    let mut profiles: Vec<Profile> = Vec::new();
    for (line_no, line) in lines.enumerate() {
        let profile: Profile = match serde_json::from_str(line) {
            Ok(profile) => profile,
            Err(e) => {
                warn!(line = line_no + 2, "skipping malformed profile record: {}", e);
                continue;
            }
        };
        if !profile.name.is_valid() {
            warn!(line = line_no + 2, "skipping profile with invalid name {:?}", profile.name.as_str());
            continue;
        }
        if profiles.iter().any(|p| p.name == profile.name) {
            warn!(line = line_no + 2, "skipping duplicate profile {}", profile.name);
            continue;
        }
        if profiles.len() >= capacity {
            warn!("profile file holds more than {capacity} profiles, ignoring the rest");
            break;
        }
        profiles.push(profile);
    }

    debug!("loaded {} profiles from {}", profiles.len(), path.display());
    Ok(profiles)
}

/// Overwrite the persisted state with `profiles`
pub fn save_profiles(path: &Path, profiles: &[Profile]) -> Result<()> {
    let header = FileHeader {
        format: PROFILE_FORMAT.to_string(),
        version: PROFILE_FORMAT_VERSION,
    };
    let mut content = serde_json::to_string(&header)?;
    content.push('\n');
    for profile in profiles {
        content.push_str(&serde_json::to_string(profile)?);
        content.push('\n');
    }
    fs::write(path, content)?;
    debug!("saved {} profiles to {}", profiles.len(), path.display());
    Ok(())
}

/// Owns the live set of profiles
#[derive(Debug)]
pub struct ProfileStore {
    path: PathBuf,
    capacity: usize,
    profiles: Vec<Profile>,
    /// Set when the existing file could be neither read nor moved aside
    write_blocked: bool,
}

impl ProfileStore {
    /// Open the store at `path`
    ///
    /// A file whose header can't be understood is moved to `<name>.bak` and
    /// the store starts empty. If the file can't be read or moved, the store
    /// starts empty and refuses to save over it.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::with_capacity(path, MAX_PROFILES)
    }

    pub fn with_capacity<P: AsRef<Path>>(path: P, capacity: usize) -> Self {
        let path = path.as_ref().to_path_buf();
        let mut write_blocked = false;
        let profiles = match load_profiles(&path, capacity) {
            Ok(profiles) => profiles,
            Err(e @ ChamError::IoError(_)) => {
                warn!("could not read profiles from {}: {}", path.display(), e);
                write_blocked = true;
                Vec::new()
            }
            Err(e) => {
                let backup = backup_path(&path);
                warn!(
                    "could not load profiles from {}: {}; moving it to {}",
                    path.display(),
                    e,
                    backup.display()
                );
                if let Err(e) = fs::rename(&path, &backup) {
                    warn!("could not move {} aside: {}", path.display(), e);
                    write_blocked = true;
                }
                Vec::new()
            }
        };
        ProfileStore {
            path,
            capacity,
            profiles,
            write_blocked,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn get(&self, index: usize) -> Option<&Profile> {
        self.profiles.get(index)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.profiles.len() >= self.capacity
    }

    /// First profile whose name matches exactly
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.profiles.iter().position(|p| p.name == *name)
    }

    /// Write the full store to disk
    pub fn save(&self) -> Result<()> {
        if self.write_blocked {
            return Err(ChamError::InvalidAction(format!(
                "{} could not be read, not overwriting it",
                self.path.display()
            )));
        }
        save_profiles(&self.path, &self.profiles)
    }

    /// Add a zero-initialized profile
    pub fn add(&mut self, raw_name: &str) -> Result<Persistence> {
        if self.is_full() {
            return Err(ChamError::CapacityExceeded(self.capacity));
        }
        let name = PlayerName::parse(raw_name)?;
        if self.find_by_name(name.as_str()).is_some() {
            return Err(ChamError::DuplicateName(name.to_string()));
        }
        self.profiles.push(Profile::new(name));
        Ok(self.persist())
    }

    /// Rename the profile at `index`, keeping names unique among the others
    pub fn rename(&mut self, index: usize, new_name: &str) -> Result<Persistence> {
        self.check_index(index)?;
        let name = PlayerName::parse(new_name)?;
        let clash = self
            .profiles
            .iter()
            .enumerate()
            .any(|(i, p)| i != index && p.name == name);
        if clash {
            return Err(ChamError::DuplicateName(name.to_string()));
        }
        self.profiles[index].name = name;
        Ok(self.persist())
    }

    /// Remove the profile at `index`; later profiles move up one slot
    pub fn delete(&mut self, index: usize) -> Result<(Profile, Persistence)> {
        self.check_index(index)?;
        let removed = self.profiles.remove(index);
        Ok((removed, self.persist()))
    }

    /// Fold a finished session into the profile at `index` and save
    pub fn apply_session_result(
        &mut self,
        index: usize,
        session: &GameSession,
    ) -> Result<Persistence> {
        self.check_index(index)?;
        self.profiles[index].apply_session_result(session);
        Ok(self.persist())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.profiles.len() {
            Ok(())
        } else {
            Err(ChamError::InvalidIndex {
                index,
                len: self.profiles.len(),
            })
        }
    }

    fn persist(&self) -> Persistence {
        match self.save() {
            Ok(()) => Persistence::Saved,
            Err(e) => {
                warn!("could not save profiles to {}: {}", self.path.display(), e);
                Persistence::Unsaved(e)
            }
        }
    }
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".bak");
    path.with_file_name(name)
}

/// Numbered one-line summary per profile
pub fn format_profile_list(profiles: &[Profile]) -> String {
    profiles
        .iter()
        .enumerate()
        .map(|(i, p)| {
            format!(
                "{}) {}  | Games Played: {}  Wins: {}  Losses: {}",
                i + 1,
                p.name,
                p.games_played,
                p.wins,
                p.losses
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_profile_details(profile: &Profile) -> String {
    format!(
        "Name        : {}\nGames Played: {}\nWins        : {}\nLosses      : {}",
        profile.name, profile.games_played, profile.wins, profile.losses
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameMode, Move};
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> ProfileStore {
        ProfileStore::open(dir.path().join("profiles.jsonl"))
    }

    fn names(store: &ProfileStore) -> Vec<&str> {
        store.profiles().iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.is_empty());
        assert!(load_profiles(&dir.path().join("nope"), MAX_PROFILES)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_add_persists() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        assert!(store.add("Alice").unwrap().is_saved());
        assert!(store.add("  Bob ").unwrap().is_saved());

        let reopened = store_in(&dir);
        assert_eq!(names(&reopened), ["Alice", "Bob"]);
        assert_eq!(reopened.get(0).unwrap().games_played, 0);
    }

    #[test]
    fn test_duplicate_rejected() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.add("Alice").unwrap().warning();
        let err = store.add("Alice").unwrap_err();
        assert!(matches!(err, ChamError::DuplicateName(ref n) if n == "Alice"));
        assert_eq!(names(&store), ["Alice"]);

        // Case-sensitive: a different casing is a different player
        store.add("alice").unwrap().warning();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_empty_name_rejected() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        assert!(matches!(store.add("   "), Err(ChamError::EmptyName)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_capacity_enforced() {
        let dir = TempDir::new().unwrap();
        let mut store = ProfileStore::with_capacity(dir.path().join("p.jsonl"), 2);
        store.add("A").unwrap().warning();
        store.add("B").unwrap().warning();
        assert!(store.is_full());
        assert!(matches!(store.add("C"), Err(ChamError::CapacityExceeded(2))));
        // A full store reports capacity before looking at the name
        assert!(matches!(store.add("A"), Err(ChamError::CapacityExceeded(2))));
        assert!(matches!(store.add(""), Err(ChamError::CapacityExceeded(2))));
        assert_eq!(names(&store), ["A", "B"]);
    }

    #[test]
    fn test_rename() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.add("Alice").unwrap().warning();
        store.add("Bob").unwrap().warning();

        assert!(matches!(store.rename(1, "Alice"), Err(ChamError::DuplicateName(_))));
        assert!(matches!(store.rename(1, ""), Err(ChamError::EmptyName)));
        assert!(matches!(
            store.rename(5, "Zed"),
            Err(ChamError::InvalidIndex { index: 5, len: 2 })
        ));

        // Keeping its own name is not a clash
        assert!(store.rename(0, "Alice").unwrap().is_saved());
        assert!(store.rename(1, "Carol").unwrap().is_saved());
        assert_eq!(names(&store_in(&dir)), ["Alice", "Carol"]);
    }

    #[test]
    fn test_delete_shifts_down() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        for name in ["A", "B", "C"] {
            store.add(name).unwrap().warning();
        }

        let (removed, persisted) = store.delete(1).unwrap();
        assert!(persisted.is_saved());
        assert_eq!(removed.name.as_str(), "B");
        assert_eq!(store.len(), 2);
        assert_eq!(names(&store), ["A", "C"]);
        assert_eq!(names(&store_in(&dir)), ["A", "C"]);

        assert!(matches!(store.delete(2), Err(ChamError::InvalidIndex { .. })));
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profiles.jsonl");
        let profiles: Vec<Profile> = (0..5)
            .map(|i| Profile {
                name: PlayerName::parse(&format!("Player {i}")).unwrap(),
                games_played: i * 10,
                wins: i * 6,
                losses: i * 4,
            })
            .collect();

        save_profiles(&path, &profiles).unwrap();
        let loaded = load_profiles(&path, MAX_PROFILES).unwrap();
        assert_eq!(loaded, profiles);

        save_profiles(&path, &loaded).unwrap();
        assert_eq!(load_profiles(&path, MAX_PROFILES).unwrap(), profiles);
    }

    #[test]
    fn test_file_format() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.add("Alice").unwrap().warning();

        let content = fs::read_to_string(store.path()).unwrap();
        similar_asserts::assert_eq!(
            content,
            "{\"format\":\"cham-profiles\",\"version\":1}\n\
             {\"name\":\"Alice\",\"games_played\":0,\"wins\":0,\"losses\":0}\n"
        );
    }

    #[test]
    fn test_unknown_version_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profiles.jsonl");
        fs::write(&path, "{\"format\":\"cham-profiles\",\"version\":9}\n").unwrap();
        assert!(matches!(
            load_profiles(&path, MAX_PROFILES),
            Err(ChamError::UnsupportedFormat { version: 9, .. })
        ));

        // The store starts empty and the unreadable file is kept as a backup
        let mut store = ProfileStore::open(&path);
        assert!(store.is_empty());
        let backup = dir.path().join("profiles.jsonl.bak");
        assert_eq!(
            fs::read_to_string(&backup).unwrap(),
            "{\"format\":\"cham-profiles\",\"version\":9}\n"
        );

        assert!(store.add("Carol").unwrap().is_saved());
        assert_eq!(names(&store_in(&dir)), ["Carol"]);
        assert!(fs::read_to_string(&backup).unwrap().contains("\"version\":9"));
    }

    #[test]
    fn test_malformed_record_does_not_wipe_others() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profiles.jsonl");
        fs::write(
            &path,
            "{\"format\":\"cham-profiles\",\"version\":1}\n\
             {\"name\":\"Alice\",\"games_played\":40,\"wins\":25,\"losses\":15}\n\
             {\"name\":\"Bob\",\"games_played\":2,\"wins\":0,\"losses\":2\n",
        )
        .unwrap();

        let mut store = ProfileStore::open(&path);
        assert_eq!(names(&store), ["Alice"]);
        assert!(store.add("Carol").unwrap().is_saved());

        let reopened = store_in(&dir);
        assert_eq!(names(&reopened), ["Alice", "Carol"]);
        assert_eq!(reopened.get(0).unwrap().games_played, 40);
    }

    #[test]
    fn test_load_skips_bad_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profiles.jsonl");
        fs::write(
            &path,
            "{\"format\":\"cham-profiles\",\"version\":1}\n\
             {\"name\":\"Alice\",\"games_played\":1,\"wins\":1,\"losses\":0}\n\
             {\"name\":\"\",\"games_played\":0,\"wins\":0,\"losses\":0}\n\
             {\"name\":\"Alice\",\"games_played\":9,\"wins\":9,\"losses\":0}\n\
             not json at all\n\
             {\"name\":\"Bob\",\"games_played\":2,\"wins\":0,\"losses\":2}\n\
             {\"name\":\"Carol\",\"games_played\":0,\"wins\":0,\"losses\":0}\n",
        )
        .unwrap();

        let loaded = load_profiles(&path, 2).unwrap();
        let loaded_names: Vec<_> = loaded.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(loaded_names, ["Alice", "Bob"]);
        assert_eq!(loaded[0].games_played, 1);
    }

    #[test]
    fn test_save_failure_keeps_memory_state() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be makes every write fail
        let path = dir.path().join("blocked");
        fs::create_dir(&path).unwrap();

        let mut store = ProfileStore::open(&path);
        let persisted = store.add("Alice").unwrap();
        assert!(!persisted.is_saved());
        assert!(persisted.warning().is_some());
        assert_eq!(names(&store), ["Alice"]);
        assert!(path.is_dir());
    }

    #[test]
    fn test_apply_session_result_persists() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.add("Alice").unwrap().warning();

        let name = store.get(0).unwrap().name.clone();
        let mut session = GameSession::new(name, GameMode::Basic, 2).unwrap();
        session.record_round(Move::Left, Move::Right);
        session.record_round(Move::Left, Move::Left);

        assert!(store.apply_session_result(0, &session).unwrap().is_saved());
        let reopened = store_in(&dir);
        let alice = reopened.get(0).unwrap();
        assert_eq!((alice.games_played, alice.wins, alice.losses), (2, 1, 1));
    }

    #[test]
    fn test_format_profile_list() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.add("Alice").unwrap().warning();
        store.add("Bob").unwrap().warning();

        let text = format_profile_list(store.profiles());
        assert_eq!(
            text,
            "1) Alice  | Games Played: 0  Wins: 0  Losses: 0\n\
             2) Bob  | Games Played: 0  Wins: 0  Losses: 0"
        );
        assert!(format_profile_details(store.get(1).unwrap()).starts_with("Name        : Bob"));
    }
}
