//! Deterministic record fixtures
//!
//! Loads the versioned people and car datasets shipped under `fixtures/`
//! at the crate root. The datasets are literal JSON files, not generated
//! at runtime, so every load of the same store directory produces the
//! same records and the same aggregates.
//!
//! [`FixtureStore`] reads from an explicit directory; the module-level
//! [`people`] and [`cars`] accessors use the default store and parse each
//! file at most once per process.

use crate::error::Result;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A person record from the people dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: String,
    pub age: u32,
}

/// A car record from the car dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: u32,
    pub make: String,
    pub model: String,
    pub color: String,
    pub year: u32,
    pub price: f64,
}

/// Environment variable overriding the default fixture directory.
pub const FIXTURE_DIR_ENV: &str = "SEQKIT_FIXTURES";

/// Loads typed record collections from a fixture directory.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    dir: PathBuf,
}

impl FixtureStore {
    /// A store rooted at an explicit directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this store reads from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load the people dataset from `people.json`.
    pub fn people(&self) -> Result<Vec<Person>> {
        self.load("people.json")
    }

    /// Load the car dataset from `cars.json`.
    pub fn cars(&self) -> Result<Vec<Car>> {
        self.load("cars.json")
    }

    fn load<R>(&self, file: &str) -> Result<Vec<R>>
    where
        R: serde::de::DeserializeOwned,
    {
        let path = self.dir.join(file);
        let raw = fs::read_to_string(&path)?;
        let records: Vec<R> = serde_json::from_str(&raw)?;
        debug!("loaded {} records from {}", records.len(), path.display());
        Ok(records)
    }
}

impl Default for FixtureStore {
    /// The store rooted at `<manifest dir>/fixtures`, or at the directory
    /// named by `SEQKIT_FIXTURES` when that variable is set.
    fn default() -> Self {
        let dir = std::env::var_os(FIXTURE_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures"));
        Self { dir }
    }
}

static PEOPLE: OnceCell<Vec<Person>> = OnceCell::new();
static CARS: OnceCell<Vec<Car>> = OnceCell::new();

/// People from the default store. The file is read and parsed once per
/// process; callers receive their own copy of the records. A failed load
/// is not cached, so a later call retries.
pub fn people() -> Result<Vec<Person>> {
    PEOPLE
        .get_or_try_init(|| FixtureStore::default().people())
        .cloned()
}

/// Cars from the default store, cached the same way as [`people`].
pub fn cars() -> Result<Vec<Car>> {
    CARS.get_or_try_init(|| FixtureStore::default().cars()).cloned()
}
