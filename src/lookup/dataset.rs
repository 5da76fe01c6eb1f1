//! Loading and caching of the class table.
//!
//! The table is loaded at most once successfully per page. While a load is
//! in flight, further requests queue up behind it instead of starting a
//! second fetch; every waiter is handed the same table once it lands. A
//! failed load hands waiters an empty table, logs a warning and leaves the
//! dataset unloaded so the next request tries again.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use super::ClassDb;
use crate::error::Result;

/// Extension-relative path of the bundled dataset.
pub const DATASET_PATH: &str = "data/tailwind-classes.json";

/// The dataset compiled into the crate.
pub const BUNDLED_DATASET: &str = include_str!("../../data/tailwind-classes.json");

/// Anything that can produce the raw dataset JSON synchronously.
pub trait DatasetSource {
    fn fetch(&self) -> Result<String>;
}

/// The dataset compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bundled;

impl DatasetSource for Bundled {
    fn fetch(&self) -> Result<String> {
        Ok(BUNDLED_DATASET.to_string())
    }
}

/// A dataset JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileSource(pub PathBuf);

impl DatasetSource for FileSource {
    fn fetch(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.0)?)
    }
}

/// What the caller has to do after asking for the table.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fetch {
    /// Nothing was loading: start a fetch and pass its result to
    /// [`Dataset::complete`].
    Start,
    /// A fetch is already in flight.
    Pending,
    /// The table is loaded.
    Ready,
}

type Waiter = Box<dyn FnOnce(&ClassDb)>;

enum LoadState {
    Unloaded,
    Loading,
    Ready(ClassDb),
}

/// The per-page cache around [`ClassDb`].
pub struct Dataset {
    state: LoadState,
    waiters: Vec<Waiter>,
    empty: ClassDb,
}

impl Default for Dataset {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.state {
            LoadState::Unloaded => "unloaded",
            LoadState::Loading => "loading",
            LoadState::Ready(_) => "ready",
        };
        f.debug_struct("Dataset")
            .field("state", &state)
            .field("entries", &self.table().map(ClassDb::len))
            .field("waiters", &self.waiters.len())
            .finish()
    }
}

impl Dataset {
    pub fn new() -> Self {
        Self {
            state: LoadState::Unloaded,
            waiters: Vec::new(),
            empty: ClassDb::default(),
        }
    }

    /// A dataset that is already loaded.
    pub fn with_table(table: ClassDb) -> Self {
        Self {
            state: LoadState::Ready(table),
            ..Self::new()
        }
    }

    /// The loaded table, if any.
    pub fn table(&self) -> Option<&ClassDb> {
        match &self.state {
            LoadState::Ready(table) => Some(table),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    /// Make sure a load is under way or done.
    pub fn ensure_loaded(&mut self) -> Fetch {
        match self.state {
            LoadState::Ready(_) => Fetch::Ready,
            LoadState::Loading => Fetch::Pending,
            LoadState::Unloaded => {
                self.state = LoadState::Loading;
                Fetch::Start
            }
        }
    }

    /// Run `waiter` with the table: immediately if loaded, otherwise once the
    /// in-flight (or newly started) load completes.
    pub fn when_ready<F>(&mut self, waiter: F) -> Fetch
    where
        F: FnOnce(&ClassDb) + 'static,
    {
        if let LoadState::Ready(table) = &self.state {
            waiter(table);
            return Fetch::Ready;
        }
        self.waiters.push(Box::new(waiter));
        self.ensure_loaded()
    }

    /// Finish a load started after [`Fetch::Start`].
    ///
    /// Returns the table handed to waiters: the loaded one, or an empty
    /// table when fetching or parsing failed.
    pub fn complete(&mut self, fetched: Result<String>) -> &ClassDb {
        match fetched.and_then(|text| ClassDb::from_json(&text)) {
            Ok(table) => {
                log::debug!("class database loaded ({} entries)", table.len());
                self.state = LoadState::Ready(table);
            }
            Err(e) => {
                log::warn!("could not load class database: {e}");
                self.state = LoadState::Unloaded;
            }
        }

        let waiters = std::mem::take(&mut self.waiters);
        let table = match &self.state {
            LoadState::Ready(table) => table,
            _ => &self.empty,
        };
        for waiter in waiters {
            waiter(table);
        }
        table
    }

    /// Synchronous load for native callers. Returns the cached table when
    /// one is already loaded.
    pub fn load_from(&mut self, source: &dyn DatasetSource) -> &ClassDb {
        match self.ensure_loaded() {
            Fetch::Ready => {}
            Fetch::Start | Fetch::Pending => {
                let fetched = source.fetch();
                self.complete(fetched);
            }
        }
        self.table().unwrap_or(&self.empty)
    }
}
