//! Shared engine access and the deferred initial load.
//!
//! A rendering surface owns the engine as a [`SharedEngine`]; everything
//! else (data loaders, gestures, exporters) reaches it through a
//! [`TableHandle`], a weak reference that fails loudly once the engine is
//! gone instead of keeping it alive.
//!
//! ## Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use datagridlib::handle::{shared, DeferredLoad, LoadStatus, StaticSource, TableHandle};
//! use datagridlib::{demo_rows, TableEngine};
//!
//! let engine = shared(TableEngine::new());
//! let start = Instant::now();
//! let mut load = DeferredLoad::schedule(
//!     TableHandle::attach(&engine),
//!     StaticSource::new(demo_rows(50)),
//!     start,
//!     Duration::from_millis(800),
//! );
//!
//! assert_eq!(load.poll(start).unwrap(), LoadStatus::Pending);
//! assert_eq!(load.poll(start + Duration::from_millis(800)).unwrap(), LoadStatus::Delivered(50));
//! assert!(!engine.borrow().is_loading());
//! ```

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::data::Row;
use crate::engine::TableEngine;
use crate::error::TableError;
use crate::Result;

/// Engine shared between a surface and its collaborators.
pub type SharedEngine = Rc<RefCell<TableEngine>>;

/// Wrap an engine for sharing.
pub fn shared(engine: TableEngine) -> SharedEngine {
    Rc::new(RefCell::new(engine))
}

/// Non-owning access to a shared engine.
#[derive(Debug, Clone, Default)]
pub struct TableHandle {
    engine: Weak<RefCell<TableEngine>>,
}

impl TableHandle {
    /// Handle bound to `engine`.
    pub fn attach(engine: &SharedEngine) -> Self {
        Self {
            engine: Rc::downgrade(engine),
        }
    }

    /// Handle with no engine behind it. Every access fails.
    pub fn detached() -> Self {
        Self::default()
    }

    /// Whether the engine is still alive.
    pub fn is_attached(&self) -> bool {
        self.engine.strong_count() > 0
    }

    /// Run `f` against the engine's current state.
    pub fn read<R>(&self, f: impl FnOnce(&TableEngine) -> R) -> Result<R> {
        let engine = self.upgrade()?;
        let guard = engine.try_borrow().map_err(|_| TableError::EngineBusy)?;
        Ok(f(&guard))
    }

    /// Run a mutation against the engine.
    pub fn update<R>(&self, f: impl FnOnce(&mut TableEngine) -> R) -> Result<R> {
        let engine = self.upgrade()?;
        let mut guard = engine.try_borrow_mut().map_err(|_| TableError::EngineBusy)?;
        Ok(f(&mut guard))
    }

    fn upgrade(&self) -> Result<SharedEngine> {
        self.engine.upgrade().ok_or_else(|| {
            warn!("table engine reference lost");
            TableError::EngineDetached
        })
    }
}

/// One-shot supplier of the initial dataset.
pub trait DataSource {
    fn fetch(&mut self) -> Result<Vec<Row>>;
}

/// A dataset already in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    rows: Vec<Row>,
}

impl StaticSource {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}

impl DataSource for StaticSource {
    fn fetch(&mut self) -> Result<Vec<Row>> {
        Ok(std::mem::take(&mut self.rows))
    }
}

/// Rows read from a JSON file holding an array of row objects.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for JsonFileSource {
    fn fetch(&mut self) -> Result<Vec<Row>> {
        let text = std::fs::read_to_string(&self.path)?;
        let rows: Vec<Row> = serde_json::from_str(&text)?;
        info!(rows = rows.len(), path = %self.path.display(), "rows read");
        Ok(rows)
    }
}

impl<F> DataSource for F
where
    F: FnMut() -> Result<Vec<Row>>,
{
    fn fetch(&mut self) -> Result<Vec<Row>> {
        self()
    }
}

/// Result of polling a [`DeferredLoad`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Deadline not reached yet
    Pending,
    /// Rows were handed to the engine
    Delivered(usize),
    /// The engine was gone by the deadline; nothing was fetched
    Discarded,
    /// The load already completed or was discarded
    Finished,
}

/// A dataset delivery scheduled for a later instant.
///
/// The caller drives it with [`DeferredLoad::poll`] from its event loop.
/// Delivery happens at most once.
pub struct DeferredLoad<S> {
    handle: TableHandle,
    source: Option<S>,
    due: Instant,
}

impl<S: DataSource> DeferredLoad<S> {
    /// Schedule `source` to be delivered `delay` after `now`.
    pub fn schedule(handle: TableHandle, source: S, now: Instant, delay: Duration) -> Self {
        let due = now + delay;
        debug!(delay_ms = delay.as_millis() as u64, "initial load scheduled");
        Self {
            handle,
            source: Some(source),
            due,
        }
    }

    /// Instant the delivery becomes due.
    pub fn due(&self) -> Instant {
        self.due
    }

    /// Whether the load has run (delivered or discarded).
    pub fn is_finished(&self) -> bool {
        self.source.is_none()
    }

    /// Deliver the dataset if it is due.
    pub fn poll(&mut self, now: Instant) -> Result<LoadStatus> {
        if self.source.is_none() {
            return Ok(LoadStatus::Finished);
        }
        if now < self.due {
            return Ok(LoadStatus::Pending);
        }

        let Some(mut source) = self.source.take() else {
            return Ok(LoadStatus::Finished);
        };
        if !self.handle.is_attached() {
            warn!("engine torn down before initial load; discarding");
            return Ok(LoadStatus::Discarded);
        }

        let rows = source.fetch()?;
        let count = rows.len();
        self.handle.update(|engine| engine.load_rows(rows))??;
        Ok(LoadStatus::Delivered(count))
    }
}
