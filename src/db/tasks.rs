use crate::libs::error::StoreError;
use crate::libs::task::{NewTask, Status, Task, TaskUpdate};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::collections::HashSet;
use std::fs;
use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

pub const TASKS_FILE_NAME: &str = "tasks.json";

/// The task collection and the file it is mirrored to.
///
/// Every mutating operation rewrites the whole file. When the write fails the
/// in-memory collection is rolled back, so memory always matches the last
/// successful save.
#[derive(Debug)]
pub struct Tasks {
    path: PathBuf,
    pub(crate) tasks: Vec<Task>,
    recovered: Option<StoreError>,
}

impl Tasks {
    /// Opens the store backed by `path`.
    ///
    /// A missing or damaged file is not fatal: the store starts empty and the
    /// condition is kept in [`Tasks::recovered_from`]. Other read failures are
    /// returned.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let mut store = Self::empty(path);
        match store.load() {
            Ok(count) => debug!(path = %store.path.display(), count, "loaded tasks"),
            Err(e) if e.is_recoverable() => {
                warn!(path = %store.path.display(), error = %e, "starting with an empty task list");
                store.recovered = Some(e);
            }
            Err(e) => return Err(e),
        }
        Ok(store)
    }

    /// A store with no records that has not touched the file yet.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            tasks: Vec::new(),
            recovered: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The load problem the store recovered from when it was opened, if any.
    pub fn recovered_from(&self) -> Option<&StoreError> {
        self.recovered.as_ref()
    }

    /// Replaces the in-memory collection with the file content.
    ///
    /// On error the current collection is kept as it was.
    pub fn load(&mut self) -> Result<usize, StoreError> {
        let content = fs::read_to_string(&self.path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => StoreError::StorageMissing(self.path.clone()),
            _ => StoreError::StorageRead {
                path: self.path.clone(),
                source,
            },
        })?;

        let tasks: Vec<Task> = serde_json::from_str(&content).map_err(|e| self.corrupt(e.to_string()))?;
        self.check(&tasks)?;

        self.tasks = tasks;
        Ok(self.tasks.len())
    }

    /// Writes the whole collection to the file, replacing its previous content.
    pub fn save(&self) -> Result<(), StoreError> {
        self.write().map_err(|source| StoreError::StorageWrite {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), count = self.tasks.len(), "saved tasks");
        Ok(())
    }

    /// Serializes into a temporary file next to the target and renames it into
    /// place, so the previous file survives any failure.
    fn write(&self) -> io::Result<()> {
        let parent = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent)?;
                parent
            }
            None => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(parent)?;
        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            let mut serializer = Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
            self.tasks.serialize(&mut serializer)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }

    /// Identifier the next added task receives: current maximum plus one.
    ///
    /// Fails once the maximum identifier is taken.
    pub fn next_id(&self) -> Result<u32, StoreError> {
        self.tasks
            .iter()
            .map(|t| t.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| StoreError::validation("id", format!("no identifiers left after {}", u32::MAX)))
    }

    pub fn add(&mut self, new_task: NewTask) -> Result<Task, StoreError> {
        let task = new_task.into_task(self.next_id()?);
        let previous = self.tasks.clone();
        self.tasks.push(task.clone());
        self.commit(previous)?;

        info!(id = task.id, title = %task.title, "task added");
        Ok(task)
    }

    /// Applies a partial update. Absent fields keep their current values.
    pub fn edit(&mut self, id: u32, update: &TaskUpdate) -> Result<Task, StoreError> {
        let previous = self.tasks.clone();
        let task = self.tasks.iter_mut().find(|t| t.id == id).ok_or(StoreError::NotFound(id))?;
        let changed = update.apply(task);
        let task = task.clone();
        self.commit(previous)?;

        info!(id, changed, "task edited");
        Ok(task)
    }

    pub fn mark_completed(&mut self, id: u32) -> Result<Task, StoreError> {
        self.edit(id, &TaskUpdate::status(Status::Completed))
    }

    /// Removes a single task and returns it.
    pub fn delete(&mut self, id: u32) -> Result<Task, StoreError> {
        let index = self.tasks.iter().position(|t| t.id == id).ok_or(StoreError::NotFound(id))?;
        let previous = self.tasks.clone();
        let task = self.tasks.remove(index);
        self.commit(previous)?;

        info!(id, title = %task.title, "task deleted");
        Ok(task)
    }

    /// Removes every task whose category equals `category` ignoring case.
    ///
    /// Returns the number of removed tasks. Nothing is written when it is zero.
    pub fn delete_by_category(&mut self, category: &str) -> Result<usize, StoreError> {
        let needle = category.to_lowercase();
        let previous = self.tasks.clone();
        self.tasks.retain(|t| t.category.to_lowercase() != needle);

        let removed = previous.len() - self.tasks.len();
        if removed > 0 {
            self.commit(previous)?;
            info!(category, removed, "tasks deleted by category");
        }
        Ok(removed)
    }

    fn commit(&mut self, previous: Vec<Task>) -> Result<(), StoreError> {
        if let Err(e) = self.save() {
            self.tasks = previous;
            return Err(e);
        }
        Ok(())
    }

    fn check(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let mut seen = HashSet::new();
        for task in tasks {
            if task.id == 0 {
                return Err(self.corrupt("task id must be positive".to_string()));
            }
            if !seen.insert(task.id) {
                return Err(self.corrupt(format!("duplicate task id {}", task.id)));
            }
            if task.title.trim().is_empty() {
                return Err(self.corrupt(format!("task {} has an empty title", task.id)));
            }
        }
        Ok(())
    }

    fn corrupt(&self, reason: String) -> StoreError {
        StoreError::StorageCorrupt {
            path: self.path.clone(),
            reason,
        }
    }
}
