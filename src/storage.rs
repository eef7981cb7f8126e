use std::cell::{Cell, RefCell};
use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

/// Stand-in for the browser's localStorage: a single key holding the active
/// language code (`"en"`/`"vi"`). Reads degrade silently; writes may fail and
/// callers are expected to swallow that.
pub trait LanguageStore {
    fn load(&self) -> Option<String>;
    fn save(&self, code: &str) -> Result<()>;
}

/// File-backed store, one code per file.
pub struct FileLanguageStore {
    path: PathBuf,
}

impl FileLanguageStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LanguageStore for FileLanguageStore {
    fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let code = raw.trim().to_owned();
                if code.is_empty() { None } else { Some(code) }
            }
            Err(error) => {
                debug!(%error, path = %self.path.display(), "no persisted language");
                None
            }
        }
    }

    fn save(&self, code: &str) -> Result<()> {
        fs::write(&self.path, code)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryLanguageStore {
    value: RefCell<Option<String>>,
    pub fail_saves: Cell<bool>,
}

impl MemoryLanguageStore {
    pub fn with_value(code: &str) -> Self {
        let store = Self::default();
        *store.value.borrow_mut() = Some(code.to_owned());
        store
    }
}

impl LanguageStore for MemoryLanguageStore {
    fn load(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn save(&self, code: &str) -> Result<()> {
        if self.fail_saves.get() {
            anyhow::bail!("storage unavailable");
        }
        *self.value.borrow_mut() = Some(code.to_owned());
        Ok(())
    }
}
