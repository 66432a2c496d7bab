use std::collections::HashMap;
use std::path::PathBuf;
use crate::core::error::{Error, ErrorKind, Result};

/// Source of corpus texts. Callers receive this as an explicit capability
/// instead of reading ambient globals; the core never fetches anything
/// over the network itself.
pub trait TextProvider: Send + Sync {
    fn fetch(&self, name: &str) -> Result<String>;

    fn names(&self) -> Vec<String>;
}

/// Provider over texts already held in memory, e.g. uploaded strings.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    pub texts: HashMap<String, String>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        InMemoryProvider {
            texts: HashMap::new(),
        }
    }

    pub fn with_text(mut self, name: &str, text: &str) -> Self {
        self.texts.insert(name.to_string(), text.to_string());
        self
    }
}

impl TextProvider for InMemoryProvider {
    fn fetch(&self, name: &str) -> Result<String> {
        self.texts.get(name).cloned().ok_or_else(|| {
            Error::new(
                ErrorKind::SourceUnavailable,
                format!("no text named '{}'", name),
            )
        })
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.texts.keys().cloned().collect();
        names.sort();
        names
    }
}

/// Provider reading plain-text files from a directory of bundled corpora.
#[derive(Debug, Clone)]
pub struct DirectoryProvider {
    pub root: PathBuf,
}

impl DirectoryProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirectoryProvider { root: root.into() }
    }
}

impl TextProvider for DirectoryProvider {
    fn fetch(&self, name: &str) -> Result<String> {
        let path = self.root.join(name);
        std::fs::read_to_string(&path).map_err(|err| {
            Error::new(
                ErrorKind::SourceUnavailable,
                format!("cannot read '{}': {}", path.display(), err),
            )
        })
    }

    fn names(&self) -> Vec<String> {
        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::debug!("cannot list '{}': {}", self.root.display(), err);
                return Vec::new();
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        names.sort();
        names
    }
}
