//! JSON file storage implementation.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{FaqBotError, Result};
use crate::knowledge::FaqEntry;
use crate::storage::traits::{FaqStore, StorageConfig};

/// Default FAQ file name, relative to the working directory.
pub const DEFAULT_FAQ_FILE: &str = "faqs.json";

/// A store that keeps the entry list as a JSON array in a single file.
#[derive(Debug)]
pub struct JsonFileStore {
    /// Path of the backing file.
    path: PathBuf,
    /// Storage configuration.
    config: StorageConfig,
}

impl JsonFileStore {
    /// Create a store for the file at `path`.
    ///
    /// The file is not touched until the first load or save.
    pub fn new<P: AsRef<Path>>(path: P, config: StorageConfig) -> Self {
        JsonFileStore {
            path: path.as_ref().to_path_buf(),
            config,
        }
    }

    /// Create a store with the default configuration.
    pub fn new_default<P: AsRef<Path>>(path: P) -> Self {
        Self::new(path, StorageConfig::default())
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FaqStore for JsonFileStore {
    fn load(&self) -> Result<Vec<FaqEntry>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            // Never written yet
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(FaqBotError::storage(format!(
                    "Failed to open {}: {e}",
                    self.path.display()
                )));
            }
        };
        let reader = BufReader::with_capacity(self.config.buffer_size, file);

        // A file holding `null` is treated like an empty list.
        let entries: Option<Vec<FaqEntry>> = serde_json::from_reader(reader)?;
        Ok(entries.unwrap_or_default())
    }

    fn save(&mut self, entries: &[FaqEntry]) -> Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|e| {
                FaqBotError::storage(format!("Failed to write {}: {e}", self.path.display()))
            })?;
        let mut writer = BufWriter::with_capacity(self.config.buffer_size, file);

        if self.config.pretty {
            serde_json::to_writer_pretty(&mut writer, entries)?;
        } else {
            serde_json::to_writer(&mut writer, entries)?;
        }
        writer.write_all(b"\n")?;
        writer.flush()?;

        if self.config.sync_writes {
            writer.get_ref().sync_all()?;
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "json_file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Vec<FaqEntry> {
        let mut learn = FaqEntry::new("Can you learn?", "Yes!", ["learn"]);
        learn.usage_count = 3;
        vec![
            FaqEntry::new("What is your name?", "Bot.", ["what", "your", "name"]),
            learn,
        ]
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new_default(temp_dir.path().join("faqs.json"));
        assert!(store.load().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new_default(temp_dir.path().join("faqs.json"));

        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), sample());

        // Saving overwrites the whole file
        store.save(&sample()[..1]).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_file_format() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("faqs.json");
        let mut store = JsonFileStore::new(
            &path,
            StorageConfig {
                pretty: false,
                ..Default::default()
            },
        );
        store.save(&sample()[1..]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content.trim_end(),
            r#"[{"question":"Can you learn?","answer":"Yes!","keywords":["learn"],"usageCount":3}]"#
        );
    }

    #[test]
    fn test_null_and_corrupt_files() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("faqs.json");
        let store = JsonFileStore::new_default(&path);

        std::fs::write(&path, "null").unwrap();
        assert!(store.load().unwrap().is_empty());

        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(store.load(), Err(FaqBotError::Json(_))));
    }

    #[test]
    fn test_unopenable_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not_a_dir");
        std::fs::write(&blocker, "plain file").unwrap();

        // A regular file as parent component cannot be confused with a first start
        let store = JsonFileStore::new_default(blocker.join("faqs.json"));
        assert!(matches!(store.load(), Err(FaqBotError::Storage(_))));
    }

    #[test]
    fn test_unwritable_path() {
        let temp_dir = TempDir::new().unwrap();
        // A directory cannot be opened as a file
        let mut store = JsonFileStore::new_default(temp_dir.path());
        assert!(matches!(store.save(&sample()), Err(FaqBotError::Storage(_))));
    }
}
