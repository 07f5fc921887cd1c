//! Filesystem JSON persistence: the whole collection lives in one file,
//! written atomically on every mutation.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    domain::Transaction,
    errors::{Result, SpendbookError},
    storage::StorageBackend,
};

const STORE_FILE: &str = "transactions.json";
const TMP_SUFFIX: &str = "tmp";

/// Stores the transaction collection as a pretty-printed JSON array in a
/// single file under the application's data directory.
#[derive(Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Creates the backend rooted at `base`, or at the default data directory
    /// when `base` is `None`. The directory is created if missing.
    pub fn new(base: Option<PathBuf>) -> Result<Self> {
        let base = resolve_base(base);
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: base.join(STORE_FILE),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    /// Path of the backing file.
    pub fn file_path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, transactions: &[Transaction]) -> Result<()> {
        let data = serde_json::to_string_pretty(transactions)
            .map_err(|err| SpendbookError::Storage(err.to_string()))?;
        let tmp = tmp_path(&self.path);
        write_file(&tmp, &data)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn load(&self) -> Result<Vec<Transaction>> {
        let data = fs::read_to_string(&self.path)?;
        let transactions = serde_json::from_str(&data)
            .map_err(|err| SpendbookError::MalformedData(err.to_string()))?;
        Ok(transactions)
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }
}

fn resolve_base(base: Option<PathBuf>) -> PathBuf {
    if let Some(base) = base {
        return base;
    }
    if let Some(home) = std::env::var_os("SPENDBOOK_HOME") {
        return PathBuf::from(home);
    }
    dirs::data_dir()
        .map(|dir| dir.join("spendbook"))
        .unwrap_or_else(|| PathBuf::from(".spendbook"))
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
