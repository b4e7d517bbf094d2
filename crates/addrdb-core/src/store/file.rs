// crates/addrdb-core/src/store/file.rs

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::model::RegionMap;

use super::{check_region_key, Store};

/// Filesystem-backed store: one `<code>.json` file per region, lowercase
/// names, all in a single directory.
///
/// With the `compact` feature a gzip-compressed `<code>.json.gz` sibling is
/// accepted when the plain file is absent.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> FileStore {
        FileStore { dir: dir.into() }
    }

    /// Directory the datasets are read from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Opens the region's dataset file, buffered and transparently
    /// decompressed. The caller doesn't care which variant was found.
    fn open_stream(&self, name: &str) -> Result<Box<dyn Read>, StoreError> {
        let path = self.dir.join(format!("{name}.json"));
        match File::open(&path) {
            Ok(file) => Ok(Box::new(BufReader::new(file))),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                #[cfg(feature = "compact")]
                {
                    use flate2::read::GzDecoder;
                    let gz_path = self.dir.join(format!("{name}.json.gz"));
                    if let Ok(file) = File::open(&gz_path) {
                        return Ok(Box::new(GzDecoder::new(BufReader::new(file))));
                    }
                }
                Err(StoreError::NotFound(format!(
                    "dataset not found at {}",
                    path.display()
                )))
            }
            Err(err) => Err(StoreError::Io(err)),
        }
    }
}

impl Store for FileStore {
    fn fetch(&self, region_key: &str) -> Result<RegionMap, StoreError> {
        check_region_key(region_key)?;
        let name = region_key.to_lowercase();
        let reader = self.open_stream(&name)?;
        let map = serde_json::from_reader(reader)?;
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traversal_shaped_keys_fail_before_io() {
        let store = FileStore::new("/nonexistent");
        match store.fetch("../../../etc/passwd") {
            Err(StoreError::InvalidKey(_)) => {}
            other => panic!("expected InvalidKey, got {other:?}"),
        }
    }

    #[test]
    fn missing_dataset_is_not_found() {
        let store = FileStore::new("/nonexistent");
        match store.fetch("US") {
            Err(StoreError::NotFound(_)) => {}
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
