use std::{collections::BTreeMap, io::ErrorKind, path::{Path, PathBuf}, sync::Arc};
use tokio::{fs, sync::RwLock};

use crate::errors::ServiceError;

/// Generic JSON file-backed key-value map store.
///
/// Persists a `BTreeMap<K, V>` to a JSON file and provides simple CRUD helpers.
/// Writes hold the map's write lock until the file has been replaced, so the file
/// always matches the in-memory map and same-key writers serialize.
#[derive(Clone)]
pub struct JsonMapStore<K, V> {
    inner: Arc<RwLock<BTreeMap<K, V>>>,
    file_path: PathBuf,
}

impl<K, V> JsonMapStore<K, V>
where
    K: Ord + serde::Serialize + serde::de::DeserializeOwned + Clone,
    V: serde::Serialize + serde::de::DeserializeOwned + Clone,
{
    /// Initialize the store from a path. Creates the file with an empty map if missing.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        let map: BTreeMap<K, V> = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| ServiceError::Storage(format!("{}: {e}", file_path.display())))?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let empty: BTreeMap<K, V> = BTreeMap::new();
                write_atomic(&file_path, &empty).await?;
                empty
            }
            Err(e) => return Err(ServiceError::Storage(format!("{}: {e}", file_path.display()))),
        };

        Ok(Arc::new(Self { inner: Arc::new(RwLock::new(map)), file_path }))
    }

    /// List all entries as `(key, value)` pairs in key order.
    pub async fn list(&self) -> Vec<(K, V)> {
        let map = self.inner.read().await;
        map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// Get value by key.
    pub async fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().await;
        map.get(key).cloned()
    }

    /// Insert or update a value by key and persist. The map is restored if the write fails.
    pub async fn insert(&self, key: K, value: V) -> Result<(), ServiceError> {
        let mut map = self.inner.write().await;
        let previous = map.insert(key.clone(), value);
        if let Err(e) = write_atomic(&self.file_path, &*map).await {
            match previous {
                Some(prev) => map.insert(key, prev),
                None => map.remove(&key),
            };
            return Err(e);
        }
        Ok(())
    }

    /// Remove a key and persist; returns whether it existed.
    pub async fn remove(&self, key: &K) -> Result<bool, ServiceError> {
        let mut map = self.inner.write().await;
        let Some(previous) = map.remove(key) else {
            return Ok(false);
        };
        if let Err(e) = write_atomic(&self.file_path, &*map).await {
            map.insert(key.clone(), previous);
            return Err(e);
        }
        Ok(true)
    }
}

/// Serialize to a sibling temp file, then rename over the target.
async fn write_atomic<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), ServiceError> {
    let data = serde_json::to_vec(value).map_err(|e| ServiceError::Storage(e.to_string()))?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, data)
        .await
        .map_err(|e| ServiceError::Storage(format!("{}: {e}", tmp.display())))?;
    fs::rename(&tmp, path)
        .await
        .map_err(|e| ServiceError::Storage(format!("{}: {e}", path.display())))?;
    Ok(())
}
