//! Persistent store for user-defined materials

use crate::error::Result;
use crate::types::Material;
use std::fs;
use std::path::PathBuf;

/// Persistent list of custom materials, in insertion order
pub struct MaterialStore {
    store_path: PathBuf,
    materials: Vec<Material>,
}

impl MaterialStore {
    /// Create or load a store under `store_dir`.
    ///
    /// A missing or corrupt file starts an empty list.
    pub fn open(store_dir: PathBuf) -> Self {
        let _ = fs::create_dir_all(&store_dir);
        let store_path = store_dir.join("materials.json");
        let materials = fs::read_to_string(&store_path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();
        Self {
            store_path,
            materials,
        }
    }

    fn persist(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.materials)?;
        fs::write(&self.store_path, content)?;
        Ok(())
    }

    /// Append a custom material; write failures are swallowed
    pub fn add(&mut self, material: Material) {
        self.materials.push(material);
        let _ = self.persist();
    }

    /// All persisted custom materials
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Clone the list for seeding a `Catalog`
    pub fn to_vec(&self) -> Vec<Material> {
        self.materials.clone()
    }

    pub fn count(&self) -> usize {
        self.materials.len()
    }
}
