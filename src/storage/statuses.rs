//! Status repository for JSON storage
//!
//! Manages loading and saving the status reference table in situacoes.json.
//! Statuses are read-only for the rest of the application; rows are only
//! written when storage is initialized.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::ContaError;
use crate::models::{Status, StatusId};

use super::file_io::{load_table, save_table};

/// Serializable status data structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StatusData {
    statuses: Vec<Status>,
}

/// Repository for status persistence
pub struct StatusRepository {
    path: PathBuf,
    data: RwLock<HashMap<StatusId, Status>>,
}

impl StatusRepository {
    /// Create a new status repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load statuses from disk
    pub fn load(&self) -> Result<(), ContaError> {
        let file_data: StatusData = load_table(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| ContaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for status in file_data.statuses {
            data.insert(status.id, status);
        }

        Ok(())
    }

    /// Save statuses to disk
    pub fn save(&self) -> Result<(), ContaError> {
        let data = self
            .data
            .read()
            .map_err(|e| ContaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut statuses: Vec<Status> = data.values().cloned().collect();
        statuses.sort_by_key(|s| s.id);

        save_table(&self.path, &StatusData { statuses })
    }

    /// Get a status by ID
    pub fn get(&self, id: StatusId) -> Result<Option<Status>, ContaError> {
        let data = self
            .data
            .read()
            .map_err(|e| ContaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all statuses sorted alphabetically by name
    pub fn get_all(&self) -> Result<Vec<Status>, ContaError> {
        let data = self
            .data
            .read()
            .map_err(|e| ContaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut statuses: Vec<Status> = data.values().cloned().collect();
        statuses.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(statuses)
    }

    /// Insert or update a status
    pub fn upsert(&self, status: Status) -> Result<(), ContaError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ContaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(status.id, status);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, StatusRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = StatusRepository::new(temp_dir.path().join("situacoes.json"));
        repo.load().unwrap();
        (temp_dir, repo)
    }

    #[test]
    fn test_get_all_sorted_by_name() {
        let (_temp_dir, repo) = create_test_repo();

        repo.upsert(Status::new(StatusId::new(2), "Pendente")).unwrap();
        repo.upsert(Status::new(StatusId::new(3), "Atrasada")).unwrap();
        repo.upsert(Status::new(StatusId::new(1), "Paga")).unwrap();

        let names: Vec<String> = repo.get_all().unwrap().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Atrasada", "Paga", "Pendente"]);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();

        repo.upsert(Status::new(StatusId::new(1), "Paga")).unwrap();
        repo.save().unwrap();

        let repo2 = StatusRepository::new(temp_dir.path().join("situacoes.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.get(StatusId::new(1)).unwrap().unwrap().name, "Paga");
        assert!(repo2.get(StatusId::new(2)).unwrap().is_none());
    }
}
