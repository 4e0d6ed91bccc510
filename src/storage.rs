use crate::errors::AppError;
use crate::models::Database;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("GYMIFY_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/gymify.json"))
}

pub async fn load_data(path: &Path) -> Database {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(db) => db,
            Err(err) => {
                error!("failed to parse data file: {err}");
                Database::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Database::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            Database::default()
        }
    }
}

pub async fn persist_data(path: &Path, db: &Database) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(db).map_err(AppError::internal)?;
    // Stage to a sibling file and rename, so the data file is only ever
    // replaced whole.
    let staged = path.with_extension("tmp");
    fs::write(&staged, payload).await.map_err(AppError::internal)?;
    fs::rename(&staged, path).await.map_err(AppError::internal)?;
    Ok(())
}

/// Persist the tree, or put the pre-mutation snapshot back so the in-memory
/// state never runs ahead of the file.
pub async fn persist_or_rollback(
    path: &Path,
    db: &mut Database,
    snapshot: Database,
) -> Result<(), AppError> {
    match persist_data(path, db).await {
        Ok(()) => Ok(()),
        Err(err) => {
            *db = snapshot;
            Err(err)
        }
    }
}
