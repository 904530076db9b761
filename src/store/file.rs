//! Whole-collection JSON file I/O.
//! Writes go to a sibling temp file that is renamed over the target.

use crate::error::StoreError;
use crate::recipe::Recipe;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Read and parse the recipe array. Duplicate ids are rejected.
pub async fn read_collection(path: &Path) -> Result<Vec<Recipe>, StoreError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| StoreError::LoadFailed(format!("{}: {}", path.display(), e)))?;
    let recipes: Vec<Recipe> = serde_json::from_str(&raw)
        .map_err(|e| StoreError::LoadFailed(format!("{}: {}", path.display(), e)))?;
    let mut seen = HashSet::with_capacity(recipes.len());
    for recipe in &recipes {
        if !seen.insert(recipe.id) {
            return Err(StoreError::LoadFailed(format!(
                "{}: duplicate Id {}",
                path.display(),
                recipe.id
            )));
        }
    }
    Ok(recipes)
}

/// Serialize with 4-space indentation and a trailing newline.
pub fn to_pretty_json(recipes: &[Recipe]) -> Result<Vec<u8>, StoreError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    recipes
        .serialize(&mut ser)
        .map_err(|e| StoreError::Persist(e.to_string()))?;
    buf.push(b'\n');
    Ok(buf)
}

/// Replace the file contents with `recipes`.
pub async fn write_collection(path: &Path, recipes: &[Recipe]) -> Result<(), StoreError> {
    let bytes = to_pretty_json(recipes)?;
    let tmp = temp_path(path);
    if let Err(e) = write_synced(&tmp, &bytes).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(StoreError::Persist(format!("{}: {}", tmp.display(), e)));
    }
    if let Err(e) = tokio::fs::rename(&tmp, path).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(StoreError::Persist(format!("{}: {}", path.display(), e)));
    }
    Ok(())
}

async fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(bytes).await?;
    file.sync_all().await
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "recipes.json".into());
    let tmp_name = format!(".{}.{}.tmp", name, uuid::Uuid::new_v4().simple());
    match path.parent() {
        Some(dir) => dir.join(tmp_name),
        None => PathBuf::from(tmp_name),
    }
}
