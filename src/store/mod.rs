//! In-memory recipe collection with whole-file persistence.
//!
//! The collection is read once by [`RecipeStore::open`]. Every mutation takes the write lock,
//! changes the in-memory list, then rewrites the backing file before the lock is released, so
//! concurrent writers never interleave. A failed write does not roll the in-memory change back.

pub mod file;

use crate::error::StoreError;
use crate::recipe::{DraftValidator, Recipe, RecipeDraft, RecipeId, RecipePatch};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

/// Outcome of reading the backing file at startup.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Loaded(Vec<Recipe>),
    LoadFailed(String),
}

pub struct RecipeStore {
    path: PathBuf,
    state: RwLock<LoadState>,
}

/// `1 + max(id)`, or 1 for an empty collection.
pub fn next_id(recipes: &[Recipe]) -> Result<RecipeId, StoreError> {
    match recipes.iter().map(|r| r.id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or(StoreError::IdExhausted(max)),
    }
}

fn name_not_found(name: &str) -> StoreError {
    StoreError::NotFound(format!("Recipe with Name \"{}\" not found.", name))
}

fn loaded(state: &LoadState) -> Result<&Vec<Recipe>, StoreError> {
    match state {
        LoadState::Loaded(recipes) => Ok(recipes),
        LoadState::LoadFailed(reason) => Err(StoreError::LoadFailed(reason.clone())),
    }
}

fn loaded_mut(state: &mut LoadState) -> Result<&mut Vec<Recipe>, StoreError> {
    match state {
        LoadState::Loaded(recipes) => Ok(recipes),
        LoadState::LoadFailed(reason) => Err(StoreError::LoadFailed(reason.clone())),
    }
}

impl RecipeStore {
    /// Load the collection from `path`. A missing or malformed file leaves the store in
    /// [`LoadState::LoadFailed`], unless the file is missing and `create_if_missing` is set,
    /// in which case an empty array is written.
    pub async fn open(path: impl Into<PathBuf>, create_if_missing: bool) -> Self {
        let path = path.into();
        let state = match tokio::fs::try_exists(&path).await {
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not check recipe file");
                LoadState::LoadFailed(format!("{}: {}", path.display(), e))
            }
            Ok(false) if create_if_missing => Self::create_empty(&path).await,
            Ok(_) => Self::load(&path).await,
        };
        Self::with_state(path, state)
    }

    async fn create_empty(path: &Path) -> LoadState {
        match file::write_collection(path, &[]).await {
            Ok(()) => {
                tracing::info!(path = %path.display(), "created empty recipe file");
                LoadState::Loaded(Vec::new())
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not create recipe file");
                LoadState::LoadFailed(e.to_string())
            }
        }
    }

    async fn load(path: &Path) -> LoadState {
        match file::read_collection(path).await {
            Ok(recipes) => {
                tracing::info!("Loaded {} recipes", recipes.len());
                LoadState::Loaded(recipes)
            }
            Err(e) => {
                tracing::warn!(error = %e, "error loading recipe file");
                LoadState::LoadFailed(e.to_string())
            }
        }
    }

    /// Build a store around an already known state; nothing is read from disk.
    pub fn with_state(path: impl Into<PathBuf>, state: LoadState) -> Self {
        RecipeStore {
            path: path.into(),
            state: RwLock::new(state),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reason the startup load failed, if it did.
    pub async fn load_error(&self) -> Option<String> {
        match &*self.state.read().await {
            LoadState::Loaded(_) => None,
            LoadState::LoadFailed(reason) => Some(reason.clone()),
        }
    }

    pub async fn len(&self) -> Result<usize, StoreError> {
        Ok(loaded(&*self.state.read().await)?.len())
    }

    /// Every record, in insertion order.
    pub async fn list(&self) -> Result<Vec<Recipe>, StoreError> {
        Ok(loaded(&*self.state.read().await)?.clone())
    }

    pub async fn get_by_id(&self, id: RecipeId) -> Result<Recipe, StoreError> {
        let state = self.state.read().await;
        loaded(&state)?
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("Recipe with ID {} not found.", id)))
    }

    /// Exact, case-sensitive name match.
    pub async fn get_by_name(&self, name: &str) -> Result<Recipe, StoreError> {
        let state = self.state.read().await;
        loaded(&state)?
            .iter()
            .find(|r| r.name == name)
            .cloned()
            .ok_or_else(|| name_not_found(name))
    }

    /// Records with at least one ingredient containing `fragment` (case-insensitive).
    /// An empty result is reported as `NotFound`.
    pub async fn search_by_ingredient(&self, fragment: &str) -> Result<Vec<Recipe>, StoreError> {
        let state = self.state.read().await;
        let matches: Vec<Recipe> = loaded(&state)?
            .iter()
            .filter(|r| r.has_ingredient_like(fragment))
            .cloned()
            .collect();
        if matches.is_empty() {
            return Err(StoreError::NotFound(format!(
                "No recipes with an ingredient matching \"{}\".",
                fragment
            )));
        }
        Ok(matches)
    }

    /// Validate, assign the next id, append, persist.
    /// The stored and returned records are the same value.
    pub async fn create(&self, draft: RecipeDraft) -> Result<Recipe, StoreError> {
        let mut state = self.state.write().await;
        let recipes = loaded_mut(&mut state)?;
        DraftValidator::validate(&draft)?;
        let recipe = draft.into_recipe(next_id(recipes)?);
        recipes.push(recipe.clone());
        tracing::debug!(id = recipe.id, recipe = %recipe.name, "recipe created");
        self.persist(recipes).await?;
        Ok(recipe)
    }

    /// Merge `patch` over the record with `id`. A supplied name is applied.
    pub async fn update_by_id(
        &self,
        id: RecipeId,
        patch: RecipePatch,
    ) -> Result<Recipe, StoreError> {
        let mut state = self.state.write().await;
        let recipes = loaded_mut(&mut state)?;
        let idx = recipes
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("Recipe with ID {} not found.", id)))?;
        if let Some(new_name) = patch.name.as_deref() {
            if new_name != recipes[idx].name {
                tracing::warn!(id, from = %recipes[idx].name, to = %new_name, "recipe renamed");
            }
        }
        let updated = recipes[idx].merged(patch);
        recipes[idx] = updated.clone();
        tracing::debug!(id, "recipe updated");
        self.persist(recipes).await?;
        Ok(updated)
    }

    /// Merge `patch` over the first record whose name matches case-insensitively.
    /// Both `Id` and `Name` keep their original values.
    pub async fn update_by_name(
        &self,
        name: &str,
        patch: RecipePatch,
    ) -> Result<Recipe, StoreError> {
        let mut state = self.state.write().await;
        let recipes = loaded_mut(&mut state)?;
        let idx = recipes
            .iter()
            .position(|r| r.name_matches(name))
            .ok_or_else(|| name_not_found(name))?;
        let mut updated = recipes[idx].merged(patch);
        updated.name = recipes[idx].name.clone();
        recipes[idx] = updated.clone();
        tracing::debug!(id = updated.id, "recipe updated by name");
        self.persist(recipes).await?;
        Ok(updated)
    }

    pub async fn delete_by_id(&self, id: RecipeId) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        let recipes = loaded_mut(&mut state)?;
        let before = recipes.len();
        recipes.retain(|r| r.id != id);
        if recipes.len() == before {
            return Err(StoreError::NotFound(format!("Recipe with ID {} not found.", id)));
        }
        tracing::debug!(id, "recipe deleted");
        self.persist(recipes).await
    }

    /// Remove every record whose name matches case-insensitively.
    pub async fn delete_by_name(&self, name: &str) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        let recipes = loaded_mut(&mut state)?;
        let before = recipes.len();
        recipes.retain(|r| !r.name_matches(name));
        let removed = before - recipes.len();
        if removed == 0 {
            return Err(name_not_found(name));
        }
        tracing::debug!(recipe = %name, removed, "recipes deleted by name");
        self.persist(recipes).await
    }

    async fn persist(&self, recipes: &[Recipe]) -> Result<(), StoreError> {
        file::write_collection(&self.path, recipes).await.map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "error writing recipe file");
            e
        })
    }
}
