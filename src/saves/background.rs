//! Save I/O off the caller's thread.
//!
//! Each call runs the matching [`SaveStore`] method on tokio's blocking pool.
//! Calls are not ordered against each other; callers that may save the same game
//! and category concurrently (autosave racing a manual save) must serialize those
//! calls themselves. Dropping a future does not stop a write already started.

use std::sync::Arc;

use crate::directories::DirectoriesProvider;
use crate::error::{Result, SaveError};
use crate::game::GameIdentity;

use super::store::SaveStore;
use super::types::{SaveCategory, SaveSlotInfo};

pub struct AsyncSaveStore<D> {
    inner: Arc<SaveStore<D>>,
}

impl<D> Clone for AsyncSaveStore<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<D> From<SaveStore<D>> for AsyncSaveStore<D> {
    fn from(store: SaveStore<D>) -> Self {
        Self {
            inner: Arc::new(store),
        }
    }
}

impl<D> AsyncSaveStore<D>
where
    D: DirectoriesProvider + Send + Sync + 'static,
{
    pub fn new(store: SaveStore<D>) -> Self {
        store.into()
    }

    pub fn blocking(&self) -> &SaveStore<D> {
        &self.inner
    }

    async fn run<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&SaveStore<D>) -> Result<T> + Send + 'static,
    {
        let store = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || f(&store))
            .await
            .map_err(|e| SaveError::Background(e.to_string()))?
    }

    pub async fn read_ram<G>(&self, game: &G) -> Result<Option<Vec<u8>>>
    where
        G: GameIdentity + Clone + Send + 'static,
    {
        let game = game.clone();
        self.run(move |store| store.read_ram(&game)).await
    }

    pub async fn write_ram<G>(&self, game: &G, data: Vec<u8>) -> Result<()>
    where
        G: GameIdentity + Clone + Send + 'static,
    {
        let game = game.clone();
        self.run(move |store| store.write_ram(&game, &data)).await
    }

    pub async fn read_state<G>(
        &self,
        game: &G,
        core_name: &str,
        category: SaveCategory,
    ) -> Result<Option<Vec<u8>>>
    where
        G: GameIdentity + Clone + Send + 'static,
    {
        let game = game.clone();
        let core_name = core_name.to_string();
        self.run(move |store| store.read_state(&game, &core_name, category))
            .await
    }

    pub async fn write_state<G>(
        &self,
        game: &G,
        core_name: &str,
        category: SaveCategory,
        data: Vec<u8>,
    ) -> Result<()>
    where
        G: GameIdentity + Clone + Send + 'static,
    {
        let game = game.clone();
        let core_name = core_name.to_string();
        self.run(move |store| store.write_state(&game, &core_name, category, &data))
            .await
    }

    pub async fn list_slot_info<G>(&self, game: &G, core_name: &str) -> Result<Vec<SaveSlotInfo>>
    where
        G: GameIdentity + Clone + Send + 'static,
    {
        let game = game.clone();
        let core_name = core_name.to_string();
        self.run(move |store| store.list_slot_info(&game, &core_name))
            .await
    }
}
