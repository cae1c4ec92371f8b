//! Loaded textures keyed by name.
//!
//! Textures are loaded once at startup and unloaded when the store is
//! dropped, which must happen before the window closes.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{RaylibHandle, RaylibThread, Texture2D, Vector2};
use rustc_hash::FxHashMap;

#[derive(Resource, Default)]
pub struct TextureStore {
    map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.map.insert(key.into(), texture);
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&Texture2D> {
        self.map.get(key.as_ref())
    }

    /// Texture dimensions in pixels, if loaded.
    pub fn size(&self, key: impl AsRef<str>) -> Option<Vector2> {
        self.get(key).map(|tex| Vector2 {
            x: tex.width as f32,
            y: tex.height as f32,
        })
    }

    /// Load every `(key, path)` pair. A texture that fails to load is left
    /// out of the store and its entities are simply not drawn.
    pub fn load_all(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        entries: &[(&str, &str)],
    ) -> Self {
        let mut store = Self::new();
        for (key, path) in entries {
            let texture = match rl.load_texture(thread, path) {
                Ok(texture) => texture,
                Err(e) => {
                    log::warn!("Failed to load texture '{}' from {}: {}", key, path, e);
                    continue;
                }
            };
            log::debug!(
                "Loaded texture '{}' ({}x{}) from {}",
                key,
                texture.width,
                texture.height,
                path
            );
            store.insert(*key, texture);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
