//! Ordered record lists persisted whole under a single storage key.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{Book, Project, Todo};
use crate::storage::{Store, KEY_BOOKS, KEY_PROJECTS, KEY_TODOS};

/// A record that lives in a [`Collection`].
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Storage key the whole list is saved under.
    const STORAGE_KEY: &'static str;

    fn id(&self) -> &str;
}

impl Record for Todo {
    const STORAGE_KEY: &'static str = KEY_TODOS;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Book {
    const STORAGE_KEY: &'static str = KEY_BOOKS;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Project {
    const STORAGE_KEY: &'static str = KEY_PROJECTS;

    fn id(&self) -> &str {
        &self.id
    }
}

/// In-memory list mirrored to storage after every mutation.
#[derive(Debug)]
pub struct Collection<T: Record> {
    store: Store,
    items: Vec<T>,
}

impl<T: Record> Collection<T> {
    pub fn load(store: Store) -> Self {
        let items: Vec<T> = store.load(T::STORAGE_KEY);
        tracing::debug!(key = T::STORAGE_KEY, count = items.len(), "loaded collection");
        Self { store, items }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Insert at the front; newest records list first.
    pub fn prepend(&mut self, item: T) {
        self.items.insert(0, item);
        self.persist();
    }

    /// Apply `edit` to the record with `id`. Returns false if there is none.
    pub fn update(&mut self, id: &str, edit: impl FnOnce(&mut T)) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id() == id) else {
            return false;
        };
        edit(item);
        self.persist();
        true
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        if self.items.len() == before {
            return false;
        }
        self.persist();
        true
    }

    fn persist(&self) {
        self.store.save(T::STORAGE_KEY, &self.items);
    }
}
