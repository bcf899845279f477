//! Personal dashboard: todos, workout tracking, a bookshelf and a project
//! list, each kept in local key-value storage.

pub mod app;
pub mod calendar;
pub mod collection;
pub mod env;
pub mod models;
pub mod pages;
pub mod routines;
pub mod storage;
pub mod theme;
pub mod workout;

pub use app::{DashboardApp, Page};
pub use storage::{FileStore, KeyValueStore, MemoryStore, Store};
