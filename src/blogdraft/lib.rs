//! # Blogdraft Architecture
//!
//! Blogdraft is a **UI-agnostic blog drafting library**. It covers writing a
//! post (field editing, validation, live metrics, tags, categories), saving it
//! locally, and browsing saved and sample posts. The bundled CLI is one client;
//! nothing below the API layer knows about terminals.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, owns the runtime       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands and editing sessions           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session + Commands (session.rs, commands/*.rs, draft/)     │
//! │  - Draft editing, validation, metrics, filtering            │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - PostStore trait: load() / append()                       │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Writing Flow
//!
//! Edits go through an [`session::EditingSession`], which recomputes
//! validation after each one. Submitting saves the post only when validation
//! passes; a successful save schedules a reset of the form after a short delay.
//! That delay is a cancellable [`deferred::Deferred`], tied to the session.
//!
//! ## Error Model
//!
//! - Missing required fields are data ([`draft::validation::ValidationErrors`]),
//!   not errors.
//! - Storage failures on save are logged and reported as
//!   [`commands::submit::SubmitOutcome::Failed`].
//! - Unreadable stored data loads as an empty list.
//! - [`error::BlogError`] covers the rest (I/O, bad input at the edges).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`session`]: Editing session lifecycle
//! - [`draft`]: Field store, validation, metrics, tags, categories
//! - [`commands`]: Explore, show, list, categories, config, submit
//! - [`store`]: Storage abstraction and implementations
//! - [`catalog`]: Built-in sample posts
//! - [`deferred`]: Cancellable delayed follow-ups
//! - [`model`]: Core data types (`Post`, `Author`, `ImageRef`)
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod deferred;
pub mod draft;
pub mod error;
pub mod init;
pub mod model;
pub mod session;
pub mod store;
