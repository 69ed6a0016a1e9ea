//! # Ladle Architecture
//!
//! Ladle is a **UI-agnostic recipe catalog library**. The CLI binary is a
//! thin client; everything from the API facade inward takes regular Rust
//! arguments, returns regular Rust types, and never touches
//! stdout/stderr or `std::process::exit`.
//!
//! ## The layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs + main.rs)                              │
//! │  - Parses arguments, formats output, handles exit codes     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result<CmdResult> values              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, pure business logic            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecipeStore owns the collection and its invariants       │
//! │  - StoreBackend trait: FileBackend / MemoryBackend          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key invariants
//!
//! - Recipe titles are unique per catalog by normalized (trimmed,
//!   lowercased) form; all lookups go through that form.
//! - The catalog persists as a single JSON array; saves are atomic
//!   (temp file + rename) and failed operations leave both the
//!   in-memory collection and the file unchanged.
//! - A corrupt catalog file fails loading loudly; it is never silently
//!   reinitialized or overwritten.
//!
//! ## Testing strategy
//!
//! Commands and the store carry the bulk of the unit tests, running
//! against `MemoryBackend`. `FileBackend` has its own filesystem tests
//! on temp directories, and `tests/` exercises the binary end to end.
//!
//! ## Module overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The `Recipe` record and title normalization
//! - [`config`]: Per-catalog configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
