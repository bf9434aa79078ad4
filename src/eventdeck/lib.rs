//! # Eventdeck Architecture
//!
//! Eventdeck keeps the data behind an event-management dashboard (ticket
//! types, coupons, sponsors, agenda activities) as **persisted collections**:
//! ordered lists of uniquely identified records, written through to a
//! key-value store on every change and seeded with demo data on first use.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Dispatches on the collection kind                        │
//! │  - Normalizes inputs (ids, key=value fields → typed drafts) │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per operation, returns CmdResult            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Collection<T, B>: CRUD with write-through                │
//! │  - StorageBackend port: FsBackend, MemBackend               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward, code never prints and never exits; it logs through
//! `tracing` and returns [`error::Result`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`store`]: Storage port, backends and the generic [`store::Collection`]
//! - [`model`]: The [`model::Record`] trait and the four record types
//! - [`config`]: Configuration stored next to the data
//! - [`logging`]: Subscriber setup for the binary
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;
