//! # todo Architecture
//!
//! todo is a **UI-agnostic task-list library** with a thin CLI client on top.
//! The interesting part of the domain is the recurrence engine: weekly,
//! monthly and yearly schedules with end-of-month clamping, a catch-up loop
//! for days the tool was never run, and a once-per-calendar-day refresh that
//! wakes `Waiting` items back up.
//!
//! ## The Layers
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                             │
//! │  - Parses arguments, formats output, handles exit codes    │
//! │  - The ONLY place that knows about stdout/stderr           │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                        │
//! │  - Thin facade: load the db, run one command, save the db  │
//! │  - Returns structured Result types                         │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                             │
//! │  - Pure business logic over the in-memory TodoDb           │
//! │  - No I/O assumptions whatsoever                           │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                    │
//! │  - Abstract DataStore trait                                │
//! │  - FileStore (production), InMemoryStore (testing)         │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never calls
//! `std::process::exit`, and never assumes a terminal. The wall clock is
//! injected: every entry point that cares about "today" takes a
//! `chrono::NaiveDate` argument, so the schedule logic is fully testable.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`dates`]: Calendar arithmetic (`YYYY-MM-DD` parsing, month-end math)
//! - [`recur`]: The recurrence engine (next-occurrence catch-up loop)
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`TodoItem`, `TodoDb`, status/period enums)
//! - [`config`]: Configuration management (where the db file lives)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod dates;
pub mod error;
pub mod model;
pub mod recur;
pub mod store;
