//! # Core Application Logic
//!
//! This module contains YoCode's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (entries)    │
//!                    │  • Filter (selection)   │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │  Settings  │
//!     │  Adapter   │                          │   Store    │
//!     │ (ratatui)  │                          │  (toml)    │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: `LanguageEntry` and the immutable `Catalog`
//! - [`filter`]: text and difficulty selection over the catalog
//! - [`state`]: The `App` struct: all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`navigation`]: drawer destinations and dialog choices
//! - [`settings`]: theme/language values and their store
//! - [`config`]: config file loading and resolution
//! - [`i18n`]: locale resolution and UI strings

pub mod action;
pub mod catalog;
pub mod config;
pub mod filter;
pub mod i18n;
pub mod navigation;
pub mod settings;
pub mod state;
