//! # Core Application Logic
//!
//! Navigation, state and localization for LogoApp.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Controller (effects) │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  Console   │      │   Store    │
//!     │  Adapter   │      │ (legacy)   │      │  (SQLite)  │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct and the `View` enum
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`controller`]: Runs reducer effects against a `RecordStore`
//! - [`i18n`]: Polish/English display strings
//! - [`config`]: `~/.logoapp/config.toml` loading and resolution

pub mod action;
pub mod config;
pub mod controller;
pub mod i18n;
pub mod state;
