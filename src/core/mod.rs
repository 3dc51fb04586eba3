//! # Core Application Logic
//!
//! The navigation state machine. It knows nothing about any specific UI
//! technology or HTTP client.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Navigator (state)    │
//!                    │  • Key (input)          │
//!                    │  • update() (dispatch)  │
//!                    │                         │
//!                    │  No rendering. No HTTP. │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │  Catalog   │
//!     │  Adapter   │                          │  Provider  │
//!     │ (ratatui)  │                          │ (reqwest)  │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `Navigator` struct and its view transitions
//! - [`action`]: `update()` maps a key press to a transition and an `Effect`
//! - [`key`]: The `Key` enum and the `KeySource` input capability
//! - [`config`]: Config file and environment layering

pub mod action;
pub mod config;
pub mod key;
pub mod state;
