//! # Core Animation Logic
//!
//! Everything that decides *what* is on screen. It knows nothing about
//! timers, tokio, or terminals.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Typewriter (stepper) │
//!                    │  • Sequence (word list) │
//!                    │  • tick() → Tick        │
//!                    │                         │
//!                    │  No I/O. No clock. Pure.│
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │   driver   │      │    TUI     │      │   plain    │
//!     │  (tokio    │ ───▶ │  Adapter   │      │  stdout    │
//!     │  timers)   │      │ (ratatui)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`writer`]: the three-state `Typewriter` stepper
//! - [`sequence`]: cycles a `Typewriter` through a word list
//! - [`animation`]: the `Animation` trait both implement
//! - [`delay`]: fixed or ranged per-character delays
//! - [`options`]: timing options for both animations
//! - [`config`]: layered settings for the binary

pub mod animation;
pub mod config;
pub mod delay;
pub mod options;
pub mod sequence;
pub mod writer;
