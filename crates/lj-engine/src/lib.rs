//! # lj-engine — Draw Engine for the Lucky Jewels promotion
//!
//! Runs tiered prize draws over registered participants with per-category
//! winner caps, fresh eligibility resolution, and atomic state commits.
//!
//! ## Features
//!
//! - **Registration**: duplicate screening and unique ticket assignment
//! - **Tiered Draws**: uniform random selection with per-category caps
//! - **Atomic Commits**: winner ledger append and status flip land together
//! - **Statistics & Export**: dashboard counts and CSV projection
//! - **Reveal Timing**: Normal, Turbo, Instant presentation profiles
//!
//! ## Architecture
//!
//! ```text
//! DrawEngine
//!     │
//!     ├── PrizeCatalog (categories × caps)
//!     ├── ParticipantStore / WinnerLedger (lj-state)
//!     └── RevealTiming (presentation schedule)
//!           │
//!           v
//!     conduct_draw → WinnerRecord
//! ```

pub mod catalog;
pub mod eligibility;
pub mod engine;
pub mod export;
pub mod stats;
pub mod timing;

pub use catalog::*;
pub use eligibility::*;
pub use engine::*;
pub use export::*;
pub use stats::*;
pub use timing::*;
