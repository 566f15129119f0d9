//! Version classification and upgrade recommendation
//!
//! This module classifies a package's current version into one of a fixed set
//! of versioning schemes and picks the latest and maintenance upgrades from a
//! list of upstream tags.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  TagFilter  │────▶│  Recommend  │────▶│   Scheme    │
//! │ (releases)  │     │  (facade)   │     │ (classify)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │                   │
//!                            ▼                   ▼
//!                     ┌─────────────┐     ┌─────────────┐
//!                     │    Clock    │     │   Compare   │
//!                     │   (today)   │     │(total order)│
//!                     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`clock`]: Injected source of today's date for the date-based matchers
//! - [`compare`]: Component splitting and the total order over version strings
//! - [`error`]: Error types for recommendation, config and batch input
//! - [`filter`]: Drops pre-release and vendor tags from candidate lists
//! - [`recommend`]: Facade that classifies and then recommends
//! - [`scheme`]: Versioning schemes, the ordered matcher table, latest/maintenance selection

pub mod clock;
pub mod compare;
pub mod error;
pub mod filter;
pub mod recommend;
pub mod scheme;
