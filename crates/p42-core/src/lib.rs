//! # p42-core - Core Domain Types
//!
//! Foundation crate for P42 widgets. Provides the domain enumerations, the
//! color and icon vocabulary, the state/status encoding table, error handling
//! and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, toml, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`TrendState`] - Directional change (Up, Down, Neutral, None)
//! - [`AlertStatus`] - Severity classification (Alert, Warning, Normal, None)
//! - [`BadgeContent`] - Text or icon shown inside a badge
//! - [`FunnelItem`] - One row of a funnel card
//!
//! ### Visual Vocabulary (`color`, `icon`)
//! - [`Color`] - RGB values plus semantic colors and the `Clear` sentinel
//! - [`IconId`] - Named icon reference resolved by the host
//!
//! ### Encoding (`encoding`)
//! - [`icon_for()`], [`color_for()`] - TrendState to icon/color
//! - [`foreground_for()`], [`background_for()`] - AlertStatus to color pair
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum for configuration and I/O
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use p42_core::prelude::*;
//! ```

pub mod color;
pub mod encoding;
pub mod error;
pub mod icon;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all P42 crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use color::Color;
pub use encoding::{
    background_for, color_for, encode_state, encode_status, foreground_for, icon_for,
    StateEncoding, StatusEncoding,
};
pub use error::{Error, Result, ResultExt};
pub use icon::IconId;
pub use types::{AlertStatus, BadgeContent, FunnelItem, TrendState};
