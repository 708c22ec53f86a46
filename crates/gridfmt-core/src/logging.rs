//! Logging facade.
//!
//! Library crates log through these re-exports so that the `tracing`
//! dependency stays optional: with the feature disabled the macros are
//! absent and call sites are compiled out behind `#[cfg(feature = "tracing")]`.
//! Installing a subscriber is left to the binary.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, error, info, trace, trace_span, warn};

/// Target used by every gridfmt span and event.
pub const LOG_TARGET: &str = "gridfmt";

/// Default filter directive when the host does not configure one.
pub const DEFAULT_FILTER: &str = "warn";
