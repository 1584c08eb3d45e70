//! API request handlers.

/// Model relay, mock and health-probe handlers.
pub mod ai;
/// Static status handlers.
pub mod status;
