//! Message types for component state (TEA pattern)

use serde::{Deserialize, Serialize};

/// All possible messages a rendered widget can emit.
///
/// Hosts attach these to hit regions (see [`crate::tree::Container::on_tap`])
/// and feed them back into the owning component's update function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// The info affordance in a header was tapped
    InfoTapped,
}
