use serde::{Deserialize, Serialize};

/// Elm-like command definitions
///
/// Commands describe side effects for the runtime to execute; the update
/// function itself stays pure. With no network or persistence in this
/// application the surface is small: rendering and logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    /// Request a render; coalesced by the runtime to the frame rate
    RequestRender,

    // Logging related
    LogError { message: String },
    LogInfo { message: String },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}
