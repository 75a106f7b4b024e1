use super::{Idea, Member, Notification, Post};
use serde::{Deserialize, Serialize};

///
/// Whole-state snapshot exchanged with the persistence collaborator.
/// The host serializes it to its key-value store after every mutation
/// and hands it back on startup; the engine itself performs no I/O.
///
/// Collections absent from older snapshots default to empty so the
/// shape stays forward-compatible.
///
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub ideas: Vec<Idea>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

impl StateSnapshot {
    ///
    /// Parse a persisted snapshot. A blob that fails to parse as a
    /// whole is logged and treated as no prior state.
    ///
    pub fn decode(blob: &str) -> Self {
        match serde_json::from_str(blob) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::error!(%err, "state recovery failed, starting cold");
                Self::default()
            }
        }
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
