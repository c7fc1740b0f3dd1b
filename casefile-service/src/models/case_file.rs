use serde::{Deserialize, Serialize};

/// Scenario description for one round of the game.
///
/// Case files are generated upstream and held by the client; the service only
/// reads them back out of action payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseFile {
    #[serde(default)]
    pub title: String,
    /// Background complaint shown to the player.
    pub noise: String,
    /// Hidden answer the player is probing for.
    pub signal: Signal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    pub root_cause: String,
    pub goal: String,
}
