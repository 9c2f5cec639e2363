use serde::{Deserialize, Serialize};

use super::{deserialize_optional_id, ResourceLinks};

/// An inbound mailbox. Only enabled mailboxes with an address are usable as
/// a contact recipient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mailbox {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(rename = "_links", default)]
    pub links: ResourceLinks,
}

impl Mailbox {
    /// The address to send cases to, if this mailbox can receive them.
    pub fn usable_address(&self) -> Option<&str> {
        if !self.enabled {
            return None;
        }
        self.email.as_deref().map(str::trim).filter(|e| !e.is_empty())
    }
}
