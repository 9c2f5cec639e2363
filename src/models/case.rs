use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{deserialize_optional_id, ResourceLinks};

/// Case type used by contact-us submissions.
pub const EMAIL_CASE_TYPE: &str = "email";

/// Everything needed to open a case from a contact-us submission.
///
/// `case_type`, `body`, `to` and `from` are constructor arguments so a
/// request can never be built without them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCaseRequest {
    pub case_type: String,
    pub body: String,
    pub to: String,
    pub from: String,
    pub subject: Option<String>,
    pub name: Option<String>,
    pub custom_fields: HashMap<String, String>,
}

impl CreateCaseRequest {
    pub fn new(
        case_type: impl Into<String>,
        body: impl Into<String>,
        to: impl Into<String>,
        from: impl Into<String>,
    ) -> Self {
        Self {
            case_type: case_type.into(),
            body: body.into(),
            to: to.into(),
            from: from.into(),
            subject: None,
            name: None,
            custom_fields: HashMap::new(),
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_custom_fields(mut self, fields: HashMap<String, String>) -> Self {
        self.custom_fields = fields;
        self
    }

    /// Sender as it appears on the message: `Name <email>` when a name is known.
    pub fn sender(&self) -> String {
        match self.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => format!("{} <{}>", name, self.from),
            None => self.from.clone(),
        }
    }
}

/// Direction of a case message. Customer submissions are always inbound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageDirection {
    In,
    Out,
}

/// The message embedded in a case-creation body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseMessage {
    pub direction: MessageDirection,
    pub to: String,
    pub from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub body: String,
}

/// Wire body for `POST /api/v2/cases`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCase {
    #[serde(rename = "type")]
    pub case_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub custom_fields: HashMap<String, String>,
    pub message: CaseMessage,
}

impl From<&CreateCaseRequest> for NewCase {
    fn from(request: &CreateCaseRequest) -> Self {
        Self {
            case_type: request.case_type.clone(),
            subject: request.subject.clone(),
            custom_fields: request.custom_fields.clone(),
            message: CaseMessage {
                direction: MessageDirection::In,
                to: request.to.clone(),
                from: request.sender(),
                subject: request.subject.clone(),
                body: request.body.clone(),
            },
        }
    }
}

/// A case as returned by the API after creation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Case {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<u64>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(rename = "type", default)]
    pub case_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<u8>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "_links", default)]
    pub links: ResourceLinks,
}

impl Case {
    pub fn resource_id(&self) -> Option<u64> {
        self.id.or_else(|| self.links.self_id())
    }
}
