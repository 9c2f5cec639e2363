use std::sync::Arc;

use tracing::info;

use crate::api::{DeskClient, CASES_PATH};
use crate::error::ErrorResponse;
use crate::models::{Case, CreateCaseRequest, NewCase};

/// Case creation for contact-us submissions.
#[derive(Clone)]
pub struct CaseProvider {
    client: Arc<DeskClient>,
}

impl CaseProvider {
    pub fn new(client: Arc<DeskClient>) -> Self {
        Self { client }
    }

    /// Open a case with one inbound message built from `request`.
    ///
    /// A 2xx reply without a body yields an empty [`Case`].
    pub async fn create_case(&self, request: &CreateCaseRequest) -> Result<Case, ErrorResponse> {
        let body = NewCase::from(request);
        let case: Case = self
            .client
            .post_json(CASES_PATH, &body)
            .await?
            .unwrap_or_default();
        info!("Created case {:?}", case.resource_id());
        Ok(case)
    }
}
