//! The `Desk` composition root.
//!
//! One `Desk` per configured deployment. It owns the shared HTTP client
//! (a [`CachedHttpClient`] over [`ReqwestHttpClient`]) and hands out
//! providers, list controllers and contact forms wired to it.

use std::sync::Arc;

use tracing::{debug, info};

use crate::adapters::{CachedHttpClient, ReqwestHttpClient};
use crate::api::DeskClient;
use crate::config::DeskConfig;
use crate::error::{DeskResult, ErrorContext, ErrorResponse, FormError, ResultExt};
use crate::models::Case;
use crate::providers::{ArticleProvider, CaseProvider, InboundMailboxProvider, TopicProvider};
use crate::state::{ArticleListController, ContactUsForm, ListTexts, TopicListController};
use crate::traits::HttpClient;

pub struct Desk {
    config: DeskConfig,
    http: Arc<dyn HttpClient>,
    client: Arc<DeskClient>,
}

impl Desk {
    /// Build a `Desk` with the production HTTP stack and its response cache.
    pub fn new(config: DeskConfig) -> Self {
        let http: Arc<dyn HttpClient> = Arc::new(CachedHttpClient::new(Arc::new(ReqwestHttpClient::new())));
        Self::with_http_client(config, http)
    }

    /// Build a `Desk` over any [`HttpClient`].
    pub fn with_http_client(config: DeskConfig, http: Arc<dyn HttpClient>) -> Self {
        let client = Arc::new(DeskClient::from_config(&config, Arc::clone(&http)));
        info!("Desk ready for {}", client.base_url());
        Self {
            config,
            http,
            client,
        }
    }

    /// Override the language sent with content requests.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.client = Arc::new(
            DeskClient::from_config(&self.config, Arc::clone(&self.http)).with_language(language),
        );
        self
    }

    pub fn config(&self) -> &DeskConfig {
        &self.config
    }

    pub fn client(&self) -> Arc<DeskClient> {
        Arc::clone(&self.client)
    }

    pub fn article_provider(&self) -> ArticleProvider {
        ArticleProvider::new(self.client())
    }

    pub fn topic_provider(&self) -> TopicProvider {
        TopicProvider::new(self.client())
    }

    pub fn case_provider(&self) -> CaseProvider {
        CaseProvider::new(self.client())
    }

    pub fn mailbox_provider(&self) -> InboundMailboxProvider {
        InboundMailboxProvider::new(self.client())
    }

    pub fn article_list(&self, texts: ListTexts) -> ArticleListController {
        ArticleListController::new(self.article_provider(), texts)
    }

    pub fn topic_list(&self, texts: ListTexts) -> TopicListController {
        TopicListController::new(self.topic_provider(), texts)
    }

    /// A contact form using the brand's contact-us options.
    pub fn contact_form(&self, brand_id: u64) -> ContactUsForm {
        ContactUsForm::new(self.config.contact_us(brand_id))
    }

    /// Where contact-us cases go: the configured address for the brand, or
    /// the first enabled inbound mailbox.
    pub async fn contact_recipient(&self, brand_id: u64) -> Result<Option<String>, ErrorResponse> {
        if let Some(address) = self.config.contact_us(brand_id).email_address {
            return Ok(Some(address));
        }
        debug!("No contact address configured for brand {}, asking mailboxes", brand_id);
        self.mailbox_provider().find_enabled_address().await
    }

    /// Validate `form`, resolve the recipient and create the case.
    pub async fn submit_contact(&self, form: &ContactUsForm, brand_id: u64) -> DeskResult<Case> {
        if !form.is_form_valid() {
            return Err(FormError::Incomplete {
                missing: form.missing_fields(),
            }
            .into());
        }

        let to = self
            .contact_recipient(brand_id)
            .await
            .with_context(|| ErrorContext::new("contact_recipient").with_brand_id(brand_id))?
            .ok_or(FormError::NoRecipient)?;

        let request = form.create_case_request(&to)?;
        self.case_provider()
            .create_case(&request)
            .await
            .with_context(|| ErrorContext::new("create_case").with_brand_id(brand_id))
    }

    /// Tear down. Outstanding requests finish on their own; their results
    /// go nowhere once the controllers are gone.
    pub fn release(self) {
        info!("Releasing desk for {}", self.client.base_url());
    }
}
