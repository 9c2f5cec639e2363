//! Article and topic list controllers driven end to end over HTTP.

mod common;

use common::*;
use desk_sdk::state::{ListPhase, ListTexts};
use desk_sdk::DeskConfig;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn texts() -> ListTexts {
    ListTexts::new("No articles", "Something went wrong").with_network_error_text("You are offline")
}

async fn mount_article_page(server: &MockServer, page: u32, ids: &[u64], has_next: bool) {
    let entries = ids
        .iter()
        .map(|id| article_json(*id, &format!("Article {}", id)))
        .collect();
    Mock::given(method("GET"))
        .and(path("/api/v2/articles"))
        .and(query_param("page", page.to_string().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(entries, page, has_next)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_article_list_pages_through_results() {
    let server = MockServer::start().await;
    mount_article_page(&server, 1, &[1, 2, 3], true).await;
    mount_article_page(&server, 2, &[4, 5], false).await;

    let desk = uncached_desk(test_config(&server));
    let mut list = desk.article_list(texts());
    list.load_articles(7, 0);
    assert!(list.state().is_progress_visible());
    list.settle().await;

    assert_eq!(list.state().phase(), ListPhase::Loaded);
    assert_eq!(list.state().items().len(), 3);
    assert!(list.state().has_next_page());

    // Scrolling to the bottom requests page two.
    assert!(list.on_scroll(0, 3));
    list.settle().await;

    let subjects: Vec<&str> = list
        .state()
        .items()
        .iter()
        .map(|a| a.subject.as_str())
        .collect();
    assert_eq!(
        subjects,
        vec!["Article 1", "Article 2", "Article 3", "Article 4", "Article 5"]
    );
    assert_eq!(list.state().current_page(), 2);
    assert!(!list.state().has_next_page());
    assert!(!list.load_next_page());
}

#[tokio::test]
async fn test_empty_first_page_shows_empty_text() {
    let server = MockServer::start().await;
    mount_article_page(&server, 1, &[], false).await;

    let desk = uncached_desk(test_config(&server));
    let mut list = desk.article_list(texts());
    list.load_articles(0, 0);
    list.settle().await;

    assert_eq!(list.state().phase(), ListPhase::Empty);
    let view = list.state().empty_view().unwrap();
    assert_eq!(view.text, "No articles");
    assert!(!view.is_error);
}

#[tokio::test]
async fn test_server_error_shows_error_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/articles/search"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})))
        .mount(&server)
        .await;

    let desk = uncached_desk(test_config(&server));
    let mut list = desk.article_list(texts());
    assert!(list.search_articles(0, 0, "refund"));
    list.settle().await;

    assert!(list.state().has_error());
    assert!(!list.state().is_list_visible());
    assert_eq!(list.state().empty_view().unwrap().text, "Something went wrong");
}

#[tokio::test]
async fn test_network_failure_shows_network_text() {
    let desk = uncached_desk(DeskConfig::new(unreachable_url(), TEST_TOKEN));

    let mut list = desk.article_list(texts());
    list.load_articles(0, 0);
    list.settle().await;

    let view = list.state().empty_view().unwrap();
    assert!(view.is_error);
    assert_eq!(view.text, "You are offline");
}

#[tokio::test]
async fn test_saved_state_restores_without_request() {
    let server = MockServer::start().await;
    mount_article_page(&server, 1, &[1, 2], true).await;

    let desk = uncached_desk(test_config(&server));
    let mut list = desk.article_list(texts());
    list.load_articles(7, 0);
    list.settle().await;
    let saved = list.save_json().unwrap();

    let mut restored = desk.article_list(texts());
    restored.restore_json(&saved).unwrap();
    restored.settle().await;

    assert_eq!(restored.state().items().len(), 2);
    assert_eq!(restored.state().current_page(), 1);
    assert!(restored.state().has_next_page());
    assert_eq!(restored.state().query().topic_id, 7);
    assert_eq!(server.received_requests().await.unwrap_or_default().len(), 1);
}

#[tokio::test]
async fn test_topic_list_loads_everything_at_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/topics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "_links": {"next": {"href": "/api/v2/topics?page=2"}},
            "_embedded": {"entries": [topic_json(1, "Billing"), topic_json(2, "Shipping")]}
        })))
        .mount(&server)
        .await;

    let desk = uncached_desk(test_config(&server));
    let mut topics = desk.topic_list(ListTexts::new("No topics", "Failed"));
    topics.load_topics(0);
    topics.settle().await;

    assert_eq!(topics.state().items().len(), 2);
    assert!(!topics.state().has_next_page());
    assert!(!topics.load_next_page());
}
