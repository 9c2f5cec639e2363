//! Command handlers. Each one drives the SDK the way a host UI would and
//! prints what the UI would render.

use color_eyre::eyre::{eyre, Result};

use crate::config::ContactUsConfig;
use crate::models::{Article, Topic};
use crate::state::{ArticleListController, ListState, ListTexts, TopicListController};
use crate::Desk;

/// Rows a terminal "screen" shows when paging through results.
const SCREEN_ROWS: usize = 10;

pub async fn run_topics(desk: &Desk, brand_id: u64) -> Result<()> {
    let mut list: TopicListController =
        desk.topic_list(ListTexts::new("No topics.", "Could not load topics."));
    list.load_topics(brand_id);
    list.settle().await;

    print_state(list.state(), format_topic)
}

pub async fn run_articles(desk: &Desk, topic_id: u64, brand_id: u64, pages: u32) -> Result<()> {
    let mut list = desk.article_list(article_texts());
    list.load_articles(topic_id, brand_id);
    page_through(&mut list, pages).await;

    print_state(list.state(), format_article)
}

pub async fn run_search(
    desk: &Desk,
    query: &str,
    topic_id: u64,
    brand_id: u64,
    pages: u32,
) -> Result<()> {
    let mut list = desk.article_list(ListTexts::new(
        format!("No articles match \"{}\".", query),
        "Search failed.",
    ));
    if !list.search_articles(topic_id, brand_id, query) {
        return Err(eyre!("search text is empty"));
    }
    page_through(&mut list, pages).await;

    print_state(list.state(), format_article)
}

pub async fn run_contact(
    desk: &Desk,
    email: &str,
    feedback: &str,
    subject: Option<&str>,
    name: Option<&str>,
    brand_id: u64,
) -> Result<()> {
    let options = desk.config().contact_us(brand_id);
    ensure_web_form(&options)?;

    let mut form = desk.contact_form(brand_id);
    form.set_email(email);
    form.set_feedback(feedback);
    if let Some(subject) = subject {
        form.set_subject(subject);
    }
    if let Some(name) = name {
        form.set_name(name);
    }

    let case = desk.submit_contact(&form, brand_id).await.map_err(|e| {
        eyre!("{} ({}: {})", e, e.error_code(), e.recovery_hint())
    })?;
    match case.resource_id() {
        Some(id) => println!("Created case #{}", id),
        None => println!("Case submitted"),
    }
    if let Some(line) = call_line(&options) {
        println!("{}", line);
    }
    Ok(())
}

/// Refuse to submit when the brand has the web form switched off.
fn ensure_web_form(options: &ContactUsConfig) -> Result<()> {
    if options.web_form_enabled {
        return Ok(());
    }
    match call_line(options) {
        Some(line) => Err(eyre!("the contact form is disabled for this brand. {}", line)),
        None => Err(eyre!("the contact form is disabled for this brand")),
    }
}

fn call_line(options: &ContactUsConfig) -> Option<String> {
    if !options.can_call() {
        return None;
    }
    options
        .phone_number
        .as_deref()
        .map(|phone| format!("Call us at {}", phone.trim()))
}

fn article_texts() -> ListTexts {
    ListTexts::new("No articles.", "Could not load articles.")
        .with_network_error_text("Could not reach the help desk. Check your connection.")
}

/// Scroll to the end of the list until `pages` pages are loaded or there are
/// no more.
async fn page_through(list: &mut ArticleListController, pages: u32) {
    list.settle().await;
    while list.state().current_page() < pages {
        let total = list.state().items().len();
        let first_visible = total.saturating_sub(SCREEN_ROWS);
        if !list.on_scroll(first_visible, SCREEN_ROWS) && !list.load_next_page() {
            break;
        }
        list.settle().await;
    }
}

fn print_state<T>(state: &ListState<T>, format: fn(usize, &T) -> String) -> Result<()> {
    if let Some(view) = state.empty_view() {
        if view.is_error {
            return Err(eyre!("{}", view.text));
        }
        println!("{}", view.text);
        return Ok(());
    }

    for (index, item) in state.items().iter().enumerate() {
        println!("{}", format(index, item));
    }
    if state.has_next_page() {
        println!("... more available (use --pages)");
    }
    Ok(())
}

fn format_topic(index: usize, topic: &Topic) -> String {
    match topic.resource_id() {
        Some(id) => format!("{:>3}. {} [topic {}]", index + 1, topic.name, id),
        None => format!("{:>3}. {}", index + 1, topic.name),
    }
}

fn format_article(index: usize, article: &Article) -> String {
    let mut line = format!("{:>3}. {}", index + 1, article.subject);
    if let Some(url) = &article.public_url {
        line.push_str(&format!("  <{}>", url));
    }
    line
}
