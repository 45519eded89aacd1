//! Article command handlers.

use anyhow::{Context, Result, bail};
use comfy_table::{ContentArrangement, Table};
use quire_app::features::form::DraftField;
use quire_app::{AppRuntime, UiEvent};
use quire_core::models::{Article, ArticleId};

use super::report_status;

/// Field overrides for `articles update`.
#[derive(Debug, Default)]
pub struct Changes {
    pub title: Option<String>,
    pub text: Option<String>,
    pub topic: Option<String>,
}

pub async fn list(mut runtime: AppRuntime) -> Result<()> {
    runtime.run(UiEvent::LoadArticles).await;
    report_status(&runtime.state)?;

    let articles = runtime.state.articles.items();
    if articles.is_empty() {
        println!("No articles found.");
    } else {
        println!("{}", render_table(articles));
    }
    Ok(())
}

pub async fn create(
    mut runtime: AppRuntime,
    title: String,
    text: String,
    topic: String,
) -> Result<()> {
    fill(&mut runtime, DraftField::Title, title);
    fill(&mut runtime, DraftField::Text, text);
    fill(&mut runtime, DraftField::Topic, topic);
    submit(&mut runtime).await
}

/// Loads the collection, selects `id` into the draft, applies `changes` and
/// submits.
pub async fn update(mut runtime: AppRuntime, id: ArticleId, changes: Changes) -> Result<()> {
    runtime.run(UiEvent::LoadArticles).await;
    if let Some(status) = runtime.state.status.as_ref().filter(|s| s.is_error()) {
        bail!("{}", status.text);
    }
    if runtime.state.articles.get(id).is_none() {
        bail!("Article {id} not found");
    }

    runtime.dispatch(UiEvent::EditArticle { id });
    let Changes { title, text, topic } = changes;
    for (field, value) in [
        (DraftField::Title, title),
        (DraftField::Text, text),
        (DraftField::Topic, topic),
    ] {
        if let Some(value) = value {
            fill(&mut runtime, field, value);
        }
    }
    submit(&mut runtime).await
}

pub async fn delete(mut runtime: AppRuntime, id: ArticleId) -> Result<()> {
    runtime.run(UiEvent::DeleteArticle { id }).await;
    report_status(&runtime.state)
}

fn fill(runtime: &mut AppRuntime, field: DraftField, value: String) {
    runtime.dispatch(UiEvent::DraftInput { field, value });
}

async fn submit(runtime: &mut AppRuntime) -> Result<()> {
    runtime
        .state
        .draft
        .validate()
        .context("Invalid article")?;
    runtime.run(UiEvent::SubmitDraft).await;
    report_status(&runtime.state)
}

fn render_table(articles: &[Article]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(["ID", "Topic", "Title", "Text"]);
    for article in articles {
        table.add_row([
            article.id.to_string(),
            article.topic.to_string(),
            article.title.clone(),
            article.text.clone(),
        ]);
    }
    table
}
