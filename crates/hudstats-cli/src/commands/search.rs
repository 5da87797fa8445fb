//! Player-name suggestions.

use std::sync::Arc;

use anyhow::Result;
use hudstats_core::{Notice, NoticeKind, NoticeSeverity, SearchSuggestions};
use owo_colors::OwoColorize;

use super::print_notice;
use crate::context::Context;

pub async fn run(ctx: &Context, queries: &[String]) -> Result<()> {
    let client = Arc::new(ctx.api_client()?);
    let mut search = SearchSuggestions::new(client);

    // Back-to-back keystrokes fall inside one quiet window
    for query in queries {
        search.on_query_change(query);
    }
    search.settle().await;

    if let Some(error) = search.last_error() {
        print_notice(&Notice::new(
            NoticeKind::FetchFailed,
            NoticeSeverity::Normal,
            format!("Could not load suggestions: {}", error),
        ));
    }

    let results = search.results();
    if results.is_empty() {
        println!("{}", format!("No players match {:?}", search.query()).dimmed());
    }
    for name in results {
        println!("{}", name);
    }
    Ok(())
}
