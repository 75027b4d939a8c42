use std::time::Duration;

use anyhow::Context;
use lewis_client::ApiSearch;
use lewis_core::entities::SearchHit;
use lewis_feed::{Resource, SearchDebouncer, SearchSnapshot};
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SearchResponse<'a> {
    query: &'a str,
    items: &'a [SearchHit],
}

/// Handle `lws search`.
pub async fn handle(
    args: &SearchArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(None, flags.limit, ctx.config.listing.search_limit);
    if args.watch {
        return watch(ctx, flags, limit).await;
    }

    let query = args.query.as_deref().unwrap_or_default();
    let items = ctx
        .client
        .search(query, limit)
        .await
        .with_context(|| format!("search for '{query}' failed"))?;
    output(&SearchResponse { query, items: &items }, flags.format)
}

/// Feed stdin lines through the debouncer, printing each settled result.
///
/// Each line stands for the current contents of a search box, so bursts of
/// lines faster than the debounce delay produce a single request.
async fn watch(ctx: &AppContext, flags: &GlobalFlags, limit: u32) -> anyhow::Result<()> {
    let delay = ctx.config.listing.debounce();
    let source = ApiSearch::new(ctx.client.clone(), limit).shared();
    let mut debouncer = SearchDebouncer::new(source, delay);
    let mut results = debouncer.subscribe();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                debouncer.input(&line);
            }
            changed = results.changed() => {
                changed?;
                let snapshot = results.borrow_and_update().clone();
                print_snapshot(&snapshot, flags)?;
            }
        }
    }

    // Input closed: let the last pending search settle before exiting.
    tokio::time::sleep(delay + Duration::from_millis(10)).await;
    let mut unseen = results.has_changed()?;
    loop {
        if unseen {
            let snapshot = results.borrow_and_update().clone();
            print_snapshot(&snapshot, flags)?;
        }
        if !results.borrow().results.is_loading() && !results.has_changed()? {
            break;
        }
        results.changed().await?;
        unseen = true;
    }
    Ok(())
}

/// Print a published state under the query that produced it.
fn print_snapshot(snapshot: &SearchSnapshot<SearchHit>, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = snapshot.query.as_str();
    match &snapshot.results {
        Resource::Idle => Ok(()),
        Resource::Loading => {
            if !flags.quiet {
                eprintln!("searching '{query}'…");
            }
            Ok(())
        }
        Resource::Ready(items) => output(&SearchResponse { query, items }, flags.format),
        Resource::Failed(message) => {
            eprintln!("search for '{query}' failed: {message}");
            Ok(())
        }
    }
}
