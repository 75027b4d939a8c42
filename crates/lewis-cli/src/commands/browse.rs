use lewis_client::{ApiError, ApiListing};
use lewis_feed::{Paginator, Sortable};
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::BrowseArgs;
use crate::commands::get;
use crate::commands::listing::build_filters;
use crate::commands::shared::records::{ListingRecord, with_record};
use crate::context::AppContext;
use crate::output::output;

const HELP: &str = "n next page · p previous page · r retry · \
                    /text search (/ clears) · o ID open · q quit";

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum BrowseCommand {
    Next,
    Previous,
    Retry,
    Search(String),
    Open(String),
    Quit,
    Help,
}

fn parse_command(line: &str) -> BrowseCommand {
    let line = line.trim();
    if let Some(text) = line.strip_prefix('/') {
        return BrowseCommand::Search(text.trim().to_string());
    }
    match line.split_once(char::is_whitespace) {
        Some(("o" | "open", id)) if !id.trim().is_empty() => {
            BrowseCommand::Open(id.trim().to_string())
        }
        _ => match line {
            "n" | "next" | "" => BrowseCommand::Next,
            "p" | "prev" | "previous" => BrowseCommand::Previous,
            "r" | "retry" => BrowseCommand::Retry,
            "q" | "quit" | "exit" => BrowseCommand::Quit,
            _ => BrowseCommand::Help,
        },
    }
}

#[derive(Debug, Serialize)]
struct PageView<'a, T> {
    page: usize,
    items: &'a [T],
    has_next: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<&'a str>,
}

/// Handle `lws browse`.
pub async fn handle(
    args: &BrowseArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    with_record!(args.kind, run(args, ctx, flags))
}

async fn run<T>(args: &BrowseArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()>
where
    T: ListingRecord + Sortable<T::Column>,
{
    let filters = build_filters(
        T::KIND,
        ctx.page_size(flags.limit),
        args.query.as_deref(),
        args.tag.as_deref(),
        args.category.as_deref(),
    );
    let mut pager = Paginator::new(ApiListing::<T>::new(ctx.client.clone(), T::KIND), filters);

    match pager.load().await {
        Ok(()) => show(&pager, flags)?,
        Err(error) => notice(flags, &format!("{error} (r to retry)")),
    }
    notice(flags, HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let outcome = match parse_command(&line) {
            BrowseCommand::Quit => break,
            BrowseCommand::Help => {
                notice(flags, HELP);
                continue;
            }
            BrowseCommand::Open(id) => {
                if let Err(error) = get::show::<T>(&id, ctx, flags).await {
                    notice(flags, &format!("{error:#}"));
                }
                continue;
            }
            BrowseCommand::Next => pager
                .next()
                .await
                .map(|moved| moved.then_some(()).ok_or("already on the last page")),
            BrowseCommand::Previous => pager
                .previous()
                .await
                .map(|moved| moved.then_some(()).ok_or("already on the first page")),
            BrowseCommand::Retry if pager.is_loaded() => pager.retry().await.map(Ok),
            BrowseCommand::Retry => pager.load().await.map(Ok),
            BrowseCommand::Search(text) => {
                if !T::KIND.supports_query() {
                    notice(flags, &format!("{} has no free-text search", T::KIND));
                    continue;
                }
                let filters = pager.filters().clone().query(text);
                pager
                    .set_filters(filters)
                    .await
                    .map(|changed| changed.then_some(()).ok_or("search unchanged"))
            }
        };
        report(outcome, &pager, flags)?;
    }
    Ok(())
}

fn report<T>(
    outcome: Result<Result<(), &str>, ApiError>,
    pager: &Paginator<ApiListing<T>>,
    flags: &GlobalFlags,
) -> anyhow::Result<()>
where
    T: ListingRecord,
{
    match outcome {
        Ok(Ok(())) => show(pager, flags),
        Ok(Err(message)) => {
            notice(flags, message);
            Ok(())
        }
        Err(error) => {
            let hint = if error.is_transient() { " (r to retry)" } else { "" };
            notice(flags, &format!("{error}{hint}"));
            Ok(())
        }
    }
}

fn show<T: ListingRecord>(
    pager: &Paginator<ApiListing<T>>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    output(
        &PageView {
            page: pager.page_number(),
            items: pager.items(),
            has_next: pager.has_next(),
            query: pager.filters().query.as_deref(),
        },
        flags.format,
    )
}

fn notice(flags: &GlobalFlags, message: &str) {
    if !flags.quiet {
        eprintln!("{message}");
    }
}
