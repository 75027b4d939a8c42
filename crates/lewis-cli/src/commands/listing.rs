use anyhow::Context;
use lewis_client::ApiListing;
use lewis_core::{ListFilters, ListingKind};
use lewis_feed::{LocalTable, Paginator, SortState, Sortable};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::commands::shared::records::{ListingRecord, with_record};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ListingResponse<'a, T> {
    listing: ListingKind,
    page: usize,
    items: Vec<&'a T>,
    has_next: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    total: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort: Option<String>,
}

/// Handle `lws tokens|news|questions|guides`.
pub async fn handle(
    kind: ListingKind,
    args: &ListArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    with_record!(kind, run(args, ctx, flags))
}

/// Server-side filters from command arguments.
pub fn build_filters(
    kind: ListingKind,
    limit: u32,
    query: Option<&str>,
    tag: Option<&str>,
    category: Option<&str>,
) -> ListFilters {
    let mut filters = ListFilters::with_limit(limit);
    if let Some(query) = query {
        if kind.supports_query() {
            filters = filters.query(query);
        } else {
            tracing::warn!(listing = %kind, "listing has no free-text search; --query ignored");
        }
    }
    if let Some(tag) = tag {
        filters = filters.tag(tag);
    }
    if let Some(category) = category {
        filters = filters.category(category);
    }
    filters
}

fn sort_state<T: ListingRecord>(args: &ListArgs) -> anyhow::Result<Option<SortState<T::Column>>> {
    let Some(raw) = args.sort.as_deref() else {
        return Ok(None);
    };
    let column = raw.parse::<T::Column>()?;
    Ok(Some(if args.desc {
        SortState::descending(column)
    } else {
        SortState::new(column)
    }))
}

async fn run<T>(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()>
where
    T: ListingRecord + Sortable<T::Column>,
{
    let sort = sort_state::<T>(args)?;
    let filters = build_filters(
        T::KIND,
        ctx.page_size(flags.limit),
        args.query.as_deref(),
        args.tag.as_deref(),
        args.category.as_deref(),
    );

    let mut pager = Paginator::new(ApiListing::<T>::new(ctx.client.clone(), T::KIND), filters);
    pager
        .load()
        .await
        .with_context(|| format!("failed to load {}", T::KIND))?;

    let target = usize::try_from(args.page)?;
    while pager.page_number() < target {
        let next_page = pager.page_number() + 1;
        let moved = pager
            .next()
            .await
            .with_context(|| format!("failed to load {} page {next_page}", T::KIND))?;
        if !moved {
            tracing::warn!(
                listing = %T::KIND,
                last_page = pager.page_number(),
                requested = target,
                "listing ended before the requested page"
            );
            break;
        }
    }

    let mut table: LocalTable<T, T::Column> =
        LocalTable::new(pager.items().to_vec(), pager.items().len());
    table.set_query(args.filter.clone().unwrap_or_default());
    table.set_sort(sort);

    let response = ListingResponse {
        listing: T::KIND,
        page: pager.page_number(),
        items: table.view(),
        has_next: pager.has_next(),
        total: pager.total(),
        sort: table.sort_state().map(|state| {
            format!("{} {}", args.sort.as_deref().unwrap_or_default(), state.direction)
        }),
    };
    output(&response, flags.format)
}
