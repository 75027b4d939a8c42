use anyhow::Context;
use lewis_core::ViewKey;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GetArgs;
use crate::commands::shared::records::{ListingRecord, with_record};
use crate::context::AppContext;
use crate::output::output;

/// Handle `lws get`.
pub async fn handle(
    args: &GetArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    with_record!(args.kind, show(&args.id, ctx, flags))
}

/// Fetch and print one record, then log the view unless it was already
/// logged this session.
pub async fn show<T: ListingRecord>(
    id: &str,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let record: T = ctx
        .client
        .get(T::KIND, id)
        .await
        .with_context(|| format!("failed to load {} '{id}'", T::KIND))?;
    output(&record, flags.format)?;

    let key = ViewKey::new(T::KIND, id);
    if !ctx.views.track(&ctx.client, key).await {
        tracing::debug!(listing = %T::KIND, id, "view already logged this session");
    }
    Ok(())
}
