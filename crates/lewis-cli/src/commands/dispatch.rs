use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;
use lewis_core::ListingKind;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Tokens(args) => {
            commands::listing::handle(ListingKind::Tokens, &args, ctx, flags).await
        }
        Commands::News(args) => {
            commands::listing::handle(ListingKind::News, &args, ctx, flags).await
        }
        Commands::Questions(args) => {
            commands::listing::handle(ListingKind::Questions, &args, ctx, flags).await
        }
        Commands::Guides(args) => {
            commands::listing::handle(ListingKind::Guides, &args, ctx, flags).await
        }
        Commands::Browse(args) => commands::browse::handle(&args, ctx, flags).await,
        Commands::Get(args) => commands::get::handle(&args, ctx, flags).await,
        Commands::Answers(args) => commands::thread::handle_answers(&args, ctx, flags).await,
        Commands::Comments(args) => commands::thread::handle_comments(&args, ctx, flags).await,
        Commands::Search(args) => commands::search::handle(&args, ctx, flags).await,
        Commands::Comment(args) => commands::forms::handle_comment(args, ctx, flags).await,
        Commands::Ask(args) => commands::forms::handle_ask(args, ctx, flags).await,
        Commands::Answer(args) => commands::forms::handle_answer(args, ctx, flags).await,
        Commands::Subscribe(args) => commands::forms::handle_subscribe(args, ctx, flags).await,
        Commands::Schema(_) | Commands::Config => {
            unreachable!("schema/config are pre-dispatched in main")
        }
    }
}
