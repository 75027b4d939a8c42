use anyhow::Context;
use lewis_core::entities::{Answer, Comment};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{AnswersArgs, CommentsArgs};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AnswersResponse {
    question_id: String,
    items: Vec<Answer>,
}

#[derive(Debug, Serialize)]
struct CommentsResponse {
    article_id: String,
    items: Vec<Comment>,
}

/// Handle `lws answers`.
pub async fn handle_answers(
    args: &AnswersArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let items = ctx
        .client
        .answers(&args.question_id)
        .await
        .with_context(|| format!("failed to load answers for question '{}'", args.question_id))?;
    output(
        &AnswersResponse {
            question_id: args.question_id.clone(),
            items,
        },
        flags.format,
    )
}

/// Handle `lws comments`.
pub async fn handle_comments(
    args: &CommentsArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let items = ctx
        .client
        .comments(&args.article_id)
        .await
        .with_context(|| format!("failed to load comments for article '{}'", args.article_id))?;
    output(
        &CommentsResponse {
            article_id: args.article_id.clone(),
            items,
        },
        flags.format,
    )
}
