use anyhow::Context;
use lewis_core::forms::{AnswerDraft, CommentDraft, Draft, QuestionDraft, Submission, Subscription};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{AnswerArgs, AskArgs, CommentArgs, SubscribeArgs};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SubscribeResponse {
    email: String,
    subscribed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// Validate `draft` locally and pair it with the explicit or configured
/// CAPTCHA token. Nothing is sent when this fails.
fn submission<D: Draft>(
    draft: D,
    explicit_captcha: Option<&str>,
    ctx: &AppContext,
) -> anyhow::Result<Submission<D>> {
    let token = ctx.config.captcha.resolve(explicit_captcha).unwrap_or_default();
    Submission::new(draft, token).context("invalid submission (nothing was sent)")
}

/// Handle `lws comment`.
pub async fn handle_comment(
    args: CommentArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let draft = CommentDraft {
        article_id: args.article,
        author: args.author,
        body: args.body,
    };
    let submission = submission(draft, args.captcha.as_deref(), ctx)?;
    let created = ctx
        .client
        .post_comment(&submission)
        .await
        .context("failed to post comment")?;
    output(&created, flags.format)
}

/// Handle `lws ask`.
pub async fn handle_ask(
    args: AskArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let draft = QuestionDraft {
        title: args.title,
        body: args.body,
        author: args.author,
        email: args.email,
        tags: args.tags,
    };
    let submission = submission(draft, args.captcha.as_deref(), ctx)?;
    let created = ctx
        .client
        .ask_question(&submission)
        .await
        .context("failed to post question")?;
    output(&created, flags.format)
}

/// Handle `lws answer`.
pub async fn handle_answer(
    args: AnswerArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let draft = AnswerDraft {
        question_id: args.question_id,
        body: args.body,
        author: args.author,
    };
    let submission = submission(draft, args.captcha.as_deref(), ctx)?;
    let created = ctx
        .client
        .post_answer(&submission)
        .await
        .context("failed to post answer")?;
    output(&created, flags.format)
}

/// Handle `lws subscribe`.
pub async fn handle_subscribe(
    args: SubscribeArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let draft = Subscription {
        email: args.email.trim().to_string(),
    };
    let submission = submission(draft, args.captcha.as_deref(), ctx)?;
    let ack = ctx
        .client
        .subscribe(&submission)
        .await
        .context("failed to join the mailing list")?;
    output(
        &SubscribeResponse {
            email: submission.draft().email.clone(),
            subscribed: true,
            message: ack.message,
        },
        flags.format,
    )
}

#[cfg(test)]
mod tests {
    use lewis_config::LewisConfig;
    use lewis_core::forms::CommentDraft;

    use super::submission;
    use crate::context::AppContext;

    fn ctx(captcha: &str) -> AppContext {
        let mut config = LewisConfig::default();
        config.captcha.token = captcha.into();
        AppContext::init(config).expect("client should build")
    }

    fn draft(body: &str) -> CommentDraft {
        CommentDraft {
            article_id: "4821".into(),
            author: None,
            body: body.into(),
        }
    }

    #[test]
    fn configured_captcha_is_used_when_flag_missing() {
        let submission = submission(draft("Nice"), None, &ctx("staging-token")).unwrap();
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["captchaToken"], "staging-token");
    }

    #[test]
    fn missing_captcha_is_rejected_before_sending() {
        let err = submission(draft("Nice"), None, &ctx("")).unwrap_err();
        assert!(format!("{err:#}").contains("captcha"));
    }

    #[test]
    fn empty_body_is_rejected() {
        let err = submission(draft("  "), Some("tok"), &ctx("")).unwrap_err();
        assert!(format!("{err:#}").contains("body"));
    }
}
