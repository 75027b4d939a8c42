use anyhow::bail;
use lewis_core::entities::{Answer, Article, Comment, Guide, Question, SearchHit, Token};
use lewis_core::forms::{AnswerDraft, CommentDraft, QuestionDraft, Subscription};
use lewis_core::{ListFilters, ViewKey};
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

const TYPE_NAMES: &str = "token, article, question, answer, guide, comment, search-hit, \
    filters, view-key, comment-draft, question-draft, answer-draft, subscription";

/// Handle `lws schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_json(&args.type_name)?;
    output(&schema, flags.format)
}

fn schema_json(type_name: &str) -> anyhow::Result<serde_json::Value> {
    let normalized = type_name.trim().to_ascii_lowercase().replace('_', "-");
    let schema = match normalized.as_str() {
        "token" => schema_for!(Token),
        "article" | "news" => schema_for!(Article),
        "question" => schema_for!(Question),
        "answer" => schema_for!(Answer),
        "guide" => schema_for!(Guide),
        "comment" => schema_for!(Comment),
        "search-hit" => schema_for!(SearchHit),
        "filters" => schema_for!(ListFilters),
        "view-key" => schema_for!(ViewKey),
        "comment-draft" => schema_for!(CommentDraft),
        "question-draft" => schema_for!(QuestionDraft),
        "answer-draft" => schema_for!(AnswerDraft),
        "subscription" => schema_for!(Subscription),
        _ => bail!("unknown schema type '{type_name}' (expected one of: {TYPE_NAMES})"),
    };
    Ok(serde_json::to_value(schema)?)
}

#[cfg(test)]
mod tests {
    use super::schema_json;

    #[test]
    fn token_schema_lists_properties() {
        let schema = schema_json("Token").expect("schema should build");
        assert!(schema["properties"]["symbol"].is_object());
        assert!(schema["properties"]["priceUsd"].is_object());
    }

    #[test]
    fn underscores_are_accepted() {
        assert!(schema_json("comment_draft").is_ok());
    }

    #[test]
    fn unknown_type_lists_choices() {
        let err = schema_json("exchange").expect_err("should fail");
        assert!(err.to_string().contains("search-hit"));
    }
}
