use clap::{Args, Subcommand};
use lewis_core::ListingKind;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Token prices.
    Tokens(ListArgs),
    /// Crypto news articles.
    News(ListArgs),
    /// Community questions.
    Questions(ListArgs),
    /// Guides.
    Guides(ListArgs),
    /// Page through a listing interactively (n/p/r, /text, o ID, q).
    Browse(BrowseArgs),
    /// Show one record and log the view.
    Get(GetArgs),
    /// Answers to a question.
    Answers(AnswersArgs),
    /// Comments under a news article.
    Comments(CommentsArgs),
    /// Search the whole site.
    Search(SearchArgs),
    /// Comment on a news article.
    Comment(CommentArgs),
    /// Ask a question.
    Ask(AskArgs),
    /// Answer a question.
    Answer(AnswerArgs),
    /// Join the mailing list.
    Subscribe(SubscribeArgs),
    /// Print the JSON schema of a record or form.
    Schema(SchemaArgs),
    /// Print the effective configuration.
    Config,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Page to show, following cursors from the first page
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,
    /// Server-side free-text query
    #[arg(long)]
    pub query: Option<String>,
    #[arg(long)]
    pub tag: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    /// Sort the fetched page by column
    #[arg(long)]
    pub sort: Option<String>,
    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,
    /// Keep only rows of the fetched page containing this text
    #[arg(long)]
    pub filter: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct BrowseArgs {
    /// tokens, news, questions or guides
    pub kind: ListingKind,
    #[arg(long)]
    pub query: Option<String>,
    #[arg(long)]
    pub tag: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct GetArgs {
    pub kind: ListingKind,
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct AnswersArgs {
    pub question_id: String,
}

#[derive(Clone, Debug, Args)]
pub struct CommentsArgs {
    pub article_id: String,
}

#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    #[arg(required_unless_present = "watch")]
    pub query: Option<String>,
    /// Read queries from stdin, one line per keystroke burst
    #[arg(long, conflicts_with = "query")]
    pub watch: bool,
}

#[derive(Clone, Debug, Args)]
pub struct CommentArgs {
    /// Article to comment on
    #[arg(long)]
    pub article: String,
    #[arg(long)]
    pub body: String,
    #[arg(long)]
    pub author: Option<String>,
    /// CAPTCHA verification token (falls back to config)
    #[arg(long)]
    pub captcha: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AskArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub body: String,
    #[arg(long)]
    pub author: Option<String>,
    /// Address notified about answers
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long = "tag")]
    pub tags: Vec<String>,
    #[arg(long)]
    pub captcha: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AnswerArgs {
    pub question_id: String,
    #[arg(long)]
    pub body: String,
    #[arg(long)]
    pub author: Option<String>,
    #[arg(long)]
    pub captcha: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SubscribeArgs {
    pub email: String,
    #[arg(long)]
    pub captcha: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    pub type_name: String,
}
