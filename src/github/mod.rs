//! GitHub integration: pull request comments, runner files and the
//! workflow event context

pub mod actions;
pub mod client;
pub mod context;

pub use actions::ActionsRunner;
pub use client::{upsert_comment, Comment, IssueComments, RestClient, UpsertCommentInput, UpsertCommentOutput};
pub use context::EventContext;

/// Marker that identifies the comment this tool owns on a pull request
pub const COMMENT_MARK: &str = "<!-- commented by junit-monorepo-go -->";
