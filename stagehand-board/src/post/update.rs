//! UpdatePost command

use crate::context::BoardContext;
use crate::error::{require_text, BoardError, Result};
use crate::event::Change;
use crate::outcome::{finish, unchanged, Outcome};
use crate::resolve::UnchangedReason;
use crate::types::{ContentType, Item, Platform, PostId, PostStatus, ScheduledPost};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use stagehand_operations::{operation, Execute, ExecutionResult};
use tracing::warn;

/// Replace a post's fields in place; the id never changes
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdatePost {
    pub id: PostId,
    pub title: String,
    pub content_type: ContentType,
    pub platform: Platform,
    pub scheduled_at: NaiveDateTime,
    /// Keeps the current status when absent
    pub status: Option<PostStatus>,
}

operation!(
    UpdatePost,
    verb = "update",
    noun = "post",
    description = "Replace a scheduled post's fields in place"
);

impl UpdatePost {
    pub fn new(
        id: impl Into<PostId>,
        title: impl Into<String>,
        content_type: ContentType,
        platform: Platform,
        scheduled_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content_type,
            platform,
            scheduled_at,
            status: None,
        }
    }

    pub fn with_status(mut self, status: PostStatus) -> Self {
        self.status = Some(status);
        self
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Outcome> {
        require_text("title", &self.title)?;

        let Some(existing) = ctx.state().schedule.get(self.id) else {
            warn!(post = %self.id, "update of a post that no longer exists");
            return Ok(Outcome::Unchanged(unchanged(UnchangedReason::StaleItem)));
        };

        let post = ScheduledPost {
            id: self.id,
            title: self.title.trim().to_string(),
            content_type: self.content_type,
            platform: self.platform,
            scheduled_at: self.scheduled_at,
            status: self.status.unwrap_or(existing.status),
        };
        let result = serde_json::to_value(&post)?;

        let mut next = ctx.state().clone();
        next.upsert_item(Item::Post(post));
        ctx.commit(next, Change::PostUpdated { id: self.id });

        Ok(Outcome::Changed(result))
    }
}

impl Execute<BoardContext, BoardError> for UpdatePost {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = std::time::Instant::now();
        let result = self.apply(ctx);
        finish(self, start, result)
    }
}
