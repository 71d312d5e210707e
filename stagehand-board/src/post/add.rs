//! AddPost command

use crate::context::BoardContext;
use crate::error::{require_text, BoardError, Result};
use crate::event::Change;
use crate::outcome::{finish, Outcome};
use crate::types::{ContentType, Item, Platform, PostStatus, ScheduledPost};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use stagehand_operations::{operation, Execute, ExecutionResult};

/// Schedule a new post
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddPost {
    pub title: String,
    pub content_type: ContentType,
    pub platform: Platform,
    pub scheduled_at: NaiveDateTime,
    /// New posts start out planned
    #[serde(default)]
    pub status: PostStatus,
}

operation!(AddPost, verb = "add", noun = "post", description = "Schedule a new post");

impl AddPost {
    pub fn new(
        title: impl Into<String>,
        content_type: ContentType,
        platform: Platform,
        scheduled_at: NaiveDateTime,
    ) -> Self {
        Self {
            title: title.into(),
            content_type,
            platform,
            scheduled_at,
            status: PostStatus::Planned,
        }
    }

    pub fn with_status(mut self, status: PostStatus) -> Self {
        self.status = status;
        self
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Outcome> {
        require_text("title", &self.title)?;

        let post = ScheduledPost {
            id: ctx.allocate_post_id(),
            title: self.title.trim().to_string(),
            content_type: self.content_type,
            platform: self.platform,
            scheduled_at: self.scheduled_at,
            status: self.status,
        };
        let id = post.id;
        let result = serde_json::to_value(&post)?;

        let mut next = ctx.state().clone();
        next.upsert_item(Item::Post(post));
        ctx.commit(next, Change::PostAdded { id });

        Ok(Outcome::Changed(result))
    }
}

impl Execute<BoardContext, BoardError> for AddPost {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = std::time::Instant::now();
        let result = self.apply(ctx);
        finish(self, start, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PostId;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_add_post_sorts_into_schedule() {
        let mut ctx = BoardContext::new();

        AddPost::new("Late", ContentType::Reel, Platform::Instagram, at(12, 18))
            .execute(&mut ctx)
            .into_result()
            .unwrap();
        let early = AddPost::new("Early", ContentType::Image, Platform::Twitter, at(10, 9))
            .execute(&mut ctx)
            .into_result()
            .unwrap();

        assert_eq!(early["id"], 2);
        assert_eq!(early["status"], "planned");
        let titles: Vec<_> = ctx
            .state()
            .schedule
            .posts()
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Early", "Late"]);
    }

    #[test]
    fn test_add_post_empty_title_rejected() {
        let mut ctx = BoardContext::new();

        let err = AddPost::new("", ContentType::Video, Platform::YouTube, at(10, 18))
            .execute(&mut ctx)
            .into_result()
            .unwrap_err();

        assert!(err.is_validation());
        assert!(ctx.state().schedule.is_empty());
    }

    #[test]
    fn test_add_post_ids_continue_after_seed() {
        let mut ctx = BoardContext::seeded(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());

        let result = AddPost::new("Fifth", ContentType::Music, Platform::Spotify, at(20, 18))
            .execute(&mut ctx)
            .into_result()
            .unwrap();

        assert_eq!(result["id"], 5);
        assert!(ctx.state().schedule.get(PostId(5)).is_some());
    }
}
