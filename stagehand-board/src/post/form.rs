//! Raw post form input
//!
//! The editor submits strings. `PostForm` validates them and produces the
//! typed command; nothing touches the store until the command runs.

use super::{AddPost, UpdatePost};
use crate::error::{require_text, BoardError, Result};
use crate::types::{ContentType, Platform, PostId, PostStatus};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// The create/edit post form as submitted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostForm {
    pub title: String,
    pub content_type: String,
    pub platform: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    /// Empty keeps the current status on edit, or plans a new post
    #[serde(default)]
    pub status: String,
}

impl PostForm {
    pub fn new(title: impl Into<String>, date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content_type: ContentType::Video.label().to_string(),
            platform: Platform::Instagram.label().to_string(),
            date: date.into(),
            time: time.into(),
            status: String::new(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Validate into a command that schedules a new post
    pub fn into_add(self) -> Result<AddPost> {
        let fields = self.parse()?;
        let add = AddPost::new(
            fields.title,
            fields.content_type,
            fields.platform,
            fields.scheduled_at,
        );
        Ok(match fields.status {
            Some(status) => add.with_status(status),
            None => add,
        })
    }

    /// Validate into a command that edits post `id`
    pub fn into_update(self, id: impl Into<PostId>) -> Result<UpdatePost> {
        let fields = self.parse()?;
        let update = UpdatePost::new(
            id,
            fields.title,
            fields.content_type,
            fields.platform,
            fields.scheduled_at,
        );
        Ok(match fields.status {
            Some(status) => update.with_status(status),
            None => update,
        })
    }

    fn parse(self) -> Result<Fields> {
        require_text("title", &self.title)?;
        require_text("date", &self.date)?;
        require_text("time", &self.time)?;

        let content_type: ContentType = self
            .content_type
            .parse()
            .map_err(|e: String| BoardError::invalid_value("content_type", e))?;
        let platform: Platform = self
            .platform
            .parse()
            .map_err(|e: String| BoardError::invalid_value("platform", e))?;
        let status = match self.status.trim() {
            "" => None,
            s => Some(
                s.parse::<PostStatus>()
                    .map_err(|e| BoardError::invalid_value("status", e))?,
            ),
        };

        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
            .map_err(|_| BoardError::invalid_value("date", "expected YYYY-MM-DD"))?;
        let time = NaiveTime::parse_from_str(self.time.trim(), TIME_FORMAT)
            .map_err(|_| BoardError::invalid_value("time", "expected HH:MM"))?;

        Ok(Fields {
            title: self.title.trim().to_string(),
            content_type,
            platform,
            scheduled_at: NaiveDateTime::new(date, time),
            status,
        })
    }
}

struct Fields {
    title: String,
    content_type: ContentType,
    platform: Platform,
    scheduled_at: NaiveDateTime,
    status: Option<PostStatus>,
}
