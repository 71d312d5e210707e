//! Scheduled posts and the chronological schedule

use super::ids::PostId;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of content a post carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Video,
    Reel,
    Music,
    Image,
    #[serde(rename = "ugc_campaign")]
    UgcCampaign,
}

impl ContentType {
    pub const ALL: [ContentType; 5] = [
        Self::Video,
        Self::Reel,
        Self::Music,
        Self::Image,
        Self::UgcCampaign,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Video => "Video",
            Self::Reel => "Reel",
            Self::Music => "Music",
            Self::Image => "Image",
            Self::UgcCampaign => "UGC campaign",
        }
    }
}

/// Target social platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Platform {
    TikTok,
    Instagram,
    YouTube,
    Twitter,
    Spotify,
    Facebook,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Self::TikTok,
        Self::Instagram,
        Self::YouTube,
        Self::Twitter,
        Self::Spotify,
        Self::Facebook,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::TikTok => "TikTok",
            Self::Instagram => "Instagram",
            Self::YouTube => "YouTube",
            Self::Twitter => "Twitter",
            Self::Spotify => "Spotify",
            Self::Facebook => "Facebook",
        }
    }
}

/// Publication status of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    #[default]
    Planned,
    InProgress,
    Published,
}

impl PostStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Planned => "Planned",
            Self::InProgress => "In progress",
            Self::Published => "Published",
        }
    }
}

macro_rules! label_display_and_parse {
    ($($name:ident),*) => {$(
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = String;

            /// Accepts the label or the serialized name, ignoring case,
            /// spaces, dashes and underscores.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = normalize(s);
                serde_json::from_value::<Self>(serde_json::Value::String(s.to_string()))
                    .ok()
                    .or_else(|| {
                        Self::variants()
                            .iter()
                            .copied()
                            .find(|v| normalize(v.label()) == wanted)
                    })
                    .ok_or_else(|| format!("unknown {}: {}", stringify!($name), s))
            }
        }
    )*};
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl ContentType {
    fn variants() -> &'static [Self] {
        &Self::ALL
    }
}

impl Platform {
    fn variants() -> &'static [Self] {
        &Self::ALL
    }
}

impl PostStatus {
    fn variants() -> &'static [Self] {
        &[Self::Planned, Self::InProgress, Self::Published]
    }
}

label_display_and_parse!(ContentType, Platform, PostStatus);

/// A piece of content planned for a calendar slot.
///
/// The calendar day is never stored separately: it is `scheduled_at.date()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledPost {
    pub id: PostId,
    pub title: String,
    pub content_type: ContentType,
    pub platform: Platform,
    pub scheduled_at: NaiveDateTime,
    #[serde(default)]
    pub status: PostStatus,
}

impl ScheduledPost {
    /// The day bucket this post falls in
    pub fn day(&self) -> NaiveDate {
        self.scheduled_at.date()
    }
}

/// All scheduled posts, kept in ascending `scheduled_at` order.
///
/// Sorting is stable: posts with equal timestamps keep their prior relative
/// order. Deserializing goes through [`Schedule::from_posts`], so a stored
/// list in any order loads sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ScheduledPost>", into = "Vec<ScheduledPost>")]
pub struct Schedule {
    posts: Vec<ScheduledPost>,
}

impl From<Vec<ScheduledPost>> for Schedule {
    fn from(posts: Vec<ScheduledPost>) -> Self {
        Self::from_posts(posts)
    }
}

impl From<Schedule> for Vec<ScheduledPost> {
    fn from(schedule: Schedule) -> Self {
        schedule.posts
    }
}

impl Schedule {
    /// Build a schedule from posts in any order
    pub fn from_posts(posts: Vec<ScheduledPost>) -> Self {
        let mut schedule = Self { posts };
        schedule.resort();
        schedule
    }

    /// Posts in chronological order
    pub fn posts(&self) -> &[ScheduledPost] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, id: PostId) -> Option<&ScheduledPost> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Highest id in use, if any
    pub fn max_id(&self) -> Option<PostId> {
        self.posts.iter().map(|p| p.id).max()
    }

    /// Insert or replace by id, then restore chronological order
    pub fn upsert(&mut self, post: ScheduledPost) {
        match self.posts.iter_mut().find(|p| p.id == post.id) {
            Some(existing) => *existing = post,
            None => self.posts.push(post),
        }
        self.resort();
    }

    /// Remove by id. Returns the removed post.
    pub fn remove(&mut self, id: PostId) -> Option<ScheduledPost> {
        let index = self.posts.iter().position(|p| p.id == id)?;
        Some(self.posts.remove(index))
    }

    /// Move a post to `day`, keeping its time of day exactly. Returns the day
    /// it left, or `None` when the id is unknown.
    pub fn reschedule(&mut self, id: PostId, day: NaiveDate) -> Option<NaiveDate> {
        let post = self.posts.iter_mut().find(|p| p.id == id)?;
        let from = post.day();
        post.scheduled_at = NaiveDateTime::new(day, post.scheduled_at.time());
        self.resort();
        Some(from)
    }

    /// Posts falling on `day`, chronological
    pub fn on_day(&self, day: NaiveDate) -> Vec<&ScheduledPost> {
        self.posts.iter().filter(|p| p.day() == day).collect()
    }

    /// Check the ordering invariant
    pub fn is_sorted(&self) -> bool {
        self.posts
            .windows(2)
            .all(|w| w[0].scheduled_at <= w[1].scheduled_at)
    }

    fn resort(&mut self) {
        // `sort_by_key` is stable
        self.posts.sort_by_key(|p| p.scheduled_at);
    }
}
