//! Built-in demo data.
//!
//! `demo_snapshot()` provides the board, schedule and request log the
//! dashboard starts with. Posts are placed relative to the day passed in, so
//! the calendar window always has something on it.

use crate::types::{
    Board, ContentType, FanRequest, Platform, PostId, PostStatus, RequestId, RequestLog,
    RequestStatus, Schedule, ScheduledPost, Snapshot, Task,
};
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

/// Demo posts go out at this hour
const RELEASE_HOUR: u32 = 18;

/// Calendar date from a known-valid literal
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The full demo dataset with posts scheduled after `today`
pub fn demo_snapshot(today: NaiveDate) -> Snapshot {
    Snapshot {
        board: demo_board(),
        schedule: demo_schedule(today),
        requests: demo_requests(),
    }
}

/// Three default columns holding six release tasks
pub fn demo_board() -> Board {
    let mut board = Board::new(Board::default_columns());

    // =========================================================================
    // (column, id, content)
    // =========================================================================
    let tasks = [
        ("todo", "task-1", "Plan the release strategy for the single"),
        ("todo", "task-2", "Record 5 TikToks with the new audio"),
        ("todo", "task-3", "Reach out to local influencers"),
        ("doing", "task-4", "Design the single's cover art"),
        ("doing", "task-5", "Edit the official music video"),
        ("done", "task-6", "Post a teaser on Instagram"),
    ];

    for (column, id, content) in tasks {
        if let Some(column) = board.columns.iter_mut().find(|c| c.id == column) {
            column.task_ids.push(id.into());
            board.tasks.insert(id.into(), Task::with_id(id, content));
        }
    }
    board
}

/// Four posts on days +1, +2, +3 and +5 at 18:00
pub fn demo_schedule(today: NaiveDate) -> Schedule {
    let at = |offset: u64| {
        let time = NaiveTime::from_hms_opt(RELEASE_HOUR, 0, 0).unwrap_or(NaiveTime::MIN);
        NaiveDateTime::new(today + Days::new(offset), time)
    };

    Schedule::from_posts(vec![
        ScheduledPost {
            id: PostId(1),
            title: "New single teaser".into(),
            content_type: ContentType::Reel,
            platform: Platform::Instagram,
            scheduled_at: at(1),
            status: PostStatus::Planned,
        },
        ScheduledPost {
            id: PostId(2),
            title: "Behind the scenes in the studio".into(),
            content_type: ContentType::Video,
            platform: Platform::YouTube,
            scheduled_at: at(2),
            status: PostStatus::Planned,
        },
        ScheduledPost {
            id: PostId(3),
            title: "#StagehandChallenge".into(),
            content_type: ContentType::UgcCampaign,
            platform: Platform::TikTok,
            scheduled_at: at(3),
            status: PostStatus::InProgress,
        },
        ScheduledPost {
            id: PostId(4),
            title: "'Neon Dreams' release".into(),
            content_type: ContentType::Music,
            platform: Platform::Spotify,
            scheduled_at: at(5),
            status: PostStatus::Planned,
        },
    ])
}

/// Three fan requests in different states
pub fn demo_requests() -> RequestLog {
    RequestLog::from_requests(vec![
        FanRequest {
            id: RequestId(1),
            request: "Cover of 'Blinding Lights'".into(),
            fan_name: "Alex G.".into(),
            platform: Platform::TikTok,
            status: RequestStatus::Completed,
            date: date(2023, 10, 15),
        },
        FanRequest {
            id: RequestId(2),
            request: "Acoustic version of 'Cyber Sunset'".into(),
            fan_name: "Maria P.".into(),
            platform: Platform::Instagram,
            status: RequestStatus::InProgress,
            date: date(2023, 11, 2),
        },
        FanRequest {
            id: RequestId(3),
            request: "Collaboration with another artist".into(),
            fan_name: "SynthWaveFan_88".into(),
            platform: Platform::Twitter,
            status: RequestStatus::Pending,
            date: date(2023, 11, 5),
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColumnId;

    #[test]
    fn test_demo_board_splits_tasks_three_two_one() {
        let board = demo_board();
        let counts: Vec<_> = board.columns.iter().map(|c| c.task_ids.len()).collect();
        assert_eq!(counts, vec![3, 2, 1]);
        assert_eq!(board.tasks.len(), 6);
        board.check_partition().unwrap();
        assert_eq!(
            board.locate(&"task-6".into()),
            Some(&ColumnId::from("done"))
        );
    }

    #[test]
    fn test_demo_schedule_is_relative_to_today() {
        let today = date(2024, 1, 8);
        let schedule = demo_schedule(today);
        let days: Vec<_> = schedule.posts().iter().map(|p| p.day()).collect();
        assert_eq!(
            days,
            vec![date(2024, 1, 9), date(2024, 1, 10), date(2024, 1, 11), date(2024, 1, 13)]
        );
        assert!(schedule
            .posts()
            .iter()
            .all(|p| p.scheduled_at.time() == NaiveTime::from_hms_opt(18, 0, 0).unwrap()));
    }

    #[test]
    fn test_demo_requests() {
        let requests = demo_requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests.newest_first()[0].fan_name, "SynthWaveFan_88");
    }
}
