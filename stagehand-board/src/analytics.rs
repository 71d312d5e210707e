//! Chart datasets
//!
//! Charts only ever receive `{label, value}` pairs (or a label with one value
//! per series). The seed series are the dashboard's fixed audience figures;
//! `content_mix` and `platform_load` are derived from the live schedule.

use crate::types::{ContentType, Platform, Schedule};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One bar, slice or point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// One x-axis position with a value per named series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiSeriesPoint {
    pub label: String,
    pub series: BTreeMap<String, f64>,
}

/// Every dataset the analytics view draws
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub follower_growth: Vec<MultiSeriesPoint>,
    pub engagement_by_platform: Vec<DataPoint>,
    pub content_type_distribution: Vec<DataPoint>,
    pub content_mix: Vec<DataPoint>,
    pub platform_load: Vec<DataPoint>,
}

impl Dashboard {
    /// Seed series for `artist` plus the figures derived from `schedule`
    pub fn build(artist: &str, schedule: &Schedule) -> Self {
        Self {
            follower_growth: follower_growth(artist),
            engagement_by_platform: engagement_by_platform(),
            content_type_distribution: content_type_distribution(),
            content_mix: content_mix(schedule),
            platform_load: platform_load(schedule),
        }
    }
}

/// Monthly follower count, one series named after the artist
pub fn follower_growth(artist: &str) -> Vec<MultiSeriesPoint> {
    const MONTHS: [(&str, f64); 7] = [
        ("Jan", 400.0),
        ("Feb", 650.0),
        ("Mar", 900.0),
        ("Apr", 1200.0),
        ("May", 1650.0),
        ("Jun", 2100.0),
        ("Jul", 2400.0),
    ];

    MONTHS
        .iter()
        .map(|(month, followers)| MultiSeriesPoint {
            label: (*month).to_string(),
            series: BTreeMap::from([(artist.to_string(), *followers)]),
        })
        .collect()
}

/// Interactions per platform
pub fn engagement_by_platform() -> Vec<DataPoint> {
    vec![
        DataPoint::new(Platform::Facebook.label(), 1700.0),
        DataPoint::new(Platform::TikTok.label(), 2500.0),
        DataPoint::new(Platform::Instagram.label(), 1200.0),
        DataPoint::new(Platform::YouTube.label(), 50.0),
    ]
}

/// Share of published content by format, in percent
pub fn content_type_distribution() -> Vec<DataPoint> {
    vec![
        DataPoint::new("Reels", 45.0),
        DataPoint::new("Music", 25.0),
        DataPoint::new("UGC", 20.0),
        DataPoint::new("Images", 10.0),
    ]
}

/// Scheduled posts per content type, skipping types with none
pub fn content_mix(schedule: &Schedule) -> Vec<DataPoint> {
    ContentType::ALL
        .iter()
        .map(|kind| {
            let count = schedule
                .posts()
                .iter()
                .filter(|p| p.content_type == *kind)
                .count();
            DataPoint::new(kind.label(), count as f64)
        })
        .filter(|point| point.value > 0.0)
        .collect()
}

/// Scheduled posts per platform, skipping platforms with none
pub fn platform_load(schedule: &Schedule) -> Vec<DataPoint> {
    Platform::ALL
        .iter()
        .map(|platform| {
            let count = schedule
                .posts()
                .iter()
                .filter(|p| p.platform == *platform)
                .count();
            DataPoint::new(platform.label(), count as f64)
        })
        .filter(|point| point.value > 0.0)
        .collect()
}
