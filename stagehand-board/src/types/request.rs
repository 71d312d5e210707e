//! Fan requests: what fans have asked the artist to make

use super::ids::RequestId;
use super::post::Platform;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Progress on a fan request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl RequestStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
        }
    }
}

/// A single fan request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FanRequest {
    pub id: RequestId,
    pub request: String,
    pub fan_name: String,
    pub platform: Platform,
    #[serde(default)]
    pub status: RequestStatus,
    pub date: NaiveDate,
}

/// The request log, listed newest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestLog {
    requests: Vec<FanRequest>,
}

impl RequestLog {
    pub fn from_requests(requests: Vec<FanRequest>) -> Self {
        Self { requests }
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn get(&self, id: RequestId) -> Option<&FanRequest> {
        self.requests.iter().find(|r| r.id == id)
    }

    pub fn max_id(&self) -> Option<RequestId> {
        self.requests.iter().map(|r| r.id).max()
    }

    pub fn push(&mut self, request: FanRequest) {
        self.requests.push(request);
    }

    /// Set a request's status; `false` when the id is unknown
    pub fn set_status(&mut self, id: RequestId, status: RequestStatus) -> bool {
        match self.requests.iter_mut().find(|r| r.id == id) {
            Some(request) => {
                request.status = status;
                true
            }
            None => false,
        }
    }

    /// Newest first; ties broken by higher id first
    pub fn newest_first(&self) -> Vec<&FanRequest> {
        let mut sorted: Vec<&FanRequest> = self.requests.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        sorted
    }

    /// Requests with the given status, newest first
    pub fn with_status(&self, status: RequestStatus) -> Vec<&FanRequest> {
        self.newest_first()
            .into_iter()
            .filter(|r| r.status == status)
            .collect()
    }
}
