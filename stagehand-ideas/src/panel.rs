//! Per-panel result state
//!
//! Each generator panel keeps its own state. Results are never written to
//! the board; dismissing a panel drops them.

use crate::error::{Result, GENERATION_FAILED};
use std::future::Future;
use tracing::debug;

/// State of one generator panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Panel<T> {
    #[default]
    Idle,
    Loading,
    Ready(Vec<T>),
    /// Message to show in place of results
    Failed(String),
}

impl<T> Panel<T> {
    pub fn new() -> Self {
        Self::Idle
    }

    /// Enter the loading state, dropping previous results or errors
    pub fn begin(&mut self) {
        *self = Self::Loading;
    }

    /// Record how a generation ended. An empty result list shows the same
    /// failure as an error.
    pub fn settle(&mut self, result: Result<Vec<T>>) {
        *self = match result {
            Ok(items) if items.is_empty() => {
                debug!("generation returned no results");
                Self::Failed(GENERATION_FAILED.to_string())
            }
            Ok(items) => Self::Ready(items),
            Err(error) => {
                debug!(%error, "generation failed");
                Self::Failed(error.user_message())
            }
        };
    }

    /// Run one generation through the panel
    pub async fn run<F>(&mut self, generation: F)
    where
        F: Future<Output = Result<Vec<T>>>,
    {
        self.begin();
        let result = generation.await;
        self.settle(result);
    }

    /// Back to idle, discarding whatever was shown
    pub fn dismiss(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn items(&self) -> &[T] {
        match self {
            Self::Ready(items) => items,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
