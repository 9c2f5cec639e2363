//! Completion messages sent from request tasks back to the owning controller.
//!
//! Each spawned request produces exactly one [`ListMessage`]. The message
//! carries the generation and page it was issued for so the controller can
//! drop responses to requests it has since superseded.

use crate::error::ErrorResponse;
use crate::models::PageResult;

#[derive(Debug, Clone, PartialEq)]
pub enum ListMessage<T> {
    /// A page arrived (possibly empty).
    PageLoaded {
        generation: u64,
        page: u32,
        result: PageResult<T>,
    },
    /// The request failed.
    PageFailed {
        generation: u64,
        page: u32,
        error: ErrorResponse,
    },
}

impl<T> ListMessage<T> {
    /// Wrap a provider outcome for the request `(generation, page)`.
    pub fn from_result(
        generation: u64,
        page: u32,
        result: Result<PageResult<T>, ErrorResponse>,
    ) -> Self {
        match result {
            Ok(result) => ListMessage::PageLoaded {
                generation,
                page,
                result,
            },
            Err(error) => ListMessage::PageFailed {
                generation,
                page,
                error,
            },
        }
    }

    pub fn generation(&self) -> u64 {
        match self {
            ListMessage::PageLoaded { generation, .. } | ListMessage::PageFailed { generation, .. } => {
                *generation
            }
        }
    }

    /// Page number the request asked for.
    pub fn page(&self) -> u32 {
        match self {
            ListMessage::PageLoaded { page, .. } | ListMessage::PageFailed { page, .. } => *page,
        }
    }
}
