//! Lifecycle wrapper for one asynchronous operation.

use std::future::Future;
use std::pin::Pin;

use futures::stream::{self, Stream, StreamExt};

use crate::api::ApiError;

/// Tri-state result of an asynchronous operation.
///
/// A sequence for one operation always starts with `Loading` and ends with
/// exactly one `Success` or `Error`.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource<T> {
    Loading,
    Success(T),
    Error(String),
}

impl<T> Resource<T> {
    /// Terminal emissions as a `Result`; `None` for `Loading`.
    pub fn into_result(self) -> Option<Result<T, String>> {
        match self {
            Self::Loading => None,
            Self::Success(data) => Some(Ok(data)),
            Self::Error(message) => Some(Err(message)),
        }
    }

    /// Transform the payload, keeping `Loading` and `Error` as they are.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resource<U> {
        match self {
            Self::Loading => Resource::Loading,
            Self::Success(data) => Resource::Success(f(data)),
            Self::Error(message) => Resource::Error(message),
        }
    }
}

/// Lazy, finite stream of resource emissions for one repository call.
pub type ResourceStream<T> = Pin<Box<dyn Stream<Item = Resource<T>> + Send>>;

/// Wrap a gateway call into a resource sequence.
///
/// Nothing runs until the stream is polled. The call's error is logged under
/// `operation` and converted into `Resource::Error`; it never escapes as a
/// failure of the stream itself.
pub fn resource_stream<T, F>(operation: &'static str, call: F) -> ResourceStream<T>
where
    T: Send + 'static,
    F: Future<Output = Result<T, ApiError>> + Send + 'static,
{
    let terminal = async move {
        match call.await {
            Ok(data) => {
                tracing::debug!(operation, "request succeeded");
                Resource::Success(data)
            }
            Err(err) => {
                tracing::error!(
                    operation,
                    error_type = err.error_type(),
                    error = %err,
                    "request failed"
                );
                if err.is_unauthorized() {
                    tracing::warn!(operation, "Access token rejected; the user must sign in again");
                }
                Resource::Error(err.to_string())
            }
        }
    };

    Box::pin(stream::once(async { Resource::Loading }).chain(stream::once(terminal)))
}
