//! Panic recovery layer that answers with problem responses.

use std::any::Any;
use std::error::Error as StdError;

use axum::body::Body;
use axum::http::Response;
use problem_core::{find_details, ProblemDetails};
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};

use crate::response::problem_response;

/// The generic problem served when a panic carries no details of its own.
pub fn internal_server_error() -> ProblemDetails {
    ProblemDetails {
        status: 500,
        title: "Internal Server Error".to_string(),
        ..ProblemDetails::default()
    }
}

/// A [`CatchPanicLayer`] that serves panics as problem responses.
pub type ProblemRecoveryLayer = CatchPanicLayer<ProblemPanicHandler>;

/// Returns a layer that catches panics from the wrapped service and answers
/// with a problem response.
///
/// A handler can fail a request with a specific problem by panicking with
/// [`std::panic::panic_any`], passing either a [`ProblemDetails`] value or a
/// boxed error whose [`source`](StdError::source) chain contains one. Any
/// other panic payload, including ordinary panic messages, is answered with
/// [`internal_server_error`] so internal panic text never reaches the
/// client. The layer never re-raises; every intercepted panic ends in a
/// served response.
///
/// # Example
///
/// ```ignore
/// use axum::{routing::get, Router};
/// use problem_http::problem_recovery_layer;
///
/// let app = Router::new()
///     .route("/", get(handler))
///     .layer(problem_recovery_layer());
/// ```
pub fn problem_recovery_layer() -> ProblemRecoveryLayer {
    CatchPanicLayer::custom(ProblemPanicHandler)
}

/// Panic handler used by [`problem_recovery_layer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ProblemPanicHandler;

impl ResponseForPanic for ProblemPanicHandler {
    type ResponseBody = Body;

    fn response_for_panic(
        &mut self,
        err: Box<dyn Any + Send + 'static>,
    ) -> Response<Self::ResponseBody> {
        match panic_payload_details(err.as_ref()) {
            Some(details) => problem_response(details),
            None => problem_response(&internal_server_error()),
        }
    }
}

/// Extracts problem details from a panic payload, either directly or by
/// walking the source chain of a boxed error payload.
fn panic_payload_details(payload: &(dyn Any + Send)) -> Option<&ProblemDetails> {
    if let Some(details) = payload.downcast_ref::<ProblemDetails>() {
        return Some(details);
    }

    if let Some(err) = payload.downcast_ref::<Box<dyn StdError + Send + Sync>>() {
        return find_details(&**err as &(dyn StdError + 'static));
    }

    None
}
