//! The manage_animation dispatch boundary.
//!
//! One call is one request/response cycle with no state in between:
//! build the sparse payload, hand it to the connection, normalize
//! whatever came back. Every local failure - serialization or
//! transport - collapses into a `Failure` result, so this function
//! cannot raise past its boundary.

use animproto::{ActionResult, EditorConnection, ManageAnimationParams, MANAGE_ANIMATION};
use tracing::{debug, error};
use uuid::Uuid;

/// Forward one animation operation to the editor and normalize the outcome.
///
/// The editor owns validation and defaults; this side forwards exactly
/// the fields the caller supplied and reports the editor's verdict (or a
/// local-origin failure) through the uniform [`ActionResult`] shape.
pub async fn manage_animation<C>(connection: &C, params: &ManageAnimationParams) -> ActionResult
where
    C: EditorConnection + ?Sized,
{
    let request_id = Uuid::new_v4();
    debug!(%request_id, action = %params.action, "dispatching manage_animation");

    let request = match params.to_request() {
        Ok(request) => request,
        Err(e) => {
            error!(%request_id, error = %e, "failed to build animation request");
            return ActionResult::local_error(e);
        }
    };

    match connection.send_command(MANAGE_ANIMATION, request).await {
        Ok(response) => {
            let result = ActionResult::from_response(&response);
            debug!(%request_id, success = result.is_success(), "editor replied");
            result
        }
        Err(e) => {
            error!(%request_id, error = %e, "editor connection failed");
            ActionResult::local_error(e)
        }
    }
}
