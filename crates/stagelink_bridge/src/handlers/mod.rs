//! Object command handlers.
//!
//! Each handler owns a small set of verbs and performs the corresponding
//! scene mutation through the container capabilities. No failure escapes a
//! handler: everything becomes a [`Response`].

mod hierarchy;
mod lifecycle;
mod naming;
mod transform;

pub use hierarchy::ParentChildCommand;
pub use lifecycle::{AddObjectCommand, DeleteObjectCommand, DuplicateObjectCommand};
pub use naming::ObjectNameCommand;
pub use transform::TransformObjectCommand;

use stagelink_scene::SceneError;

use crate::response::Response;

/// Collapse an internal error into the wire taxonomy.
pub(crate) fn respond(result: Result<Response, SceneError>) -> Response {
    result.unwrap_or_else(|err| {
        log::warn!("command failed: {err}");
        Response::NotFound
    })
}

/// Dispatcher routing and handler verb lists disagree; a bug in this crate.
pub(crate) fn unroutable(verb: &str) -> Response {
    log::error!("verb '{verb}' routed to a handler that does not declare it");
    Response::NotFound
}
