//! Hierarchy edits: `ParentChildTo <child> [parent]`.

use stagelink_scene::{ObjectId, SceneContainer};

use super::unroutable;
use crate::dispatcher::CommandHandler;
use crate::line::LineCursor;
use crate::response::Response;

const PARENT_CHILD_TO: &str = "ParentChildTo";

/// Attaches a child under a parent, or detaches it to the root when no
/// parent is named. Answers `"0"` on success or no-op, `"1"` when a lookup
/// fails or the object would be parented to itself.
pub struct ParentChildCommand;

impl ParentChildCommand {
    fn parent_child_to(
        &self,
        args: &mut LineCursor<'_>,
        scene: &mut dyn SceneContainer,
    ) -> Response {
        let child_id = ObjectId::new(args.token_or_empty());
        let parent_token = args.next_token();

        let Some(child) = scene.find(&child_id) else {
            log::info!("object '{child_id}' not found or invalid");
            return Response::NotFound;
        };

        // no parent named: detach to the root
        let Some(parent_token) = parent_token else {
            if let Some(old_parent) = scene.parent_of(child) {
                log::info!("parenting '{child_id}' to the world");
                scene.detach(child);
                scene.notify_detached(child, old_parent);
            }
            // detaching an already-detached child is not an error
            return Response::Done;
        };

        let parent_id = ObjectId::new(parent_token);
        let Some(parent) = scene.find(&parent_id) else {
            log::info!("object '{parent_id}' not found or invalid");
            return Response::NotFound;
        };
        // an object cannot be parented to itself
        if parent == child {
            return Response::NotFound;
        }

        log::info!("parenting '{child_id}' to '{parent_id}'");
        match scene.attach(child, parent) {
            Ok(()) => Response::Done,
            Err(err) => {
                log::warn!("attach of '{child_id}' under '{parent_id}' refused: {err}");
                Response::NotFound
            }
        }
    }
}

impl CommandHandler for ParentChildCommand {
    fn verbs(&self) -> &'static [&'static str] {
        &[PARENT_CHILD_TO]
    }

    fn execute(
        &self,
        verb: &str,
        args: &mut LineCursor<'_>,
        scene: &mut dyn SceneContainer,
    ) -> Response {
        match verb {
            PARENT_CHILD_TO => self.parent_child_to(args, scene),
            _ => unroutable(verb),
        }
    }
}
