//! Name queries and renames: `GetFreeName <name>`, `RenameObject <name> <newname>`.

use stagelink_scene::{ObjectId, SceneContainer, SceneError};

use super::{respond, unroutable};
use crate::dispatcher::CommandHandler;
use crate::line::LineCursor;
use crate::reconcile::reconcile;
use crate::response::Response;

const GET_FREE_NAME: &str = "GetFreeName";
const RENAME_OBJECT: &str = "RenameObject";

/// `GetFreeName` answers with the allocator's verdict for a candidate name,
/// mutating nothing. `RenameObject` reconciles an existing object's
/// identifier and label to the desired name, answering with the identifier
/// the object ends up with (callers compare it to what they asked for), or
/// `"1"` when the object is unknown.
pub struct ObjectNameCommand;

impl ObjectNameCommand {
    fn get_free_name(&self, args: &mut LineCursor<'_>, scene: &dyn SceneContainer) -> Response {
        let candidate = ObjectId::new(args.token_or_empty());
        Response::Identifier(scene.free_identifier(&candidate))
    }

    fn rename_object(
        &self,
        args: &mut LineCursor<'_>,
        scene: &mut dyn SceneContainer,
    ) -> Result<Response, SceneError> {
        let id = ObjectId::new(args.token_or_empty());
        let desired = args.token_or_empty();
        let Some(object) = scene.find(&id) else {
            log::info!("object '{id}' not found or invalid");
            return Ok(Response::NotFound);
        };
        let assigned = reconcile(scene, object, desired)?;
        Ok(Response::Identifier(assigned))
    }
}

impl CommandHandler for ObjectNameCommand {
    fn verbs(&self) -> &'static [&'static str] {
        &[GET_FREE_NAME, RENAME_OBJECT]
    }

    fn execute(
        &self,
        verb: &str,
        args: &mut LineCursor<'_>,
        scene: &mut dyn SceneContainer,
    ) -> Response {
        match verb {
            GET_FREE_NAME => self.get_free_name(args, scene),
            RENAME_OBJECT => respond(self.rename_object(args, scene)),
            _ => unroutable(verb),
        }
    }
}
