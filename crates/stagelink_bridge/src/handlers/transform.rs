//! Transform edits: `TransformObject <name> [transform]`.

use stagelink_scene::{ObjectId, SceneContainer};

use super::unroutable;
use crate::dispatcher::CommandHandler;
use crate::line::LineCursor;
use crate::response::Response;
use crate::transform::apply_transform_text;

const TRANSFORM_OBJECT: &str = "TransformObject";

/// Applies the trailing transform text to a named object and requests a
/// redraw. Answers `"Ok"`, or `"1"` when the object is unknown.
pub struct TransformObjectCommand;

impl TransformObjectCommand {
    fn transform_object(
        &self,
        args: &mut LineCursor<'_>,
        scene: &mut dyn SceneContainer,
    ) -> Response {
        let id = ObjectId::new(args.token_or_empty());
        let Some(object) = scene.find(&id) else {
            log::info!("object '{id}' not found or invalid");
            return Response::NotFound;
        };
        apply_transform_text(scene, object, args.rest());
        scene.request_redraw();
        Response::Ok
    }
}

impl CommandHandler for TransformObjectCommand {
    fn verbs(&self) -> &'static [&'static str] {
        &[TRANSFORM_OBJECT]
    }

    fn execute(
        &self,
        verb: &str,
        args: &mut LineCursor<'_>,
        scene: &mut dyn SceneContainer,
    ) -> Response {
        match verb {
            TRANSFORM_OBJECT => self.transform_object(args, scene),
            _ => unroutable(verb),
        }
    }
}
