//! Object lifecycle: creation, duplication, deletion.

use stagelink_scene::{ObjectId, SceneContainer, SceneError};

use super::{respond, unroutable};
use crate::dispatcher::CommandHandler;
use crate::line::LineCursor;
use crate::reconcile::reconcile;
use crate::response::Response;
use crate::transform::apply_transform_text;

const ADD_OBJECT: &str = "AddObject";
const ADD_OBJECT_BATCH: &str = "AddObjectBatch";
const DUPLICATE_OBJECT: &str = "DuplicateObject";
const DELETE_SELECTED: &str = "DeleteSelected";
const DELETE_OBJECT: &str = "DeleteObject";

/// Creates objects from assets.
///
/// `AddObject <asset> <name> [EditIfExists=bool] [transform]` answers with
/// the identifier the object ends up with, or `"1"` when no object resulted.
/// With `EditIfExists` (the default), a taken name means the existing object
/// is edited in place instead of creating a new one.
///
/// `AddObjectBatch` treats every following non-blank line as one AddObject
/// argument list.
pub struct AddObjectCommand;

impl AddObjectCommand {
    fn add_object(
        &self,
        args: &mut LineCursor<'_>,
        scene: &mut dyn SceneContainer,
    ) -> Result<Response, SceneError> {
        let asset = args.token_or_empty();
        let requested_text = args.token_or_empty();
        let edit_if_exists = args.bool_flag("EditIfExists").unwrap_or(true);

        // An absent or sentinel name gets the fixed placeholder before the
        // allocator runs.
        let requested = ObjectId::new(requested_text);
        let requested = if requested.is_empty() || requested.is_none_name() {
            ObjectId::generated()
        } else {
            requested
        };

        let free = scene.free_identifier(&requested);
        let object = if free != requested && edit_if_exists {
            // name taken and we may edit the object holding it
            match scene.find(&requested) {
                Some(object) => {
                    log::info!("found object for editing: {requested}");
                    Some(object)
                }
                None => {
                    log::warn!("identifier '{requested}' taken, but no object with it found");
                    None
                }
            }
        } else {
            // name was available, or editing is disabled: create new
            match scene.create_from_asset(asset, &free) {
                Ok(object) => {
                    // factories are not trusted to honor the identifier
                    reconcile(scene, object, free.as_str())?;
                    Some(object)
                }
                Err(err) => {
                    log::warn!("failed creating from asset '{asset}': {err}");
                    None
                }
            }
        };

        let Some(object) = object else {
            return Ok(Response::NotFound);
        };

        // transform data may ride along; the object is at hand already, no
        // need to look it up again
        apply_transform_text(scene, object, args.rest());

        let assigned = scene
            .identifier(object)
            .ok_or(SceneError::StaleHandle(object))?;
        Ok(Response::Identifier(assigned))
    }

    fn add_object_batch(
        &self,
        args: &mut LineCursor<'_>,
        scene: &mut dyn SceneContainer,
    ) -> Response {
        log::info!("batch add: parsing lines");
        for line in args.rest().lines() {
            if line.trim().is_empty() {
                continue;
            }
            log::debug!("batch add line: {line}");
            let mut cursor = LineCursor::new(line);
            let response = respond(self.add_object(&mut cursor, scene));
            log::debug!("batch add line result: {response}");
        }
        // per-line results are not reported, only overall completion
        Response::Ok
    }
}

impl CommandHandler for AddObjectCommand {
    fn verbs(&self) -> &'static [&'static str] {
        &[ADD_OBJECT, ADD_OBJECT_BATCH]
    }

    fn execute(
        &self,
        verb: &str,
        args: &mut LineCursor<'_>,
        scene: &mut dyn SceneContainer,
    ) -> Response {
        match verb {
            ADD_OBJECT => respond(self.add_object(args, scene)),
            ADD_OBJECT_BATCH => self.add_object_batch(args, scene),
            _ => unroutable(verb),
        }
    }
}

/// Duplicates an object: `DuplicateObject <source> <name> [transform]`.
///
/// Answers `"0"` when the duplicate got the requested name, `"3 <assigned>"`
/// when the container had to assign another one, `"4"` when duplication
/// produced nothing.
pub struct DuplicateObjectCommand;

impl DuplicateObjectCommand {
    fn duplicate_object(
        &self,
        args: &mut LineCursor<'_>,
        scene: &mut dyn SceneContainer,
    ) -> Result<Response, SceneError> {
        let source_id = ObjectId::new(args.token_or_empty());
        let source = scene.find(&source_id);
        if source.is_none() {
            // Best-effort by contract: keep going, the duplicate step below
            // comes up empty-handed and reports the failure.
            log::info!("object '{source_id}' not found or invalid");
        }

        // the name that is desired for the duplicate
        let desired = args.token_or_empty();

        // isolate the selection to the source, then use the bulk primitive
        scene.select_none();
        if let Some(object) = source {
            scene.select(object);
        }
        scene.duplicate_selected();

        // the container reports the new object through the selection
        let Some(&duplicate) = scene.selection().first() else {
            return Ok(Response::DuplicateFailed);
        };

        apply_transform_text(scene, duplicate, args.rest());
        scene.request_redraw();

        // A unique name was already assigned during duplication; honoring
        // the desired one when it is free saves the remote tool the work of
        // finding a new name itself.
        let assigned = reconcile(scene, duplicate, desired)?;
        if assigned.as_str() == desired {
            Ok(Response::Done)
        } else {
            Ok(Response::RenamedTo(assigned))
        }
    }
}

impl CommandHandler for DuplicateObjectCommand {
    fn verbs(&self) -> &'static [&'static str] {
        &[DUPLICATE_OBJECT]
    }

    fn execute(
        &self,
        verb: &str,
        args: &mut LineCursor<'_>,
        scene: &mut dyn SceneContainer,
    ) -> Response {
        match verb {
            DUPLICATE_OBJECT => respond(self.duplicate_object(args, scene)),
            _ => unroutable(verb),
        }
    }
}

/// Deletes the selection (`DeleteSelected`) or a named object
/// (`DeleteObject <name>`).
///
/// There is no single-object delete primitive in the container; deletion of
/// a named object selects it and uses the bulk path. The previous selection
/// is not restored afterwards.
pub struct DeleteObjectCommand;

impl DeleteObjectCommand {
    fn delete_object(&self, args: &mut LineCursor<'_>, scene: &mut dyn SceneContainer) -> Response {
        let id = ObjectId::new(args.token_or_empty());
        scene.select_none();
        match scene.find(&id) {
            Some(object) => scene.select(object),
            None => log::warn!("object '{id}' not found or invalid"),
        }
        scene.delete_selected();
        Response::Ok
    }
}

impl CommandHandler for DeleteObjectCommand {
    fn verbs(&self) -> &'static [&'static str] {
        &[DELETE_SELECTED, DELETE_OBJECT]
    }

    fn execute(
        &self,
        verb: &str,
        args: &mut LineCursor<'_>,
        scene: &mut dyn SceneContainer,
    ) -> Response {
        match verb {
            DELETE_SELECTED => {
                scene.delete_selected();
                Response::Ok
            }
            DELETE_OBJECT => self.delete_object(args, scene),
            _ => unroutable(verb),
        }
    }
}
