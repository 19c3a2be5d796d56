//! Label/identifier reconciliation.
//!
//! The identifier is the object's primary key; the display label is what the
//! remote tool's user sees in the editor's outliner. The container lets the
//! two drift apart: factories label objects after their asset, duplication
//! copies the source label, and a plain rename never touches the label. A
//! desynced pair is confusing in exactly the worst way, the two sides agree
//! on the key while showing different names.
//!
//! [`reconcile`] is the one rename path the bridge uses. It derives a valid
//! candidate from the desired name, renames only when the candidate is
//! available, and then forces the label to the string form of whatever
//! identifier the container actually assigned.

use stagelink_scene::{ObjectHandle, ObjectId, RenameMode, SceneContainer, SceneError};

/// Rename `object` to `desired` and sync its label to the result.
///
/// Returns the identifier the object ends up with. Three outcomes share that
/// return channel:
/// - the rename happened: the result is the (possibly container-adjusted)
///   new identifier, and the label equals its string form;
/// - `desired` sanitized to nothing, or the candidate was unavailable: the
///   object is untouched and the result is its current identifier;
/// - the candidate already was the current identifier: no rename call is
///   issued and the current identifier comes back.
///
/// Callers that must know whether the desired name was honored compare it
/// against the result. `Err` is reserved for a stale handle.
pub fn reconcile(
    scene: &mut dyn SceneContainer,
    object: ObjectHandle,
    desired: &str,
) -> Result<ObjectId, SceneError> {
    let current = scene
        .identifier(object)
        .ok_or(SceneError::StaleHandle(object))?;

    // Nothing may survive sanitization (pure invalid input). The rename is
    // skipped; callers surface this as a non-fatal condition.
    let candidate = ObjectId::sanitized(desired);
    if candidate.is_empty() {
        log::warn!("rename of '{current}' skipped: '{desired}' leaves no valid identifier");
        return Ok(current);
    }

    // The "no name" sentinel is a valid identifier to assign, but the remote
    // tool expects a concrete name on its side. Substitute the fixed
    // placeholder instead of letting the object go anonymous.
    let candidate = if candidate.is_none_name() {
        ObjectId::generated()
    } else {
        candidate
    };

    // Same name already, either verbatim or differing only by stripped
    // characters.
    if candidate == current {
        return Ok(current);
    }

    if scene.rename(object, &candidate, RenameMode::Probe).is_err() {
        log::info!("identifier '{candidate}' unavailable, '{current}' keeps its name");
        return Ok(current);
    }
    scene.rename(object, &candidate, RenameMode::Commit)?;

    // Re-read: the container may have adjusted the committed identifier.
    let assigned = scene
        .identifier(object)
        .ok_or(SceneError::StaleHandle(object))?;
    scene.set_label(object, assigned.as_str())?;
    Ok(assigned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagelink_scene::{SceneEvent, SceneWorld};

    const CUBE: &str = "/assets/primitives/cube";

    fn world_with_cube() -> (SceneWorld, ObjectHandle) {
        let mut world = SceneWorld::with_builtin_assets();
        let cube = world
            .create_from_asset(CUBE, &ObjectId::new("ignored"))
            .unwrap();
        world.take_journal();
        (world, cube)
    }

    #[test]
    fn test_rename_syncs_label_to_identifier() {
        let (mut world, cube) = world_with_cube();
        let result = reconcile(&mut world, cube, "Chair").unwrap();

        assert_eq!(result.as_str(), "Chair");
        assert_eq!(world.identifier(cube).unwrap().as_str(), "Chair");
        assert_eq!(world.label(cube).unwrap(), "Chair");
    }

    #[test]
    fn test_invalid_characters_are_stripped_before_renaming() {
        let (mut world, cube) = world_with_cube();
        let result = reconcile(&mut world, cube, "Chair 1!").unwrap();

        assert_eq!(result.as_str(), "Chair1");
        assert_eq!(world.label(cube).unwrap(), "Chair1");
    }

    #[test]
    fn test_pure_invalid_input_is_a_no_op() {
        let (mut world, cube) = world_with_cube();

        for desired in ["", "###", "!! !!"] {
            let result = reconcile(&mut world, cube, desired).unwrap();
            assert_eq!(result.as_str(), "Cube");
        }
        assert!(world.journal().is_empty());
    }

    #[test]
    fn test_rename_to_current_name_issues_no_mutating_calls() {
        let (mut world, cube) = world_with_cube();
        let result = reconcile(&mut world, cube, "Cube").unwrap();

        assert_eq!(result.as_str(), "Cube");
        assert!(world.journal().is_empty());
    }

    #[test]
    fn test_sentinel_becomes_generated_placeholder() {
        let (mut world, cube) = world_with_cube();

        for desired in ["None", "none", "N!o!n!e"] {
            reconcile(&mut world, cube, desired).unwrap();
            assert_eq!(
                world.identifier(cube).unwrap().as_str(),
                ObjectId::GENERATED_NAME
            );
            // rename back for the next round
            reconcile(&mut world, cube, "Cube").unwrap();
        }
    }

    #[test]
    fn test_unavailable_name_keeps_current_identifier() {
        let (mut world, cube) = world_with_cube();
        let other = world
            .create_from_asset(CUBE, &ObjectId::new("ignored"))
            .unwrap();
        reconcile(&mut world, other, "Chair").unwrap();
        world.take_journal();

        let result = reconcile(&mut world, cube, "Chair").unwrap();
        assert_eq!(result.as_str(), "Cube");
        assert_eq!(world.identifier(cube).unwrap().as_str(), "Cube");
        // the probe alone must not have renamed or relabeled anything
        assert!(world.journal().is_empty());
    }

    #[test]
    fn test_successful_rename_journals_rename_then_relabel() {
        let (mut world, cube) = world_with_cube();
        reconcile(&mut world, cube, "Chair").unwrap();

        let journal = world.take_journal();
        assert_eq!(
            journal,
            vec![
                SceneEvent::Renamed {
                    from: ObjectId::new("Cube"),
                    to: ObjectId::new("Chair"),
                },
                SceneEvent::Relabeled {
                    id: ObjectId::new("Chair"),
                    label: "Chair".to_string(),
                },
            ]
        );
    }
}
