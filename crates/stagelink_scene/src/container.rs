//! The scene-container capability interface.
//!
//! Everything the bridge does to a scene goes through [`SceneContainer`];
//! the bridge never holds objects itself, only identifiers and short-lived
//! handles looked up per command.

use crate::object::{ObjectHandle, ObjectId, TransformDelta};

/// Errors reported by a scene container.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("stale object handle {0:?}")]
    StaleHandle(ObjectHandle),

    #[error("identifier '{0}' is already in use")]
    IdentifierTaken(ObjectId),

    #[error("'{0}' is not a valid identifier")]
    InvalidIdentifier(String),

    #[error("asset not found: {0}")]
    AssetNotFound(String),

    #[error("no factory can instantiate asset '{0}'")]
    NoFactory(String),

    #[error("attachment would create a cycle")]
    AttachCycle,
}

/// How a rename request is to be carried out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenameMode {
    /// Availability check only; the container must not mutate anything.
    Probe,
    /// Perform the rename. Non-transactional and does not dirty the scene.
    Commit,
}

/// Capabilities a scene container exposes to the bridge.
///
/// Deletion and duplication operate on the current selection; there is no
/// single-object primitive for either, callers isolate the selection first.
/// The container is also the authority on attachment cycles; the bridge only
/// rejects attach-to-self.
pub trait SceneContainer {
    /// Look up a live object by identifier.
    fn find(&self, id: &ObjectId) -> Option<ObjectHandle>;

    /// The identifier currently assigned to `object`.
    fn identifier(&self, object: ObjectHandle) -> Option<ObjectId>;

    /// The display label currently assigned to `object`.
    fn label(&self, object: ObjectHandle) -> Option<String>;

    /// Set the display label. Never alters the identifier.
    fn set_label(&mut self, object: ObjectHandle, label: &str) -> Result<(), SceneError>;

    /// Probe or commit a rename of `object` to `target`.
    fn rename(
        &mut self,
        object: ObjectHandle,
        target: &ObjectId,
        mode: RenameMode,
    ) -> Result<(), SceneError>;

    /// Create an object from an asset, requesting `requested` as its
    /// identifier. The container may assign a different identifier; callers
    /// that need a specific one must reconcile afterwards.
    fn create_from_asset(
        &mut self,
        asset: &str,
        requested: &ObjectId,
    ) -> Result<ObjectHandle, SceneError>;

    /// Clear the current selection.
    fn select_none(&mut self);

    /// Add `object` to the current selection.
    fn select(&mut self, object: ObjectHandle);

    /// The current selection, in selection order.
    fn selection(&self) -> Vec<ObjectHandle>;

    /// Duplicate every selected object; the duplicates become the selection.
    fn duplicate_selected(&mut self);

    /// Delete every selected object.
    fn delete_selected(&mut self);

    /// The attach-parent of `object`, if any.
    fn parent_of(&self, object: ObjectHandle) -> Option<ObjectHandle>;

    /// Attach `child` under `parent`.
    fn attach(&mut self, child: ObjectHandle, parent: ObjectHandle) -> Result<(), SceneError>;

    /// Detach `child` from its parent. A no-op when it has none. Does not
    /// broadcast; callers follow up with [`notify_detached`].
    ///
    /// [`notify_detached`]: SceneContainer::notify_detached
    fn detach(&mut self, child: ObjectHandle);

    /// Tell dependent listeners (outliner views and the like) that `child`
    /// was detached from `old_parent`.
    fn notify_detached(&mut self, child: ObjectHandle, old_parent: ObjectHandle);

    /// Apply a transform delta relative to the object's current transform.
    fn apply_transform_relative(&mut self, object: ObjectHandle, delta: &TransformDelta);

    /// Ask the host to redraw its viewports.
    fn request_redraw(&mut self);

    /// Return `candidate` when no live object holds it, else the first free
    /// numeric-suffix variant. A candidate already ending in `_<n>` keeps
    /// its stem and counts on from `n + 1`.
    fn free_identifier(&self, candidate: &ObjectId) -> ObjectId {
        if self.find(candidate).is_none() {
            return candidate.clone();
        }
        let (stem, suffix) = candidate.split_numeric_suffix();
        let mut n = suffix.map_or(1, |s| s.saturating_add(1));
        loop {
            let probe = ObjectId::new(format!("{stem}_{n}"));
            if self.find(&probe).is_none() {
                return probe;
            }
            n += 1;
        }
    }
}
