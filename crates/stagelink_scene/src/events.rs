//! Scene change journal.
//!
//! [`SceneWorld`](crate::SceneWorld) records every mutation it performs as a
//! [`SceneEvent`]. Hosts drain the journal to keep dependent views (outliner,
//! viewport) consistent; tests read it to assert which mutating calls a
//! command did or did not issue.

use crate::object::ObjectId;

/// One observed scene mutation.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneEvent {
    /// An object entered the scene.
    Created { id: ObjectId },
    /// An object's identifier changed.
    Renamed { from: ObjectId, to: ObjectId },
    /// An object's display label changed.
    Relabeled { id: ObjectId, label: String },
    /// An object was attached under a parent.
    Attached { child: ObjectId, parent: ObjectId },
    /// An object was detached from its parent.
    Detached { child: ObjectId, old_parent: ObjectId },
    /// An object left the scene.
    Deleted { id: ObjectId },
    /// An object's transform changed.
    TransformChanged { id: ObjectId },
    /// A viewport redraw was requested.
    RedrawRequested,
}
