//! # Stagelink Scene
//!
//! Scene-object model and container surface for the Stagelink bridge:
//! - Object identifiers, handles, and transforms
//! - The [`SceneContainer`] capability trait the bridge drives scenes through
//! - Identifier allocation (free-name search with numeric suffixes)
//! - [`SceneWorld`], a reference in-memory container with object factories,
//!   an asset catalog, selection management, and a mutation journal
//!
//! The bridge core never owns scene objects. It looks them up by identifier,
//! keeps a handle for the duration of one command, and mutates through the
//! container's capabilities only.

pub mod container;
pub mod events;
pub mod factory;
pub mod object;
pub mod selection;
pub mod store;

pub use container::{RenameMode, SceneContainer, SceneError};
pub use events::SceneEvent;
pub use factory::{
    AssetKind, AssetRecord, LightFactory, MeshFactory, MeshShape, ObjectFactory, ObjectKind,
    ObjectSeed,
};
pub use object::{ObjectHandle, ObjectId, Transform, TransformDelta};
pub use selection::SelectionManager;
pub use store::{SceneObject, SceneWorld};
