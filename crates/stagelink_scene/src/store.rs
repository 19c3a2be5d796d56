//! Reference in-memory scene container.
//!
//! `SceneWorld` is the container hosts use when the editor does not bring its
//! own, and the container every test runs against. It keeps objects in a vec
//! with handle and identifier indexes, resolves asset creation through the
//! registered factories (first capable factory wins), and journals every
//! mutation it performs.
//!
//! It deliberately does NOT keep display labels in sync with identifiers:
//! factories label objects after their asset and duplication copies the
//! source label verbatim. Keeping the two synchronized is the bridge
//! reconciler's contract, not the container's.

use std::collections::HashMap;

use crate::container::{RenameMode, SceneContainer, SceneError};
use crate::events::SceneEvent;
use crate::factory::{
    AssetKind, AssetRecord, LightFactory, MeshFactory, MeshShape, ObjectFactory, ObjectKind,
};
use crate::object::{ObjectHandle, ObjectId, Transform, TransformDelta};
use crate::selection::SelectionManager;

/// A live scene object with all its properties.
#[derive(Clone, Debug)]
pub struct SceneObject {
    /// Container-issued handle
    pub handle: ObjectHandle,
    /// Unique identifier
    pub id: ObjectId,
    /// Display label; not required to match `id`
    pub label: String,
    /// What the object is an instance of
    pub kind: ObjectKind,
    /// Asset path the object was created from
    pub source_asset: String,
    /// World transform
    pub transform: Transform,
    /// Attach-parent (for hierarchy)
    pub parent: Option<ObjectHandle>,
    /// Attached children
    pub children: Vec<ObjectHandle>,
}

/// In-memory scene container.
pub struct SceneWorld {
    objects: Vec<SceneObject>,
    handle_index: HashMap<ObjectHandle, usize>,
    id_index: HashMap<ObjectId, ObjectHandle>,
    next_handle: u32,
    selection: SelectionManager,
    factories: Vec<Box<dyn ObjectFactory>>,
    assets: HashMap<String, AssetKind>,
    journal: Vec<SceneEvent>,
}

impl SceneWorld {
    /// Create an empty world with no factories or assets registered.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            handle_index: HashMap::new(),
            id_index: HashMap::new(),
            next_handle: 1,
            selection: SelectionManager::new(),
            factories: Vec::new(),
            assets: HashMap::new(),
            journal: Vec::new(),
        }
    }

    /// Create a world with the builtin factories and the primitive asset
    /// catalog (`/assets/primitives/<shape>`, `/assets/lights/point`).
    pub fn with_builtin_assets() -> Self {
        let mut world = Self::new();
        world.register_factory(Box::new(MeshFactory));
        world.register_factory(Box::new(LightFactory));
        for &shape in MeshShape::all() {
            let path = format!("/assets/primitives/{}", shape.name().to_ascii_lowercase());
            world.register_asset(path, AssetKind::Mesh(shape));
        }
        world.register_asset("/assets/lights/point", AssetKind::Light);
        world
    }

    /// Register an object factory. Creation tries factories in registration
    /// order and the first capable one wins.
    pub fn register_factory(&mut self, factory: Box<dyn ObjectFactory>) {
        self.factories.push(factory);
    }

    /// Register an asset under a path.
    pub fn register_asset(&mut self, path: impl Into<String>, kind: AssetKind) {
        self.assets.insert(path.into(), kind);
    }

    /// Number of live objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Read access to a live object.
    pub fn object(&self, handle: ObjectHandle) -> Option<&SceneObject> {
        let idx = *self.handle_index.get(&handle)?;
        self.objects.get(idx)
    }

    /// All live objects, in creation order.
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Mutations recorded since the journal was last drained.
    pub fn journal(&self) -> &[SceneEvent] {
        &self.journal
    }

    /// Drain the journal.
    pub fn take_journal(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.journal)
    }

    fn object_mut(&mut self, handle: ObjectHandle) -> Option<&mut SceneObject> {
        let idx = *self.handle_index.get(&handle)?;
        self.objects.get_mut(idx)
    }

    fn alloc_handle(&mut self) -> ObjectHandle {
        let handle = ObjectHandle(self.next_handle);
        self.next_handle += 1;
        handle
    }

    /// Index a new object, link its parent edge, and journal the creation.
    fn insert_object(&mut self, object: SceneObject) {
        let handle = object.handle;
        let id = object.id.clone();
        let parent = object.parent;
        self.handle_index.insert(handle, self.objects.len());
        self.id_index.insert(id.clone(), handle);
        self.objects.push(object);
        if let Some(parent) = parent {
            if let Some(entry) = self.object_mut(parent) {
                entry.children.push(handle);
            }
        }
        self.journal.push(SceneEvent::Created { id });
    }

    /// Unlink and remove an object. Children are orphaned to the root, not
    /// deleted with their parent.
    fn remove_object(&mut self, handle: ObjectHandle) -> Option<SceneObject> {
        let idx = *self.handle_index.get(&handle)?;
        let object = self.objects.remove(idx);
        self.handle_index.remove(&handle);
        self.id_index.remove(&object.id);
        for (i, entry) in self.objects.iter().enumerate().skip(idx) {
            self.handle_index.insert(entry.handle, i);
        }
        if let Some(parent) = object.parent {
            if let Some(entry) = self.object_mut(parent) {
                entry.children.retain(|&c| c != handle);
            }
        }
        for &child in &object.children {
            if let Some(entry) = self.object_mut(child) {
                entry.parent = None;
            }
        }
        self.selection.remove_object(handle);
        Some(object)
    }
}

impl Default for SceneWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneContainer for SceneWorld {
    fn find(&self, id: &ObjectId) -> Option<ObjectHandle> {
        self.id_index.get(id).copied()
    }

    fn identifier(&self, object: ObjectHandle) -> Option<ObjectId> {
        self.object(object).map(|entry| entry.id.clone())
    }

    fn label(&self, object: ObjectHandle) -> Option<String> {
        self.object(object).map(|entry| entry.label.clone())
    }

    fn set_label(&mut self, object: ObjectHandle, label: &str) -> Result<(), SceneError> {
        let entry = self.object_mut(object).ok_or(SceneError::StaleHandle(object))?;
        entry.label = label.to_string();
        let id = entry.id.clone();
        self.journal.push(SceneEvent::Relabeled { id, label: label.to_string() });
        Ok(())
    }

    fn rename(
        &mut self,
        object: ObjectHandle,
        target: &ObjectId,
        mode: RenameMode,
    ) -> Result<(), SceneError> {
        let idx = *self.handle_index.get(&object).ok_or(SceneError::StaleHandle(object))?;
        if !target.is_valid() {
            return Err(SceneError::InvalidIdentifier(target.as_str().to_string()));
        }
        if let Some(&holder) = self.id_index.get(target) {
            if holder != object {
                return Err(SceneError::IdentifierTaken(target.clone()));
            }
        }
        if mode == RenameMode::Probe {
            return Ok(());
        }
        let old = self.objects[idx].id.clone();
        if old == *target {
            return Ok(());
        }
        self.id_index.remove(&old);
        self.id_index.insert(target.clone(), object);
        self.objects[idx].id = target.clone();
        self.journal.push(SceneEvent::Renamed { from: old, to: target.clone() });
        Ok(())
    }

    fn create_from_asset(
        &mut self,
        asset: &str,
        _requested: &ObjectId,
    ) -> Result<ObjectHandle, SceneError> {
        let kind = *self
            .assets
            .get(asset)
            .ok_or_else(|| SceneError::AssetNotFound(asset.to_string()))?;
        let record = AssetRecord { path: asset.to_string(), kind };
        let seed = self
            .factories
            .iter()
            .find(|factory| factory.can_create(&record))
            .map(|factory| factory.create(&record))
            .ok_or_else(|| SceneError::NoFactory(asset.to_string()))?;
        // Factories assign an asset-derived identifier regardless of the
        // requested one; callers that care about the identifier rename the
        // object afterwards. A fresh object's label starts out as its
        // identifier.
        let id = self.free_identifier(&ObjectId::sanitized(&seed.label));
        let handle = self.alloc_handle();
        log::debug!("created '{id}' from '{asset}'");
        self.insert_object(SceneObject {
            handle,
            id: id.clone(),
            label: id.as_str().to_string(),
            kind: seed.kind,
            source_asset: asset.to_string(),
            transform: seed.transform,
            parent: None,
            children: Vec::new(),
        });
        Ok(handle)
    }

    fn select_none(&mut self) {
        self.selection.clear();
    }

    fn select(&mut self, object: ObjectHandle) {
        if self.handle_index.contains_key(&object) {
            self.selection.add(object);
        }
    }

    fn selection(&self) -> Vec<ObjectHandle> {
        self.selection.selected().to_vec()
    }

    fn duplicate_selected(&mut self) {
        let sources = self.selection.selected().to_vec();
        let mut duplicates = Vec::new();
        for source in sources {
            let Some(prototype) = self.object(source).cloned() else { continue };
            let id = self.free_identifier(&prototype.id);
            let handle = self.alloc_handle();
            log::debug!("duplicated '{}' as '{}'", prototype.id, id);
            // The label is copied verbatim, so a duplicate starts out with
            // its source's label and its own identifier.
            self.insert_object(SceneObject {
                handle,
                id,
                label: prototype.label.clone(),
                kind: prototype.kind,
                source_asset: prototype.source_asset.clone(),
                transform: prototype.transform,
                parent: prototype.parent,
                children: Vec::new(),
            });
            duplicates.push(handle);
        }
        self.selection.select_multiple(duplicates);
    }

    fn delete_selected(&mut self) {
        let doomed = self.selection.selected().to_vec();
        for handle in doomed {
            if let Some(object) = self.remove_object(handle) {
                self.journal.push(SceneEvent::Deleted { id: object.id });
            }
        }
    }

    fn parent_of(&self, object: ObjectHandle) -> Option<ObjectHandle> {
        self.object(object).and_then(|entry| entry.parent)
    }

    fn attach(&mut self, child: ObjectHandle, parent: ObjectHandle) -> Result<(), SceneError> {
        let child_id = self.identifier(child).ok_or(SceneError::StaleHandle(child))?;
        let parent_id = self.identifier(parent).ok_or(SceneError::StaleHandle(parent))?;
        // Walking up from `parent` must not reach `child`.
        let mut cursor = Some(parent);
        while let Some(at) = cursor {
            if at == child {
                return Err(SceneError::AttachCycle);
            }
            cursor = self.parent_of(at);
        }
        if let Some(old) = self.parent_of(child) {
            if let Some(entry) = self.object_mut(old) {
                entry.children.retain(|&c| c != child);
            }
        }
        if let Some(entry) = self.object_mut(child) {
            entry.parent = Some(parent);
        }
        if let Some(entry) = self.object_mut(parent) {
            entry.children.push(child);
        }
        self.journal.push(SceneEvent::Attached { child: child_id, parent: parent_id });
        Ok(())
    }

    fn detach(&mut self, child: ObjectHandle) {
        let Some(entry) = self.object_mut(child) else { return };
        let Some(parent) = entry.parent.take() else { return };
        if let Some(entry) = self.object_mut(parent) {
            entry.children.retain(|&c| c != child);
        }
    }

    fn notify_detached(&mut self, child: ObjectHandle, old_parent: ObjectHandle) {
        let (Some(child_id), Some(parent_id)) =
            (self.identifier(child), self.identifier(old_parent))
        else {
            return;
        };
        self.journal.push(SceneEvent::Detached { child: child_id, old_parent: parent_id });
    }

    fn apply_transform_relative(&mut self, object: ObjectHandle, delta: &TransformDelta) {
        let Some(entry) = self.object_mut(object) else { return };
        entry.transform.apply_delta(delta);
        let id = entry.id.clone();
        self.journal.push(SceneEvent::TransformChanged { id });
    }

    fn request_redraw(&mut self) {
        self.journal.push(SceneEvent::RedrawRequested);
    }
}
