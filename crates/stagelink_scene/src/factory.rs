//! Asset catalog and object factories.
//!
//! Creation goes through registered factories: the first factory that can
//! instantiate the given asset kind wins. Factories hand back a seed (kind,
//! default label, starting transform); the container turns the seed into a
//! live object and assigns the identifier.

use crate::object::Transform;

/// Primitive mesh shapes the reference container knows how to instantiate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshShape {
    Cube,
    Sphere,
    Cylinder,
    Diamond,
    Torus,
    Plane,
}

impl MeshShape {
    pub fn name(&self) -> &'static str {
        match self {
            MeshShape::Cube => "Cube",
            MeshShape::Sphere => "Sphere",
            MeshShape::Cylinder => "Cylinder",
            MeshShape::Diamond => "Diamond",
            MeshShape::Torus => "Torus",
            MeshShape::Plane => "Plane",
        }
    }

    pub fn all() -> &'static [MeshShape] {
        &[
            MeshShape::Cube,
            MeshShape::Sphere,
            MeshShape::Cylinder,
            MeshShape::Diamond,
            MeshShape::Torus,
            MeshShape::Plane,
        ]
    }
}

/// What an asset resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    Mesh(MeshShape),
    Light,
}

/// A catalog entry: an asset path and what it is.
#[derive(Clone, Debug, PartialEq)]
pub struct AssetRecord {
    pub path: String,
    pub kind: AssetKind,
}

/// What a created object is an instance of.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectKind {
    MeshInstance(MeshShape),
    Light,
}

/// Blueprint for a new object, produced by a factory.
pub struct ObjectSeed {
    pub kind: ObjectKind,
    /// Default display label, derived from the asset (not from the caller's
    /// requested identifier).
    pub label: String,
    pub transform: Transform,
}

/// A unit able to instantiate objects from some class of assets.
pub trait ObjectFactory {
    fn name(&self) -> &'static str;

    /// Whether this factory can instantiate `asset`.
    fn can_create(&self, asset: &AssetRecord) -> bool;

    /// Build a seed for `asset`. Only called after `can_create` agreed.
    fn create(&self, asset: &AssetRecord) -> ObjectSeed;
}

/// Factory for mesh assets.
pub struct MeshFactory;

impl ObjectFactory for MeshFactory {
    fn name(&self) -> &'static str {
        "MeshFactory"
    }

    fn can_create(&self, asset: &AssetRecord) -> bool {
        matches!(asset.kind, AssetKind::Mesh(_))
    }

    fn create(&self, asset: &AssetRecord) -> ObjectSeed {
        let shape = match asset.kind {
            AssetKind::Mesh(shape) => shape,
            // can_create gates the kind; anything else is a registry bug
            AssetKind::Light => MeshShape::Cube,
        };
        ObjectSeed {
            kind: ObjectKind::MeshInstance(shape),
            label: shape.name().to_string(),
            transform: Transform::new(),
        }
    }
}

/// Factory for light assets.
pub struct LightFactory;

impl ObjectFactory for LightFactory {
    fn name(&self) -> &'static str {
        "LightFactory"
    }

    fn can_create(&self, asset: &AssetRecord) -> bool {
        asset.kind == AssetKind::Light
    }

    fn create(&self, _asset: &AssetRecord) -> ObjectSeed {
        ObjectSeed {
            kind: ObjectKind::Light,
            label: "Light".to_string(),
            transform: Transform::new(),
        }
    }
}
