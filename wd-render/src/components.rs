use std::path::PathBuf;

use bevy::prelude::*;
use wd_core::{ModelId, Paint};

#[derive(Component)]
pub struct StageCamera;

#[derive(Component)]
pub struct StageRoot;

/// Root entity of one loaded character scene.
#[derive(Component, Debug, Clone, Copy)]
pub struct ModelRoot {
    pub id: ModelId,
    /// Position in the asset registry.
    pub order: usize,
}

#[derive(Component, Debug, Clone, Default)]
pub struct ModelClips(pub Vec<Handle<AnimationClip>>);

/// The scene instance has finished spawning and can be indexed.
#[derive(Component, Debug, Clone, Copy)]
pub struct SceneReady;

/// Present once the scene has spawned and its sub-meshes were numbered.
#[derive(Component, Debug, Clone)]
pub struct SubmeshIndex(pub Vec<Entity>);

/// One recolorable part of a model, addressed by its pre-order ordinal.
#[derive(Component, Debug, Clone)]
pub struct Submesh {
    pub model: ModelId,
    pub ordinal: usize,
    pub original_material: Handle<StandardMaterial>,
    /// Transform as spawned from the glTF scene, which is identity for mesh
    /// primitives. Reset restores this rather than forcing identity.
    pub original_transform: Transform,
}

/// Paint currently mirrored onto the entity's material.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct AppliedPaint(pub Paint);

/// File a pending screenshot will be written to.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct CaptureTarget(pub PathBuf);
