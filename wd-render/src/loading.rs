//! Model loading: registry entries become glTF loads, each load resolves into
//! exactly one [`ModelLoadOutcome`], and ready scenes are numbered and handed to
//! the [`Studio`].

use bevy::asset::LoadState;
use bevy::gltf::Gltf;
use bevy::prelude::*;
use bevy::scene::{SceneInstance, SceneSpawner};
use wd_core::{AssetRegistry, ModelId, Studio};

use crate::components::{AppliedPaint, ModelClips, ModelRoot, SceneReady, Submesh, SubmeshIndex};

pub struct PendingModel {
    pub id: ModelId,
    pub order: usize,
    pub handle: Handle<Gltf>,
}

#[derive(Resource, Default)]
pub struct PendingModels {
    pub entries: Vec<PendingModel>,
}

#[derive(Event, Debug, Clone)]
pub enum ModelLoadOutcome {
    Ready {
        id: ModelId,
        order: usize,
        scene: Handle<Scene>,
        clips: Vec<Handle<AnimationClip>>,
    },
    Failed {
        id: ModelId,
        reason: String,
    },
}

pub fn request_model_loads(
    asset_server: Res<AssetServer>,
    registry: Res<AssetRegistry>,
    mut pending: ResMut<PendingModels>,
) {
    if registry.is_empty() {
        warn!("no models configured, the stage will stay empty");
    }
    for (order, entry) in registry.iter().enumerate() {
        info!(model = %entry.id, path = %entry.path, "loading model");
        pending.entries.push(PendingModel {
            id: entry.id,
            order,
            handle: asset_server.load(entry.path.clone()),
        });
    }
}

pub fn poll_model_loads(
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
    mut pending: ResMut<PendingModels>,
    mut outcomes: EventWriter<ModelLoadOutcome>,
) {
    if pending.entries.is_empty() {
        return;
    }
    pending.entries.retain(|entry| {
        let state = asset_server.get_load_state(entry.handle.id());
        match resolve_load(entry, state, gltfs.get(&entry.handle)) {
            Some(outcome) => {
                outcomes.write(outcome);
                false
            }
            None => true,
        }
    });
}

/// `None` while the load is still in flight.
fn resolve_load(
    entry: &PendingModel,
    state: Option<LoadState>,
    gltf: Option<&Gltf>,
) -> Option<ModelLoadOutcome> {
    match state {
        Some(LoadState::Failed(err)) => Some(ModelLoadOutcome::Failed {
            id: entry.id,
            reason: err.to_string(),
        }),
        Some(LoadState::Loaded) => {
            let gltf = gltf?;
            let scene = gltf
                .default_scene
                .clone()
                .or_else(|| gltf.scenes.first().cloned());
            Some(match scene {
                Some(scene) => ModelLoadOutcome::Ready {
                    id: entry.id,
                    order: entry.order,
                    scene,
                    clips: gltf.animations.clone(),
                },
                None => ModelLoadOutcome::Failed {
                    id: entry.id,
                    reason: "asset contains no scene".to_string(),
                },
            })
        }
        Some(LoadState::NotLoaded | LoadState::Loading) => None,
        None => Some(ModelLoadOutcome::Failed {
            id: entry.id,
            reason: "asset server lost track of the load".to_string(),
        }),
    }
}

pub fn spawn_loaded_models(mut commands: Commands, mut outcomes: EventReader<ModelLoadOutcome>) {
    for outcome in outcomes.read() {
        match outcome {
            ModelLoadOutcome::Ready {
                id,
                order,
                scene,
                clips,
            } => {
                debug!(model = %id, clips = clips.len(), "spawning model scene");
                commands.spawn((
                    Name::new(format!("model:{id}")),
                    ModelRoot {
                        id: *id,
                        order: *order,
                    },
                    ModelClips(clips.clone()),
                    SceneRoot(scene.clone()),
                    Transform::default(),
                    Visibility::Hidden,
                ));
            }
            ModelLoadOutcome::Failed { id, reason } => {
                error!(model = %id, %reason, "model failed to load");
            }
        }
    }
}

/// Pre-order walk below `root` collecting entities accepted by `is_submesh`.
/// The root itself is never included.
pub fn walk_submeshes<'a>(
    root: Entity,
    children_of: impl Fn(Entity) -> Option<&'a [Entity]>,
    is_submesh: impl Fn(Entity) -> bool,
) -> Vec<Entity> {
    let mut found = Vec::new();
    let mut stack = vec![root];
    while let Some(entity) = stack.pop() {
        if entity != root && is_submesh(entity) {
            found.push(entity);
        }
        if let Some(children) = children_of(entity) {
            stack.extend(children.iter().rev());
        }
    }
    found
}

pub fn mark_ready_scenes(
    mut commands: Commands,
    scene_spawner: Res<SceneSpawner>,
    roots: Query<(Entity, &SceneInstance), (With<ModelRoot>, Without<SceneReady>)>,
) {
    for (root, instance) in &roots {
        if scene_spawner.instance_is_ready(**instance) {
            commands.entity(root).insert(SceneReady);
        }
    }
}

/// Numbers the sub-meshes of every ready scene and registers the model. A
/// model that does not fit its slot table is despawned.
pub fn index_ready_models(
    mut commands: Commands,
    roots: Query<(Entity, &ModelRoot, &ModelClips), (With<SceneReady>, Without<SubmeshIndex>)>,
    children: Query<&Children>,
    submeshes: Query<(&MeshMaterial3d<StandardMaterial>, &Transform)>,
    mut players: Query<&mut AnimationPlayer>,
    mut graphs: ResMut<Assets<AnimationGraph>>,
    mut studio: ResMut<Studio>,
) {
    for (root, model, clips) in &roots {
        let children_of = |entity: Entity| children.get(entity).ok().map(|c| &**c);
        let parts = walk_submeshes(root, children_of, |entity| submeshes.contains(entity));
        let player_entities = walk_submeshes(root, children_of, |entity| players.contains(entity));
        let animated = !clips.0.is_empty() && !player_entities.is_empty();

        if let Err(err) = studio.register(model.id, model.order, parts.len(), animated) {
            error!(model = %model.id, %err, "model does not match its slot table, dropping it");
            commands.entity(root).despawn();
            continue;
        }

        for (ordinal, &entity) in parts.iter().enumerate() {
            let Ok((material, transform)) = submeshes.get(entity) else {
                continue;
            };
            commands.entity(entity).insert((
                Submesh {
                    model: model.id,
                    ordinal,
                    original_material: material.0.clone(),
                    original_transform: *transform,
                },
                AppliedPaint::default(),
            ));
        }

        if animated {
            let (graph, nodes) = AnimationGraph::from_clips(clips.0.iter().cloned());
            let graph = graphs.add(graph);
            if let Some(&first) = nodes.first() {
                for &entity in &player_entities {
                    if let Ok(mut player) = players.get_mut(entity) {
                        player.play(first).repeat();
                    }
                    commands
                        .entity(entity)
                        .insert(AnimationGraphHandle(graph.clone()));
                }
            }
        }

        info!(
            model = %model.id,
            submeshes = parts.len(),
            animated,
            "model ready"
        );
        commands.entity(root).insert(SubmeshIndex(parts));
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn walk_is_preorder_and_skips_root() {
        let e = |n: u32| Entity::from_raw(n);
        // 0
        // ├── 1 (mesh)
        // │   ├── 2 (mesh)
        // │   └── 3
        // │       └── 4 (mesh)
        // └── 5 (mesh)
        let tree: HashMap<Entity, Vec<Entity>> = HashMap::from([
            (e(0), vec![e(1), e(5)]),
            (e(1), vec![e(2), e(3)]),
            (e(3), vec![e(4)]),
        ]);
        let meshes = [e(0), e(1), e(2), e(4), e(5)];

        let found = walk_submeshes(
            e(0),
            |entity| tree.get(&entity).map(Vec::as_slice),
            |entity| meshes.contains(&entity),
        );
        assert_eq!(found, vec![e(1), e(2), e(4), e(5)]);
    }

    #[test]
    fn pending_load_stays_pending() {
        let entry = PendingModel {
            id: ModelId::Athletic,
            order: 1,
            handle: Handle::default(),
        };
        assert!(resolve_load(&entry, Some(LoadState::Loading), None).is_none());
        assert!(resolve_load(&entry, Some(LoadState::NotLoaded), None).is_none());
        // Loaded but not yet visible in `Assets`.
        assert!(resolve_load(&entry, Some(LoadState::Loaded), None).is_none());
    }

    #[test]
    fn untracked_load_is_a_failure() {
        let entry = PendingModel {
            id: ModelId::Formal,
            order: 2,
            handle: Handle::default(),
        };
        assert!(matches!(
            resolve_load(&entry, None, None),
            Some(ModelLoadOutcome::Failed {
                id: ModelId::Formal,
                ..
            })
        ));
    }
}
