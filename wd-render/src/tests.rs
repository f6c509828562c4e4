use bevy::prelude::*;
use bevy::render::view::screenshot::Screenshot;
use wd_core::{BodyPart, ModelId, Paint, Step, Studio, StudioCommand, StudioConfig};

use crate::components::{
    AppliedPaint, CaptureTarget, ModelClips, ModelRoot, SceneReady, Submesh, SubmeshIndex,
};
use crate::{capture, control, loading, sync};

const STREETWEAR_MESHES: usize = 14;

struct Rig {
    app: App,
    root: Entity,
    parts: Vec<Entity>,
    originals: Vec<Handle<StandardMaterial>>,
}

fn rig() -> Rig {
    let mut app = App::new();
    app.init_resource::<Assets<StandardMaterial>>()
        .init_resource::<wd_core::StudioConfig>()
        .add_event::<StudioCommand>()
        .add_systems(
            Update,
            (
                control::apply_studio_commands,
                sync::tick_carousel,
                sync::sync_model_roots,
                sync::sync_submesh_paint,
            )
                .chain(),
        );

    let mut studio = Studio::default();
    studio
        .register(ModelId::Streetwear, 0, STREETWEAR_MESHES, false)
        .unwrap();
    app.insert_resource(studio);

    let mut parts = Vec::new();
    let mut originals = Vec::new();
    for ordinal in 0..STREETWEAR_MESHES {
        let original = app
            .world_mut()
            .resource_mut::<Assets<StandardMaterial>>()
            .add(StandardMaterial::default());
        let entity = app
            .world_mut()
            .spawn((
                Submesh {
                    model: ModelId::Streetwear,
                    ordinal,
                    original_material: original.clone(),
                    original_transform: Transform::default(),
                },
                AppliedPaint::default(),
                MeshMaterial3d(original.clone()),
                Transform::default(),
            ))
            .id();
        parts.push(entity);
        originals.push(original);
    }
    let root = app
        .world_mut()
        .spawn((
            ModelRoot {
                id: ModelId::Streetwear,
                order: 0,
            },
            SubmeshIndex(parts.clone()),
            Transform::default(),
            Visibility::Hidden,
        ))
        .id();
    app.update();

    Rig {
        app,
        root,
        parts,
        originals,
    }
}

fn material_of(app: &App, entity: Entity) -> Handle<StandardMaterial> {
    app.world()
        .get::<MeshMaterial3d<StandardMaterial>>(entity)
        .unwrap()
        .0
        .clone()
}

fn base_color(app: &App, handle: &Handle<StandardMaterial>) -> Color {
    app.world()
        .resource::<Assets<StandardMaterial>>()
        .get(handle)
        .unwrap()
        .base_color
}

#[test]
fn swatch_click_recolors_only_listed_parts() {
    let mut rig = rig();
    rig.app.world_mut().send_event(StudioCommand::ApplyColor {
        part: BodyPart::Hair,
        index: 3,
    });
    rig.app.update();

    let expected = rig
        .app
        .world()
        .resource::<Studio>()
        .palette()
        .color(BodyPart::Hair, 3)
        .unwrap();
    for (ordinal, &entity) in rig.parts.iter().enumerate() {
        let handle = material_of(&rig.app, entity);
        if [0, 1, 10, 11].contains(&ordinal) {
            assert_ne!(handle, rig.originals[ordinal]);
            assert_eq!(base_color(&rig.app, &handle), expected);
            assert_eq!(
                rig.app.world().get::<AppliedPaint>(entity),
                Some(&AppliedPaint(Paint::Solid(expected)))
            );
        } else {
            assert_eq!(handle, rig.originals[ordinal], "ordinal {ordinal} touched");
        }
    }
}

#[test]
fn reset_restores_materials_and_transforms() {
    let mut rig = rig();
    rig.app.world_mut().send_event(StudioCommand::ApplyColor {
        part: BodyPart::Top,
        index: 1,
    });
    rig.app.update();

    let moved = rig.parts[5];
    rig.app
        .world_mut()
        .get_mut::<Transform>(moved)
        .unwrap()
        .translation = Vec3::new(0.3, -1.0, 2.0);

    rig.app.world_mut().send_event(StudioCommand::ResetAll);
    rig.app.update();

    for (ordinal, &entity) in rig.parts.iter().enumerate() {
        assert_eq!(material_of(&rig.app, entity), rig.originals[ordinal]);
        assert_eq!(
            rig.app.world().get::<AppliedPaint>(entity),
            Some(&AppliedPaint(Paint::Original))
        );
    }
    assert_eq!(
        *rig.app.world().get::<Transform>(moved).unwrap(),
        Transform::default()
    );
}

#[test]
fn registered_model_is_shown_and_spins() {
    let mut rig = rig();
    let root = rig.root;
    assert_eq!(
        rig.app.world().get::<Visibility>(root),
        Some(&Visibility::Visible)
    );

    rig.app
        .world_mut()
        .send_event(StudioCommand::Navigate(Step::Next));
    rig.app.update();
    let studio = rig.app.world().resource::<Studio>();
    assert!(studio.carousel().is_transitioning());
    let yaw = studio.carousel().active().unwrap().yaw();
    let rotation = rig.app.world().get::<Transform>(root).unwrap().rotation;
    assert!(rotation.angle_between(Quat::from_rotation_y(yaw)) < 1e-4);
    assert!(yaw > 0.0);
}

#[test]
fn several_capture_requests_take_one_screenshot() {
    let dir = std::env::temp_dir().join("wd-render-capture");
    let mut config = StudioConfig::default();
    config.capture.directory = dir.clone();
    config.capture.file_name = "look.png".to_string();

    let mut app = App::new();
    app.insert_resource(config)
        .add_event::<StudioCommand>()
        .add_systems(Update, capture::capture_screenshot);

    app.world_mut().send_event(StudioCommand::Capture);
    app.world_mut().send_event(StudioCommand::ResetAll);
    app.world_mut().send_event(StudioCommand::Capture);
    app.update();

    let mut pending = app
        .world_mut()
        .query_filtered::<&CaptureTarget, With<Screenshot>>();
    let targets: Vec<CaptureTarget> = pending.iter(app.world()).cloned().collect();
    assert_eq!(targets, vec![CaptureTarget(dir.join("look.png"))]);

    // Nothing new requested.
    app.world_mut().send_event(StudioCommand::ResetAll);
    app.update();
    assert_eq!(pending.iter(app.world()).count(), 1);
}

fn indexing_app() -> App {
    let mut app = App::new();
    app.init_resource::<Studio>()
        .init_resource::<Assets<AnimationGraph>>()
        .add_systems(Update, loading::index_ready_models);
    app
}

/// Spawns a ready scene shaped like a glTF import: root, one node, then
/// `meshes` mesh entities.
fn spawn_scene(app: &mut App, model: ModelId, meshes: usize) -> (Entity, Vec<Entity>) {
    let world = app.world_mut();
    let root = world
        .spawn((
            ModelRoot {
                id: model,
                order: 0,
            },
            ModelClips::default(),
            SceneReady,
            Transform::default(),
            Visibility::Hidden,
        ))
        .id();
    let node = world.spawn(Transform::default()).id();
    world.entity_mut(root).add_child(node);

    let mut parts = Vec::new();
    for _ in 0..meshes {
        let part = world
            .spawn((
                MeshMaterial3d::<StandardMaterial>(Handle::default()),
                Transform::default(),
            ))
            .id();
        world.entity_mut(node).add_child(part);
        parts.push(part);
    }
    (root, parts)
}

#[test]
fn ready_scene_is_numbered_and_registered() {
    let mut app = indexing_app();
    let (root, parts) = spawn_scene(&mut app, ModelId::Streetwear, STREETWEAR_MESHES);
    app.update();

    let index = app.world().get::<SubmeshIndex>(root).unwrap();
    assert_eq!(index.0, parts);
    for (ordinal, &entity) in parts.iter().enumerate() {
        let submesh = app.world().get::<Submesh>(entity).unwrap();
        assert_eq!(submesh.ordinal, ordinal);
        assert_eq!(submesh.model, ModelId::Streetwear);
    }

    let studio = app.world().resource::<Studio>();
    let active = studio.carousel().active().unwrap();
    assert_eq!(active.id(), ModelId::Streetwear);
    assert_eq!(active.submesh_count(), STREETWEAR_MESHES);
    assert!(!active.animated());
}

#[test]
fn scene_smaller_than_its_slot_table_is_dropped() {
    let mut app = indexing_app();
    let (root, parts) = spawn_scene(&mut app, ModelId::Streetwear, 3);
    app.update();

    assert!(app.world().get_entity(root).is_err());
    assert!(app.world().get_entity(parts[0]).is_err());
    assert!(app.world().resource::<Studio>().carousel().is_empty());
}
