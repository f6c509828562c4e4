use bevy::prelude::*;
use wd_core::{Paint, Studio, StudioConfig};

use crate::components::{AppliedPaint, ModelRoot, Submesh, SubmeshIndex};

pub fn tick_carousel(mut studio: ResMut<Studio>, config: Res<StudioConfig>) {
    if !studio.carousel().is_transitioning() {
        return;
    }
    if studio.tick(config.carousel.rotation_step) {
        debug!(model = ?studio.active_model(), "spin finished");
    }
}

pub fn sync_model_roots(
    studio: Res<Studio>,
    mut roots: Query<(&ModelRoot, &mut Transform, &mut Visibility), With<SubmeshIndex>>,
) {
    for (root, mut transform, mut visibility) in &mut roots {
        let Some(variant) = studio.carousel().variant(root.id) else {
            continue;
        };
        visibility.set_if_neq(if variant.visible() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        });
        let rotation = Quat::from_rotation_y(variant.yaw());
        if transform.rotation != rotation {
            transform.rotation = rotation;
        }
    }
}

/// Opaque material with default shading for a picked color.
pub fn solid_material(color: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: color,
        ..default()
    }
}

pub fn sync_submesh_paint(
    studio: Res<Studio>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut submeshes: Query<(&Submesh, &mut MeshMaterial3d<StandardMaterial>, &mut AppliedPaint)>,
) {
    if !studio.is_changed() {
        return;
    }
    for (submesh, mut material, mut applied) in &mut submeshes {
        let desired = studio
            .paint_of(submesh.model, submesh.ordinal)
            .unwrap_or_default();
        if applied.0 == desired {
            continue;
        }
        material.0 = match desired {
            Paint::Original => submesh.original_material.clone(),
            Paint::Solid(color) => materials.add(solid_material(color)),
        };
        applied.0 = desired;
    }
}
