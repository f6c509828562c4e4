use bevy::prelude::*;

use crate::components::StageCamera;

const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 1.3, 5.0);
const CAMERA_TARGET: Vec3 = Vec3::new(0.0, 1.0, 0.0);

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        StageCamera,
        Projection::from(PerspectiveProjection {
            fov: 40f32.to_radians(),
            near: 0.1,
            far: 100.0,
            ..default()
        }),
        Transform::from_translation(CAMERA_POSITION).looking_at(CAMERA_TARGET, Vec3::Y),
    ));
}
