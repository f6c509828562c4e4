use bevy::prelude::*;

use crate::components::StageRoot;

#[derive(Resource)]
pub struct StageSettings {
    pub floor_radius: f32,
    pub floor_color: Color,
    pub backdrop_color: Color,
}

impl Default for StageSettings {
    fn default() -> Self {
        Self {
            floor_radius: 2.5,
            floor_color: Color::srgb(0.82, 0.8, 0.78),
            backdrop_color: Color::srgb(0.93, 0.91, 0.89),
        }
    }
}

pub fn setup_stage(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<StageSettings>,
) {
    commands.insert_resource(ClearColor(settings.backdrop_color));

    commands.spawn((
        StageRoot,
        Mesh3d(meshes.add(Circle::new(settings.floor_radius))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: settings.floor_color,
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::from_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2)),
    ));

    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            illuminance: 9_000.0,
            ..default()
        },
        Transform::from_xyz(3.0, 6.0, 4.0).looking_at(Vec3::new(0.0, 1.0, 0.0), Vec3::Y),
    ));

    // Rim light from behind so dark outfits keep a silhouette.
    commands.spawn((
        DirectionalLight {
            shadows_enabled: false,
            illuminance: 2_000.0,
            ..default()
        },
        Transform::from_xyz(-2.0, 4.0, -5.0).looking_at(Vec3::new(0.0, 1.0, 0.0), Vec3::Y),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.95, 0.95, 1.0),
        brightness: 400.0,
        affects_lightmapped_meshes: true,
    });
}
