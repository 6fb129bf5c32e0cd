//! Scene setup and collidable registration.
//!
//! Surfaces the actor can stand on carry a [`Collidable`] marker; a
//! registration system feeds their world-space bounds into the ground
//! probe once the mesh asset is available. Registration is therefore
//! asynchronous relative to the frame loop and the actor may briefly have
//! no ground at all, which the integrator treats as open air.

use bevy::math::bounding::Aabb3d;
use bevy::prelude::*;
use bevy::render::mesh::MeshAabb;

use crate::shaders::water_material::{create_water_material, WaterMaterial, WaterMaterialHandle};
use sim::probe::GroundProbe;
use sim::waves::WaveParameters;

/// Marks a surface the ground probe should know about.
#[derive(Component)]
pub struct Collidable;

/// Present once the entity's bounds have been fed to the probe.
#[derive(Component)]
pub struct Registered;

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut water_materials: ResMut<Assets<WaterMaterial>>,
) {
    // Walkable ground: a flat slab with its top face at y = 0.
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(100.0, 1.0, 100.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.47, 0.47, 0.47),
            perceptual_roughness: 0.4,
            metallic: 0.3,
            ..default()
        })),
        Transform::from_xyz(0.0, -0.5, 0.0),
        Collidable,
    ));

    // A raised platform to jump onto and fall off of.
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(12.0, 3.0, 12.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.55, 0.5, 0.45),
            perceptual_roughness: 0.6,
            ..default()
        })),
        Transform::from_xyz(-18.0, 1.5, -12.0),
        Collidable,
    ));

    // The water plane sits above the ground and is deliberately not
    // collidable: the actor wades through the displaced surface.
    let water_handle = water_materials.add(create_water_material(&WaveParameters::default()));
    commands.spawn((
        Mesh3d(
            meshes.add(
                Plane3d::default()
                    .mesh()
                    .size(140.0, 140.0)
                    .subdivisions(256),
            ),
        ),
        MeshMaterial3d(water_handle.clone()),
        Transform::from_xyz(0.0, 2.0, 0.0),
    ));
    commands.insert_resource(WaterMaterialHandle {
        handle: water_handle,
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 6_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(5.0, 5.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
        ..default()
    });
}

/// Feeds newly available collidable bounds into the ground probe.
pub fn register_collidables(
    mut commands: Commands,
    meshes: Res<Assets<Mesh>>,
    mut probe: ResMut<GroundProbe>,
    query: Query<(Entity, &Mesh3d, &Transform), (With<Collidable>, Without<Registered>)>,
) {
    for (entity, mesh3d, transform) in &query {
        let Some(mesh) = meshes.get(&mesh3d.0) else {
            // Asset still loading; try again next frame.
            continue;
        };
        let Some(aabb) = mesh.compute_aabb() else {
            warn!("collidable {entity} has a mesh without bounds, skipping");
            commands.entity(entity).insert(Registered);
            continue;
        };

        let center = transform.transform_point(Vec3::from(aabb.center));
        let half_extents = Vec3::from(aabb.half_extents) * transform.scale;
        probe.register(Aabb3d::new(center, half_extents));
        commands.entity(entity).insert(Registered);
        debug!("registered collidable {entity}, {} total", probe.len());
    }
}
