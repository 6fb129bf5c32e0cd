//! Water material plumbing.
//!
//! The simulation owns a [`WaveParameters`] resource; this module ferries
//! it into a GPU uniform every frame. The displacement itself is
//! evaluated in `assets/shaders/water.wgsl`, the Rust side only carries
//! the data contract.

use bevy::{
    asset::Asset,
    pbr::{ExtendedMaterial, MaterialExtension, StandardMaterial},
    prelude::*,
    render::render_resource::{AsBindGroup, ShaderRef, ShaderType},
};

use sim::waves::WaveParameters;

/// Uniform data for the water shader (matches the WGSL WaterUniforms
/// struct).
#[derive(Clone, Copy, Debug, ShaderType)]
pub struct WaterUniforms {
    /// Accumulated simulation time driving the animation.
    pub time: f32,
    pub big_elevation: f32,
    pub big_frequency: Vec2,
    pub big_speed: f32,
    pub small_elevation: f32,
    pub small_frequency: f32,
    pub small_speed: f32,
    pub small_iterations: u32,
    pub color_offset: f32,
    pub color_multiplier: f32,
    pub depth_color: Vec4,
    pub surface_color: Vec4,
}

impl From<&WaveParameters> for WaterUniforms {
    fn from(params: &WaveParameters) -> Self {
        Self {
            time: params.time,
            big_elevation: params.big_elevation,
            big_frequency: params.big_frequency,
            big_speed: params.big_speed,
            small_elevation: params.small_elevation,
            small_frequency: params.small_frequency,
            small_speed: params.small_speed,
            small_iterations: params.small_iterations,
            color_offset: params.color_offset,
            color_multiplier: params.color_multiplier,
            depth_color: params.depth_color,
            surface_color: params.surface_color,
        }
    }
}

/// Material extension adding the wave uniforms on top of the standard PBR
/// pipeline.
#[derive(Asset, AsBindGroup, TypePath, Debug, Clone)]
pub struct WaterExtension {
    #[uniform(100)]
    pub uniform: WaterUniforms,
}

impl MaterialExtension for WaterExtension {
    fn vertex_shader() -> ShaderRef {
        "shaders/water.wgsl".into()
    }

    fn fragment_shader() -> ShaderRef {
        "shaders/water.wgsl".into()
    }
}

pub type WaterMaterial = ExtendedMaterial<StandardMaterial, WaterExtension>;

pub fn create_water_material(params: &WaveParameters) -> WaterMaterial {
    ExtendedMaterial {
        base: StandardMaterial {
            base_color: Color::srgba(0.2, 0.5, 0.8, 1.0),
            perceptual_roughness: 0.2,
            reflectance: 0.5,
            cull_mode: None,
            double_sided: true,
            ..default()
        },
        extension: WaterExtension {
            uniform: WaterUniforms::from(params),
        },
    }
}

/// Shared handle to the single water material; the plane and the uniform
/// sync system both go through it.
#[derive(Resource)]
pub struct WaterMaterialHandle {
    pub handle: Handle<WaterMaterial>,
}

/// Advances the simulation clock from the frame delta.
pub fn advance_simulation_time(time: Res<Time>, mut params: ResMut<WaveParameters>) {
    params.advance(time.delta_secs());
}

/// Pushes the current parameters (panel edits included) and the clock
/// into the material uniform, once per frame.
pub fn sync_water_uniforms(
    params: Res<WaveParameters>,
    handle: Option<Res<WaterMaterialHandle>>,
    mut materials: ResMut<Assets<WaterMaterial>>,
) {
    let Some(handle) = handle else {
        return;
    };
    if let Some(material) = materials.get_mut(&handle.handle) {
        material.extension.uniform = WaterUniforms::from(params.as_ref());
    }
}
