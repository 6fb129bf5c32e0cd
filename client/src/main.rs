mod input;
mod player;
mod scene;
mod sets;
mod shaders;
mod ui;

use bevy::{prelude::*, window::PresentMode};
use bevy_atmosphere::plugin::AtmospherePlugin;
use bevy_inspector_egui::bevy_egui::EguiPlugin;
use clap::Parser;
use std::path::PathBuf;

use input::keyboard::{get_bindings, keyboard_event_system, DEFAULT_BINDS_PATH};
use player::{
    capture::{capture_on_click, release_on_escape, InputCapture},
    controller::player_movement_system,
    look::mouse_look_system,
};
use scene::register_collidables;
use sets::FrameSet;
use shaders::water_material::{advance_simulation_time, sync_water_uniforms, WaterMaterial};
use sim::{input::ActionState, probe::GroundProbe, waves::WaveParameters};
use ui::panel::wave_panel_ui;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Disable vsync (uncapped frame rate)
    #[arg(long)]
    no_vsync: bool,

    /// Override the keybindings file location
    #[arg(short, long)]
    keybindings: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let present_mode = if args.no_vsync {
        PresentMode::AutoNoVsync
    } else {
        PresentMode::AutoVsync
    };

    let binds_path = args
        .keybindings
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BINDS_PATH));

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Wavewalk".to_string(),
            present_mode,
            ..default()
        }),
        ..default()
    }));

    app.add_plugins((
        MaterialPlugin::<WaterMaterial>::default(),
        AtmospherePlugin,
        EguiPlugin {
            enable_multipass_for_primary_context: false,
        },
    ));

    app.register_type::<WaveParameters>();

    app.insert_resource(get_bindings(&binds_path))
        .init_resource::<ActionState>()
        .init_resource::<GroundProbe>()
        .init_resource::<InputCapture>()
        .init_resource::<WaveParameters>();

    // One cooperative frame: input snapshot, then locomotion, then the
    // renderer feed. Nothing in the chain overlaps.
    app.configure_sets(
        Update,
        (FrameSet::Input, FrameSet::Physics, FrameSet::Rendering).chain(),
    );

    app.add_systems(Startup, (scene::setup_scene, player::spawn_player));
    app.add_systems(
        Update,
        (
            (
                capture_on_click,
                release_on_escape,
                keyboard_event_system,
                mouse_look_system,
                register_collidables,
            )
                .in_set(FrameSet::Input),
            player_movement_system.in_set(FrameSet::Physics),
            (advance_simulation_time, sync_water_uniforms)
                .chain()
                .in_set(FrameSet::Rendering),
            wave_panel_ui,
        ),
    );

    app.run();
}
