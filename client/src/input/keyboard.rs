//! Raw key events to logical actions.
//!
//! Bindings live in a RON file next to the binary; a missing or corrupt
//! file falls back to the defaults and is rewritten. Key codes with no
//! binding are silently ignored.

use bevy::input::{keyboard::KeyboardInput, ButtonState};
use bevy::prelude::*;
use ron::{from_str, ser::PrettyConfig};
use serde::{Deserialize, Serialize};
use sim::input::{Action, ActionState};
use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::Write,
    path::Path,
};

pub const DEFAULT_BINDS_PATH: &str = "keybindings.ron";

#[derive(Resource, Serialize, Deserialize)]
pub struct KeyMap {
    #[serde(default = "default_key_map")]
    pub map: BTreeMap<Action, Vec<KeyCode>>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            map: default_key_map(),
        }
    }
}

pub(crate) fn default_key_map() -> BTreeMap<Action, Vec<KeyCode>> {
    let mut map = BTreeMap::new();
    map.insert(Action::MoveForward, vec![KeyCode::KeyW, KeyCode::ArrowUp]);
    map.insert(Action::MoveBackward, vec![KeyCode::KeyS, KeyCode::ArrowDown]);
    map.insert(Action::MoveLeft, vec![KeyCode::KeyA, KeyCode::ArrowLeft]);
    map.insert(Action::MoveRight, vec![KeyCode::KeyD, KeyCode::ArrowRight]);
    map.insert(Action::Jump, vec![KeyCode::Space]);
    map
}

/// Looks up the action bound to a key code, if any.
pub fn action_for_key(key: KeyCode, key_map: &KeyMap) -> Option<Action> {
    key_map
        .map
        .iter()
        .find_map(|(action, keys)| keys.contains(&key).then_some(*action))
}

fn write_keybindings_to_path(key_map: &KeyMap, binds_path: &Path) -> Result<(), std::io::Error> {
    let pretty_config = PrettyConfig::new()
        .with_depth_limit(3)
        .with_separate_tuple_members(true)
        .with_enumerate_arrays(true);

    let serialized = ron::ser::to_string_pretty(key_map, pretty_config)
        .map_err(|_| std::io::Error::new(std::io::ErrorKind::Other, "serialization failed"))?;
    if let Some(parent) = binds_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(binds_path)?;
    file.write_all(serialized.as_bytes())
}

/// Loads bindings from disk, creating the file with defaults when missing.
pub fn get_bindings(binds_path: &Path) -> KeyMap {
    if let Ok(content) = fs::read_to_string(binds_path) {
        if let Ok(key_map) = from_str::<KeyMap>(&content) {
            log::info!("loaded keybindings from {:?}", binds_path);
            return key_map;
        }
    }

    let key_map = KeyMap::default();
    if let Err(e) = write_keybindings_to_path(&key_map, binds_path) {
        error!(
            "Failed to create default keybindings file at {:?}: {}",
            binds_path, e
        );
    }
    key_map
}

/// Routes raw key-down/key-up events into the live action state. Runs
/// every frame regardless of capture so releases are never missed while
/// the actor is frozen.
pub fn keyboard_event_system(
    mut events: EventReader<KeyboardInput>,
    key_map: Res<KeyMap>,
    mut actions: ResMut<ActionState>,
) {
    for event in events.read() {
        let Some(action) = action_for_key(event.key_code, &key_map) else {
            continue;
        };
        match event.state {
            ButtonState::Pressed => actions.press(action),
            ButtonState::Released => actions.release(action),
        }
    }
}
