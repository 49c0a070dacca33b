//! Hover and selection system.
//!
//! Towers report hover and clicks; the engine arbitrates which single
//! tower holds selection focus.

use hecs::World;

use bulwark_core::components::{Tower, TowerId};
use bulwark_core::constants::TOWER_SIZE;
use bulwark_core::events::AudioEvent;
use bulwark_core::types::{CursorState, Point};

/// Update hover flags from the cursor and report a clicked tower, if any.
/// The bounding-box test is strict, so a cursor exactly on the edge does
/// not hover.
pub fn run(
    world: &mut World,
    cursor: CursorState,
    audio_events: &mut Vec<AudioEvent>,
) -> Option<TowerId> {
    let mut clicked = None;

    for (_entity, (tower, pos)) in world.query_mut::<(&mut Tower, &Point)>() {
        let dx = (cursor.x - pos.x).abs();
        let dy = (cursor.y - pos.y).abs();
        if dx < TOWER_SIZE / 2.0 && dy < TOWER_SIZE / 2.0 {
            tower.is_hovered = true;
            if cursor.clicked {
                audio_events.push(AudioEvent::Open);
                clicked = Some(tower.id);
            }
        } else {
            tower.is_hovered = false;
        }
    }

    clicked
}

/// Apply exclusive selection focus: exactly the tower named by `selected`
/// carries the flag, every other tower loses it.
pub fn apply_focus(world: &mut World, selected: Option<TowerId>) {
    for (_entity, tower) in world.query_mut::<&mut Tower>() {
        tower.is_selected = selected == Some(tower.id);
    }
}
