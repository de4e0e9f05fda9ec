//! Captain rotation: seating, per-hole rotation, and Goat selection.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::player::PlayerId;
use crate::domain::state::{require_hole_mut, require_in_progress, MatchState};
use crate::domain::validate;
use crate::domain::wager::refresh_option;
use crate::errors::domain::DomainError;

/// Derive the shuffle seed for the opening rotation from the match seed.
///
/// Arithmetic mixing keeps the seed deterministic per match while staying
/// distinct from any other derived seed contexts.
pub fn derive_rotation_seed(match_seed: u64) -> u64 {
    match_seed.wrapping_mul(0x9e37_79b9).wrapping_add(1)
}

/// Randomized seating for hole 1.
pub fn initial_order(player_count: usize, seed: u64) -> Vec<PlayerId> {
    let mut order: Vec<PlayerId> = (0..player_count as u8).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    order.shuffle(&mut rng);
    order
}

/// Rotate the front player (last hole's captain) to the back.
pub fn next_order(previous: &[PlayerId]) -> Vec<PlayerId> {
    let mut order = previous.to_vec();
    if !order.is_empty() {
        order.rotate_left(1);
    }
    order
}

/// Goat-selected rotation position for the current hole (5-6 player matches,
/// late-game window only).
///
/// The Goat is lifted out of the natural order and re-inserted at
/// `desired_position` (1-based); everyone else keeps their relative order.
/// Legal only before any formation activity on the hole, and once per hole.
pub fn select_rotation(
    state: &mut MatchState,
    hole_number: u8,
    goat: PlayerId,
    desired_position: usize,
) -> Result<(), DomainError> {
    require_in_progress(state, "select_rotation")?;
    if hole_number != state.current_hole {
        return Err(DomainError::sequence(format!(
            "rotation selection targets hole {hole_number} but hole {} is in progress",
            state.current_hole
        )));
    }
    validate::ensure_aardvark_match(&state.config, "rotation selection")?;
    if !state.config.in_rotation_select_window(hole_number) {
        return Err(DomainError::phase(format!(
            "hole {hole_number} is outside the rotation selection window"
        )));
    }
    validate::ensure_known_player(&state.config, goat)?;
    validate::ensure_goat(&state.players, goat, "rotation selection")?;

    let player_count = state.config.player_count;
    if !(1..=player_count).contains(&desired_position) {
        return Err(DomainError::invalid_configuration(format!(
            "rotation position {desired_position} outside 1..={player_count}"
        )));
    }

    let aardvark_slots = state.config.aardvark_positions();
    let hole = require_hole_mut(state, "select_rotation")?;
    if hole.rotation_selected {
        return Err(DomainError::duplicate_usage(format!(
            "rotation was already selected for hole {hole_number}"
        )));
    }
    validate::ensure_pending(hole, "rotation selection")?;
    if hole.pending_partner.is_some() || hole.captain_has_hit {
        return Err(DomainError::phase(
            "rotation selection must happen before any formation activity",
        ));
    }

    let mut order = hole.rotation_order.clone();
    order.retain(|&p| p != goat);
    order.insert(desired_position - 1, goat);
    // Aardvark status follows the hitting slots; re-derive it from the
    // new order.
    hole.unassigned_aardvarks = aardvark_slots
        .filter_map(|pos| order.get(pos).copied())
        .collect();
    hole.rotation_order = order;
    hole.rotation_selected = true;
    // The captain may have changed, so the Option must be re-derived.
    refresh_option(state);
    Ok(())
}
