use macroquad::prelude::*;
use crate::application::Simulation;
use crate::ui::{Button, ButtonAction};

/// Apply a panel or keyboard action to the simulation
pub fn apply_action(sim: Simulation, action: ButtonAction) -> Simulation {
    match action {
        ButtonAction::PlayPause => sim.toggle_running(),
        ButtonAction::Seed => sim.request_seed(),
        ButtonAction::Reset => sim.reset(),
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: Simulation) -> Simulation {
    type KeyAction = (KeyCode, fn(Simulation) -> Simulation);

    let actions: [KeyAction; 6] = [
        (KeyCode::Space, Simulation::toggle_running),
        (KeyCode::Enter, Simulation::request_seed),
        (KeyCode::S, Simulation::request_seed),
        (KeyCode::C, Simulation::reset),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Process button clicks functionally
pub fn process_button_clicks(
    state: Simulation,
    buttons: &[Button],
    mouse_pos: (f32, f32)
) -> Simulation {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .fold(state, |s, btn| apply_action(s, btn.action()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LifeEngine;

    fn simulation() -> Simulation {
        Simulation::new(LifeEngine::with_seed(3))
    }

    #[test]
    fn test_seed_action_latches_request() {
        let sim = apply_action(simulation(), ButtonAction::Seed);
        assert!(sim.engine.is_seed_requested());
    }

    #[test]
    fn test_play_pause_action() {
        let sim = apply_action(simulation(), ButtonAction::PlayPause);
        assert!(!sim.is_running);
    }

    #[test]
    fn test_reset_action() {
        let sim = simulation().tick(1.0).tick(1.0);
        assert_eq!(sim.generation, 2);
        let sim = apply_action(sim, ButtonAction::Reset);
        assert_eq!(sim.generation, 0);
    }
}
