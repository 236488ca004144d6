mod button;

pub use button::{Button, ButtonAction};

// UI constants - functions for responsive layout
use macroquad::prelude::screen_width;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
/// Distance between LED centers on screen
pub const LED_PITCH: f32 = 48.0;
pub const LED_RADIUS: f32 = 18.0;
/// Top-left corner of the matrix drawing
pub const MATRIX_ORIGIN: (f32, f32) = (20.0, 20.0);

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Create UI buttons with standard layout
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    vec![
        Button::new(px, 20.0, PANEL_WIDTH, BUTTON_HEIGHT, ButtonAction::PlayPause),
        Button::new(px, 70.0, PANEL_WIDTH, BUTTON_HEIGHT, ButtonAction::Seed),
        Button::new(px, 120.0, PANEL_WIDTH, BUTTON_HEIGHT, ButtonAction::Reset),
    ]
}
