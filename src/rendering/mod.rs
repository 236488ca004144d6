use macroquad::color::hsl_to_rgb;
use macroquad::prelude::*;

use crate::application::Simulation;
use crate::domain::{CELL_COUNT, HEIGHT, LifeEngine, WIDTH};
use crate::ui::{Button, LED_PITCH, LED_RADIUS, MATRIX_ORIGIN, panel_x, PANEL_WIDTH};

/// Background color of a dead cell
pub const BACKGROUND: Color = BLACK;

/// Hue (0-255 color wheel) of a live cell, shifting with its age
pub const fn age_hue(age: u8) -> u8 {
    age.wrapping_mul(20).wrapping_add(28)
}

/// Map a cell to the color it is shown with: dead cells are dark, live
/// cells take a fully saturated hue from their age
pub fn cell_color(alive: bool, age: u8) -> Color {
    if !alive {
        return BACKGROUND;
    }
    hsl_to_rgb(age_hue(age) as f32 / 256.0, 1.0, 0.5)
}

/// How matrix coordinates map onto positions in the LED chain
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Layout {
    /// Every row runs left to right
    #[default]
    RowMajor,
    /// Odd rows run right to left, as when a strip snakes back and forth
    SerpentineRows,
}

impl Layout {
    /// Chain position of (x, y)
    pub const fn xy(self, x: usize, y: usize) -> usize {
        match self {
            Layout::RowMajor => y * WIDTH + x,
            Layout::SerpentineRows if y % 2 == 1 => y * WIDTH + (WIDTH - 1 - x),
            Layout::SerpentineRows => y * WIDTH + x,
        }
    }
}

/// Frame of LED colors in chain order
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    layout: Layout,
    pixels: [Color; CELL_COUNT],
}

impl PixelBuffer {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            pixels: [BACKGROUND; CELL_COUNT],
        }
    }

    /// Chain index of (x, y).
    ///
    /// # Panics
    /// If the coordinates are outside the matrix.
    pub fn xy(&self, x: usize, y: usize) -> usize {
        assert!(
            x < WIDTH && y < HEIGHT,
            "pixel ({x}, {y}) is outside the {WIDTH}x{HEIGHT} matrix"
        );
        self.layout.xy(x, y)
    }

    pub fn set(&mut self, x: usize, y: usize, color: Color) {
        let index = self.xy(x, y);
        self.pixels[index] = color;
    }

    pub fn get(&self, x: usize, y: usize) -> Color {
        self.pixels[self.xy(x, y)]
    }

    /// Raw colors in chain order, as they would be shifted out to the strip
    pub fn pixels(&self) -> &[Color; CELL_COUNT] {
        &self.pixels
    }
}

/// Write the engine's current generation into the buffer
pub fn paint(engine: &LifeEngine, buffer: &mut PixelBuffer) {
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            buffer.set(x, y, cell_color(engine.cell_state(x, y), engine.cell_age(x, y)));
        }
    }
}

/// Draw the buffer as a matrix of round LEDs
pub fn draw_matrix(buffer: &PixelBuffer) {
    let unlit = Color::from_rgba(25, 25, 25, 255);
    let (origin_x, origin_y) = MATRIX_ORIGIN;

    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let cx = origin_x + (x as f32 + 0.5) * LED_PITCH;
            let cy = origin_y + (y as f32 + 0.5) * LED_PITCH;
            let color = buffer.get(x, y);

            if color == BACKGROUND {
                draw_circle_lines(cx, cy, LED_RADIUS, 1.0, unlit);
            } else {
                draw_circle(cx, cy, LED_RADIUS, color);
            }
        }
    }
}

/// Helper to draw text labels
fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

/// Draw the control panel with buttons and status
pub fn draw_controls(sim: &Simulation, buttons: &[Button], mouse_pos: (f32, f32)) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let controls = [
        ("Controls:", 180.0, 14.0, WHITE),
        ("Space: Play/Pause", 195.0, 12.0, GRAY),
        ("Enter/S: Seed", 208.0, 12.0, GRAY),
        ("C: Reset", 221.0, 12.0, GRAY),
        ("Up/Down: Speed", 234.0, 12.0, GRAY),
    ];
    controls.iter().for_each(|(text, y, size, color)| {
        draw_text_label(text, px, *y, *size, *color);
    });

    let status = if sim.is_running { "Running" } else { "Paused" };
    let status_color = if sim.is_running {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };
    let expansion = if sim.engine.is_expansion_armed() { "armed" } else { "-" };

    let labels = [
        (format!("Generation: {}", sim.generation), 270.0, 16.0, WHITE),
        (format!("Live: {}", sim.engine.live_count()), 290.0, 16.0, WHITE),
        (format!("{:.1} gen/s", sim.updates_per_second), 310.0, 14.0, GRAY),
        (format!("Expand: {expansion}"), 330.0, 14.0, GRAY),
        (status.to_owned(), 355.0, 16.0, status_color),
    ];
    labels.iter().for_each(|(text, y, size, color)| {
        draw_text_label(text, px, *y, *size, *color);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;

    #[test]
    fn test_dead_cells_use_background() {
        assert_eq!(cell_color(false, 0), BACKGROUND);
        assert_eq!(cell_color(false, 16), BACKGROUND);
    }

    #[test]
    fn test_age_hue() {
        assert_eq!(age_hue(0), 28);
        assert_eq!(age_hue(1), 48);
        assert_eq!(age_hue(11), 248);
        // Wraps around the color wheel
        assert_eq!(age_hue(12), 12);
        assert_eq!(age_hue(16), 92);
    }

    #[test]
    fn test_live_cells_change_color_with_age() {
        let young = cell_color(true, 0);
        let old = cell_color(true, 8);
        assert_ne!(young, BACKGROUND);
        assert_ne!(young, old);
    }

    #[test]
    fn test_layouts_are_bijections() {
        for layout in [Layout::RowMajor, Layout::SerpentineRows] {
            let mut seen = [false; CELL_COUNT];
            for y in 0..HEIGHT {
                for x in 0..WIDTH {
                    let i = layout.xy(x, y);
                    assert!(!seen[i], "{layout:?} maps two cells to {i}");
                    seen[i] = true;
                }
            }
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn test_serpentine_reverses_odd_rows() {
        assert_eq!(Layout::SerpentineRows.xy(0, 0), 0);
        assert_eq!(Layout::SerpentineRows.xy(0, 1), 31);
        assert_eq!(Layout::SerpentineRows.xy(15, 1), 16);
        assert_eq!(Layout::SerpentineRows.xy(3, 2), 35);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_buffer_out_of_range_panics() {
        PixelBuffer::new(Layout::RowMajor).xy(16, 0);
    }

    #[test]
    fn test_paint_matches_engine() {
        let mut engine = LifeEngine::with_seed(1);
        engine.place(&presets::block(), 3, 1);
        engine.step();

        let mut buffer = PixelBuffer::new(Layout::SerpentineRows);
        paint(&engine, &mut buffer);

        assert_eq!(buffer.get(3, 1), cell_color(true, 1));
        assert_eq!(buffer.get(4, 2), cell_color(true, 1));
        assert_eq!(buffer.get(0, 0), BACKGROUND);

        let lit = buffer.pixels().iter().filter(|&&c| c != BACKGROUND).count();
        assert_eq!(lit, 4);
    }
}
