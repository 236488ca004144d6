use macroquad::prelude::*;

/// What a panel button asks the simulation to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    PlayPause,
    /// Inject random cells, like the hardware button
    Seed,
    Reset,
}

impl ButtonAction {
    pub const fn label(self) -> &'static str {
        match self {
            ButtonAction::PlayPause => "Play/Pause",
            ButtonAction::Seed => "Seed",
            ButtonAction::Reset => "Reset",
        }
    }
}

/// Panel button bound to a single action
#[derive(Clone)]
pub struct Button {
    rect: Rect,
    action: ButtonAction,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, action: ButtonAction) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            action,
        }
    }

    pub fn action(&self) -> ButtonAction {
        self.action
    }

    /// Check if mouse is hovering over button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.rect.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    /// Draw button with hover effect
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.is_hovered(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        let Rect { x, y, w, h } = self.rect;

        draw_rectangle(x, y, w, h, color);
        draw_rectangle_lines(x, y, w, h, 2.0, WHITE);

        let text = self.action.label();
        let text_size = measure_text(text, None, 20, 1.0);
        draw_text(
            text,
            x + (w - text_size.width) / 2.0,
            y + (h + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_bounds() {
        let button = Button::new(10.0, 10.0, 100.0, 40.0, ButtonAction::Seed);
        assert!(button.is_hovered((10.0, 10.0)));
        assert!(button.is_hovered((60.0, 30.0)));
        assert!(!button.is_hovered((9.0, 30.0)));
        assert!(!button.is_hovered((60.0, 51.0)));
        assert_eq!(button.action(), ButtonAction::Seed);
    }

    #[test]
    fn test_labels() {
        assert_eq!(ButtonAction::PlayPause.label(), "Play/Pause");
        assert_eq!(ButtonAction::Reset.label(), "Reset");
    }
}
