use log::{info, warn};
use macroquad::prelude::*;
use led_life::{
    LifeEngine, Simulation,
    rendering::{self, Layout, PixelBuffer},
    ui, input,
};

/// Environment variable holding an optional RNG seed
const SEED_VAR: &str = "LED_LIFE_SEED";

fn window_conf() -> Conf {
    Conf {
        window_title: "LED Life - 16x5 matrix".to_owned(),
        window_width: 990,
        window_height: 400,
        window_resizable: true,
        ..Default::default()
    }
}

fn engine_from_env() -> LifeEngine {
    match std::env::var(SEED_VAR) {
        Ok(raw) => match raw.parse::<u64>() {
            Ok(seed) => {
                info!("using seed {seed} from {SEED_VAR}");
                LifeEngine::with_seed(seed)
            }
            Err(err) => {
                warn!("ignoring {SEED_VAR}={raw:?}: {err}");
                LifeEngine::new()
            }
        },
        Err(_) => LifeEngine::new(),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let mut sim = Simulation::new(engine_from_env());
    let mut buffer = PixelBuffer::new(Layout::SerpentineRows);
    info!("starting with {} live cells", sim.engine.live_count());

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons();

        sim = input::process_button_clicks(sim, &buttons, mouse_pos);
        sim = input::process_keyboard_input(sim);
        sim = sim.tick(get_frame_time());

        rendering::paint(&sim.engine, &mut buffer);

        clear_background(Color::from_rgba(10, 10, 10, 255));
        rendering::draw_matrix(&buffer);
        rendering::draw_controls(&sim, &buttons, mouse_pos);

        next_frame().await;
    }
}
