//! Demo bootstrap for the hydraulic-lifts simulation
//!
//! Builds the controller from the default configuration, replays a short
//! scripted slider interaction and writes one PNG frame per step to
//! `frames/`. Run with `RUST_LOG=debug` for per-event logging.

use std::error::Error;
use std::fs;
use std::path::Path;

use env_logger::Env;
use log::{error, info, warn};

use hydraulic_lifts::app::controller::load_system_font;
use hydraulic_lifts::app::{SimController, SimEvent, Slider, Toggle};
use hydraulic_lifts::config::SimConfig;
use hydraulic_lifts::view::SceneRenderer;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut controller = SimController::new(SimConfig::default())?;
    let renderer = match load_system_font() {
        Some(data) => SceneRenderer::with_font(data)?,
        None => {
            warn!("no system font found; rendering without text");
            SceneRenderer::new()
        }
    };

    let out_dir = Path::new("frames");
    fs::create_dir_all(out_dir)?;

    let script = [
        SimEvent::SliderChanged(Slider::InputForce, 1.0),
        SimEvent::SliderChanged(Slider::InputForce, 2.0),
        SimEvent::SliderChanged(Slider::InputRadius, 2.0),
        SimEvent::SliderChanged(Slider::OutputRadius, 6.0),
        SimEvent::SliderChanged(Slider::InputForce, 4.0),
        SimEvent::CheckboxToggled(Toggle::ForceArrows, false),
        SimEvent::CheckboxToggled(Toggle::ForceArrows, true),
        SimEvent::ResetPressed,
    ];

    for (step, event) in script.into_iter().enumerate() {
        controller.handle_event(event)?;
        let output_force = controller.container().output_lift().force();
        info!("step {step}: {event:?} => output force {output_force:.1} N");

        let pixmap = renderer.render(controller.layout())?;
        let path = out_dir.join(format!("frame_{step:02}.png"));
        pixmap
            .save_png(&path)
            .map_err(|err| format!("failed to write {}: {err}", path.display()))?;
    }

    info!("wrote {} frames to {}", script.len(), out_dir.display());
    Ok(())
}
