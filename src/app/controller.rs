//! Simulation controller and coordination layer
//!
//! The controller orchestrates between UI events, the domain model and the
//! view layouts. It owns the stable configuration and the container, and it
//! guarantees the ordering contract: every event is fully propagated (model
//! write, output-force derivation, dependent layouts marked stale) before
//! `handle_event` returns.
//!
//! Slider input is clamped into the configured range here, at the UI
//! boundary; the model setters behind it reject outright invalid values, so
//! both halves of the validation policy meet in this file.

use log::debug;
use thiserror::Error;

use crate::app::state::{SimEvent, Slider, ViewToggles};
use crate::config::{ConfigError, SimConfig};
use crate::domain::container::Container;
use crate::domain::lift::LiftError;
use crate::domain::property::Watch;
use crate::view::container_node::ContainerLayout;
use crate::view::control_panel::ControlPanelLayout;
use crate::view::lift_node::LiftLayout;
use crate::view::renderer::SceneLayout;
use crate::view::transform::{ModelViewTransform, TransformError};

/// Errors that can occur during controller operations
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("model error: {0}")]
    Lift(#[from] LiftError),

    #[error("transform error: {0}")]
    Transform(#[from] TransformError),
}

/// Main simulation controller
///
/// Single-threaded and event-driven: all mutation happens on the caller's
/// thread through [`SimController::handle_event`].
pub struct SimController {
    container: Container,
    config: SimConfig,
    toggles: ViewToggles,
    transform: ModelViewTransform,
    scene: SceneLayout,
    input_watch: Watch<2>,
    output_watch: Watch<2>,
    outline_watch: Watch<2>,
}

impl SimController {
    /// Creates a controller from a validated configuration
    pub fn new(config: SimConfig) -> Result<Self, AppError> {
        config.validate()?;
        let transform = ModelViewTransform::new(config.model_bounds, config.scene_bounds)?;
        let container = Container::new()?;
        let toggles = ViewToggles::default();

        let scene = SceneLayout {
            width: config.view_width,
            height: config.view_height,
            background: config.visual.background,
            container: ContainerLayout::from_model(&container, &transform, &config.visual),
            input_lift: LiftLayout::input(container.input_lift(), &transform, &config.visual),
            output_lift: LiftLayout::output(container.output_lift(), &transform, &config.visual),
            panel: ControlPanelLayout::build(&container, &toggles, &config),
            show_force_arrows: toggles.show_force_arrows,
        };

        let mut controller = Self {
            container,
            config,
            toggles,
            transform,
            scene,
            input_watch: Watch::new(),
            output_watch: Watch::new(),
            outline_watch: Watch::new(),
        };
        // Arm the watches against the freshly built layouts
        controller.input_watch.changed(controller.input_revisions());
        controller.output_watch.changed(controller.output_revisions());
        controller.outline_watch.changed(controller.outline_revisions());
        Ok(controller)
    }

    /// Returns the simulation model
    pub fn container(&self) -> &Container {
        &self.container
    }

    /// Returns the current view toggles
    pub fn toggles(&self) -> ViewToggles {
        self.toggles
    }

    /// Returns the active configuration
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Processes one UI event
    ///
    /// Slider values are clamped into their configured range before they
    /// reach the model, so a dragged-out-of-bounds thumb can never produce
    /// an invalid write.
    pub fn handle_event(&mut self, event: SimEvent) -> Result<(), AppError> {
        match event {
            SimEvent::SliderChanged(slider, value) => {
                let clamped = self.slider_range(slider).clamp(value);
                debug!("slider {slider:?} -> {clamped}");
                match slider {
                    Slider::InputForce => self.container.set_input_force(clamped)?,
                    Slider::InputRadius => self.container.set_input_radius(clamped)?,
                    Slider::OutputRadius => self.container.set_output_radius(clamped)?,
                }
            }
            SimEvent::CheckboxToggled(toggle, enabled) => {
                debug!("toggle {toggle:?} -> {enabled}");
                self.toggles.apply(toggle, enabled);
            }
            SimEvent::ResetPressed => {
                debug!("reset");
                self.container.reset();
            }
        }
        Ok(())
    }

    /// Returns the scene layout for the current state
    ///
    /// Lift and outline geometry is recomputed only when one of its model
    /// dependencies changed since the last call; the panel is rebuilt every
    /// time because its readout strings track every value.
    pub fn layout(&mut self) -> &SceneLayout {
        if self.input_watch.changed(self.input_revisions()) {
            self.scene.input_lift =
                LiftLayout::input(self.container.input_lift(), &self.transform, &self.config.visual);
        }
        if self.output_watch.changed(self.output_revisions()) {
            self.scene.output_lift = LiftLayout::output(
                self.container.output_lift(),
                &self.transform,
                &self.config.visual,
            );
        }
        if self.outline_watch.changed(self.outline_revisions()) {
            self.scene.container =
                ContainerLayout::from_model(&self.container, &self.transform, &self.config.visual);
        }
        self.scene.panel = ControlPanelLayout::build(&self.container, &self.toggles, &self.config);
        self.scene.show_force_arrows = self.toggles.show_force_arrows;
        &self.scene
    }

    fn slider_range(&self, slider: Slider) -> crate::domain::core::Range {
        match slider {
            Slider::InputForce => self.container.input_lift().force_range(),
            Slider::InputRadius => self.container.input_lift().radius_range(),
            Slider::OutputRadius => self.container.output_lift().radius_range(),
        }
    }

    fn input_revisions(&self) -> [u64; 2] {
        let input = self.container.input_lift();
        [input.force_revision(), input.radius_revision()]
    }

    fn output_revisions(&self) -> [u64; 2] {
        let output = self.container.output_lift();
        [output.force_revision(), output.radius_revision()]
    }

    fn outline_revisions(&self) -> [u64; 2] {
        [
            self.container.input_lift().radius_revision(),
            self.container.output_lift().radius_revision(),
        ]
    }
}

/// Common system font locations probed by the binary
pub fn system_font_paths() -> &'static [&'static str] {
    &[
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
        "/Library/Fonts/Arial.ttf",
    ]
}

/// Reads the first available system font, if any
pub fn load_system_font() -> Option<Vec<u8>> {
    system_font_paths()
        .iter()
        .find_map(|path| std::fs::read(path).ok())
}
