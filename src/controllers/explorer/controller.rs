use crate::controllers::explorer::config::{ConfigError, ExplorerConfig};
use crate::controllers::explorer::data::frame_data::FrameData;
use crate::controllers::explorer::errors::RenderError;
use crate::controllers::explorer::events::{EventOutcome, InputEvent, Key};
use crate::controllers::explorer::ports::presenter::ExplorerPresenterPort;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::actions::render_grid::render_grid;
use crate::core::data::surface::Surface;
use crate::core::data::viewport::ViewportState;
use crate::core::fractals::mandelbrot::colour_map::PaletteColourMap;
use crate::core::fractals::mandelbrot::palette::Palette;
use crate::core::util::viewport_mapping::zoom_about_pixel;
use log::{debug, warn};
use std::sync::Arc;
use std::time::Instant;

/// Owns the explorer's view state and turns input into re-renders.
///
/// Every render recomputes the whole surface and hands a complete frame to
/// the presenter port.
pub struct ExplorerController {
    config: ExplorerConfig,
    surface: Surface,
    viewport: ViewportState,
    palette: Palette,
    frames_rendered: u64,
    presenter_port: Arc<dyn ExplorerPresenterPort>,
}

impl ExplorerController {
    pub fn new(
        config: ExplorerConfig,
        presenter_port: Arc<dyn ExplorerPresenterPort>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let surface = config.surface()?;

        Ok(Self {
            config,
            surface,
            viewport: ViewportState::default(),
            palette: config.palette,
            frames_rendered: 0,
            presenter_port,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    #[must_use]
    pub fn surface(&self) -> Surface {
        self.surface
    }

    #[must_use]
    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    #[must_use]
    pub fn palette(&self) -> Palette {
        self.palette
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Applies one input event to the view state.
    ///
    /// Zoom and pan requests that would leave the viewport invalid are dropped and
    /// reported as [`EventOutcome::Ignored`].
    pub fn handle_event(&mut self, event: InputEvent) -> EventOutcome {
        match event {
            InputEvent::Quit => EventOutcome::Exit,
            InputEvent::KeyDown(key) => self.handle_key(key),
            InputEvent::MouseWheel {
                delta,
                cursor_x,
                cursor_y,
            } => self.handle_wheel(delta, cursor_x, cursor_y),
        }
    }

    fn handle_key(&mut self, key: Key) -> EventOutcome {
        let step = self.config.pan_step;

        match key {
            Key::Quit => return EventOutcome::Exit,
            Key::Help => return EventOutcome::ShowHelp,
            Key::Reset => self.viewport.reset(),
            Key::PaletteCycle => self.palette = self.palette.next(),
            Key::ZoomIn => return self.scale_about_centre(self.config.keyboard_zoom_factor),
            Key::ZoomOut => return self.scale_about_centre(1.0 / self.config.keyboard_zoom_factor),
            Key::PanUp => return self.pan(0.0, -step),
            Key::PanDown => return self.pan(0.0, step),
            Key::PanLeft => return self.pan(-step, 0.0),
            Key::PanRight => return self.pan(step, 0.0),
        }

        EventOutcome::Render
    }

    fn pan(&mut self, step_real: f64, step_imag: f64) -> EventOutcome {
        match self.viewport.pan(step_real, step_imag) {
            Ok(()) => EventOutcome::Render,
            Err(err) => {
                warn!("Ignoring pan request: {}", err);
                EventOutcome::Ignored
            }
        }
    }

    fn scale_about_centre(&mut self, factor: f64) -> EventOutcome {
        match self.viewport.scale_by(factor) {
            Ok(()) => EventOutcome::Render,
            Err(err) => {
                warn!("Ignoring zoom request: {}", err);
                EventOutcome::Ignored
            }
        }
    }

    fn handle_wheel(&mut self, delta: f64, cursor_x: f64, cursor_y: f64) -> EventOutcome {
        let factor = if delta > 0.0 {
            self.config.wheel_zoom_factor
        } else if delta < 0.0 {
            1.0 / self.config.wheel_zoom_factor
        } else {
            return EventOutcome::Ignored;
        };

        match zoom_about_pixel(&self.viewport, self.surface, cursor_x, cursor_y, factor) {
            Ok(viewport) => {
                self.viewport = viewport;
                EventOutcome::Render
            }
            Err(err) => {
                warn!("Ignoring wheel zoom at ({}, {}): {}", cursor_x, cursor_y, err);
                EventOutcome::Ignored
            }
        }
    }

    /// Switches to a new surface size. The viewport is kept, so the view
    /// stays centred on the same complex point.
    pub fn resize(&mut self, width: u32, height: u32) -> EventOutcome {
        if width == self.surface.width() && height == self.surface.height() {
            return EventOutcome::Ignored;
        }

        match Surface::new(width, height) {
            Ok(surface) => {
                self.surface = surface;
                EventOutcome::Render
            }
            Err(err) => {
                warn!("Ignoring resize: {}", err);
                EventOutcome::Ignored
            }
        }
    }

    /// Renders the current view without presenting it.
    pub fn render_frame(&mut self) -> Result<FrameData, RenderError> {
        let start = Instant::now();

        let grid = render_grid(&self.viewport, self.surface, self.config.max_iterations)?;
        let colour_map = PaletteColourMap::new(self.palette, self.config.max_iterations);
        let pixel_buffer = generate_pixel_buffer(&grid, &colour_map)?;

        let render_duration = start.elapsed();
        self.frames_rendered += 1;

        debug!(
            "Frame {} rendered in {:?}: {}x{}, zoom {}, centre {:?}, palette {}",
            self.frames_rendered,
            render_duration,
            self.surface.width(),
            self.surface.height(),
            self.viewport.zoom(),
            self.viewport.centre(),
            self.palette
        );

        Ok(FrameData {
            frame_number: self.frames_rendered,
            pixel_buffer,
            render_duration,
            viewport: self.viewport,
            palette: self.palette,
        })
    }

    /// Renders the current view and pushes the finished frame to the presenter.
    pub fn render(&mut self) -> Result<u64, RenderError> {
        let frame = self.render_frame()?;
        let frame_number = frame.frame_number;

        self.presenter_port.present(frame);

        Ok(frame_number)
    }
}
