use crate::adapters::pixel_format::{clear_rgba, copy_rgb_to_rgba};
use crate::controllers::explorer::data::frame_data::FrameData;
use crate::controllers::explorer::ports::presenter::ExplorerPresenterPort;
use crate::core::data::surface::Surface;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::PixelsAdapter;
use log::{debug, warn};
use pixels::{Pixels, SurfaceTexture};
use std::sync::Arc;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    adapter: Arc<PixelsAdapter>,
    width: u32,
    height: u32,
    has_frame: bool,
    last_presented_frame: u64,
}

/// A frame is drawn only if it is newer than the one on screen and matches
/// the current framebuffer size.
fn accepts_frame(surface: Surface, frame_number: u64, width: u32, height: u32, last_presented: u64) -> bool {
    frame_number > last_presented && surface.width() == width && surface.height() == height
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        Ok(Self {
            pixels,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            width: size.width,
            height: size.height,
            has_frame: false,
            last_presented_frame: 0,
        })
    }

    fn draw(&mut self, frame: &FrameData) -> bool {
        match copy_rgb_to_rgba(frame.pixel_buffer.buffer(), self.pixels.frame_mut()) {
            Ok(()) => {
                self.has_frame = true;
                self.last_presented_frame = frame.frame_number;
                debug!(
                    "Showing frame {} (rendered in {:?})",
                    frame.frame_number, frame.render_duration
                );
                true
            }
            Err(err) => {
                warn!("Dropping frame {}: {}", frame.frame_number, err);
                false
            }
        }
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn share_adapter(&self) -> Arc<dyn ExplorerPresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn ExplorerPresenterPort>
    }

    fn maybe_draw_frame(&mut self) -> bool {
        let Some(frame) = self.adapter.take_frame() else {
            return false;
        };

        if !accepts_frame(
            frame.pixel_buffer.surface(),
            frame.frame_number,
            self.width,
            self.height,
            self.last_presented_frame,
        ) {
            warn!(
                "Dropping frame {} for {}x{} surface",
                frame.frame_number,
                frame.pixel_buffer.surface().width(),
                frame.pixel_buffer.surface().height()
            );
            return false;
        }

        self.draw(&frame)
    }

    fn render(&mut self) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        if !self.has_frame {
            clear_rgba(self.pixels.frame_mut());
        }

        self.pixels.render()
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.width = width;
        self.height = height;

        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)?;

        self.has_frame = false;
        Ok(())
    }
}
