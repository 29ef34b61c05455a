use crate::controllers::explorer::data::frame_data::FrameData;
use crate::controllers::explorer::ports::presenter::ExplorerPresenterPort;
use crate::input::gui::events::GuiEvent;
use log::warn;
use std::sync::{Mutex, PoisonError};
use winit::event_loop::EventLoopProxy;

/// Controller-facing side of the pixels presenter. Holds only the newest frame.
pub struct PixelsAdapter {
    pending_frame: Mutex<Option<FrameData>>,
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl ExplorerPresenterPort for PixelsAdapter {
    fn present(&self, frame: FrameData) {
        *self
            .pending_frame
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(frame);

        if self.event_loop_proxy.send_event(GuiEvent::Wake).is_err() {
            warn!("Event loop closed before frame could be shown");
        }
    }
}

impl PixelsAdapter {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            pending_frame: Mutex::new(None),
            event_loop_proxy,
        }
    }

    pub fn take_frame(&self) -> Option<FrameData> {
        self.pending_frame
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}
