use crate::controllers::explorer::ports::presenter::ExplorerPresenterPort;
use std::sync::Arc;

/// Window-side half of a presenter: owns the framebuffer and draws whatever
/// the controller-side adapter has received.
pub trait GuiPresenterPort {
    fn share_adapter(&self) -> Arc<dyn ExplorerPresenterPort>;
    /// Copies a pending frame into the framebuffer. Returns whether anything was drawn.
    fn maybe_draw_frame(&mut self) -> bool;
    fn render(&mut self) -> Result<(), pixels::Error>;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
}
