/// Custom user events for the GUI event loop.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// A finished frame is waiting in the presenter adapter.
    ///
    /// The handler still has to pull the frame and request a redraw.
    Wake,
}
