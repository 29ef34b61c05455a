use crate::controllers::explorer::data::frame_data::FrameData;

/// Receives each completed frame. Frames are only ever whole.
pub trait ExplorerPresenterPort: Send + Sync {
    fn present(&self, frame: FrameData);
}
