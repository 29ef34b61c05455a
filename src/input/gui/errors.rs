use crate::controllers::explorer::config::ConfigError;
use crate::controllers::explorer::errors::RenderError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GuiError {
    EventLoop(winit::error::EventLoopError),
    Window(winit::error::OsError),
    Pixels(pixels::Error),
    Texture(pixels::TextureError),
    Config(ConfigError),
    Render(RenderError),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(err) => write!(f, "event loop error: {}", err),
            Self::Window(err) => write!(f, "failed to create window: {}", err),
            Self::Pixels(err) => write!(f, "framebuffer error: {}", err),
            Self::Texture(err) => write!(f, "failed to resize framebuffer: {}", err),
            Self::Config(err) => write!(f, "invalid explorer config: {}", err),
            Self::Render(err) => write!(f, "render error: {}", err),
        }
    }
}

impl Error for GuiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EventLoop(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Pixels(err) => Some(err),
            Self::Texture(err) => Some(err),
            Self::Config(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

impl From<winit::error::EventLoopError> for GuiError {
    fn from(err: winit::error::EventLoopError) -> Self {
        Self::EventLoop(err)
    }
}

impl From<winit::error::OsError> for GuiError {
    fn from(err: winit::error::OsError) -> Self {
        Self::Window(err)
    }
}

impl From<pixels::Error> for GuiError {
    fn from(err: pixels::Error) -> Self {
        Self::Pixels(err)
    }
}

impl From<pixels::TextureError> for GuiError {
    fn from(err: pixels::TextureError) -> Self {
        Self::Texture(err)
    }
}

impl From<ConfigError> for GuiError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<RenderError> for GuiError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}
