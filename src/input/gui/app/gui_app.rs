use crate::controllers::explorer::controller::ExplorerController;
use crate::controllers::explorer::events::{EventOutcome, InputEvent};
use crate::controllers::explorer::help::print_controls_legend;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;
use crate::input::gui::key_bindings::{key_for, wheel_steps};
use log::debug;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::PhysicalKey;
use winit::window::Window;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopAction {
    Continue,
    Exit,
}

pub struct GuiApp<P: GuiPresenterPort> {
    window: &'static Window,
    presenter: P,
    controller: ExplorerController,
    cursor_x: f64,
    cursor_y: f64,
}

impl<P: GuiPresenterPort> GuiApp<P> {
    pub fn new(window: &'static Window, presenter: P, controller: ExplorerController) -> Self {
        Self {
            window,
            presenter,
            controller,
            cursor_x: 0.0,
            cursor_y: 0.0,
        }
    }

    /// Renders the initial view.
    pub fn start(&mut self) -> Result<(), GuiError> {
        self.controller.render()?;
        Ok(())
    }

    pub fn handle_wake(&mut self) {
        if self.presenter.maybe_draw_frame() {
            self.window.request_redraw();
        }
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent) -> Result<LoopAction, GuiError> {
        match event {
            WindowEvent::CloseRequested => self.apply(InputEvent::Quit),
            WindowEvent::RedrawRequested => {
                self.presenter.render()?;
                Ok(LoopAction::Continue)
            }
            WindowEvent::Resized(size) => self.resize(size.width, size.height),
            WindowEvent::ScaleFactorChanged { .. } => {
                let size = self.window.inner_size();
                self.resize(size.width, size.height)
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_x = position.x;
                self.cursor_y = position.y;
                Ok(LoopAction::Continue)
            }
            WindowEvent::MouseWheel { delta, .. } => self.apply(InputEvent::MouseWheel {
                delta: wheel_steps(*delta),
                cursor_x: self.cursor_x,
                cursor_y: self.cursor_y,
            }),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => match key_for(*code) {
                Some(key) => self.apply(InputEvent::KeyDown(key)),
                None => Ok(LoopAction::Continue),
            },
            _ => Ok(LoopAction::Continue),
        }
    }

    fn apply(&mut self, event: InputEvent) -> Result<LoopAction, GuiError> {
        match self.controller.handle_event(event) {
            EventOutcome::Exit => return Ok(LoopAction::Exit),
            EventOutcome::Render => {
                self.controller.render()?;
            }
            EventOutcome::ShowHelp => print_controls_legend(),
            EventOutcome::Ignored => debug!("Ignored input {:?}", event),
        }

        Ok(LoopAction::Continue)
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<LoopAction, GuiError> {
        self.presenter.resize(width, height)?;

        if self.controller.resize(width, height) == EventOutcome::Render {
            self.controller.render()?;
        }

        Ok(LoopAction::Continue)
    }
}
