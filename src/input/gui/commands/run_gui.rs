use crate::controllers::explorer::config::ExplorerConfig;
use crate::controllers::explorer::controller::ExplorerController;
use crate::input::gui::app::gui_app::{GuiApp, LoopAction};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::errors::GuiError;
use crate::input::gui::events::GuiEvent;
use log::info;
use std::marker::PhantomData;
use winit::dpi::LogicalSize;
use winit::event::Event;
use winit::event_loop::EventLoopBuilder;
use winit::window::{Window, WindowBuilder};

pub const WINDOW_TITLE: &str = "Mandelbrot Explorer";

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: ExplorerConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: ExplorerConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    /// Opens the window and runs until it is closed or a fatal error occurs.
    pub fn execute(&self) -> Result<(), GuiError> {
        self.config.validate()?;

        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
        let event_loop_proxy = event_loop.create_proxy();

        // Pixels needs a window that outlives it.
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_inner_size(LogicalSize::new(
                    f64::from(self.config.width),
                    f64::from(self.config.height),
                ))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)?,
        ));

        let presenter = self.presenter_factory.build(window, event_loop_proxy)?;

        let size = window.inner_size();
        let config = if size.width > 0 && size.height > 0 {
            ExplorerConfig {
                width: size.width,
                height: size.height,
                ..self.config
            }
        } else {
            self.config
        };

        info!(
            "Opening {}x{} window, max iterations {}, palette {}",
            config.width, config.height, config.max_iterations, config.palette
        );

        let controller = ExplorerController::new(config, presenter.share_adapter())?;
        let mut app = GuiApp::new(window, presenter, controller);
        app.start()?;

        let mut failure: Option<GuiError> = None;

        event_loop.run(|event, elwt| {
            let result = match event {
                Event::WindowEvent {
                    ref event,
                    window_id,
                } if window_id == window.id() => app.handle_window_event(event),
                Event::UserEvent(GuiEvent::Wake) => {
                    app.handle_wake();
                    Ok(LoopAction::Continue)
                }
                _ => Ok(LoopAction::Continue),
            };

            match result {
                Ok(LoopAction::Continue) => {}
                Ok(LoopAction::Exit) => elwt.exit(),
                Err(err) => {
                    failure = Some(err);
                    elwt.exit();
                }
            }
        })?;

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
