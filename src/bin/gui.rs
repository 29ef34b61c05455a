use log::error;
use mandelbrot_explorer::{ExplorerConfig, PixelsPresenterFactory, RunGuiCommand, print_controls_legend};

fn main() {
    env_logger::init();
    print_controls_legend();

    let command = RunGuiCommand::new(PixelsPresenterFactory::new(), ExplorerConfig::default());

    if let Err(err) = command.execute() {
        error!("{}", err);
        std::process::exit(1);
    }
}
