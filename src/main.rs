use log::info;
use mandelbrot_explorer::{
    ExplorerConfig, PaletteColourMap, Surface, ViewportState, generate_pixel_buffer, render_grid,
};
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = env_logger::builder().is_test(cfg!(test)).try_init();

    let config = ExplorerConfig::default();
    config.validate()?;

    let surface = Surface::new(config.width, config.height)?;
    let viewport = ViewportState::default();

    info!(
        "Rendering {}x{} default view, max iterations {}, {} worker threads",
        surface.width(),
        surface.height(),
        config.max_iterations,
        rayon::current_num_threads()
    );

    let start = Instant::now();
    let grid = render_grid(&viewport, surface, config.max_iterations)?;
    let pixel_buffer = generate_pixel_buffer(
        &grid,
        &PaletteColourMap::new(config.palette, config.max_iterations),
    )?;
    let render_duration = start.elapsed();

    let interior = grid.count_at(config.max_iterations);
    info!(
        "Rendered {} bytes in {:?}; {:.1}% of pixels inside the set",
        pixel_buffer.buffer_size(),
        render_duration,
        100.0 * interior as f64 / surface.size() as f64
    );

    Ok(())
}
