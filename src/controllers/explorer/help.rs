const CONTROLS_LEGEND: &str = "\
=== Mandelbrot Explorer Controls ===
Arrow keys: Pan
Scroll wheel or +/-: Zoom in/out
C: Cycle colour palette
R: Reset view
H: Show this help
Esc or Q: Quit";

#[must_use]
pub fn controls_legend() -> &'static str {
    CONTROLS_LEGEND
}

pub fn print_controls_legend() {
    println!("\n{}", CONTROLS_LEGEND);
}
