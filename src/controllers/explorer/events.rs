/// Host-independent input, already translated from window-system events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    /// Positive `delta` zooms in, negative zooms out. Cursor is in surface pixels.
    MouseWheel {
        delta: f64,
        cursor_x: f64,
        cursor_y: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Quit,
    Reset,
    PaletteCycle,
    Help,
    ZoomIn,
    ZoomOut,
    PanUp,
    PanDown,
    PanLeft,
    PanRight,
}

/// What the host loop should do after an event has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Exit,
    Render,
    ShowHelp,
    Ignored,
}
