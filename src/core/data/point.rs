/// Integer pixel coordinate on a surface. `(0, 0)` is the top-left corner.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}
