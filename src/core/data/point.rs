/// Integer pixel coordinate, origin top-left.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}
