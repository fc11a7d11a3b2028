//! Edge-triggered pointer input.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerState {
    pub x: i32,
    pub y: i32,
    pub pressed: bool,
}

impl PointerState {
    pub fn down(x: i32, y: i32) -> Self { Self { x, y, pressed: true } }
    pub fn up(x: i32, y: i32) -> Self { Self { x, y, pressed: false } }
}

/// Reports a click only on the released→pressed transition; holding the
/// button never repeats.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClickLatch {
    was_pressed: bool,
}

impl ClickLatch {
    pub fn poll(&mut self, ptr: PointerState) -> Option<(i32, i32)> {
        let rising = ptr.pressed && !self.was_pressed;
        self.was_pressed = ptr.pressed;
        rising.then_some((ptr.x, ptr.y))
    }
}
