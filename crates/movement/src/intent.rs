//! Player intent and the frame-to-physics input latch.
//!
//! Input arrives at render cadence while forces are computed at physics
//! cadence. [`IntentLatch`] bridges the two: held buttons and axes always
//! reflect the latest frame, edges stay set until a physics tick consumes
//! them, so a press between two physics ticks is never lost.

/// Intent for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Intent {
    /// Horizontal axis, -1.0 = left, 1.0 = right.
    pub horizontal: f32,
    /// Vertical axis, -1.0 = down, 1.0 = up.
    pub vertical: f32,
    pub crouch: bool,
    pub jump_edge: bool,
    pub jump_held: bool,
    pub push_edge: bool,
    pub push_held: bool,
    pub pull_held: bool,
    pub confirm_edge: bool,
    /// Manual restart from the spawn point.
    pub respawn_edge: bool,
}

impl Intent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp axes into [-1, 1]; non-finite axes become 0.
    pub fn sanitized(mut self) -> Self {
        self.horizontal = sanitize_axis(self.horizontal);
        self.vertical = sanitize_axis(self.vertical);
        self
    }

    pub fn with_horizontal(mut self, horizontal: f32) -> Self {
        self.horizontal = horizontal;
        self
    }

    pub fn with_vertical(mut self, vertical: f32) -> Self {
        self.vertical = vertical;
        self
    }

    pub fn with_crouch(mut self, crouch: bool) -> Self {
        self.crouch = crouch;
        self
    }

    /// Jump pressed this frame (implies held).
    pub fn jump_pressed(mut self) -> Self {
        self.jump_edge = true;
        self.jump_held = true;
        self
    }

    pub fn with_jump_held(mut self, held: bool) -> Self {
        self.jump_held = held;
        self
    }

    /// Push pressed this frame (implies held).
    pub fn push_pressed(mut self) -> Self {
        self.push_edge = true;
        self.push_held = true;
        self
    }

    pub fn with_push_held(mut self, held: bool) -> Self {
        self.push_held = held;
        self
    }

    pub fn with_pull_held(mut self, held: bool) -> Self {
        self.pull_held = held;
        self
    }

    pub fn confirm_pressed(mut self) -> Self {
        self.confirm_edge = true;
        self
    }

    pub fn respawn_pressed(mut self) -> Self {
        self.respawn_edge = true;
        self
    }

    fn clear_edges(&mut self) {
        self.jump_edge = false;
        self.push_edge = false;
        self.confirm_edge = false;
        self.respawn_edge = false;
    }
}

fn sanitize_axis(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

/// Single-writer handoff between frame input and the physics tick.
///
/// Both cadences run on the same schedule executor, so plain fields are
/// enough; `&mut` access already rules out a torn read.
#[derive(Debug, Clone, Default)]
pub struct IntentLatch {
    latched: Intent,
}

impl IntentLatch {
    /// Record a frame's input. Edges accumulate until taken.
    pub fn latch(&mut self, frame: Intent) {
        let frame = frame.sanitized();
        let previous = self.latched;

        self.latched = Intent {
            jump_edge: previous.jump_edge || frame.jump_edge,
            push_edge: previous.push_edge || frame.push_edge,
            confirm_edge: previous.confirm_edge || frame.confirm_edge,
            respawn_edge: previous.respawn_edge || frame.respawn_edge,
            ..frame
        };
    }

    /// Intent as the next physics tick will see it.
    ///
    /// A pending push edge counts as held, so a tap released before the
    /// tick still engages and fires.
    pub fn peek(&self) -> Intent {
        Intent {
            push_held: self.latched.push_held || self.latched.push_edge,
            ..self.latched
        }
    }

    /// Consume the latched intent, clearing edges but keeping held state.
    pub fn take(&mut self) -> Intent {
        let intent = self.peek();
        self.latched.clear_edges();
        intent
    }

    /// Consume only the confirm edge.
    pub fn take_confirm(&mut self) -> bool {
        std::mem::take(&mut self.latched.confirm_edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axes_are_clamped() {
        let intent = Intent::new().with_horizontal(3.0).with_vertical(-2.0).sanitized();
        assert_eq!(intent.horizontal, 1.0);
        assert_eq!(intent.vertical, -1.0);

        let intent = Intent::new().with_horizontal(f32::NAN).sanitized();
        assert_eq!(intent.horizontal, 0.0);
    }

    #[test]
    fn edge_survives_until_taken() {
        let mut latch = IntentLatch::default();

        // Pressed on one frame, released on the next, before any physics tick
        latch.latch(Intent::new().jump_pressed());
        latch.latch(Intent::new());

        let intent = latch.take();
        assert!(intent.jump_edge);
        assert!(!intent.jump_held);

        // Consumed
        assert!(!latch.take().jump_edge);
    }

    #[test]
    fn held_state_follows_latest_frame() {
        let mut latch = IntentLatch::default();
        latch.latch(Intent::new().push_pressed().with_horizontal(1.0));
        latch.latch(Intent::new().with_push_held(true).with_horizontal(-0.5));

        let intent = latch.take();
        assert!(intent.push_edge);
        assert!(intent.push_held);
        assert_eq!(intent.horizontal, -0.5);

        let intent = latch.take();
        assert!(!intent.push_edge);
        assert!(intent.push_held);
    }

    #[test]
    fn tapped_push_stays_held_until_taken() {
        let mut latch = IntentLatch::default();
        latch.latch(Intent::new().push_pressed());
        latch.latch(Intent::new());

        let intent = latch.take();
        assert!(intent.push_edge);
        assert!(intent.push_held);

        // The next tick sees the release
        let intent = latch.take();
        assert!(!intent.push_edge);
        assert!(!intent.push_held);
    }

    #[test]
    fn confirm_can_be_taken_alone() {
        let mut latch = IntentLatch::default();
        latch.latch(Intent::new().confirm_pressed().jump_pressed());

        assert!(latch.take_confirm());
        assert!(!latch.take_confirm());
        assert!(latch.peek().jump_edge);
    }
}
