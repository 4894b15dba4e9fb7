/// Horizontal travel of a shape either side of its origin, in pixels.
pub const AMPLITUDE_X: f64 = 340.0;
/// Vertical travel of a shape either side of its origin, in pixels.
pub const AMPLITUDE_Y: f64 = 40.0;
/// Scroll distance covering one radian of the sweep.
pub const SCROLL_PER_RADIAN: f64 = 100.0;
/// Phase step between consecutive shapes.
pub const PHASE_STEP: f64 = 0.5;

pub const TRANSITION: &str = "transform 1.4s ease-out";

pub const SHAPE_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// CSS `transform` value placing a shape at this offset.
    pub fn translate(&self) -> String {
        format!("translate({}px, {}px)", self.x, self.y)
    }
}

/// Resting positions of the background shapes, indexed the way they are rendered.
pub const SHAPE_ORIGINS: [Offset; SHAPE_COUNT] = [
    Offset::new(-4.0, 0.0),
    Offset::new(-4.0, 0.0),
    Offset::new(20.0, -8.0),
    Offset::new(20.0, -8.0),
];

/// Offset of shape `index` for the absolute scroll distance `scroll`.
///
/// Pure in its inputs, so a repeated sample always lands the shape at the same
/// spot no matter how many scroll events were missed in between.
pub fn shape_offset(index: usize, origin: Offset, scroll: f64) -> Offset {
    let phase = scroll / SCROLL_PER_RADIAN + index as f64 * PHASE_STEP;
    Offset {
        x: origin.x + phase.sin() * AMPLITUDE_X,
        y: origin.y + phase.cos() * AMPLITUDE_Y,
    }
}

/// Offsets for every background shape at `scroll`.
pub fn layout(scroll: f64) -> [Offset; SHAPE_COUNT] {
    let mut out = SHAPE_ORIGINS;
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = shape_offset(i, SHAPE_ORIGINS[i], scroll);
    }
    out
}

/// Remembers the last scroll sample every shape was moved for, so frames
/// without new scroll input skip the DOM writes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaintState {
    painted_at: Option<f64>,
}

impl PaintState {
    pub fn needs_paint(&self, sample: f64) -> bool {
        self.painted_at != Some(sample)
    }

    /// Records a paint pass that moved `painted` shapes. Only a pass that
    /// reached every shape settles the sample, otherwise the next frame retries.
    pub fn record(&mut self, sample: f64, painted: usize) {
        if painted == SHAPE_COUNT {
            self.painted_at = Some(sample);
        }
    }
}
