use std::f64::consts::TAU;

use crate::motion::Playback;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarqueeDirection {
    Left,
    Right,
}

/// A track of duplicated items sliding by `distance` px (half its width) per
/// period, so the wrap is seamless.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marquee {
    pub distance: f64,
    pub period_ms: f64,
    pub direction: MarqueeDirection,
}

impl Marquee {
    pub fn new(distance: f64, period_ms: f64, direction: MarqueeDirection) -> Self {
        Self {
            distance: distance.max(0.0),
            period_ms,
            direction,
        }
    }

    pub fn offset_at(&self, elapsed_ms: f64) -> f64 {
        if self.period_ms <= 0.0 || self.distance == 0.0 {
            return 0.0;
        }

        let phase = (elapsed_ms.max(0.0) / self.period_ms).fract();
        match self.direction {
            MarqueeDirection::Left => -self.distance * phase,
            MarqueeDirection::Right => -self.distance * (1.0 - phase),
        }
    }
}

/// Loop time of a marquee. It holds at zero until the entrance has fully
/// played and drops back to zero whenever the entrance is rewound.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MarqueeClock {
    elapsed_ms: f64,
}

impl MarqueeClock {
    pub fn tick(&mut self, entrance: &Playback, dt_ms: f64) -> f64 {
        if entrance.is_finished() {
            self.elapsed_ms += dt_ms.max(0.0);
        } else {
            self.elapsed_ms = 0.0;
        }
        self.elapsed_ms
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

pub const HOBBY_CENTRE: Point = Point::new(120.0, 80.0);
pub const HOBBY_RADIUS: f64 = 80.0;
pub const DRAG_ELASTIC: f64 = 0.1;
pub const DRAG_MOMENTUM: f64 = 0.5;
pub const PUPIL_TRAVEL_PX: f64 = 6.0;

/// Starting spot of the `index`-th chip. Five slots around the circle, so a
/// sixth chip lands back on the first angle.
pub fn hobby_position(index: usize) -> Point {
    let angle = index as f64 / 5.0 * TAU;
    Point::new(
        HOBBY_CENTRE.x + angle.cos() * HOBBY_RADIUS,
        HOBBY_CENTRE.y + angle.sin() * HOBBY_RADIUS,
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn for_child(container: (f64, f64), chip: (f64, f64)) -> Self {
        Self {
            min: Point::new(0.0, 0.0),
            max: Point::new(
                (container.0 - chip.0).max(0.0),
                (container.1 - chip.1).max(0.0),
            ),
        }
    }

    pub fn clamp(&self, point: Point) -> Point {
        Point::new(
            point.x.clamp(self.min.x, self.max.x),
            point.y.clamp(self.min.y, self.max.y),
        )
    }

    fn rubber_band(value: f64, min: f64, max: f64) -> f64 {
        if value < min {
            min + (value - min) * DRAG_ELASTIC
        } else if value > max {
            max + (value - max) * DRAG_ELASTIC
        } else {
            value
        }
    }

    pub fn elastic(&self, point: Point) -> Point {
        Point::new(
            Self::rubber_band(point.x, self.min.x, self.max.x),
            Self::rubber_band(point.y, self.min.y, self.max.y),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Grab {
    pointer: Point,
    origin: Point,
    last_pointer: Point,
    last_ms: f64,
    velocity: Point,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    position: Point,
    bounds: Bounds,
    grab: Option<Grab>,
}

impl DragState {
    pub fn new(position: Point, bounds: Bounds) -> Self {
        Self {
            position: bounds.clamp(position),
            bounds,
            grab: None,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        if self.grab.is_none() {
            self.position = bounds.clamp(self.position);
        }
    }

    pub fn press(&mut self, pointer: Point, now_ms: f64) {
        self.grab = Some(Grab {
            pointer,
            origin: self.position,
            last_pointer: pointer,
            last_ms: now_ms,
            velocity: Point::default(),
        });
    }

    pub fn move_to(&mut self, pointer: Point, now_ms: f64) -> Point {
        let Some(grab) = self.grab.as_mut() else {
            return self.position;
        };

        let dt = now_ms - grab.last_ms;
        if dt > 0.0 {
            grab.velocity = Point::new(
                (pointer.x - grab.last_pointer.x) / dt,
                (pointer.y - grab.last_pointer.y) / dt,
            );
        }
        grab.last_pointer = pointer;
        grab.last_ms = now_ms;

        let raw = Point::new(
            grab.origin.x + pointer.x - grab.pointer.x,
            grab.origin.y + pointer.y - grab.pointer.y,
        );
        self.position = self.bounds.elastic(raw);
        self.position
    }

    /// Ends the drag and returns where the chip should settle: the current
    /// spot plus half a second of its release velocity, kept inside bounds.
    pub fn release(&mut self) -> Point {
        let Some(grab) = self.grab.take() else {
            return self.position;
        };

        let throw_ms = DRAG_MOMENTUM * 1_000.0;
        let thrown = Point::new(
            self.position.x + grab.velocity.x * throw_ms,
            self.position.y + grab.velocity.y * throw_ms,
        );
        self.position = self.bounds.clamp(thrown);
        self.position
    }
}

pub fn pupil_offset(eye: Point, pointer: Point) -> Point {
    let angle = (pointer.y - eye.y).atan2(pointer.x - eye.x);
    Point::new(angle.cos() * PUPIL_TRAVEL_PX, angle.sin() * PUPIL_TRAVEL_PX)
}
