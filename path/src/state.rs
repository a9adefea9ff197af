use crate::math::{point, Point, Vector};

/// The control point remembered for the smooth curve commands.
///
/// Reflection only applies when the immediately preceding command belongs
/// to the same curve family; anything else degrades the smooth command to
/// using the current position as its control point.
#[derive(Copy, Clone, Debug, PartialEq)]
enum LastCtrl {
    Cubic(Point),
    Quad(Point),
    None,
}

/// The state of one replay over a command stream.
///
/// Created fresh per stream and owned exclusively by the interpreter while
/// it runs; it never outlives or escapes the run, so independent streams
/// can be replayed concurrently without any shared state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PathState {
    /// The pen position.
    current: Point,
    /// Where `close` returns the pen to.
    subpath_start: Point,
    last_ctrl: LastCtrl,
}

impl PathState {
    pub fn new() -> PathState {
        PathState {
            current: point(0.0, 0.0),
            subpath_start: point(0.0, 0.0),
            last_ctrl: LastCtrl::None,
        }
    }

    /// The pen position.
    pub fn current_position(&self) -> Point {
        self.current
    }

    /// The start of the current subpath.
    pub fn start_position(&self) -> Point {
        self.subpath_start
    }

    pub fn move_to(&mut self, to: Point) {
        self.last_ctrl = LastCtrl::None;
        self.current = to;
        self.subpath_start = to;
    }

    pub fn line_to(&mut self, to: Point) {
        self.last_ctrl = LastCtrl::None;
        self.current = to;
    }

    pub fn close(&mut self) {
        self.last_ctrl = LastCtrl::None;
        self.current = self.subpath_start;
    }

    pub fn cubic_to(&mut self, ctrl2: Point, to: Point) {
        self.last_ctrl = LastCtrl::Cubic(ctrl2);
        self.current = to;
    }

    pub fn quadratic_to(&mut self, ctrl: Point, to: Point) {
        self.last_ctrl = LastCtrl::Quad(ctrl);
        self.current = to;
    }

    /// Arcs advance the pen but leave nothing for smooth commands to
    /// reflect.
    pub fn arc_to(&mut self, to: Point) {
        self.last_ctrl = LastCtrl::None;
        self.current = to;
    }

    /// The first control point of a smooth cubic command: the previous
    /// cubic control point mirrored across the pen, or the pen itself when
    /// the previous command was not a cubic.
    pub fn smooth_cubic_ctrl(&self) -> Point {
        match self.last_ctrl {
            LastCtrl::Cubic(ctrl) => self.current + (self.current - ctrl),
            _ => self.current,
        }
    }

    /// The control point of a smooth quadratic command, with the same
    /// mirror-or-degrade rule as [`PathState::smooth_cubic_ctrl`].
    pub fn smooth_quadratic_ctrl(&self) -> Point {
        match self.last_ctrl {
            LastCtrl::Quad(ctrl) => self.current + (self.current - ctrl),
            _ => self.current,
        }
    }

    pub fn relative_to_absolute(&self, v: Vector) -> Point {
        self.current + v
    }
}

#[test]
fn smooth_reflection_rules() {
    let mut state = PathState::new();
    state.move_to(point(0.0, 0.0));
    state.cubic_to(point(10.0, 0.0), point(10.0, 10.0));

    assert_eq!(state.smooth_cubic_ctrl(), point(10.0, 20.0));
    // A cubic leaves nothing for a smooth quadratic to reflect.
    assert_eq!(state.smooth_quadratic_ctrl(), point(10.0, 10.0));

    // Any non-curve command breaks the chain.
    state.line_to(point(20.0, 20.0));
    assert_eq!(state.smooth_cubic_ctrl(), point(20.0, 20.0));
}

#[test]
fn close_returns_to_subpath_start() {
    let mut state = PathState::new();
    state.move_to(point(1.0, 2.0));
    state.line_to(point(30.0, 40.0));
    state.close();

    assert_eq!(state.current_position(), point(1.0, 2.0));
}
