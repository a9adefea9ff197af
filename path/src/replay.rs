//! Replays a typed command stream into a [`PathBuilder`] sink.
//!
//! This is the engine that turns path data into drawable primitives. Each
//! command repeats once per parameter group, updating the interpreter
//! state between repetitions, so `L10,0 20,0` and `L10,0 L20,0` produce
//! the same operations. Smooth curve commands resolve their implicit
//! control point against the state, quadratics are promoted to cubics and
//! elliptical arcs are expanded by `trazo_geom`.

use std::fmt;

use crate::builder::PathBuilder;
use crate::commands::{CommandKind, PathCommand};
use crate::math::{point, vector, Angle, Point};
use crate::state::PathState;
use trazo_geom::{ArcFlags, SvgArc};

/// Rejection of a command stream that cannot be interpreted.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ReplayError {
    /// A command's parameter count is not a multiple of its arity (or, for
    /// close, not zero). `command` is the index of the offending command in
    /// the stream.
    ParameterCount {
        command: usize,
        kind: CommandKind,
        found: usize,
    },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ReplayError::ParameterCount {
                command,
                kind,
                found,
            } => write!(
                f,
                "command #{} ('{}') takes groups of {} parameters, found {}",
                command,
                kind,
                kind.arity(),
                found
            ),
        }
    }
}

impl std::error::Error for ReplayError {}

/// Replays `commands` into `builder`, emitting one primitive operation
/// stream for the whole path.
///
/// The stream is validated before anything is emitted: a malformed stream
/// leaves the builder untouched.
pub fn replay<B: PathBuilder>(
    commands: &[PathCommand],
    builder: &mut B,
) -> Result<(), ReplayError> {
    validate(commands)?;

    let mut state = PathState::new();
    for command in commands {
        replay_command(command, &mut state, builder);
    }

    Ok(())
}

fn validate(commands: &[PathCommand]) -> Result<(), ReplayError> {
    for (index, command) in commands.iter().enumerate() {
        let arity = command.kind.arity();
        let malformed = if arity == 0 {
            !command.params.is_empty()
        } else {
            command.params.len() % arity != 0
        };
        if malformed {
            return Err(ReplayError::ParameterCount {
                command: index,
                kind: command.kind,
                found: command.params.len(),
            });
        }
    }

    Ok(())
}

fn replay_command<B: PathBuilder>(command: &PathCommand, state: &mut PathState, builder: &mut B) {
    use crate::commands::CommandKind::*;

    let kind = command.kind;
    if kind == Close {
        state.close();
        builder.close();
        return;
    }

    for (k, group) in command.params.chunks_exact(kind.arity()).enumerate() {
        match kind {
            MoveAbs | MoveRel => {
                let to = resolve(kind == MoveRel, state, group[0], group[1]);
                // Coordinate pairs after the first repeat as implicit line
                // segments and leave the subpath start where the move put
                // it.
                if k == 0 {
                    state.move_to(to);
                    builder.move_to(to);
                } else {
                    state.line_to(to);
                    builder.line_to(to);
                }
            }
            LineAbs | LineRel => {
                let to = resolve(kind == LineRel, state, group[0], group[1]);
                state.line_to(to);
                builder.line_to(to);
            }
            HorizontalAbs | HorizontalRel => {
                let current = state.current_position();
                let to = if kind == HorizontalRel {
                    point(current.x + group[0], current.y)
                } else {
                    point(group[0], current.y)
                };
                state.line_to(to);
                builder.line_to(to);
            }
            VerticalAbs | VerticalRel => {
                let current = state.current_position();
                let to = if kind == VerticalRel {
                    point(current.x, current.y + group[0])
                } else {
                    point(current.x, group[0])
                };
                state.line_to(to);
                builder.line_to(to);
            }
            CubicAbs | CubicRel => {
                let relative = kind == CubicRel;
                let ctrl1 = resolve(relative, state, group[0], group[1]);
                let ctrl2 = resolve(relative, state, group[2], group[3]);
                let to = resolve(relative, state, group[4], group[5]);
                state.cubic_to(ctrl2, to);
                builder.cubic_bezier_to(ctrl1, ctrl2, to);
            }
            SmoothCubicAbs | SmoothCubicRel => {
                let relative = kind == SmoothCubicRel;
                let ctrl1 = state.smooth_cubic_ctrl();
                let ctrl2 = resolve(relative, state, group[0], group[1]);
                let to = resolve(relative, state, group[2], group[3]);
                state.cubic_to(ctrl2, to);
                builder.cubic_bezier_to(ctrl1, ctrl2, to);
            }
            QuadraticAbs | QuadraticRel => {
                let relative = kind == QuadraticRel;
                let ctrl = resolve(relative, state, group[0], group[1]);
                let to = resolve(relative, state, group[2], group[3]);
                quadratic_to(builder, state.current_position(), ctrl, to);
                state.quadratic_to(ctrl, to);
            }
            SmoothQuadraticAbs | SmoothQuadraticRel => {
                let ctrl = state.smooth_quadratic_ctrl();
                let to = resolve(kind == SmoothQuadraticRel, state, group[0], group[1]);
                quadratic_to(builder, state.current_position(), ctrl, to);
                state.quadratic_to(ctrl, to);
            }
            ArcAbs | ArcRel => {
                let to = resolve(kind == ArcRel, state, group[5], group[6]);
                let arc = SvgArc {
                    from: state.current_position(),
                    to,
                    // Negative radii behave like their absolute value.
                    radii: vector(group[0].abs(), group[1].abs()),
                    x_rotation: Angle::degrees(group[2]),
                    flags: ArcFlags {
                        large_arc: group[3] != 0.0,
                        sweep: group[4] != 0.0,
                    },
                };
                if arc.is_straight_line() {
                    builder.line_to(to);
                } else {
                    arc.for_each_cubic_bezier(&mut |curve| {
                        builder.cubic_bezier_to(curve.ctrl1, curve.ctrl2, curve.to);
                    });
                }
                state.arc_to(to);
            }
            Close => unreachable!("handled before the group loop"),
        }
    }
}

fn resolve(relative: bool, state: &PathState, x: f32, y: f32) -> Point {
    if relative {
        state.relative_to_absolute(vector(x, y))
    } else {
        point(x, y)
    }
}

/// Degree elevation: the quadratic control point contributes two thirds of
/// itself to each cubic control point.
fn quadratic_to<B: PathBuilder>(builder: &mut B, from: Point, ctrl: Point, to: Point) {
    let ctrl1 = (from + ctrl.to_vector() * 2.0) / 3.0;
    let ctrl2 = (to + ctrl.to_vector() * 2.0) / 3.0;
    builder.cubic_bezier_to(ctrl1, ctrl2, to);
}

#[cfg(test)]
use crate::path::Path;
#[cfg(test)]
use crate::{Build, PathOp};

#[cfg(test)]
fn run(commands: &[PathCommand]) -> Vec<PathOp> {
    let mut builder = Path::builder();
    replay(commands, &mut builder).unwrap();
    builder.build().iter().collect()
}

#[test]
fn close_returns_pen_to_subpath_start() {
    let ops = run(&[
        PathCommand::new(CommandKind::MoveAbs, vec![10.0, 10.0]),
        PathCommand::new(CommandKind::LineRel, vec![5.0, 0.0]),
        PathCommand::new(CommandKind::Close, vec![]),
        // Resolves against the subpath start the close restored.
        PathCommand::new(CommandKind::LineRel, vec![1.0, 1.0]),
        PathCommand::new(CommandKind::Close, vec![]),
    ]);

    assert_eq!(
        ops,
        vec![
            PathOp::MoveTo(point(10.0, 10.0)),
            PathOp::LineTo(point(15.0, 10.0)),
            PathOp::Close,
            PathOp::LineTo(point(11.0, 11.0)),
            PathOp::Close,
        ]
    );
    assert_eq!(
        ops.iter().filter(|op| **op == PathOp::Close).count(),
        2
    );
}

#[test]
fn horizontal_and_vertical_lines() {
    let ops = run(&[
        PathCommand::new(CommandKind::MoveAbs, vec![1.0, 2.0]),
        PathCommand::new(CommandKind::HorizontalAbs, vec![5.0]),
        PathCommand::new(CommandKind::VerticalRel, vec![3.0]),
        PathCommand::new(CommandKind::HorizontalRel, vec![-1.0, -1.0]),
    ]);

    assert_eq!(
        ops,
        vec![
            PathOp::MoveTo(point(1.0, 2.0)),
            PathOp::LineTo(point(5.0, 2.0)),
            PathOp::LineTo(point(5.0, 5.0)),
            PathOp::LineTo(point(4.0, 5.0)),
            PathOp::LineTo(point(3.0, 5.0)),
        ]
    );
}

#[test]
fn smooth_cubic_reflects_previous_control_point() {
    let ops = run(&[
        PathCommand::new(CommandKind::MoveAbs, vec![0.0, 0.0]),
        PathCommand::new(CommandKind::CubicAbs, vec![0.0, 0.0, 10.0, 0.0, 10.0, 10.0]),
        PathCommand::new(CommandKind::SmoothCubicAbs, vec![20.0, 20.0, 30.0, 10.0]),
    ]);

    assert_eq!(
        ops[2],
        PathOp::CubicTo(point(10.0, 20.0), point(20.0, 20.0), point(30.0, 10.0))
    );
}

#[test]
fn interposed_line_breaks_the_reflection_chain() {
    let ops = run(&[
        PathCommand::new(CommandKind::MoveAbs, vec![0.0, 0.0]),
        PathCommand::new(CommandKind::CubicAbs, vec![0.0, 0.0, 10.0, 0.0, 10.0, 10.0]),
        PathCommand::new(CommandKind::LineAbs, vec![15.0, 15.0]),
        PathCommand::new(CommandKind::SmoothCubicAbs, vec![20.0, 20.0, 30.0, 10.0]),
    ]);

    // The first control point degrades to the current position.
    assert_eq!(
        ops[3],
        PathOp::CubicTo(point(15.0, 15.0), point(20.0, 20.0), point(30.0, 10.0))
    );
}

#[test]
fn smooth_cubic_ignores_quadratic_control_points() {
    let ops = run(&[
        PathCommand::new(CommandKind::MoveAbs, vec![0.0, 0.0]),
        PathCommand::new(CommandKind::QuadraticAbs, vec![5.0, 5.0, 10.0, 0.0]),
        PathCommand::new(CommandKind::SmoothCubicAbs, vec![20.0, 20.0, 30.0, 10.0]),
    ]);

    assert_eq!(
        ops[2],
        PathOp::CubicTo(point(10.0, 0.0), point(20.0, 20.0), point(30.0, 10.0))
    );
}

#[test]
fn quadratics_are_promoted_to_cubics() {
    let ops = run(&[
        PathCommand::new(CommandKind::MoveAbs, vec![0.0, 0.0]),
        PathCommand::new(CommandKind::QuadraticAbs, vec![3.0, 6.0, 6.0, 0.0]),
    ]);

    assert_eq!(
        ops[1],
        PathOp::CubicTo(point(2.0, 4.0), point(4.0, 4.0), point(6.0, 0.0))
    );
}

#[test]
fn smooth_quadratic_chains_reflect_the_used_control_point() {
    let ops = run(&[
        PathCommand::new(CommandKind::MoveAbs, vec![0.0, 0.0]),
        PathCommand::new(CommandKind::QuadraticAbs, vec![5.0, 5.0, 10.0, 0.0]),
        PathCommand::new(CommandKind::SmoothQuadraticAbs, vec![20.0, 0.0]),
        PathCommand::new(CommandKind::SmoothQuadraticAbs, vec![30.0, 0.0]),
    ]);

    // First T reflects (5, 5) across (10, 0) into (15, -5).
    assert_eq!(
        ops[2],
        PathOp::CubicTo(
            point(40.0 / 3.0, -10.0 / 3.0),
            point(50.0 / 3.0, -10.0 / 3.0),
            point(20.0, 0.0)
        )
    );
    // The second T reflects the control point the first one actually used,
    // (15, -5) across (20, 0) into (25, 5).
    assert_eq!(
        ops[3],
        PathOp::CubicTo(
            point(70.0 / 3.0, 10.0 / 3.0),
            point(80.0 / 3.0, 10.0 / 3.0),
            point(30.0, 0.0)
        )
    );
}

#[test]
fn move_repetitions_become_implicit_lines() {
    let ops = run(&[
        PathCommand::new(CommandKind::MoveAbs, vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0]),
        PathCommand::new(CommandKind::Close, vec![]),
        PathCommand::new(CommandKind::LineRel, vec![0.0, 1.0]),
    ]);

    assert_eq!(
        ops,
        vec![
            PathOp::MoveTo(point(10.0, 20.0)),
            PathOp::LineTo(point(30.0, 40.0)),
            PathOp::LineTo(point(50.0, 60.0)),
            PathOp::Close,
            // The implicit lines did not move the subpath start.
            PathOp::LineTo(point(10.0, 21.0)),
        ]
    );
}

#[test]
fn relative_move_repetitions_accumulate() {
    let ops = run(&[
        PathCommand::new(CommandKind::MoveRel, vec![10.0, 10.0, 5.0, 0.0, 5.0, 0.0]),
    ]);

    assert_eq!(
        ops,
        vec![
            PathOp::MoveTo(point(10.0, 10.0)),
            PathOp::LineTo(point(15.0, 10.0)),
            PathOp::LineTo(point(20.0, 10.0)),
        ]
    );
}

#[test]
fn cubic_repetitions_walk_the_state_forward() {
    let ops = run(&[
        PathCommand::new(CommandKind::MoveAbs, vec![0.0, 0.0]),
        PathCommand::new(
            CommandKind::CubicRel,
            vec![
                1.0, 0.0, 2.0, 0.0, 3.0, 0.0, //
                1.0, 0.0, 2.0, 0.0, 3.0, 0.0,
            ],
        ),
    ]);

    assert_eq!(
        ops[1],
        PathOp::CubicTo(point(1.0, 0.0), point(2.0, 0.0), point(3.0, 0.0))
    );
    assert_eq!(
        ops[2],
        PathOp::CubicTo(point(4.0, 0.0), point(5.0, 0.0), point(6.0, 0.0))
    );
}

#[test]
fn zero_radius_arc_is_a_single_line() {
    let ops = run(&[
        PathCommand::new(CommandKind::MoveAbs, vec![0.0, 0.0]),
        PathCommand::new(
            CommandKind::ArcAbs,
            vec![0.0, 0.0, 0.0, 0.0, 0.0, 10.0, 10.0],
        ),
    ]);

    assert_eq!(
        ops,
        vec![PathOp::MoveTo(point(0.0, 0.0)), PathOp::LineTo(point(10.0, 10.0))]
    );
}

#[test]
fn arcs_expand_to_cubics_and_clear_reflection() {
    let ops = run(&[
        PathCommand::new(CommandKind::MoveAbs, vec![0.0, 0.0]),
        PathCommand::new(
            CommandKind::ArcRel,
            vec![5.0, 5.0, 0.0, 0.0, 1.0, 10.0, 0.0],
        ),
        PathCommand::new(CommandKind::SmoothCubicAbs, vec![20.0, 20.0, 30.0, 10.0]),
    ]);

    assert!(matches!(ops[1], PathOp::CubicTo(..)));
    let arc_end = ops[ops.len() - 2].destination().unwrap();
    assert!((arc_end - point(10.0, 0.0)).length() < 1e-4);

    // The smooth cubic after the arc has nothing to reflect; its first
    // control point is the arc's endpoint.
    assert_eq!(
        ops[ops.len() - 1],
        PathOp::CubicTo(point(10.0, 0.0), point(20.0, 20.0), point(30.0, 10.0))
    );
}

#[test]
fn malformed_parameter_count_emits_nothing() {
    let commands = [
        PathCommand::new(CommandKind::MoveAbs, vec![0.0, 0.0]),
        PathCommand::new(CommandKind::LineAbs, vec![10.0]),
    ];

    let mut builder = Path::builder();
    let err = replay(&commands, &mut builder).unwrap_err();
    assert_eq!(
        err,
        ReplayError::ParameterCount {
            command: 1,
            kind: CommandKind::LineAbs,
            found: 1,
        }
    );
    assert!(builder.build().is_empty());
}

#[test]
fn close_with_parameters_is_malformed() {
    let commands = [PathCommand::new(CommandKind::Close, vec![1.0])];

    let mut builder = Path::builder();
    assert!(replay(&commands, &mut builder).is_err());
    assert!(builder.build().is_empty());
}
