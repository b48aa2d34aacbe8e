use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::core::scale::finite_or_zero;
use crate::core::{DataPoint, Point2D, Scale2D};

/// How consecutive samples are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    /// Straight segments between samples.
    #[default]
    Linear,
    /// Two quadratic segments per pair, meeting at the pair's midpoint.
    Smoothed,
}

/// One drawing instruction in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo { to: Point2D },
    LineTo { to: Point2D },
    QuadTo { control: Point2D, to: Point2D },
    Close,
}

impl PathCommand {
    /// End point of the instruction; `None` for `Close`.
    #[must_use]
    pub fn end_point(self) -> Option<Point2D> {
        match self {
            Self::MoveTo { to } | Self::LineTo { to } | Self::QuadTo { to, .. } => Some(to),
            Self::Close => None,
        }
    }
}

/// Ordered pixel-space path, either an open stroke or a closed fill outline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathGeometry {
    pub commands: Vec<PathCommand>,
}

impl PathGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// End points of every instruction, in order.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point2D> {
        self.commands
            .iter()
            .filter_map(|command| command.end_point())
            .collect()
    }

    /// Renders the path as SVG path data (`d` attribute).
    #[must_use]
    pub fn to_svg_path_data(&self) -> String {
        let mut data = String::new();
        for command in &self.commands {
            if !data.is_empty() {
                data.push(' ');
            }
            // Writing into a String cannot fail.
            let _ = match command {
                PathCommand::MoveTo { to } => write!(data, "M {:.2},{:.2}", to.x, to.y),
                PathCommand::LineTo { to } => write!(data, "L {:.2},{:.2}", to.x, to.y),
                PathCommand::QuadTo { control, to } => write!(
                    data,
                    "Q {:.2},{:.2} {:.2},{:.2}",
                    control.x, control.y, to.x, to.y
                ),
                PathCommand::Close => write!(data, "Z"),
            };
        }
        data
    }
}

/// Builds stroke and fill paths from series samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PathBuilder {
    interpolation: Interpolation,
}

impl PathBuilder {
    #[must_use]
    pub fn new(interpolation: Interpolation) -> Self {
        Self { interpolation }
    }

    #[must_use]
    pub fn interpolation(self) -> Interpolation {
        self.interpolation
    }

    /// Open stroke path through evenly spaced values.
    #[must_use]
    pub fn open_values(self, values: &[f64], scale: Scale2D) -> PathGeometry {
        self.open(&project_values(values, scale))
    }

    /// Fill outline through evenly spaced values, returning to `baseline_y`.
    #[must_use]
    pub fn closed_values(self, values: &[f64], scale: Scale2D, baseline_y: f64) -> PathGeometry {
        self.closed(&project_values(values, scale), baseline_y)
    }

    /// Open stroke path through `(x, y)` samples in input order.
    #[must_use]
    pub fn open_points(self, points: &[DataPoint], scale: Scale2D) -> PathGeometry {
        self.open(&project_points(points, scale))
    }

    /// Fill outline through `(x, y)` samples, returning to `baseline_y`.
    #[must_use]
    pub fn closed_points(
        self,
        points: &[DataPoint],
        scale: Scale2D,
        baseline_y: f64,
    ) -> PathGeometry {
        self.closed(&project_points(points, scale), baseline_y)
    }

    /// Open path through already projected pixel points.
    ///
    /// Fewer than two points produce an empty path.
    #[must_use]
    pub fn open(self, pixels: &[Point2D]) -> PathGeometry {
        let Some(first) = pixels.first().copied() else {
            return PathGeometry::empty();
        };
        if pixels.len() < 2 {
            return PathGeometry::empty();
        }

        let mut commands = Vec::with_capacity(self.command_capacity(pixels.len()));
        commands.push(PathCommand::MoveTo { to: first });
        self.trace(pixels, &mut commands);
        PathGeometry { commands }
    }

    /// Closed path: the open curve framed by vertical edges down to
    /// `baseline_y`, then closed.
    ///
    /// Fewer than two points produce an empty path. A non-finite baseline is
    /// treated as `0`.
    #[must_use]
    pub fn closed(self, pixels: &[Point2D], baseline_y: f64) -> PathGeometry {
        let (Some(first), Some(last)) = (pixels.first().copied(), pixels.last().copied()) else {
            return PathGeometry::empty();
        };
        if pixels.len() < 2 {
            return PathGeometry::empty();
        }

        let baseline_y = finite_or_zero(baseline_y);
        let mut commands = Vec::with_capacity(self.command_capacity(pixels.len()) + 3);
        commands.push(PathCommand::MoveTo {
            to: Point2D::new(first.x, baseline_y),
        });
        commands.push(PathCommand::LineTo { to: first });
        self.trace(pixels, &mut commands);
        commands.push(PathCommand::LineTo {
            to: Point2D::new(last.x, baseline_y),
        });
        commands.push(PathCommand::Close);
        PathGeometry { commands }
    }

    fn command_capacity(self, points: usize) -> usize {
        match self.interpolation {
            Interpolation::Linear => points,
            Interpolation::Smoothed => points * 2,
        }
    }

    // Appends the segments after `pixels[0]`; the caller has already moved there.
    fn trace(self, pixels: &[Point2D], commands: &mut Vec<PathCommand>) {
        for pair in pixels.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            match self.interpolation {
                Interpolation::Linear => commands.push(PathCommand::LineTo { to }),
                Interpolation::Smoothed => {
                    let mid = from.midpoint(to);
                    commands.push(PathCommand::QuadTo {
                        control: control_point(mid, from),
                        to: mid,
                    });
                    commands.push(PathCommand::QuadTo {
                        control: control_point(mid, to),
                        to,
                    });
                }
            }
        }
    }
}

/// Control point halfway between `anchor` and `target` horizontally, pushed
/// vertically onto `target`'s level so the curve meets it without overshoot.
fn control_point(anchor: Point2D, target: Point2D) -> Point2D {
    let mut control = anchor.midpoint(target);
    let delta = (target.y - control.y).abs();
    if anchor.y < target.y {
        control.y += delta;
    } else if anchor.y > target.y {
        control.y -= delta;
    }
    control
}

fn project_values(values: &[f64], scale: Scale2D) -> Vec<Point2D> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| scale.project_indexed(index, *value))
        .collect()
}

fn project_points(points: &[DataPoint], scale: Scale2D) -> Vec<Point2D> {
    points
        .iter()
        .map(|point| scale.project_xy(point.x, point.y))
        .collect()
}
