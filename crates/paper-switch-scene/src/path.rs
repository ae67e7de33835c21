//! 2D paths for layer shapes.

use crate::types::{Point, Rect};

/// Factor for approximating a quarter circle with a cubic bezier.
const KAPPA: f32 = 0.552_284_8;

/// Commands that make up a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Move to a point without drawing.
    MoveTo(Point),
    /// Draw a line to a point.
    LineTo(Point),
    /// Draw a cubic bezier curve.
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Close the current subpath.
    Close,
}

/// A 2D path built from move/line/curve commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create a new empty path.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Move to a point without drawing.
    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    /// Draw a line to a point.
    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    /// Draw a cubic bezier curve.
    pub fn cubic_to(&mut self, control1: Point, control2: Point, end: Point) -> &mut Self {
        self.commands.push(PathCommand::CubicTo {
            control1,
            control2,
            end,
        });
        self
    }

    /// Close the current subpath.
    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Get the path commands.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Create a circle path approximated by four cubic bezier quadrants.
    pub fn circle(center: Point, radius: f32) -> Self {
        let k = radius * KAPPA;
        let mut path = Self::new();

        path.move_to(Point::new(center.x + radius, center.y));
        path.cubic_to(
            Point::new(center.x + radius, center.y + k),
            Point::new(center.x + k, center.y + radius),
            Point::new(center.x, center.y + radius),
        );
        path.cubic_to(
            Point::new(center.x - k, center.y + radius),
            Point::new(center.x - radius, center.y + k),
            Point::new(center.x - radius, center.y),
        );
        path.cubic_to(
            Point::new(center.x - radius, center.y - k),
            Point::new(center.x - k, center.y - radius),
            Point::new(center.x, center.y - radius),
        );
        path.cubic_to(
            Point::new(center.x + k, center.y - radius),
            Point::new(center.x + radius, center.y - k),
            Point::new(center.x + radius, center.y),
        );
        path.close();
        path
    }

    /// Compute the bounding box over every command point.
    ///
    /// Control points of bezier segments are included, which for the shapes
    /// built by this library (circles) yields the exact bounds.
    pub fn bounds(&self) -> Option<Rect> {
        let mut min: Option<Point> = None;
        let mut max: Option<Point> = None;

        let mut extend = |p: Point| {
            min = Some(match min {
                Some(m) => Point::new(m.x.min(p.x), m.y.min(p.y)),
                None => p,
            });
            max = Some(match max {
                Some(m) => Point::new(m.x.max(p.x), m.y.max(p.y)),
                None => p,
            });
        };

        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => extend(p),
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => {
                    extend(control1);
                    extend(control2);
                    extend(end);
                }
                PathCommand::Close => {}
            }
        }

        match (min, max) {
            (Some(min), Some(max)) => Some(Rect::new(
                min.x,
                min.y,
                max.x - min.x,
                max.y - min.y,
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path() {
        let path = Path::new();
        assert!(path.is_empty());
        assert_eq!(path.bounds(), None);
    }

    #[test]
    fn test_line_bounds() {
        let mut path = Path::new();
        path.move_to(Point::new(1.0, 2.0))
            .line_to(Point::new(5.0, 8.0))
            .close();
        let bounds = path.bounds().unwrap();
        assert_eq!(bounds, Rect::new(1.0, 2.0, 4.0, 6.0));
    }

    #[test]
    fn test_circle_command_shape() {
        let path = Path::circle(Point::ZERO, 10.0);
        // Move, four quadrants, close.
        assert_eq!(path.commands().len(), 6);
        assert!(matches!(path.commands()[0], PathCommand::MoveTo(_)));
        assert!(matches!(path.commands()[5], PathCommand::Close));
    }

    #[test]
    fn test_circle_bounds() {
        let center = Point::new(20.0, 50.0);
        let radius = 186.8;
        let path = Path::circle(center, radius);
        let bounds = path.bounds().unwrap();

        assert!((bounds.width() - radius * 2.0).abs() < 1e-3);
        assert!((bounds.height() - radius * 2.0).abs() < 1e-3);
        let bc = bounds.center();
        assert!((bc.x - center.x).abs() < 1e-3);
        assert!((bc.y - center.y).abs() < 1e-3);
    }
}
