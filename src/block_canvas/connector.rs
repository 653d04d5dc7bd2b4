use super::geometry::Point;

/// Orthogonal route from a parent's bottom-center down to a child's top-center,
/// turning at the vertical midpoint between the two.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Elbow {
    pub points: [Point; 4],
}

impl Elbow {
    /// `parent` and `child` are top-left corners of squares with side `block_size`.
    pub fn between(parent: Point, child: Point, block_size: f64) -> Self {
        let half = block_size / 2.0;
        let start = Point::new(parent.x + half, parent.y + block_size);
        let end = Point::new(child.x + half, child.y);
        let mid_y = (start.y + end.y) / 2.0;
        Self {
            points: [
                start,
                Point::new(start.x, mid_y),
                Point::new(end.x, mid_y),
                end,
            ],
        }
    }

    /// SVG path data, e.g. `M 150 200 L 150 250 L 350 250 L 350 300`.
    pub fn to_svg_path(&self) -> String {
        let [a, b, c, d] = self.points;
        format!(
            "M {} {} L {} {} L {} {} L {} {}",
            a.x, a.y, b.x, b.y, c.x, c.y, d.x, d.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn routes_through_midpoint() {
        let elbow = Elbow::between(Point::new(100.0, 100.0), Point::new(300.0, 300.0), 100.0);
        assert_eq!(
            elbow.points,
            [
                Point::new(150.0, 200.0),
                Point::new(150.0, 250.0),
                Point::new(350.0, 250.0),
                Point::new(350.0, 300.0),
            ]
        );
        assert_eq!(elbow.to_svg_path(), "M 150 200 L 150 250 L 350 250 L 350 300");
    }

    #[test]
    fn child_above_parent_still_meets_both_anchors() {
        let elbow = Elbow::between(Point::new(400.0, 500.0), Point::new(120.5, 100.0), 100.0);
        assert_eq!(elbow.points[0], Point::new(450.0, 600.0));
        assert_eq!(elbow.points[1].y, 350.0);
        assert_eq!(elbow.points[2], Point::new(170.5, 350.0));
        assert_eq!(elbow.points[3], Point::new(170.5, 100.0));
    }

    #[test]
    fn moving_one_end_changes_only_that_side() {
        let parent = Point::new(100.0, 100.0);
        let child = Point::new(300.0, 400.0);
        let before = Elbow::between(parent, child, 100.0);

        let moved_parent = Elbow::between(parent + Point::new(40.0, 0.0), child, 100.0);
        assert_ne!(moved_parent, before);
        assert_eq!(moved_parent.points[3], before.points[3]);

        let moved_child = Elbow::between(parent, child + Point::new(-60.0, 20.0), 100.0);
        assert_ne!(moved_child, before);
        assert_eq!(moved_child.points[0], before.points[0]);
    }
}
