use kurbo::{Arc, Circle, Shape};

use crate::foundation::core::{BezPath, Point, Rect, Vec2};
use crate::foundation::error::{GlowError, GlowResult};

/// Flattening tolerance for arcs and circles, in pitch units.
const ARC_TOLERANCE: f64 = 0.01;

/// Pitch dimensions in StatsBomb coordinates.
///
/// The pitch is 120 x 80 with the origin at the top-left corner and y growing
/// downward, matching the event data (no axis flip anywhere in the pipeline).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PitchSpec {
    /// Pitch length (x extent).
    pub length: f64,
    /// Pitch width (y extent).
    pub width: f64,
    /// Penalty area depth from the byline.
    pub penalty_area_depth: f64,
    /// Penalty area width, centered on the goal.
    pub penalty_area_width: f64,
    /// Six-yard box depth from the byline.
    pub six_yard_depth: f64,
    /// Six-yard box width, centered on the goal.
    pub six_yard_width: f64,
    /// Penalty spot distance from the byline.
    pub penalty_spot_dist: f64,
    /// Center circle / penalty arc radius.
    pub circle_radius: f64,
    /// Corner arc radius.
    pub corner_radius: f64,
    /// Goal mouth width.
    pub goal_width: f64,
    /// Depth of the box goal drawn behind the byline.
    pub goal_depth: f64,
    /// Radius of the center and penalty spots.
    pub spot_radius: f64,
}

impl Default for PitchSpec {
    fn default() -> Self {
        Self {
            length: 120.0,
            width: 80.0,
            penalty_area_depth: 18.0,
            penalty_area_width: 44.0,
            six_yard_depth: 6.0,
            six_yard_width: 20.0,
            penalty_spot_dist: 12.0,
            circle_radius: 10.0,
            corner_radius: 1.0,
            goal_width: 8.0,
            goal_depth: 2.0,
            spot_radius: 0.4,
        }
    }
}

/// A spot marking (center spot, penalty spots) as a filled disc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spot {
    /// Disc center in pitch units.
    pub center: Point,
    /// Disc radius in pitch units.
    pub radius: f64,
}

/// All pitch markings in pitch units, unstyled.
#[derive(Clone, Debug)]
pub struct PitchMarkings {
    /// Line work: boundary, boxes, goals, halfway line, circle and arcs.
    pub outlines: Vec<BezPath>,
    /// Center and penalty spots.
    pub spots: Vec<Spot>,
}

impl PitchSpec {
    /// Playing-surface rectangle, excluding goals.
    pub fn field_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.length, self.width)
    }

    /// Extent the renderer must keep visible: the field plus the box goals.
    pub fn visible_rect(&self) -> Rect {
        Rect::new(-self.goal_depth, 0.0, self.length + self.goal_depth, self.width)
    }

    /// Build every marking of the pitch.
    pub fn markings(&self) -> GlowResult<PitchMarkings> {
        if !(self.length > 0.0 && self.width > 0.0) {
            return Err(GlowError::validation("pitch dimensions must be > 0"));
        }

        let mid_x = self.length / 2.0;
        let mid_y = self.width / 2.0;
        let mut outlines = Vec::new();

        outlines.push(rect_path(self.field_rect()));

        // Halfway line.
        let mut halfway = BezPath::new();
        halfway.move_to(Point::new(mid_x, 0.0));
        halfway.line_to(Point::new(mid_x, self.width));
        outlines.push(halfway);

        outlines.push(circle_path(Point::new(mid_x, mid_y), self.circle_radius));

        // Penalty areas and six-yard boxes, mirrored left/right.
        for (depth, box_width) in [
            (self.penalty_area_depth, self.penalty_area_width),
            (self.six_yard_depth, self.six_yard_width),
        ] {
            let y0 = mid_y - box_width / 2.0;
            let y1 = mid_y + box_width / 2.0;
            outlines.push(rect_path(Rect::new(0.0, y0, depth, y1)));
            outlines.push(rect_path(Rect::new(
                self.length - depth,
                y0,
                self.length,
                y1,
            )));
        }

        // Box goals behind each byline.
        let gy0 = mid_y - self.goal_width / 2.0;
        let gy1 = mid_y + self.goal_width / 2.0;
        outlines.push(rect_path(Rect::new(-self.goal_depth, gy0, 0.0, gy1)));
        outlines.push(rect_path(Rect::new(
            self.length,
            gy0,
            self.length + self.goal_depth,
            gy1,
        )));

        // Penalty arcs: the part of the circle around the spot that lies
        // outside the penalty area.
        let spot_l = Point::new(self.penalty_spot_dist, mid_y);
        let spot_r = Point::new(self.length - self.penalty_spot_dist, mid_y);
        let cut = (self.penalty_area_depth - self.penalty_spot_dist) / self.circle_radius;
        if cut.abs() < 1.0 {
            let half = cut.acos();
            outlines.push(arc_path(spot_l, self.circle_radius, -half, 2.0 * half));
            outlines.push(arc_path(
                spot_r,
                self.circle_radius,
                std::f64::consts::PI - half,
                2.0 * half,
            ));
        }

        // Corner arcs, one quadrant each.
        let quarter = std::f64::consts::FRAC_PI_2;
        outlines.push(arc_path(Point::new(0.0, 0.0), self.corner_radius, 0.0, quarter));
        outlines.push(arc_path(
            Point::new(self.length, 0.0),
            self.corner_radius,
            quarter,
            quarter,
        ));
        outlines.push(arc_path(
            Point::new(self.length, self.width),
            self.corner_radius,
            2.0 * quarter,
            quarter,
        ));
        outlines.push(arc_path(
            Point::new(0.0, self.width),
            self.corner_radius,
            3.0 * quarter,
            quarter,
        ));

        let spots = vec![
            Spot {
                center: Point::new(mid_x, mid_y),
                radius: self.spot_radius,
            },
            Spot {
                center: spot_l,
                radius: self.spot_radius,
            },
            Spot {
                center: spot_r,
                radius: self.spot_radius,
            },
        ];

        Ok(PitchMarkings { outlines, spots })
    }
}

fn rect_path(r: Rect) -> BezPath {
    let mut p = BezPath::new();
    p.move_to(Point::new(r.x0, r.y0));
    p.line_to(Point::new(r.x1, r.y0));
    p.line_to(Point::new(r.x1, r.y1));
    p.line_to(Point::new(r.x0, r.y1));
    p.close_path();
    p
}

fn circle_path(center: Point, radius: f64) -> BezPath {
    let mut p = BezPath::new();
    for el in Circle::new(center, radius).path_elements(ARC_TOLERANCE) {
        p.push(el);
    }
    p
}

fn arc_path(center: Point, radius: f64, start_angle: f64, sweep_angle: f64) -> BezPath {
    let arc = Arc {
        center,
        radii: Vec2::new(radius, radius),
        start_angle,
        sweep_angle,
        x_rotation: 0.0,
    };
    let mut p = BezPath::new();
    for el in arc.path_elements(ARC_TOLERANCE) {
        p.push(el);
    }
    p
}

#[cfg(test)]
#[path = "../../tests/unit/pitch/markings.rs"]
mod tests;
