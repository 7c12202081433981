pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Vector = euclid::Vector2D<f64, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

/// Point at `angle` radians on the circle of `radius` around `center`.
pub fn on_circle(center: Point, radius: f64, angle: f64) -> Point {
    center + euclid::vec2(radius * angle.cos(), radius * angle.sin())
}
