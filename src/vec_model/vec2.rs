use float_cmp::{ApproxEq, F64Margin};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};

use super::*;
use crate::instance_counter::{construction_count, record_construction, VecKind};

/// An immutable two dimensional vector.
///
/// Every operation returns a new vector and leaves its operands untouched.
/// Division by zero is not guarded: it yields infinity or NaN following
/// IEEE-754, and so does normalizing a zero length vector.
///
/// Equality is exact. Use [`ApproxEq`] when a tolerance is needed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec2Record", into = "Vec2Record")]
pub struct Vec2 {
    x: f64,
    y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        record_construction(VecKind::Vec2);
        Vec2 { x, y }
    }

    /// build a vector from a serialized record, or anything else with coordinates
    pub fn from_json(record: impl Coordinates) -> Self {
        Vec2::new(record.x(), record.y())
    }

    /// parse a vector from json text like `{"x": 1, "y": 2}`
    pub fn from_json_str(json: &str) -> Result<Self, Box<dyn Error>> {
        Ok(Vec2::from_json(Vec2Record::from_json_str(json)?))
    }

    /// number of vectors constructed so far in this process
    pub fn instance_count() -> usize {
        construction_count(VecKind::Vec2)
    }

    pub fn x(self) -> f64 {
        self.x
    }

    pub fn y(self) -> f64 {
        self.y
    }

    pub fn add(self, v: impl Coordinates) -> Vec2 {
        Vec2::new(self.x + v.x(), self.y + v.y())
    }

    pub fn sub(self, v: impl Coordinates) -> Vec2 {
        Vec2::new(self.x - v.x(), self.y - v.y())
    }

    pub fn mul(self, s: f64) -> Vec2 {
        Vec2::new(self.x * s, self.y * s)
    }

    pub fn div(self, s: f64) -> Vec2 {
        Vec2::new(self.x / s, self.y / s)
    }

    /// euclidean length
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// same direction, length 1
    pub fn normalize(self) -> Vec2 {
        self.div(self.length())
    }

    pub fn dot(self, v: impl Coordinates) -> f64 {
        self.x * v.x() + self.y * v.y()
    }

    /// rotate counterclockwise by `alpha` radians
    pub fn rotate(self, alpha: f64) -> Vec2 {
        let (sin, cos) = alpha.sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    pub fn equals(self, v: impl Coordinates) -> bool {
        self.x == v.x() && self.y == v.y()
    }

    pub fn to_json(self) -> Vec2Record {
        Vec2Record::new(self.x, self.y)
    }

    pub fn to_json_string(self) -> Result<String, Box<dyn Error>> {
        self.to_json().to_json_string()
    }
}

impl Coordinates for Vec2 {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl Display for Vec2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<Vec2Record> for Vec2 {
    fn from(record: Vec2Record) -> Self {
        Vec2::from_json(record)
    }
}

impl From<Vec2> for Vec2Record {
    fn from(v: Vec2) -> Self {
        v.to_json()
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vec2::new(x, y)
    }
}

impl From<Vec2> for (f64, f64) {
    fn from(v: Vec2) -> Self {
        (v.x, v.y)
    }
}

impl ApproxEq for Vec2 {
    type Margin = F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin = margin.into();
        self.x.approx_eq(other.x, margin) && self.y.approx_eq(other.y, margin)
    }
}

impl<C: Coordinates> Add<C> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: C) -> Vec2 {
        Vec2::add(self, rhs)
    }
}

impl<C: Coordinates> Sub<C> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: C) -> Vec2 {
        Vec2::sub(self, rhs)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::mul(self, rhs)
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: f64) -> Vec2 {
        Vec2::div(self, rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod test_vec2 {
    use super::*;
    use std::f64::consts::PI;

    const MARGIN: F64Margin = F64Margin {
        epsilon: 1e-9,
        ulps: 4,
    };

    #[test]
    fn test_add() {
        let v0 = Vec2::new(1.0, 0.0);
        let v1 = Vec2::new(0.0, 1.0);
        let v2 = v0.add(v1);
        assert_eq!((v2.x(), v2.y()), (1.0, 1.0));
        // operands untouched
        assert_eq!((v0.x(), v0.y()), (1.0, 0.0));
        assert_eq!((v1.x(), v1.y()), (0.0, 1.0));
        assert!(v0.add(v1).sub(v1).equals(v0));
    }

    #[test]
    fn test_sub() {
        let v0 = Vec2::new(1.0, 0.0);
        let v1 = Vec2::new(0.0, 1.0);
        assert_eq!(v0.sub(v1), Vec2::new(1.0, -1.0));
        assert_eq!((v0.x(), v0.y()), (1.0, 0.0));
        assert_eq!((v1.x(), v1.y()), (0.0, 1.0));
    }

    #[test]
    fn test_mul_div() {
        let v0 = Vec2::new(1.0, 0.0);
        assert_eq!(v0.mul(2.0), Vec2::new(2.0, 0.0));
        assert_eq!(Vec2::new(2.0, 0.0).div(2.0), Vec2::new(1.0, 0.0));
        assert_eq!((v0.x(), v0.y()), (1.0, 0.0));
    }

    #[test]
    fn test_div_by_zero() {
        let v = Vec2::new(1.0, -1.0).div(0.0);
        assert_eq!(v.x(), f64::INFINITY);
        assert_eq!(v.y(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_length() {
        assert_eq!(Vec2::new(3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn test_normalize() {
        let v0 = Vec2::new(3.0, 4.0);
        let v1 = v0.normalize();
        assert!(v1.approx_eq(Vec2::new(0.6, 0.8), MARGIN));
        assert_eq!((v0.x(), v0.y()), (3.0, 4.0));

        let zero = Vec2::new(0.0, 0.0).normalize();
        assert!(zero.x().is_nan() && zero.y().is_nan());
    }

    #[test]
    fn test_dot() {
        assert_eq!(Vec2::new(1.0, 0.0).dot(Vec2::new(0.0, 1.0)), 0.0);
        assert_eq!(Vec2::new(2.0, 3.0).dot((4.0, -1.0)), 5.0);
    }

    #[test]
    fn test_rotate() {
        let v0 = Vec2::new(1.0, 0.0);
        let v1 = v0.rotate(PI / 2.0);
        assert!(v1.approx_eq(Vec2::new(0.0, 1.0), MARGIN));
        assert_eq!((v0.x(), v0.y()), (1.0, 0.0));
        assert!(v0.rotate(PI).approx_eq(Vec2::new(-1.0, 0.0), MARGIN));
    }

    #[test]
    fn test_equals() {
        let v = Vec2::new(1.5, -2.0);
        assert!(v.equals(v));
        assert!(!v.equals(Vec2::new(1.5, 2.0)));
        assert!(!v.equals(Vec2::new(1.0, -2.0)));
        // strict, no epsilon
        assert!(!v.equals(Vec2::new(1.5 + f64::EPSILON, -2.0)));
        assert!(Vec2::new(0.0, 0.0).equals(Vec2::new(-0.0, 0.0)));
        let nan = Vec2::new(f64::NAN, 0.0);
        assert!(!nan.equals(nan));
        assert_ne!(nan, nan);
    }

    #[test]
    fn test_to_string() {
        assert_eq!(Vec2::new(1.0, 0.0).to_string(), "(1, 0)");
        assert_eq!(Vec2::new(0.5, -2.25).to_string(), "(0.5, -2.25)");
    }

    #[test]
    fn test_json() {
        let v = Vec2::new(1.0, 2.0);
        assert_eq!(v.to_json(), Vec2Record { x: 1.0, y: 2.0 });
        assert!(Vec2::from_json(v.to_json()).equals(v));

        let json = v.to_json_string().unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":2.0}"#);
        assert_eq!(Vec2::from_json_str(&json).unwrap(), v);
        assert_eq!(serde_json::to_string(&v).unwrap(), json);
        assert_eq!(serde_json::from_str::<Vec2>(&json).unwrap(), v);

        assert!(Vec2::from_json_str(r#"{"x": 1.0}"#).is_err());
        assert!(Vec2::from_json_str(r#"{"x": "a", "y": 1.0}"#).is_err());
    }

    #[test]
    fn test_embedded_in_serde_struct() {
        #[derive(Serialize, Deserialize)]
        struct Node {
            id: u32,
            position: Vec2,
        }

        let before = Vec2::instance_count();
        let node: Node = serde_json::from_str(r#"{"id": 7, "position": {"x": 3, "y": 4}}"#).unwrap();
        assert_eq!(node.id, 7);
        assert_eq!(node.position.length(), 5.0);
        // deserialization goes through the counted constructor
        assert!(Vec2::instance_count() > before);
    }

    #[test]
    fn test_operators() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(a - b, Vec2::new(-2.0, 3.0));
        assert_eq!(a + (1.0, 1.0), Vec2::new(2.0, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(b / 2.0, Vec2::new(1.5, -0.5));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn test_tuple_conversion() {
        let v: Vec2 = (2.0, 3.0).into();
        let t: (f64, f64) = v.into();
        assert_eq!(t, (2.0, 3.0));
    }
}
