use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use super::*;
use crate::instance_counter::{construction_count, record_construction, VecKind};

/// Builder for a [`Vec2`]. Calculations are performed in place, so a chain of
/// operations does not create a temporary vector per step.
///
/// Mutating operations return the builder itself:
///
/// ```
/// use ella::{Vec2, Vec2Builder};
///
/// let mut b = Vec2Builder::new(1.0, 0.0);
/// b.add((0.0, 1.0)).mul(2.0);
/// assert_eq!(b.to_vec2(), Vec2::new(2.0, 2.0));
/// ```
#[derive(Debug, PartialEq)]
pub struct Vec2Builder {
    x: f64,
    y: f64,
}

impl Vec2Builder {
    pub fn new(x: f64, y: f64) -> Self {
        record_construction(VecKind::Vec2Builder);
        Vec2Builder { x, y }
    }

    /// builder starting at the coordinates of `v`
    pub fn from_vec2(v: Vec2) -> Self {
        Vec2Builder::new(v.x(), v.y())
    }

    pub fn from_json(record: impl Coordinates) -> Self {
        Vec2Builder::new(record.x(), record.y())
    }

    pub fn from_json_str(json: &str) -> Result<Self, Box<dyn Error>> {
        Ok(Vec2Builder::from_json(Vec2Record::from_json_str(json)?))
    }

    /// number of builders constructed so far in this process
    pub fn instance_count() -> usize {
        construction_count(VecKind::Vec2Builder)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn add(&mut self, v: impl Coordinates) -> &mut Self {
        self.x += v.x();
        self.y += v.y();
        self
    }

    pub fn sub(&mut self, v: impl Coordinates) -> &mut Self {
        self.x -= v.x();
        self.y -= v.y();
        self
    }

    pub fn mul(&mut self, s: f64) -> &mut Self {
        self.x *= s;
        self.y *= s;
        self
    }

    pub fn div(&mut self, s: f64) -> &mut Self {
        self.x /= s;
        self.y /= s;
        self
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// set length to 1 keeping the direction
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        self.div(len)
    }

    pub fn dot(&self, v: impl Coordinates) -> f64 {
        self.x * v.x() + self.y * v.y()
    }

    /// rotate counterclockwise by `alpha` radians
    pub fn rotate(&mut self, alpha: f64) -> &mut Self {
        let (sin, cos) = alpha.sin_cos();
        let (x, y) = (self.x, self.y);
        self.x = x * cos - y * sin;
        self.y = x * sin + y * cos;
        self
    }

    pub fn equals(&self, v: impl Coordinates) -> bool {
        self.x == v.x() && self.y == v.y()
    }

    /// snapshot the current state
    pub fn to_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn to_json(&self) -> Vec2Record {
        Vec2Record::new(self.x, self.y)
    }

    pub fn to_json_string(&self) -> Result<String, Box<dyn Error>> {
        self.to_json().to_json_string()
    }
}

impl Coordinates for Vec2Builder {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl Display for Vec2Builder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<Vec2> for Vec2Builder {
    fn from(v: Vec2) -> Self {
        Vec2Builder::from_vec2(v)
    }
}

impl From<&Vec2Builder> for Vec2 {
    fn from(b: &Vec2Builder) -> Self {
        b.to_vec2()
    }
}

impl Serialize for Vec2Builder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Vec2Builder {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec2Record::deserialize(deserializer).map(Vec2Builder::from_json)
    }
}

impl<C: Coordinates> AddAssign<C> for Vec2Builder {
    fn add_assign(&mut self, rhs: C) {
        Vec2Builder::add(self, rhs);
    }
}

impl<C: Coordinates> SubAssign<C> for Vec2Builder {
    fn sub_assign(&mut self, rhs: C) {
        Vec2Builder::sub(self, rhs);
    }
}

impl MulAssign<f64> for Vec2Builder {
    fn mul_assign(&mut self, rhs: f64) {
        Vec2Builder::mul(self, rhs);
    }
}

impl DivAssign<f64> for Vec2Builder {
    fn div_assign(&mut self, rhs: f64) {
        Vec2Builder::div(self, rhs);
    }
}
