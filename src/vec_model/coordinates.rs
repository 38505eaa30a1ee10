/// Anything exposing an x and a y coordinate.
///
/// Vector operations accept any implementor, so a [`Vec2`](super::Vec2), a
/// [`Vec2Builder`](super::Vec2Builder), a [`Vec2Record`](super::Vec2Record)
/// or a plain `(x, y)` tuple can be mixed freely.
pub trait Coordinates {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl<T: Coordinates + ?Sized> Coordinates for &T {
    fn x(&self) -> f64 {
        (**self).x()
    }

    fn y(&self) -> f64 {
        (**self).y()
    }
}

impl Coordinates for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinates for [f64; 2] {
    fn x(&self) -> f64 {
        self[0]
    }

    fn y(&self) -> f64 {
        self[1]
    }
}
