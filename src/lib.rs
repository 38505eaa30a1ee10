//! Two dimensional vector primitives
//!
//! [`Vec2`] is an immutable value, every operation returns a new vector.
//!
//! [`Vec2Builder`] performs the same operations in place, for call sites
//! chaining many steps on one vector. Convert between them with
//! [`Vec2Builder::from_vec2`] and [`Vec2Builder::to_vec2`].
//!
//! ```
//! use ella::{Vec2, Vec2Builder};
//!
//! let v = Vec2::new(3.0, 4.0);
//! assert_eq!(v.length(), 5.0);
//! assert_eq!(v.to_string(), "(3, 4)");
//!
//! let mut b = Vec2Builder::from_vec2(v);
//! b.sub(v).add((1.0, 0.0)).mul(3.0);
//! assert!(b.equals((3.0, 0.0)));
//! assert_eq!(Vec2::from_json_str(r#"{"x": 3, "y": 0}"#).unwrap(), b.to_vec2());
//! ```

#[macro_use]
pub mod vec_error;
mod instance_counter;
pub mod vec_model;

pub use instance_counter::{
    clear_construction_observer, set_construction_observer, ConstructionObserver, VecKind,
};
pub use vec_model::*;
