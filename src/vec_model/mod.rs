mod coordinates;
mod record;
mod vec2;
mod vec2_builder;

pub use self::coordinates::*;
pub use self::record::*;
pub use self::vec2::*;
pub use self::vec2_builder::*;
