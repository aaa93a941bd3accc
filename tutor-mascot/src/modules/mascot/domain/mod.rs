// Mascot Domain Layer

mod entities;
mod value_objects;

pub use entities::MascotFace;
pub use value_objects::{GazeOffset, MascotVariant};
