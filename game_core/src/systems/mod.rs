pub mod collision;
pub mod input;
pub mod movement;
pub mod particles;
pub mod respawn;
pub mod scoring;

pub use collision::*;
pub use input::*;
pub use movement::*;
pub use particles::*;
pub use respawn::*;
pub use scoring::*;
