pub mod design;
pub mod gateway;
pub mod image;
pub mod options;
pub mod preset;

pub use design::*;
pub use gateway::*;
pub use image::*;
pub use options::*;
pub use preset::*;
