mod export;
mod render;

pub use export::*;
pub use render::*;
