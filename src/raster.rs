pub mod blur;
pub mod edge;
pub mod mask;
