/// Rasterizer contract and frame pixel buffer.
pub mod backend;
pub(crate) mod composite;
/// CPU rasterizer on `vello_cpu` + `parley`.
pub mod cpu;
/// Per-frame evaluated draw list.
pub mod frame;
/// Ink particle simulation.
pub mod particles;
pub(crate) mod text;
