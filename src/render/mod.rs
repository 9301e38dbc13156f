pub(crate) mod cpu;
pub(crate) mod rasterizer;
pub(crate) mod renderer;
pub(crate) mod surface;
