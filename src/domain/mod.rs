// Domain layer: core models and ports (interfaces). No knowledge of adapters.

pub mod model;
pub mod ports;
