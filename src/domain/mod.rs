// Domain layer: models and ports. No transport or filesystem concerns here.

pub mod model;
pub mod ports;
