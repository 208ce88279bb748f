// Domain layer: models, ports and the pure hostname logic. No process or filesystem access here.

pub mod hostname;
pub mod model;
pub mod ports;
