// Domain layer: roll models and ports. No transport concerns here.

pub mod model;
pub mod ports;
