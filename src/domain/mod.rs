// Domain layer: the property model and the ports the generator talks through.

pub mod model;
pub mod ports;
