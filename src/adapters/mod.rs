// Adapters layer: the surfaces that carry requests to the gate.

pub mod http;
pub mod lambda;
