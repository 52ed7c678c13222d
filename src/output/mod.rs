pub mod cadence;
pub mod record;
pub mod sampler;
