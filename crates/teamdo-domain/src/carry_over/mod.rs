mod processor;


pub use processor::{CarryOverFailure, CarryOverProcessor, CarryOverReport};
