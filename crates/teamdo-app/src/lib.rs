// Application and presentation layers for the TeamDo service.
// The binary in main.rs wires these together; tests use the library target.

pub mod application;
pub mod presentation;
