// src/gui/pages/mod.rs
//
// One module per tab. Pages only read `App`; sidebar components own the
// mutations.
pub mod analysis;
pub mod dashboard;
