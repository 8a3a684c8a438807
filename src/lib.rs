//! Trade planning for a small set of typed planets.
//!
//! [`domain`] holds the allocator and the analytics derived from its trade
//! matrix; [`util`] holds persistence, logging and asset helpers used by the
//! desktop shell.

pub mod domain;
pub mod util;
