//! Shared helpers for unit tests. Compiled only under `cfg(test)`.

pub mod socket_guard;
