// Shared with the library's unit-test support module; one copy of the
// socket guard serves both.
#[path = "../../src/test_support/socket_guard.rs"]
pub mod socket_guard;
