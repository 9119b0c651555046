//! Cross-crate integration test suite for the schedina stack.
//!
//! The library target is intentionally empty — everything lives under
//! `tests/`, exercising the public APIs the way an embedding
//! application would.
