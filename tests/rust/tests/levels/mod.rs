//! Level mapping integration tests
//!
//! Severity in, reporting level name out, through the whole subscriber.
