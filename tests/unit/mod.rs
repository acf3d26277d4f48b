//! Unit test modules.

mod profile_test;
