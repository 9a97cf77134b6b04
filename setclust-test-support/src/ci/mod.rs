//! Helpers shared by CI-driven test configuration.

pub mod property_test_profile;
