//! Simulator facade tests.
