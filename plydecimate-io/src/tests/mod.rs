//! Test modules for plydecimate-io
//!
//! Whole-document tests that go through `PlyReader` and `PlyWriter`,
//! covering every encoding and the file helpers.
