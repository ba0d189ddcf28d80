//! Cross-crate regression tests for quadbench live under `tests/`.
