//! Cross-module tests: derivation rules and end-to-end assignment scenarios.

mod support;
