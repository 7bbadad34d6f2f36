//! Tests for the authoritative and stateless verifiers.
