//! Whitebox test suites: property-based invariants and visual-order
//! scenarios driven through the harness.
