//! Wire-level scenario tests for both deployable shapes.
