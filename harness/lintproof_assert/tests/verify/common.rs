//! Shared helpers for the verification flow tests.

use lintproof_assert::Failure;

/// Unwrap the failure a verification is expected to produce.
pub fn failure(outcome: Result<(), Failure>) -> Failure {
    outcome.expect_err("expected the verification to fail")
}
