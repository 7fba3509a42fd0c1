//! Skip policy for suites that need an embedded PostgreSQL cluster.
//!
//! The cluster downloads PostgreSQL binaries on first use, which is not
//! possible on every machine. Suites skip with a marker by default and fail
//! hard when `REQUIRE_TEST_CLUSTER` is truthy, as CI sets it.

/// Whether `REQUIRE_TEST_CLUSTER` is set to "1", "true" or "yes"
/// (case-insensitive).
pub fn cluster_required() -> bool {
    std::env::var("REQUIRE_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Report a cluster setup failure.
///
/// Prints a `SKIP-TEST-CLUSTER` marker and returns `None`, or panics when the
/// cluster is required.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if cluster_required() {
        panic!("Test cluster setup failed: {reason}. Unset REQUIRE_TEST_CLUSTER to skip.");
    }
    eprintln!("SKIP-TEST-CLUSTER: {reason}");
    None
}
