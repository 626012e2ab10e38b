/*! Integration tests for Biihlive identity.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - identity: End-to-end resolution scenarios through an AppContext
 * - store: Tests for the session store implementations
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("biihlive_identity=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod helpers;
mod identity;
mod store;
