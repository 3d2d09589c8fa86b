/*! Integration tests for QRLink.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - store: Tests for the Storage trait and the InMemory implementation
 * - session: Tests for the login flow and user registration
 * - registry: Tests for client record CRUD and QR derivation rules
 * - guards: Tests for route parsing and role-based access decisions
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("qrlink=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod session;
mod store;
