// Common test utilities and fixtures

pub mod helpers;

// Re-export commonly used items
// Note: These may appear unused in some test binaries but are used in others
#[allow(unused_imports)]
pub use fixtures::{sample_records, FaqFile, SAMPLE_FAQ_JSON};
#[allow(unused_imports)]
pub use helpers::{assert_score_bounds, create_test_engine, create_test_services};
