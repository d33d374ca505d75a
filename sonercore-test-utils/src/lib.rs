pub mod fixtures;
pub mod service;

pub use fixtures::{fixtures_root, load_fixture, load_fixture_json};
pub use service::{client_for, unreachable_url, FakeAnalysisService, RecordedRequest, Reply};
