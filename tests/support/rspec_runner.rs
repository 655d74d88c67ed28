//! Runs labelled `rspec` scenarios and fails the test on any failed example.

use std::fmt::Debug;
use std::io;
use std::sync::Arc;

use rspec::block::Context;
use rspec::report::Report;
use rspec::{ConfigurationBuilder, Logger, Runner};

/// Builds a `given` suite named `label` around `fixture` and runs it.
///
/// Examples run one at a time: they share the fixture's mutex-guarded state
/// and rely on `before_each` resetting the simulated clock first. A failed
/// example fails the calling test.
pub fn run_serial<T, F>(label: &'static str, fixture: T, body: F)
where
    T: Clone + Send + Sync + Debug,
    F: FnOnce(&mut Context<T>),
{
    let suite = rspec::given(label, fixture, body);
    let config = ConfigurationBuilder::default()
        .parallel(false)
        .exit_on_failure(false)
        .build()
        .unwrap_or_else(|e| panic!("{label}: invalid runner configuration: {e}"));
    let report = Runner::new(config, vec![Arc::new(Logger::new(io::stdout()))]).run(&suite);
    assert!(
        report.is_success(),
        "{label}: {} of {} scenarios failed",
        report.get_failed(),
        report.get_passed() + report.get_failed()
    );
}
