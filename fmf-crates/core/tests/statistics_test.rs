#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

mod helpers;

use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;

use fmf_core::convert_case::Case;
use fmf_core::decision::DecisionManager;
use fmf_core::decision::StrategyPriority;
use fmf_core::statistics::configure_statistic_logging;
use fmf_core::statistics::log_statistic_postfix;
use fmf_core::statistics::should_log_statistics;
use fmf_core::statistics::StatisticLogger;
use fmf_core::strings::StringsFmf;
use fmf_core::strings::StringsFmfOptions;
use fmf_core::terms::SkolemCache;
use fmf_core::terms::Sort;
use helpers::init_logging;
use helpers::FakeEngine;

#[derive(Clone, Debug, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0
            .lock()
            .expect("no test panics while holding the lock")
            .write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// Statistic logging is configured once per process, so this binary holds a single test.
#[test]
fn statistics_of_a_search_are_written_with_their_prefixes() {
    init_logging();
    let buffer = SharedBuffer::default();
    configure_statistic_logging(
        "%%fmf-stat:",
        Some("%%fmf-end"),
        Some(Case::Camel),
        Some(Box::new(buffer.clone())),
    );
    assert!(should_log_statistics());

    let mut engine = FakeEngine::default();
    let x = engine.terms.new_variable("x", Sort::String);
    let mut strings_fmf = StringsFmf::new(StringsFmfOptions::default(), SkolemCache::default());
    strings_fmf.on_variable_seen(&engine.user_context, &engine.terms, x);
    strings_fmf
        .begin_session(&engine.user_context)
        .expect("session can be started");

    {
        let mut decision_manager = DecisionManager::default();
        decision_manager.register(
            StrategyPriority::FiniteModelFinding,
            strings_fmf.active_strategy_mut().expect("session is active"),
        );
        let _ = engine
            .solve(&mut decision_manager, 2)
            .expect("the protocol is followed");

        decision_manager.log_statistics(StatisticLogger::new(["decision", "manager"]));
    }
    strings_fmf.log_statistics(StatisticLogger::new(["strings", "fmf"]));
    log_statistic_postfix();

    let output = String::from_utf8(
        buffer
            .0
            .lock()
            .expect("no test panics while holding the lock")
            .clone(),
    )
    .expect("statistics are written as UTF-8");
    let lines = output.lines().collect::<Vec<_>>();

    assert!(lines.contains(&"%%fmf-stat: decisionManagerNumDecisions=3"));
    assert!(lines.contains(&"%%fmf-stat: decisionManagerNumLiteralsSkipped=2"));
    assert!(lines.contains(&"%%fmf-stat: decisionManagerStringSumLenNumLiteralsCreated=3"));
    assert!(lines.contains(&"%%fmf-stat: stringsFmfNumSessions=1"));
    assert!(lines.contains(&"%%fmf-stat: stringsFmfNumVariablesTracked=1"));
    assert!(lines.contains(&"%%fmf-stat: stringsFmfStringSumLenNumSumConstructions=1"));
    assert_eq!(Some(&"%%fmf-end"), lines.last());
}
