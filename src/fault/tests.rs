#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::env;
use std::process::{Command, Output};
use std::sync::Arc;

use derive_more::{Display, Error};

use super::*;
use crate::util::panic::assert_panics;

#[derive(Debug, Display, Error)]
#[display("disk on fire")]
struct DiskOnFire;

/// Tests that end the process, or change process-wide state, run again in a child process of this
/// test binary. The child sees its role in this variable.
const CHILD_ROLE: &str = "FAULTKIT_TEST_CHILD";

fn child_role() -> Option<String> {
    env::var(CHILD_ROLE).ok()
}

fn run_child(test: &str, role: &str) -> Output {
    Command::new(env::current_exe().unwrap())
        .args([test, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ROLE, role)
        .output()
        .unwrap()
}

struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn emit(&self, diagnostic: &Diagnostic<'_>) {
        eprintln!("{diagnostic}");
    }
}

fn memory_reporter() -> (Reporter, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    (Reporter::new(sink.clone()), sink)
}

#[test]
fn test_escalate_none_returns() {
    escalate(None);
    assert_invariant(true, "holds");
}

#[test]
fn test_escalate_raises_the_same_fault() {
    let fault = Fault::msg("boom");
    let payload = assert_panics!({ escalate(Some(fault.clone())) });
    let raised = Fault::from_panic(payload);
    assert!(raised.is(&fault), "The raised fault should keep its identity.");
    assert!(raised.trace().is_some(), "Raising should capture a stack trace.");
}

#[test]
fn test_escalate_result() {
    let ok: Result<u8, DiskOnFire> = Ok(3);
    assert_eq!(ok.escalate(), 3);

    let payload = assert_panics!({
        let err: Result<u8, DiskOnFire> = Err(DiskOnFire);
        err.escalate()
    });
    let fault = Fault::from_panic(payload);
    assert!(
        fault.downcast_ref::<DiskOnFire>().is_some(),
        "The original error type should survive the unwind."
    );
}

#[test]
fn test_assert_invariant_message() {
    let payload = assert_panics!({ assert_invariant(1 + 1 == 3, "arithmetic is broken") });
    let fault = Fault::from_panic(payload);
    assert_eq!(fault.to_string(), "Assertion failed: \narithmetic is broken");
    assert!(fault.downcast_ref::<AssertionFault>().is_some());
}

#[test]
fn test_recover_into_stores_fault() {
    let (reporter, sink) = memory_reporter();
    let mut slot = None;

    let value = reporter.recover_into(&mut slot, || -> u32 { raise(DiskOnFire) });

    assert!(value.is_none(), "No value should be returned after an interception.");
    let stored = slot.expect("The fault should have been stored.");
    assert_eq!(stored.to_string(), "disk on fire");

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("recovered fault: disk on fire"));
    assert!(lines[0].contains("stacktrace from panic:"));
}

#[test]
fn test_recover_into_passes_value_through() {
    let (reporter, sink) = memory_reporter();
    let mut slot = None;

    assert_eq!(reporter.recover_into(&mut slot, || 7), Some(7));
    assert!(slot.is_none());
    assert!(sink.is_empty(), "Nothing should be logged without a fault.");
}

#[test]
fn test_recover_into_plain_panic() {
    let (reporter, _sink) = memory_reporter();
    let mut slot = None;

    reporter.recover_into(&mut slot, || -> u8 { panic!("index {} out of range", 4) });

    let fault = slot.expect("A plain panic should also be stored.");
    assert_eq!(fault.to_string(), "panic: index 4 out of range");
    assert!(fault.trace().is_some());
}

#[test]
fn test_recover_into_keeps_existing_fault() {
    let (reporter, sink) = memory_reporter();
    let primary = Fault::msg("primary");
    let mut slot = Some(primary.clone());

    reporter.recover_into(&mut slot, || -> u8 { raise(Fault::msg("secondary")) });

    assert!(slot.is_some_and(|kept| kept.is(&primary)), "The first fault should keep the slot.");
    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "fault shadowed: secondary (kept: primary)");
}

#[test]
fn test_recover_into_same_fault_is_not_shadowing() {
    let (reporter, sink) = memory_reporter();
    let fault = Fault::msg("once");
    let mut slot = Some(fault.clone());

    let raised = fault.clone();
    reporter.recover_into(&mut slot, move || -> u8 { raise(raised) });

    assert!(slot.is_some_and(|kept| kept.is(&fault)));
    assert_eq!(sink.lines().len(), 1, "Only the recovery itself should be logged.");
}

#[test]
fn test_record() {
    let (reporter, sink) = memory_reporter();
    let mut slot = None;

    reporter.record(&mut slot, || Ok::<(), DiskOnFire>(()));
    assert!(slot.is_none());

    reporter.record(&mut slot, || Err(DiskOnFire));
    assert_eq!(slot.as_ref().map(ToString::to_string).as_deref(), Some("disk on fire"));

    reporter.record(&mut slot, || Err(Fault::msg("close failed")));
    assert_eq!(slot.map(|fault| fault.to_string()).as_deref(), Some("disk on fire"));
    assert_eq!(sink.lines(), vec!["fault shadowed: close failed (kept: disk on fire)"]);
}

#[test]
fn test_clean_up_primary_wins() {
    let (reporter, sink) = memory_reporter();

    let mut outcome: Result<u64, Fault> = Err(Fault::msg("copy failed"));
    reporter.clean_up(&mut outcome, || Err(Fault::msg("close failed")));

    assert_eq!(outcome.map_err(|fault| fault.to_string()), Err(String::from("copy failed")));
    assert_eq!(sink.lines(), vec!["fault shadowed: close failed (kept: copy failed)"]);
}

#[test]
fn test_clean_up_fills_ok_outcome() {
    let (reporter, sink) = memory_reporter();

    let mut outcome: Result<u64, Fault> = Ok(500);
    reporter.clean_up(&mut outcome, || Err(DiskOnFire));
    assert_eq!(outcome.map_err(|fault| fault.to_string()), Err(String::from("disk on fire")));

    let mut outcome: Result<u64, Fault> = Ok(500);
    reporter.clean_up(&mut outcome, || Ok::<(), DiskOnFire>(()));
    assert_eq!(outcome.ok(), Some(500));

    assert!(sink.is_empty());
}

#[test]
fn test_escalate_from_raises() {
    let (reporter, _sink) = memory_reporter();
    reporter.escalate_from(|| Ok::<(), DiskOnFire>(()));

    let payload = assert_panics!({ reporter.escalate_from(|| Err(DiskOnFire)) });
    assert_eq!(Fault::from_panic(payload).to_string(), "disk on fire");
}

struct CloseOnDrop<'a>(&'a Reporter);

impl Drop for CloseOnDrop<'_> {
    fn drop(&mut self) {
        self.0.escalate_from(|| Err(Fault::msg("close failed")));
    }
}

#[test]
fn test_escalate_from_while_unwinding_is_shadowed() {
    let (reporter, sink) = memory_reporter();
    let mut slot = None;

    reporter.recover_into(&mut slot, || -> u8 {
        let _guard = CloseOnDrop(&reporter);
        raise(Fault::msg("write failed"))
    });

    assert_eq!(
        slot.map(|fault| fault.to_string()).as_deref(),
        Some("write failed"),
        "The primary fault should win."
    );
    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "fault shadowed: close failed (kept: fault already unwinding)");
    assert!(lines[1].starts_with("recovered fault: write failed"));
}

#[test]
fn test_log_fault() {
    let (reporter, sink) = memory_reporter();

    assert_eq!(reporter.log_fault(Ok::<_, DiskOnFire>("fine")), Some("fine"));
    assert_eq!(reporter.log_fault(Err::<(), _>(DiskOnFire)), None);

    assert_eq!(sink.lines(), vec!["disk on fire"]);
}

#[test]
fn test_halt_on_fault_ok_passes_through() {
    let (reporter, sink) = memory_reporter();
    assert_eq!(reporter.halt_on_fault(Ok::<_, DiskOnFire>(12)), 12);
    assert!(sink.is_empty());
}

#[test]
fn test_fault_conversions() {
    let fault: Fault = DiskOnFire.into();
    let clone = fault.clone();
    assert!(fault.is(&clone));
    assert!(!fault.is(&Fault::new(DiskOnFire)), "Separate faults shouldn't share identity.");
    assert!(fault.trace().is_none(), "Only raised faults carry a trace.");

    let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(DiskOnFire);
    assert_eq!(Fault::from_boxed(boxed).to_string(), "disk on fire");
}

#[test]
fn test_halt_on_fault_exits() {
    if child_role().as_deref() == Some("halt") {
        let reporter = Reporter::new(Arc::new(StderrSink));
        reporter.halt_on_fault(Err::<(), _>(DiskOnFire));
        return;
    }

    let output = run_child("fault::tests::test_halt_on_fault_exits", "halt");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1), "Halting should exit with status 1: {stderr}");
    assert!(stderr.contains("fatal fault: disk on fire"), "The fault should be logged first: {stderr}");
}

#[test]
fn test_panic_hook_reports_faults() {
    if child_role().as_deref() == Some("hook") {
        Reporter::new(Arc::new(StderrSink)).install().unwrap();
        install_panic_hook();

        let mut slot = None;
        recover_into(&mut slot, || -> u8 { raise(Fault::msg("hooked")) });
        assert!(slot.is_some());

        let mut slot = None;
        recover_into(&mut slot, || -> u8 { panic!("plain panic") });
        assert!(slot.is_some());
        return;
    }

    let output = run_child("fault::tests::test_panic_hook_reports_faults", "hook");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "The child run failed: {stderr}");

    let escalated: Vec<&str> = stderr.lines().filter(|l| l.starts_with("fault escalated")).collect();
    assert_eq!(escalated.len(), 1, "Only the raised fault goes through the hook: {stderr}");
    assert!(escalated[0].starts_with("fault escalated at "), "The location should be known.");
    assert!(escalated[0].ends_with(": hooked"));

    assert!(stderr.contains("recovered fault: hooked"), "Recovery still logs the fault: {stderr}");
    assert!(stderr.contains("plain panic"), "Other panics go to the previous hook: {stderr}");
}
