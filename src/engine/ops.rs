//! Simulated async operations as progress-driven state machines
//!
//! Each operation advances by a fixed step on a fixed-interval timer and
//! applies its terminal effect exactly once when progress reaches 100. At
//! most one operation per kind may be in flight; cancellation (view
//! teardown) discards the operation without applying its effect.

use std::time::Instant;

use crate::constants::{PROGRESS_STEP, PROGRESS_TICK};
use crate::engine::scheduler::{Scheduler, TimerId};
use crate::error::WalletError;

/// Kinds of simulated operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpKind {
    Topup,
    Staking,
    Payment,
    FaceScan,
    Fingerprint,
}

impl OpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpKind::Topup => "top-up",
            OpKind::Staking => "staking",
            OpKind::Payment => "payment",
            OpKind::FaceScan => "face-scan",
            OpKind::Fingerprint => "fingerprint",
        }
    }
}

/// Terminal effect handed back to the session when an operation completes
#[derive(Clone, Debug, PartialEq)]
pub enum OpEffect {
    Topup { amount: i64 },
    Stake { amount: i64 },
    Pay { amount_eur: f64, rate: f64 },
    Login,
    EnableFaceAuth,
}

#[derive(Debug)]
struct Operation {
    kind: OpKind,
    progress: u8,
    effect: OpEffect,
    timer: TimerId,
}

/// In-flight operations, advanced from scheduler ticks
#[derive(Debug, Default)]
pub struct OpEngine {
    ops: Vec<Operation>,
}

impl OpEngine {
    pub fn new() -> Self {
        OpEngine::default()
    }

    /// Begin an operation; rejects when one of the same kind is in flight
    pub fn start(
        &mut self,
        sched: &mut Scheduler,
        now: Instant,
        kind: OpKind,
        effect: OpEffect,
    ) -> Result<(), WalletError> {
        if self.in_flight(kind) {
            return Err(WalletError::OperationConflict(kind.as_str()));
        }
        let timer = sched.schedule(now, PROGRESS_TICK);
        self.ops.push(Operation {
            kind,
            progress: 0,
            effect,
            timer,
        });
        tracing::info!(kind = kind.as_str(), "operation started");
        Ok(())
    }

    /// Advance the operation owning `timer`, if any. Returns the terminal
    /// effect once progress reaches 100; the operation is discarded then.
    pub fn on_timer(
        &mut self,
        sched: &mut Scheduler,
        now: Instant,
        timer: TimerId,
    ) -> Option<(OpKind, OpEffect)> {
        let idx = self.ops.iter().position(|op| op.timer == timer)?;
        let op = &mut self.ops[idx];
        op.progress = op.progress.saturating_add(PROGRESS_STEP).min(100);
        if op.progress >= 100 {
            let op = self.ops.remove(idx);
            tracing::info!(kind = op.kind.as_str(), "operation completed");
            Some((op.kind, op.effect))
        } else {
            op.timer = sched.schedule(now, PROGRESS_TICK);
            None
        }
    }

    /// Discard an in-flight operation without applying its effect
    pub fn cancel(&mut self, sched: &mut Scheduler, kind: OpKind) {
        if let Some(idx) = self.ops.iter().position(|op| op.kind == kind) {
            let op = self.ops.remove(idx);
            sched.cancel(op.timer);
            tracing::info!(kind = kind.as_str(), progress = op.progress, "operation cancelled");
        }
    }

    pub fn in_flight(&self, kind: OpKind) -> bool {
        self.ops.iter().any(|op| op.kind == kind)
    }

    pub fn progress(&self, kind: OpKind) -> Option<u8> {
        self.ops.iter().find(|op| op.kind == kind).map(|op| op.progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PROGRESS_TICK;
    use std::time::Instant;

    fn drive_to_completion(
        engine: &mut OpEngine,
        sched: &mut Scheduler,
        mut now: Instant,
    ) -> Vec<(OpKind, OpEffect)> {
        let mut effects = Vec::new();
        for _ in 0..20 {
            now += PROGRESS_TICK;
            for timer in sched.poll(now) {
                if let Some(done) = engine.on_timer(sched, now, timer) {
                    effects.push(done);
                }
            }
        }
        effects
    }

    #[test]
    fn test_effect_fires_exactly_once_after_ten_ticks() {
        let now = Instant::now();
        let mut sched = Scheduler::new();
        let mut engine = OpEngine::new();
        engine
            .start(&mut sched, now, OpKind::Topup, OpEffect::Topup { amount: 100_000 })
            .unwrap();

        let mut fired = 0;
        let mut current = now;
        for tick in 1..=12 {
            current += PROGRESS_TICK;
            for timer in sched.poll(current) {
                if engine.on_timer(&mut sched, current, timer).is_some() {
                    fired += 1;
                    assert_eq!(tick, 10);
                }
            }
        }
        assert_eq!(fired, 1);
        assert!(!engine.in_flight(OpKind::Topup));
    }

    #[test]
    fn test_progress_is_monotonic() {
        let now = Instant::now();
        let mut sched = Scheduler::new();
        let mut engine = OpEngine::new();
        engine
            .start(&mut sched, now, OpKind::FaceScan, OpEffect::Login)
            .unwrap();

        let mut last = 0;
        let mut current = now;
        for _ in 1..=9 {
            current += PROGRESS_TICK;
            for timer in sched.poll(current) {
                engine.on_timer(&mut sched, current, timer);
            }
            let progress = engine.progress(OpKind::FaceScan).unwrap();
            assert!(progress > last);
            last = progress;
        }
        assert_eq!(last, 90);
    }

    #[test]
    fn test_same_kind_start_is_rejected() {
        let now = Instant::now();
        let mut sched = Scheduler::new();
        let mut engine = OpEngine::new();
        engine
            .start(&mut sched, now, OpKind::Staking, OpEffect::Stake { amount: 10_000 })
            .unwrap();
        let err = engine
            .start(&mut sched, now, OpKind::Staking, OpEffect::Stake { amount: 20_000 })
            .unwrap_err();
        assert_eq!(err, WalletError::OperationConflict("staking"));
    }

    #[test]
    fn test_different_kinds_run_independently() {
        let now = Instant::now();
        let mut sched = Scheduler::new();
        let mut engine = OpEngine::new();
        engine
            .start(&mut sched, now, OpKind::Topup, OpEffect::Topup { amount: 10_000 })
            .unwrap();
        engine
            .start(&mut sched, now, OpKind::FaceScan, OpEffect::Login)
            .unwrap();

        let effects = drive_to_completion(&mut engine, &mut sched, now);
        assert_eq!(effects.len(), 2);
    }

    #[test]
    fn test_cancel_applies_no_effect() {
        let now = Instant::now();
        let mut sched = Scheduler::new();
        let mut engine = OpEngine::new();
        engine
            .start(&mut sched, now, OpKind::Payment, OpEffect::Pay {
                amount_eur: 50.0,
                rate: 1480.0,
            })
            .unwrap();
        engine.cancel(&mut sched, OpKind::Payment);

        let effects = drive_to_completion(&mut engine, &mut sched, now);
        assert!(effects.is_empty());
        assert_eq!(engine.progress(OpKind::Payment), None);
    }
}
