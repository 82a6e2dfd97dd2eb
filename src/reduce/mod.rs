//! Reduction workers: the two averages, each computed on its own thread
//! and handed back over a one-shot channel.

use crate::error::AnalysisError;
use crate::model::Totals;
use std::fmt;
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, Scope, ScopedJoinHandle};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AverageKind {
    Cpu,
    Mem,
}

impl fmt::Display for AverageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AverageKind::Cpu => f.write_str("CPU"),
            AverageKind::Mem => f.write_str("memory"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AverageResult {
    pub kind: AverageKind,
    pub value: f64,
}

/// Both averages, available only once both workers have delivered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Averages {
    pub cpu: f64,
    pub mem: f64,
}

/// The work a single reduction worker does.
pub fn compute_average(
    totals: &Totals,
    kind: AverageKind,
) -> Result<AverageResult, AnalysisError> {
    if totals.entry_count == 0 {
        return Err(AnalysisError::DivideByZero { kind });
    }

    let sum = match kind {
        AverageKind::Cpu => totals.total_cpu,
        AverageKind::Mem => totals.total_mem,
    };

    Ok(AverageResult {
        kind,
        value: sum / totals.entry_count as f64,
    })
}

type WorkerReply = Result<AverageResult, AnalysisError>;

struct Worker<'scope> {
    kind: AverageKind,
    rx: Receiver<WorkerReply>,
    handle: ScopedJoinHandle<'scope, ()>,
}

fn spawn_worker<'scope, 'env, F>(
    scope: &'scope Scope<'scope, 'env>,
    totals: &'env Totals,
    kind: AverageKind,
    job: F,
) -> Worker<'scope>
where
    F: FnOnce(&Totals) -> WorkerReply + Send + 'scope,
{
    let (tx, rx) = mpsc::sync_channel::<WorkerReply>(1);

    let handle = scope.spawn(move || {
        debug!(%kind, "reduction worker started");
        let reply = job(totals);
        // Coordinator holds the receiver until it has read; a failed send
        // can only mean it already gave up.
        let _ = tx.send(reply);
        debug!(%kind, "reduction worker finished");
    });

    Worker { kind, rx, handle }
}

impl Worker<'_> {
    /// Block for the single reply, then join the thread whatever the reply was.
    fn finish(self) -> WorkerReply {
        let reply = self
            .rx
            .recv()
            .map_err(|_| AnalysisError::WorkerChannel { kind: self.kind });

        if self.handle.join().is_err() {
            return Err(AnalysisError::WorkerPanicked { kind: self.kind });
        }

        let result = reply??;
        if result.kind != self.kind {
            return Err(AnalysisError::WorkerChannel { kind: self.kind });
        }
        Ok(result)
    }
}

/// Start one thread per job and wait for both replies. Both threads are
/// joined before this returns, whatever either of them did.
fn fan_out<'env, C, M>(
    totals: &'env Totals,
    cpu_job: C,
    mem_job: M,
) -> (WorkerReply, WorkerReply)
where
    C: FnOnce(&Totals) -> WorkerReply + Send + 'env,
    M: FnOnce(&Totals) -> WorkerReply + Send + 'env,
{
    thread::scope(|s| {
        let cpu = spawn_worker(s, totals, AverageKind::Cpu, cpu_job);
        let mem = spawn_worker(s, totals, AverageKind::Mem, mem_job);
        (cpu.finish(), mem.finish())
    })
}

/// Run the CPU and memory workers concurrently over finalized totals and
/// collect both results.
///
/// Both workers are always joined. If both fail, the CPU error wins.
pub fn collect_averages(totals: &Totals) -> Result<Averages, AnalysisError> {
    if totals.entry_count == 0 {
        warn!("no valid log entries; averages are undefined");
    }

    let (cpu, mem) = fan_out(
        totals,
        |t| compute_average(t, AverageKind::Cpu),
        |t| compute_average(t, AverageKind::Mem),
    );

    Ok(Averages {
        cpu: cpu?.value,
        mem: mem?.value,
    })
}
