use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollerCommand {
    RefreshNow,
    Stop,
}

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("poller is already running")]
    AlreadyRunning,
    #[error("failed to spawn poller thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Cancellation handle for a running poller thread.
#[derive(Debug)]
pub struct PollHandle {
    cmd_tx: Sender<PollerCommand>,
    join: Option<JoinHandle<()>>,
}

impl PollHandle {
    pub fn commands(&self) -> Sender<PollerCommand> {
        self.cmd_tx.clone()
    }

    pub fn refresh_now(&self) -> bool {
        self.cmd_tx.send(PollerCommand::RefreshNow).is_ok()
    }

    /// Stops the poller and waits for an in-flight cycle to finish.
    pub fn stop(mut self) {
        let _ = self.cmd_tx.send(PollerCommand::Stop);
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        let _ = self.cmd_tx.send(PollerCommand::Stop);
    }
}

/// Runs `cycle` once right away, then again every `interval` until stopped.
/// All cycles run on the spawned thread, one at a time.
pub fn spawn_poller<C>(interval: Duration, cycle: C) -> std::io::Result<PollHandle>
where
    C: FnMut() + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let join = thread::Builder::new()
        .name("mlb-poller".to_string())
        .spawn(move || poll_loop(interval, cycle, cmd_rx))?;
    Ok(PollHandle {
        cmd_tx,
        join: Some(join),
    })
}

fn poll_loop<C: FnMut()>(interval: Duration, mut cycle: C, cmd_rx: Receiver<PollerCommand>) {
    loop {
        cycle();
        match drain_commands(&cmd_rx) {
            Queued::Stop => return,
            Queued::Refresh => continue,
            Queued::Nothing => {}
        }
        match cmd_rx.recv_timeout(interval) {
            Ok(PollerCommand::RefreshNow) | Err(RecvTimeoutError::Timeout) => {}
            Ok(PollerCommand::Stop) | Err(RecvTimeoutError::Disconnected) => return,
        }
    }
}

enum Queued {
    Nothing,
    Refresh,
    Stop,
}

/// Commands that piled up during a cycle: a stop wins over everything, and
/// any number of refreshes count as one.
fn drain_commands(cmd_rx: &Receiver<PollerCommand>) -> Queued {
    let mut queued = Queued::Nothing;
    loop {
        match cmd_rx.try_recv() {
            Ok(PollerCommand::RefreshNow) => queued = Queued::Refresh,
            Ok(PollerCommand::Stop) | Err(TryRecvError::Disconnected) => return Queued::Stop,
            Err(TryRecvError::Empty) => return queued,
        }
    }
}

#[derive(Debug)]
pub struct Scheduler {
    interval: Duration,
    handle: Option<PollHandle>,
}

impl Scheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            handle: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn start<C>(&mut self, cycle: C) -> Result<(), SchedulerError>
    where
        C: FnMut() + Send + 'static,
    {
        if self.handle.is_some() {
            return Err(SchedulerError::AlreadyRunning);
        }
        self.handle = Some(spawn_poller(self.interval, cycle)?);
        Ok(())
    }

    pub fn commands(&self) -> Option<Sender<PollerCommand>> {
        self.handle.as_ref().map(PollHandle::commands)
    }

    pub fn refresh_now(&self) -> bool {
        self.handle.as_ref().is_some_and(PollHandle::refresh_now)
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.stop();
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
