use std::sync::mpsc;
use std::time::Duration;

use tracing::debug;

use crate::error::{ImgpressError, Result, TransportError};
use crate::persist::{SessionStorage, SessionStore};
use crate::service::{spawn_service_worker, CompressionService, ServiceCommand, ServiceReply};
use crate::upload::CompressRequest;

use super::controller::BrowsingController;
use super::state::{RequestToken, Resolution};

/// A response applied to the controller, with the service round-trip time.
#[derive(Debug)]
pub struct Settled {
    pub token: RequestToken,
    pub resolution: Resolution,
    pub elapsed: Duration,
}

/// Couples a [`BrowsingController`] with a service worker thread.
///
/// Requests go out over the worker's command channel; replies are drained
/// into the controller on the caller's thread by [`Browser::poll`] or
/// [`Browser::wait_timeout`].
pub struct Browser<S: SessionStorage> {
    controller: BrowsingController<S>,
    cmd_tx: mpsc::Sender<ServiceCommand>,
    reply_rx: mpsc::Receiver<ServiceReply>,
}

impl<S: SessionStorage> Browser<S> {
    pub fn new<C: CompressionService>(service: C, store: SessionStore<S>) -> Result<Self> {
        let (reply_tx, reply_rx) = mpsc::channel();
        let cmd_tx = spawn_service_worker(service, reply_tx)?;
        Ok(Self {
            controller: BrowsingController::new(store),
            cmd_tx,
            reply_rx,
        })
    }

    pub fn controller(&self) -> &BrowsingController<S> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut BrowsingController<S> {
        &mut self.controller
    }

    /// Start a request and hand it to the worker.
    pub fn submit(&mut self, request: CompressRequest) -> RequestToken {
        let token = self.controller.start_request();
        if self
            .cmd_tx
            .send(ServiceCommand::Compress { token, request })
            .is_err()
        {
            let error = TransportError::Network("compression worker is not running".into());
            self.controller.resolve(token, Err(error));
        }
        token
    }

    fn apply(&mut self, reply: ServiceReply) -> Settled {
        match reply {
            ServiceReply::Completed {
                token,
                response,
                elapsed,
            } => {
                let resolution = self.controller.resolve(token, response);
                Settled {
                    token,
                    resolution,
                    elapsed,
                }
            }
        }
    }

    /// Apply every reply that has already arrived, without blocking.
    pub fn poll(&mut self) -> Vec<Settled> {
        let mut settled = Vec::new();
        while let Ok(reply) = self.reply_rx.try_recv() {
            settled.push(self.apply(reply));
        }
        settled
    }

    /// Block up to `timeout` for the next reply. `Ok(None)` on timeout.
    pub fn wait_timeout(&mut self, timeout: Duration) -> Result<Option<Settled>> {
        match self.reply_rx.recv_timeout(timeout) {
            Ok(reply) => Ok(Some(self.apply(reply))),
            Err(mpsc::RecvTimeoutError::Timeout) => Ok(None),
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(worker_gone()),
        }
    }

    /// Block until the current request settles, skipping stale replies.
    pub fn wait(&mut self) -> Result<Settled> {
        if !self.controller.is_loading() {
            return Err(ImgpressError::NoPendingRequest);
        }
        loop {
            let reply = self.reply_rx.recv().map_err(|_| worker_gone())?;
            let settled = self.apply(reply);
            if settled.resolution.is_stale() {
                debug!(token = ?settled.token, "Skipped stale reply");
                continue;
            }
            return Ok(settled);
        }
    }
}

fn worker_gone() -> ImgpressError {
    ImgpressError::Transport(TransportError::Network(
        "compression worker stopped".into(),
    ))
}
