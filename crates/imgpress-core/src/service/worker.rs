use std::sync::mpsc;
use std::time::Instant;

use tracing::{debug, info};

use crate::consts::SERVICE_WORKER_NAME;

use super::messages::{ServiceCommand, ServiceReply};
use super::CompressionService;

/// Spawn the service worker thread. Returns the command sender.
///
/// Commands run one at a time in arrival order. The thread exits when the
/// command sender is dropped or the reply receiver goes away.
pub fn spawn_service_worker<C: CompressionService>(
    service: C,
    reply_tx: mpsc::Sender<ServiceReply>,
) -> std::io::Result<mpsc::Sender<ServiceCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<ServiceCommand>();

    std::thread::Builder::new()
        .name(SERVICE_WORKER_NAME.into())
        .spawn(move || {
            worker_loop(service, cmd_rx, reply_tx);
        })?;

    Ok(cmd_tx)
}

fn worker_loop<C: CompressionService>(
    service: C,
    cmd_rx: mpsc::Receiver<ServiceCommand>,
    reply_tx: mpsc::Sender<ServiceReply>,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            ServiceCommand::Compress { token, request } => {
                info!(
                    ?token,
                    method = %request.method,
                    components = request.num_components,
                    bytes = request.image.len(),
                    "Sending compression request"
                );
                let start = Instant::now();
                let response = service.compress(&request);
                let elapsed = start.elapsed();
                debug!(?token, ok = response.is_ok(), ?elapsed, "Compression request finished");

                let reply = ServiceReply::Completed {
                    token,
                    response,
                    elapsed,
                };
                if reply_tx.send(reply).is_err() {
                    break;
                }
            }
        }
    }
}
