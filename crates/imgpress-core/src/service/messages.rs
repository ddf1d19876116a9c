use std::time::Duration;

use crate::browse::RequestToken;
use crate::error::TransportError;
use crate::upload::CompressRequest;

/// Commands sent from the controller's thread to the service worker.
pub enum ServiceCommand {
    /// Run one compression request, tagged with the generation it belongs to.
    Compress {
        token: RequestToken,
        request: CompressRequest,
    },
}

/// Replies sent from the service worker back to the controller's thread.
pub enum ServiceReply {
    Completed {
        token: RequestToken,
        response: Result<Vec<u8>, TransportError>,
        elapsed: Duration,
    },
}
