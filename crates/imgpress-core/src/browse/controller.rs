use tracing::{debug, info, warn};

use crate::error::{ImgpressError, Result, TransportError};
use crate::persist::{SessionStorage, SessionStore};
use crate::result::{CompressionResult, ComponentLevel};

use super::state::{BrowsingState, Phase, RequestToken, Resolution};

/// Owns the live browsing state and keeps the session store in step with it.
///
/// Every transition updates the in-memory state first and writes to the
/// store afterwards; a failed write is logged and never changes the outcome.
pub struct BrowsingController<S: SessionStorage> {
    state: BrowsingState,
    generation: u64,
    store: SessionStore<S>,
}

impl<S: SessionStorage> BrowsingController<S> {
    /// Start a session, rehydrating from the store when it holds a result.
    pub fn new(mut store: SessionStore<S>) -> Self {
        let state = match store.load() {
            Some(snapshot) => {
                info!(
                    method = %snapshot.result.method(),
                    levels = snapshot.result.len(),
                    selected = snapshot.selected,
                    "Restored session state"
                );
                BrowsingState::Ready {
                    result: snapshot.result,
                    selected: snapshot.selected,
                }
            }
            None => BrowsingState::Idle,
        };

        Self {
            state,
            generation: 0,
            store,
        }
    }

    pub fn state(&self) -> &BrowsingState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, BrowsingState::Loading { .. })
    }

    pub fn result(&self) -> Option<&CompressionResult> {
        match &self.state {
            BrowsingState::Ready { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        match &self.state {
            BrowsingState::Ready { selected, .. } => Some(*selected),
            _ => None,
        }
    }

    pub fn selected_level(&self) -> Option<&ComponentLevel> {
        match &self.state {
            BrowsingState::Ready { result, selected } => result.level(*selected),
            _ => None,
        }
    }

    pub fn store(&self) -> &SessionStore<S> {
        &self.store
    }

    /// Token of the most recently started request, if any was started.
    pub fn current_token(&self) -> Option<RequestToken> {
        (self.generation > 0).then_some(RequestToken(self.generation))
    }

    /// Enter `Loading` for a new request, discarding the current result.
    ///
    /// Starting while already loading supersedes the outstanding request:
    /// its response will resolve as [`Resolution::Stale`].
    pub fn start_request(&mut self) -> RequestToken {
        self.generation += 1;
        let token = RequestToken(self.generation);
        if self.is_loading() {
            debug!(?token, "Superseding in-flight request");
        }
        self.state = BrowsingState::Loading { token };
        self.store.clear();
        info!(?token, "Compression request started");
        token
    }

    /// Apply the response of the request identified by `token`.
    pub fn resolve(
        &mut self,
        token: RequestToken,
        response: std::result::Result<Vec<u8>, TransportError>,
    ) -> Resolution {
        match self.state {
            BrowsingState::Loading { token: current } if current == token => {}
            _ => {
                debug!(?token, phase = %self.phase(), "Ignoring stale response");
                return Resolution::Stale;
            }
        }

        let body = match response {
            Ok(body) => body,
            Err(e) => {
                self.state = BrowsingState::Idle;
                warn!(?token, error = %e, "Compression request failed");
                return Resolution::Failed(ImgpressError::Transport(e));
            }
        };

        let result = match CompressionResult::from_json(&body) {
            Ok(result) => result,
            Err(e) => {
                self.state = BrowsingState::Idle;
                warn!(?token, error = %e, "Rejected invalid compression result");
                return Resolution::Failed(ImgpressError::InvalidPayload(e));
            }
        };

        let selected = result.last_index();
        info!(
            ?token,
            method = %result.method(),
            levels = result.len(),
            "Compression result ready"
        );
        self.state = BrowsingState::Ready {
            result,
            selected,
        };
        if let BrowsingState::Ready { result, selected } = &self.state {
            // Write failures are already logged by the store.
            let _ = self.store.save(result, *selected);
        }
        Resolution::Ready { selected }
    }

    /// Show level `index` of the current result.
    pub fn select_level(&mut self, index: usize) -> Result<()> {
        let BrowsingState::Ready { result, selected } = &mut self.state else {
            return Err(ImgpressError::NotReady);
        };
        if index >= result.len() {
            return Err(ImgpressError::LevelOutOfRange {
                index,
                total: result.len(),
            });
        }
        *selected = index;
        debug!(index, "Selected level");
        let _ = self.store.save_selection(index);
        Ok(())
    }

    /// Drop the result and wipe the persisted state.
    pub fn clear(&mut self) {
        self.state = BrowsingState::Idle;
        self.store.clear();
        info!("Browsing state cleared");
    }
}
