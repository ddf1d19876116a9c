use std::fmt;

use crate::error::ImgpressError;
use crate::result::CompressionResult;

/// Correlates a response with the request generation that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(pub(crate) u64);

impl RequestToken {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Live browsing state owned by the controller.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum BrowsingState {
    /// No result.
    #[default]
    Idle,
    /// A request is in flight; no result is visible.
    Loading { token: RequestToken },
    /// A result is shown at level `selected`, always a valid index.
    Ready {
        result: CompressionResult,
        selected: usize,
    },
}

impl BrowsingState {
    pub fn phase(&self) -> Phase {
        match self {
            Self::Idle => Phase::Idle,
            Self::Loading { .. } => Phase::Loading,
            Self::Ready { .. } => Phase::Ready,
        }
    }
}

/// State discriminant, for logging and display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Loading => write!(f, "Loading"),
            Self::Ready => write!(f, "Ready"),
        }
    }
}

/// What a response did to the controller.
#[derive(Debug)]
pub enum Resolution {
    /// The result was adopted and level `selected` is shown.
    Ready { selected: usize },
    /// The request failed or returned an unusable result; the controller is idle.
    Failed(ImgpressError),
    /// The response belonged to a superseded request and was ignored.
    Stale,
}

impl Resolution {
    pub fn is_stale(&self) -> bool {
        matches!(self, Self::Stale)
    }
}
