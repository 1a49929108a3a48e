// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction and command errors.

/// Errors raised while building or reconfiguring a [`SideNav`](crate::SideNav).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The payload is not valid JSON or does not match the expected shape.
    #[error("invalid payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    /// The payload has no `frame`.
    #[error("payload is missing `frame`")]
    MissingFrame,

    /// A node in the payload is malformed.
    #[error("invalid node at {path}: {reason}")]
    InvalidNode {
        /// Position of the node, as root-first child indices like `tree[2][0]`.
        path: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// Two nodes share an id.
    #[error("duplicate node id `{0}`")]
    DuplicateId(String),

    /// The frame or theme was rejected.
    #[error(transparent)]
    State(#[from] understory_nav_state::Error),
}

impl Error {
    pub(crate) fn invalid_node(path: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidNode {
            path: path.into(),
            reason,
        }
    }
}
