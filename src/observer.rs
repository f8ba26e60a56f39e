// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Observability seam for per-entry skips during batch processing.
//!
//! The processor never fails a batch for a single bad entry; it reports each
//! skip through a [`SkipObserver`] and moves on. The default observer routes
//! to `tracing` with the same two severities the skips carry: a missing price
//! is informational (warn), a conversion failure is an error.

use crate::errors::FeeConversionError;
use tracing::{error, warn};

/// Collaborator notified of entries the processor skips.
///
/// Implementations must carry enough context to diagnose the skip, which is
/// why every callback receives the token key. Bounded `Send + Sync` so a
/// processor can be shared across threads.
pub trait SkipObserver: Send + Sync {
    /// No quote exists for the token key; the entry was skipped.
    fn missing_price(&self, key: &str);

    /// Fee conversion rejected the entry; the entry was skipped.
    fn conversion_failed(&self, key: &str, error: &FeeConversionError);
}

/// Default observer that emits structured `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl SkipObserver for TracingObserver {
    fn missing_price(&self, key: &str) {
        warn!(token = %key, "price not available, skipping");
    }

    fn conversion_failed(&self, key: &str, error: &FeeConversionError) {
        error!(token = %key, error = %error, "withdrawal fee conversion failed, skipping");
    }
}
