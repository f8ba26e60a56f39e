// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for feescan integration tests
//!
//! Provides a recording observer so tests can assert which entries a
//! processor skipped and why, without capturing log output.

use feescan::{FeeConversionError, SkipObserver};
use std::sync::{Arc, Mutex};

/// A skip reported by the processor, with the context it carried.
#[derive(Debug, Clone, PartialEq)]
pub enum Skip {
    MissingPrice {
        key: String,
    },
    ConversionFailed {
        key: String,
        error: FeeConversionError,
    },
}

/// SkipObserver that records every observation for later assertions.
///
/// Clones share the same buffer: keep one clone in the test and hand the
/// other to [`feescan::TokenProcessor::with_observer`].
///
/// # Example
///
/// ```rust,ignore
/// let observer = RecordingObserver::default();
/// let processor = TokenProcessor::with_observer(Box::new(observer.clone()));
/// let processed = processor.process_token_data(&configs, &prices);
/// assert_eq!(observer.recorded().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    skips: Arc<Mutex<Vec<Skip>>>,
}

impl RecordingObserver {
    /// Snapshot of everything recorded so far
    pub fn recorded(&self) -> Vec<Skip> {
        self.skips.lock().unwrap().clone()
    }
}

impl SkipObserver for RecordingObserver {
    fn missing_price(&self, key: &str) {
        self.skips.lock().unwrap().push(Skip::MissingPrice {
            key: key.to_string(),
        });
    }

    fn conversion_failed(&self, key: &str, error: &FeeConversionError) {
        self.skips.lock().unwrap().push(Skip::ConversionFailed {
            key: key.to_string(),
            error: *error,
        });
    }
}
