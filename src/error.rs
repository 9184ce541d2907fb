// Copyright (c) 2025 Finlog Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use thiserror::Error;

/// Failure of the underlying database file: open, read, or write.
/// Never retried; the triggering action fails and everything else
/// stays usable.
#[derive(Debug, Error)]
#[error("storage failure: {0}")]
pub struct StorageError(#[from] rusqlite::Error);

/// Input rejected before any storage call; nothing is recorded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("amount must be non-negative, got {0}")]
    NegativeAmount(Decimal),
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl From<rusqlite::Error> for Error {
    fn from(e: rusqlite::Error) -> Self {
        Error::Storage(StorageError(e))
    }
}
