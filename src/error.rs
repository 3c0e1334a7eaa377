//! Crate-wide error type.
//!
//! Only configuration mistakes are errors: bad orders, bad slices, bad
//! notation, missing policies, a second search started while one is in
//! flight, and unreadable policy files. Running out of budget or proving a
//! state unreachable is a [`crate::solver::SolveOutcome`], not an error.

use std::fmt;
use std::io;

use crate::types::Variant;

#[derive(Debug)]
pub enum Error {
    /// Order outside the supported 2..=5 range.
    UnsupportedOrder { order: u8 },
    /// Move slice is not a lattice coordinate of the given order.
    SliceOutOfRange { order: u8, slice: i8 },
    /// Text that does not parse as `axis:slice:dir` notation.
    MoveFormat { text: String },
    /// Policy table has no entry for this order and variant.
    NoPolicy { order: u8, variant: Variant },
    /// A solve was requested while another search is in flight.
    SearchInFlight,
    /// Policy override file could not be read.
    PolicyIo(io::Error),
    /// Policy override file is not valid policy JSON.
    PolicyFormat(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedOrder { order } => {
                write!(f, "unsupported cube order {order} (supported: 2..=5)")
            }
            Error::SliceOutOfRange { order, slice } => {
                write!(
                    f,
                    "slice {slice} (doubled) is not a layer of an order-{order} cube"
                )
            }
            Error::MoveFormat { text } => {
                write!(f, "cannot parse {text:?} as a move (want axis:slice:dir)")
            }
            Error::NoPolicy { order, variant } => {
                write!(f, "no solve policy for order {order} ({variant:?})")
            }
            Error::SearchInFlight => write!(f, "a search is already in flight"),
            Error::PolicyIo(e) => write!(f, "cannot read policy file: {e}"),
            Error::PolicyFormat(e) => write!(f, "malformed policy file: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::PolicyIo(e) => Some(e),
            Error::PolicyFormat(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::PolicyIo(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::PolicyFormat(e)
    }
}
