// -*- mode: rust; -*-
//
// This file is part of elligator2-dalek.
// See LICENSE for licensing information.

//! Errors which may occur when deriving keys or decoding representatives.

use core::fmt;
use core::fmt::Display;

/// Errors which may occur while deriving public keys, decoding
/// Elligator2 representatives, or parsing public keys.
///
/// This error may arise due to:
///
/// * Being given bytes with a length different to what was expected.
///
/// * A representative which decodes to a point of small order.
///
/// * A private key whose public point has no Elligator2 representative.
///
/// * A public key encoding which is not a canonical field element.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// An error in the length of bytes handed to a constructor.
    ///
    /// `name` is the kind of input which was rejected, and `length` the
    /// number of bytes it must have.
    InvalidKeyLength {
        /// The kind of input which was rejected.
        name: &'static str,
        /// The number of bytes expected.
        length: usize,
    },
    /// The representative maps to a point of small order.
    InvalidRepresentative,
    /// The public point of this private key has no Elligator2
    /// representative.  About half of all keys are in this case.
    NotRepresentable,
    /// The public key bytes are not the canonical encoding of a field
    /// element.
    InvalidPublicKey,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::InvalidKeyLength { name: n, length: l } => {
                write!(f, "{} must be {} bytes in length", n, l)
            }
            Error::InvalidRepresentative => {
                write!(f, "Representative decodes to a point of small order")
            }
            Error::NotRepresentable => {
                write!(f, "Public key has no Elligator2 representative")
            }
            Error::InvalidPublicKey => {
                write!(f, "Public key is not a canonical field element encoding")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
