// -*- mode: rust; -*-
//
// This file is part of elligator2-dalek.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>
// - Henry de Valence <hdevalence@hdevalence.ca>

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg, doc_cfg_hide))]
#![cfg_attr(docsrs, doc(cfg_hide(docsrs)))]
#![deny(missing_docs)]
#![doc(
    html_logo_url = "https://cdn.jsdelivr.net/gh/dalek-cryptography/curve25519-dalek/docs/assets/dalek-logo-clear.png"
)]
#![doc = include_str!("../README.md")]

//------------------------------------------------------------------------
// External dependencies:
//------------------------------------------------------------------------

#[cfg(any(test, feature = "std"))]
#[macro_use]
extern crate std;

//------------------------------------------------------------------------
// elligator2-dalek public modules
//------------------------------------------------------------------------

// Clamping of private scalars
pub mod scalar;

// Point operations on the Montgomery form of Curve25519
pub mod montgomery;

// Useful constants, like the X25519 basepoint
pub mod constants;

// Errors which may occur when handling keys and representatives
pub mod errors;

//------------------------------------------------------------------------
// elligator2-dalek internal modules
//------------------------------------------------------------------------

// Finite field arithmetic mod p = 2^255 - 19
pub(crate) mod field;

// Arithmetic backends live here
pub(crate) mod backend;

// The Elligator2 map and its inverse
pub(crate) mod elligator2;

// Key types and the byte-oriented entry points
mod x25519;

//------------------------------------------------------------------------
// elligator2-dalek public API
//------------------------------------------------------------------------

pub use crate::errors::Error;
pub use crate::montgomery::MontgomeryPoint;
pub use crate::x25519::*;
