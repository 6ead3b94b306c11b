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

//! Serial implementations of field arithmetic.
//!
//! Only the 64-bit limb representation is provided; every supported
//! target has a `u64 x u64 -> u128` multiplier available to the compiler.

pub(crate) mod u64;
