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

//! **INTERNALS:** Machine-level field arithmetic.
//!
//! Field operations defined in terms of machine operations live under
//! [`serial`]; everything built out of other field operations lives in
//! the crate's `field` module.

pub(crate) mod serial;
