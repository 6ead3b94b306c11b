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

//! This module contains backend-specific constant values, such as the
//! Montgomery curve coefficients and the \\(v\\)-coordinate of the
//! X25519 basepoint.

use super::field::FieldElement51;

/// Precomputed value of one of the square roots of -1 (mod p)
pub(crate) const SQRT_M1: FieldElement51 = FieldElement51::from_limbs([
    1718705420411056,
    234908883556509,
    2233514472574048,
    2117202627021982,
    765476049583133,
]);

/// `APLUS2_OVER_FOUR` is (A+2)/4. (This is used internally within the Montgomery ladder.)
pub(crate) const APLUS2_OVER_FOUR: FieldElement51 =
    FieldElement51::from_limbs([121666, 0, 0, 0, 0]);

/// `MONTGOMERY_A` is equal to 486662, which is a constant of the curve equation
/// for Curve25519 in its Montgomery form. (This is used internally within the
/// Elligator map and the \\(v\\)-coordinate recovery.)
pub(crate) const MONTGOMERY_A: FieldElement51 = FieldElement51::from_limbs([486662, 0, 0, 0, 0]);

/// `MONTGOMERY_A_NEG` is equal to -486662. (This is used internally within the
/// Elligator map.)
pub(crate) const MONTGOMERY_A_NEG: FieldElement51 = FieldElement51::from_limbs([
    2251799813198567,
    2251799813685247,
    2251799813685247,
    2251799813685247,
    2251799813685247,
]);

/// The \\(v\\)-coordinate of the X25519 basepoint \\((9, v)\\): the image of
/// the Ed25519 basepoint \\((x, y)\\) under
/// \\(v = \sqrt{-(A+2)} \cdot u / x\\), taking the nonnegative square root.
pub(crate) const X25519_BASEPOINT_V: FieldElement51 = FieldElement51::from_limbs([
    1753023134116884,
    55321121372866,
    805644826774218,
    1307937541810628,
    1676885790848503,
]);
