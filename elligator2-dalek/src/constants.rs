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

//! Various constants, such as the X25519 basepoint and the
//! \\(u\\)-coordinates of the small-order points of Curve25519.

#![allow(non_snake_case)]

use crate::montgomery::MontgomeryPoint;

pub(crate) use crate::backend::serial::u64::constants::*;

/// The X25519 basepoint, in `MontgomeryPoint` format.
pub const X25519_BASEPOINT: MontgomeryPoint = MontgomeryPoint([
    0x09, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
]);

/// \\((p - 1) / 2 = 2\^{254} - 10\\), the largest nonnegative field
/// element.  Representatives produced by this crate never exceed it
/// (ignoring the tweak bit).
pub const P_MINUS_ONE_OVER_TWO: [u8; 32] = [
    0xf6, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x3f,
];

/// Canonical \\(u\\)-coordinates of the points of Curve25519 whose order
/// divides 8.
///
/// * \\(0\\): the point of order 2 (and the encoding of the identity);
/// * \\(1\\): the two points of order 4;
/// * the last two entries: the four points of order 8.
///
/// The \\(u = -1\\) solutions lie on the twist, not the curve, and are
/// not listed.
pub(crate) const SMALL_ORDER_U: [[u8; 32]; 4] = [
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00,
    ],
    [
        0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00,
    ],
    [
        0xe0, 0xeb, 0x7a, 0x7c, 0x3b, 0x41, 0xb8, 0xae, 0x16, 0x56, 0xe3, 0xfa, 0xf1, 0x9f, 0xc4,
        0x6a, 0xda, 0x09, 0x8d, 0xeb, 0x9c, 0x32, 0xb1, 0xfd, 0x86, 0x62, 0x05, 0x16, 0x5f, 0x49,
        0xb8, 0x00,
    ],
    [
        0x5f, 0x9c, 0x95, 0xbc, 0xa3, 0x50, 0x8c, 0x24, 0xb1, 0xd0, 0xb1, 0x55, 0x9c, 0x83, 0xef,
        0x5b, 0x04, 0x44, 0x5c, 0xc4, 0x58, 0x1c, 0x8e, 0x86, 0xd8, 0x22, 0x4e, 0xdd, 0xd0, 0x9f,
        0x11, 0x57,
    ],
];

#[cfg(test)]
mod test {
    use super::*;
    use crate::field::FieldElement;

    #[test]
    fn test_sqrt_minus_one() {
        let sqrt_m1_sq = &SQRT_M1 * &SQRT_M1;
        assert_eq!(FieldElement::MINUS_ONE, sqrt_m1_sq);
        assert!(bool::from(!SQRT_M1.is_negative()));
    }

    #[test]
    fn test_a_neg_is_minus_a() {
        assert_eq!(-&MONTGOMERY_A, MONTGOMERY_A_NEG);
    }

    #[test]
    fn test_aplus2_over_four() {
        let two = &FieldElement::ONE + &FieldElement::ONE;
        let four = &two + &two;
        assert_eq!(&APLUS2_OVER_FOUR * &four, &MONTGOMERY_A + &two);
    }

    /// v^2 = u^3 + A u^2 + u at the basepoint u = 9.
    #[test]
    fn test_basepoint_v_is_on_curve() {
        let u = FieldElement::from_bytes(&X25519_BASEPOINT.0);
        let v = X25519_BASEPOINT_V;
        let rhs = &(&(&u.square() * &u) + &(&MONTGOMERY_A * &u.square())) + &u;
        assert_eq!(v.square(), rhs);
    }

    #[test]
    fn test_p_minus_one_over_two_is_largest_nonnegative() {
        let half = FieldElement::from_bytes(&P_MINUS_ONE_OVER_TWO);
        assert_eq!(half.as_bytes(), P_MINUS_ONE_OVER_TWO);
        assert!(bool::from(!half.is_high()));
        assert!(bool::from((&half + &FieldElement::ONE).is_high()));
    }

    /// Every listed coordinate u satisfies [8]u = 0 on the u-line, and
    /// the list has no duplicates.
    #[test]
    fn test_small_order_u_are_torsion() {
        for (i, bytes) in SMALL_ORDER_U.iter().enumerate() {
            let u = FieldElement::from_bytes(bytes);
            assert_eq!(&u.as_bytes(), bytes, "entry {} is not canonical", i);
            let eight_u = MontgomeryPoint(*bytes).mul_bits_be([true, false, false, false].into_iter());
            assert_eq!(eight_u.to_bytes(), [0u8; 32], "entry {} is not 8-torsion", i);
            for other in SMALL_ORDER_U[i + 1..].iter() {
                assert_ne!(bytes, other);
            }
        }
    }
}
