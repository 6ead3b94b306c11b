// -*- mode: rust; -*-
//
// This file is part of elligator2-dalek.
// Copyright (c) 2017-2021 isis lovecruft
// Copyright (c) 2019-2021 DebugSteven
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>
// - DebugSteven <debugsteven@gmail.com>

//! Curve25519 keys with Elligator2 representatives.
//!
//! Public keys are X25519 public keys as specified in
//! [RFC7748](https://tools.ietf.org/html/rfc7748).  A public key can
//! travel on the wire either as its \\(u\\)-coordinate, or as a
//! [`Representative`].
//!
//! Representatives produced here are byte-compatible with agl's
//! `extra25519` and are **not** uniformly random: bit 254 is always
//! clear, and only multiples of the base point (never points with a
//! small-order component) are encoded.  Both are known distinguishers.
//! Decoding accepts any 32 bytes, ignoring bit 255.

use log::debug;

use crate::elligator2;
use crate::errors::Error;
use crate::field::FieldElement;
use crate::montgomery::MontgomeryPoint;
use crate::scalar::clamp_integer;

use subtle::{ConstantTimeEq, CtOption};

#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Length in bytes of private keys, public keys and representatives.
pub const KEY_LENGTH: usize = 32;

/// Copy `bytes` into an array, failing with
/// [`Error::InvalidKeyLength`] if it is not [`KEY_LENGTH`] bytes long.
/// Only the name and length of the input are logged.
fn key_bytes(bytes: &[u8], name: &'static str) -> Result<[u8; KEY_LENGTH], Error> {
    <[u8; KEY_LENGTH]>::try_from(bytes).map_err(|_| {
        debug!(
            "{} rejected: got {} bytes, expected {}",
            name,
            bytes.len(),
            KEY_LENGTH
        );
        Error::InvalidKeyLength {
            name,
            length: KEY_LENGTH,
        }
    })
}

/// A Curve25519 public key: the \\(u\\)-coordinate of a point.
///
/// We implement `Zeroize` so that downstream consumers may derive it for `Drop`
/// should they wish to erase public keys from memory.  Note that this erasure
/// (in this crate) does *not* automatically happen, but either must be derived
/// for Drop or explicitly called.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct PublicKey(pub(crate) MontgomeryPoint);

impl From<[u8; 32]> for PublicKey {
    /// Given a byte array, construct a `PublicKey`.
    fn from(bytes: [u8; 32]) -> PublicKey {
        PublicKey(MontgomeryPoint(bytes))
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = Error;

    /// Construct a `PublicKey` from a slice, which must be 32 bytes long.
    fn try_from(bytes: &[u8]) -> Result<PublicKey, Error> {
        key_bytes(bytes, "PublicKey").map(PublicKey::from)
    }
}

impl PublicKey {
    /// Parse a public key received from a peer.
    ///
    /// Bit 255 is ignored.  The remaining 255 bits must encode an
    /// integer less than \\(p\\), otherwise this returns
    /// [`Error::InvalidPublicKey`].
    pub fn from_canonical_bytes(bytes: &[u8]) -> Result<PublicKey, Error> {
        let mut bytes = key_bytes(bytes, "PublicKey")?;
        bytes[31] &= elligator2::MASK_UNSET_BYTE;

        let canonical = FieldElement::from_bytes(&bytes).as_bytes();
        if bool::from(canonical.ct_eq(&bytes)) {
            Ok(PublicKey(MontgomeryPoint(bytes)))
        } else {
            debug!("PublicKey rejected: not a canonical field element encoding");
            Err(Error::InvalidPublicKey)
        }
    }

    /// Convert this public key to a byte array.
    #[inline]
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }

    /// View this public key as a byte array.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        self.0.as_bytes()
    }
}

impl AsRef<[u8]> for PublicKey {
    /// View this public key as a byte array.
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for PublicKey {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// An Elligator2 representative of a [`PublicKey`].
///
/// Bit 255 carries no information: decoding ignores it, and
/// [`ClampedSecret::to_representative`] fills it from the caller's tweak.
/// Bit 254 of a representative produced by this crate is always clear,
/// since the encoded value never exceeds \\((p-1)/2\\).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct Representative(pub(crate) [u8; 32]);

impl From<[u8; 32]> for Representative {
    /// Load a representative from a byte array.
    fn from(bytes: [u8; 32]) -> Representative {
        Representative(bytes)
    }
}

impl TryFrom<&[u8]> for Representative {
    type Error = Error;

    /// Construct a `Representative` from a slice, which must be 32 bytes
    /// long.
    fn try_from(bytes: &[u8]) -> Result<Representative, Error> {
        key_bytes(bytes, "Representative").map(Representative)
    }
}

impl Representative {
    /// Decode this representative into the public key it stands for.
    ///
    /// Returns [`Error::InvalidRepresentative`] if the representative maps
    /// to a point of small order.
    pub fn to_public_key(&self) -> Result<PublicKey, Error> {
        let point: Option<MontgomeryPoint> = elligator2::representative_to_point(&self.0).into();
        point.map(PublicKey).ok_or_else(|| {
            debug!("Representative rejected: image has small order");
            Error::InvalidRepresentative
        })
    }

    /// Convert this representative to a byte array.
    #[inline]
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// View this representative as a byte array.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl AsRef<[u8]> for Representative {
    /// View this representative as a byte array.
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// A clamped Curve25519 private scalar.
///
/// Constructing one from raw private key bytes clamps them (see
/// [`clamp_integer`]); the bytes held are exactly those the ladder uses.
/// The scalar is wiped on drop when the `zeroize` feature is enabled.
#[derive(Clone)]
pub struct ClampedSecret([u8; 32]);

impl From<[u8; 32]> for ClampedSecret {
    /// Clamp a private key.  The caller's array is not modified.
    fn from(bytes: [u8; 32]) -> ClampedSecret {
        ClampedSecret(clamp_integer(bytes))
    }
}

impl ClampedSecret {
    /// Compute the public key corresponding to this secret.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(MontgomeryPoint::mul_base_clamped(self.0))
    }

    /// Perform a Diffie-Hellman key agreement between `self` and
    /// `their_public` key to produce a [`SharedSecret`].
    pub fn diffie_hellman(&self, their_public: &PublicKey) -> SharedSecret {
        SharedSecret(their_public.0.mul_clamped(self.0))
    }

    /// Compute the Elligator2 representative of this secret's public key.
    ///
    /// The top bit of `tweak` becomes bit 255 of the representative; it
    /// should be random.  The other bits of `tweak` are unused, and bit
    /// 254 of the result is always clear.
    ///
    /// Returns [`Error::NotRepresentable`] for the roughly half of all
    /// secrets whose public key has no representative.
    pub fn to_representative(&self, tweak: u8) -> Result<Representative, Error> {
        let (_, representative) = self.public_key_and_representative(tweak);
        representative
    }

    /// Run the base point ladder once, producing both the public key and
    /// its representative.
    fn public_key_and_representative(
        &self,
        tweak: u8,
    ) -> (PublicKey, Result<Representative, Error>) {
        let (point, v) = MontgomeryPoint::mul_base_clamped_with_v(self.0);
        let u = FieldElement::from_bytes(&point.0);

        let representative: CtOption<[u8; 32]> =
            elligator2::point_to_representative(&u, v.is_high(), tweak);
        let representative: Option<[u8; 32]> = representative.into();
        let representative = representative.map(Representative).ok_or_else(|| {
            debug!("PrivateKey rejected: public key has no representative");
            Error::NotRepresentable
        });

        (PublicKey(point), representative)
    }

    /// Extract the clamped scalar's bytes.
    #[inline]
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// View the clamped scalar as a byte array.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl<'a> From<&'a ClampedSecret> for PublicKey {
    /// Given a [`ClampedSecret`], compute its corresponding [`PublicKey`].
    fn from(secret: &'a ClampedSecret) -> PublicKey {
        secret.public_key()
    }
}

impl AsRef<[u8]> for ClampedSecret {
    /// View the clamped scalar as a byte array.
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Drop for ClampedSecret {
    fn drop(&mut self) {
        #[cfg(feature = "zeroize")]
        self.0.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl ZeroizeOnDrop for ClampedSecret {}

/// The result of a Diffie-Hellman key exchange.
pub struct SharedSecret(pub(crate) MontgomeryPoint);

impl SharedSecret {
    /// Convert this shared secret to a byte array.
    #[inline]
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }

    /// View this shared secret key as a byte array.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        self.0.as_bytes()
    }

    /// Ensure in constant-time that this shared secret did not result from a
    /// key exchange with non-contributory behaviour.
    ///
    /// A peer who sends a public key of small order forces the shared
    /// secret to the all-zero encoding of the point at infinity, whatever
    /// our own secret is.  See [RFC7748 section 6.1][rfc] and the
    /// [discussion by Thái Dương][thaidn].
    ///
    /// # Returns
    ///
    /// Returns `true` if the key exchange was contributory (good), and `false`
    /// otherwise (can be bad for some protocols).
    ///
    /// [rfc]: https://tools.ietf.org/html/rfc7748#page-15
    /// [thaidn]: https://vnhacker.blogspot.com/2015/09/why-not-validating-curve25519-public.html
    #[must_use]
    pub fn was_contributory(&self) -> bool {
        !bool::from(self.0.is_identity())
    }
}

impl AsRef<[u8]> for SharedSecret {
    /// View this shared secret key as a byte array.
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Drop for SharedSecret {
    fn drop(&mut self) {
        #[cfg(feature = "zeroize")]
        self.0.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl ZeroizeOnDrop for SharedSecret {}

/// A clamped secret together with its public key.
#[derive(Clone)]
pub struct Keypair {
    /// The clamped private scalar.
    pub secret: ClampedSecret,
    /// The public key, \\([secret]B\\).
    pub public: PublicKey,
}

/// A clamped secret, its public key, and the public key's Elligator2
/// representative.
#[derive(Clone)]
pub struct ElligatorKeypair {
    /// The clamped private scalar.
    pub secret: ClampedSecret,
    /// The public key, \\([secret]B\\).
    pub public: PublicKey,
    /// The representative of `public`, with bit 255 taken from the tweak.
    pub representative: Representative,
}

/// Derive the public key of a 32-byte private key.
///
/// The private key is clamped first; the returned [`Keypair`] holds the
/// clamped scalar alongside the public key.  Fails with
/// [`Error::InvalidKeyLength`] if `private_key` is not 32 bytes long.
///
/// # Example
///
/// ```
/// use elligator2_dalek::scalar_base_mult;
///
/// let keypair = scalar_base_mult(&[0u8; 32]).unwrap();
///
/// let mut clamped = [0u8; 32];
/// clamped[31] = 0x40;
/// assert_eq!(keypair.secret.to_bytes(), clamped);
///
/// assert!(scalar_base_mult(&[0u8; 31]).is_err());
/// ```
pub fn scalar_base_mult(private_key: &[u8]) -> Result<Keypair, Error> {
    #[allow(unused_mut)]
    let mut bytes = key_bytes(private_key, "PrivateKey")?;
    let secret = ClampedSecret::from(bytes);
    #[cfg(feature = "zeroize")]
    bytes.zeroize();

    let public = secret.public_key();

    Ok(Keypair { secret, public })
}

/// Recover the public key encoded by a 32-byte Elligator2 representative.
///
/// Bit 255 of the representative is ignored.  Fails with
/// [`Error::InvalidKeyLength`] if `representative` is not 32 bytes long,
/// and with [`Error::InvalidRepresentative`] if it maps to a point of
/// small order.
pub fn public_key_from_representative(representative: &[u8]) -> Result<PublicKey, Error> {
    Representative::try_from(representative)?.to_public_key()
}

/// Derive the public key of a 32-byte private key together with its
/// Elligator2 representative.
///
/// The top bit of `tweak` fills bit 255 of the representative.  Fails
/// with [`Error::InvalidKeyLength`] if `private_key` is not 32 bytes long,
/// and with [`Error::NotRepresentable`] if the public key has no
/// representative, in which case the caller should try a fresh key.
///
/// # Example
///
/// ```
/// use elligator2_dalek::{public_key_from_representative, representative_from_private_key};
///
/// let mut private_key = [0u8; 32];
/// let keypair = loop {
///     match representative_from_private_key(&private_key, 0x80) {
///         Ok(keypair) => break keypair,
///         Err(_) => private_key[0] += 1,
///     }
/// };
///
/// let public = public_key_from_representative(keypair.representative.as_bytes()).unwrap();
/// assert_eq!(public, keypair.public);
/// ```
pub fn representative_from_private_key(
    private_key: &[u8],
    tweak: u8,
) -> Result<ElligatorKeypair, Error> {
    #[allow(unused_mut)]
    let mut bytes = key_bytes(private_key, "PrivateKey")?;
    let secret = ClampedSecret::from(bytes);
    #[cfg(feature = "zeroize")]
    bytes.zeroize();

    let (public, representative) = secret.public_key_and_representative(tweak);

    Ok(ElligatorKeypair {
        secret,
        public,
        representative: representative?,
    })
}

/// The bare, byte-oriented x25519 function, exactly as specified in RFC7748.
pub fn x25519(k: [u8; 32], u: [u8; 32]) -> [u8; 32] {
    MontgomeryPoint(u).mul_clamped(k).to_bytes()
}

/// The X25519 basepoint, for use with the bare, byte-oriented x25519
/// function.
pub const X25519_BASEPOINT_BYTES: [u8; 32] = [
    9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];
