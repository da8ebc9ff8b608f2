// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Implements the fixed-capacity bitset over component-type ids.

use ergon_core::{ComponentTypeId, EcsError, EcsResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed-capacity bit-vector with one bit per component-type id.
///
/// A signature serves two roles: attached to an entity it records which
/// component types the entity currently holds, and attached to a system
/// it records which component types the system requires. Bits are packed
/// into `u64` words, so the subset test behind system matching is a
/// handful of bitwise ops.
///
/// The capacity is fixed at construction. Addressing a bit at or beyond
/// the capacity is a bounds error, and comparing signatures of different
/// capacities is a capacity-mismatch error rather than a `false` result,
/// so callers cannot mistake a misconfiguration for a non-match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    words: Vec<u64>,
    capacity: usize,
}

impl Signature {
    /// Creates an all-clear signature able to hold `capacity` bits.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(64)],
            capacity,
        }
    }

    /// Returns the fixed bit capacity of this signature.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Resolves a bit position to its word index and mask.
    fn locate(&self, bit: usize) -> EcsResult<(usize, u64)> {
        if bit >= self.capacity {
            return Err(EcsError::BitOutOfRange {
                bit,
                capacity: self.capacity,
            });
        }
        Ok((bit / 64, 1u64 << (bit % 64)))
    }

    /// Sets the bit for `id`.
    pub fn set(&mut self, id: ComponentTypeId) -> EcsResult<()> {
        let (word, mask) = self.locate(id.index())?;
        self.words[word] |= mask;
        Ok(())
    }

    /// Clears the bit for `id`.
    pub fn unset(&mut self, id: ComponentTypeId) -> EcsResult<()> {
        let (word, mask) = self.locate(id.index())?;
        self.words[word] &= !mask;
        Ok(())
    }

    /// Returns `true` if the bit for `id` is set.
    pub fn test(&self, id: ComponentTypeId) -> EcsResult<bool> {
        let (word, mask) = self.locate(id.index())?;
        Ok(self.words[word] & mask != 0)
    }

    /// Returns `true` iff every bit set in `self` is also set in `other`.
    ///
    /// Read as a requirement check: a system whose required signature is
    /// `self` is satisfied by an entity whose attached signature is
    /// `other`. The test is reflexive, and setting additional bits in
    /// `other` can never turn a `true` result into `false`.
    pub fn contains(&self, other: &Signature) -> EcsResult<bool> {
        if self.capacity != other.capacity {
            return Err(EcsError::SignatureCapacityMismatch {
                expected: self.capacity,
                actual: other.capacity,
            });
        }
        Ok(self
            .words
            .iter()
            .zip(&other.words)
            .all(|(required, present)| required & !present == 0))
    }

    /// Clears every bit.
    pub fn reset(&mut self) {
        self.words.fill(0);
    }

    /// Returns `true` if no bit is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|word| *word == 0)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "signature{{")?;
        let mut first = true;
        for bit in 0..self.capacity {
            if self.words[bit / 64] & (1u64 << (bit % 64)) != 0 {
                if !first {
                    write!(f, ", ")?;
                }
                write!(f, "{bit}")?;
                first = false;
            }
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bit(id: u16) -> ComponentTypeId {
        ComponentTypeId::new(id)
    }

    #[test]
    fn test_set_unset_round_trip() {
        let mut sig = Signature::new(32);
        sig.set(bit(3)).unwrap();
        sig.set(bit(7)).unwrap();

        sig.unset(bit(3)).unwrap();

        assert!(!sig.test(bit(3)).unwrap(), "unset bit should read clear");
        assert!(sig.test(bit(7)).unwrap(), "other bits must stay untouched");
    }

    #[test]
    fn test_out_of_range_bit_is_an_error() {
        let mut sig = Signature::new(8);
        assert_eq!(
            sig.set(bit(8)),
            Err(EcsError::BitOutOfRange {
                bit: 8,
                capacity: 8
            })
        );
        assert!(sig.test(bit(200)).is_err());
    }

    #[test]
    fn test_contains_is_reflexive() {
        let mut sig = Signature::new(32);
        sig.set(bit(1)).unwrap();
        sig.set(bit(3)).unwrap();
        assert!(sig.contains(&sig.clone()).unwrap());
    }

    #[test]
    fn test_contains_is_monotonic() {
        let mut required = Signature::new(32);
        required.set(bit(1)).unwrap();
        required.set(bit(3)).unwrap();

        let mut present = required.clone();
        assert!(required.contains(&present).unwrap());

        // Adding bits to the satisfying side can never break a match.
        present.set(bit(2)).unwrap();
        present.set(bit(31)).unwrap();
        assert!(required.contains(&present).unwrap());
    }

    #[test]
    fn test_contains_rejects_missing_requirement() {
        let mut required = Signature::new(32);
        required.set(bit(1)).unwrap();
        required.set(bit(3)).unwrap();

        let mut present = Signature::new(32);
        present.set(bit(3)).unwrap();

        assert!(!required.contains(&present).unwrap());
    }

    #[test]
    fn test_capacity_mismatch_is_not_a_non_match() {
        let a = Signature::new(32);
        let b = Signature::new(64);
        assert_eq!(
            a.contains(&b),
            Err(EcsError::SignatureCapacityMismatch {
                expected: 32,
                actual: 64
            })
        );
    }

    #[test]
    fn test_reset_clears_every_word() {
        let mut sig = Signature::new(130);
        sig.set(bit(0)).unwrap();
        sig.set(bit(64)).unwrap();
        sig.set(bit(129)).unwrap();

        sig.reset();

        assert!(sig.is_empty());
    }

    #[test]
    fn test_display_lists_set_bits() {
        let mut sig = Signature::new(8);
        sig.set(bit(0)).unwrap();
        sig.set(bit(5)).unwrap();
        assert_eq!(sig.to_string(), "signature{0, 5}");
    }
}
