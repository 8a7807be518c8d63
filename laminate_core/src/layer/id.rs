// Copyright 2026 the Laminate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer identifiers.

use core::fmt;

/// A caller-assigned layer identifier.
///
/// Identifiers are used for lookup only and need not be unique. A layer
/// without an identifier stores `None`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayerIdent(pub u32);

impl fmt::Debug for LayerIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LayerIdent({})", self.0)
    }
}

/// Converts a layer index into a dirty-tracker key.
#[expect(
    clippy::cast_possible_truncation,
    reason = "stacks never approach u32::MAX layers"
)]
#[inline]
pub(crate) const fn key(index: usize) -> u32 {
    index as u32
}
