// Copyright 2026 the Laminate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! Every mutation of a [`LayerStack`](crate::layer::LayerStack) marks the
//! affected layer on one of these channels (via [`understory_dirty`]). The
//! channels are local-only: layers in a stack are siblings, so nothing
//! propagates from one layer to another through the tracker. The cross-layer
//! effect of nested padding is handled by re-running the whole layout pass
//! whenever any channel is marked.
//!
//! # Consumption
//!
//! [`LayerStack::update`](crate::layer::LayerStack::update) drains all
//! channels and surfaces the results as
//! [`LayoutChanges`](crate::layer::LayoutChanges).

use understory_dirty::Channel;

/// Layout attributes (insets, explicit size, gravity) of a layer changed.
pub const LAYOUT: Channel = Channel::new(0);

/// The cached padding of a layer changed after a refresh.
pub const PADDING: Channel = Channel::new(1);

/// The drawable of a layer was added, replaced, or changed its appearance in
/// response to a state or level change.
pub const CONTENT: Channel = Channel::new(2);
