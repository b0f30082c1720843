// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer input.

use alloc::vec::Vec;

use arbor_directory::{CardKind, Employee};
use arbor_layout::Connector;
use kurbo::{Affine, Rect};

use crate::Theme;

bitflags::bitflags! {
    /// Per-card state a renderer needs to pick affordances.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct CardFlags: u8 {
        /// The card's reports are laid out below it (draw a collapse control).
        const EXPANDED    = 0b0000_0001;
        /// The employee has at least one direct report (draw an expand control).
        const HAS_REPORTS = 0b0000_0010;
        /// To-be-hired placeholder.
        const PLACEHOLDER = 0b0000_0100;
        /// The displayed root.
        const ROOT        = 0b0000_1000;
    }
}

/// One card to draw.
#[derive(Clone, Debug)]
pub struct Card<'a> {
    /// Record shown on the card.
    pub employee: &'a Employee,
    /// World-space card rectangle.
    pub rect: Rect,
    /// Standard or placeholder variant.
    pub kind: CardKind,
    /// Affordance flags.
    pub flags: CardFlags,
}

/// Everything needed to draw one frame of the chart.
///
/// Geometry is in world space; apply `transform` to map it to the canvas.
#[derive(Clone, Debug)]
pub struct Scene<'a> {
    /// Cards in breadth-first order, root first.
    pub cards: Vec<Card<'a>>,
    /// One elbow per parent → child edge.
    pub connectors: Vec<Connector>,
    /// Current viewport transform.
    pub transform: Affine,
    /// Color scheme.
    pub theme: Theme,
}
