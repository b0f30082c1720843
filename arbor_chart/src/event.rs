// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use arbor_directory::EmployeeId;
use arbor_tree::RootAnchor;
use kurbo::Vec2;

/// Notification queued by [`OrgChart`](crate::OrgChart) for the embedder.
///
/// Drain the queue with [`OrgChart::take_events`](crate::OrgChart::take_events).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ChartEvent {
    /// A node was selected (accordion).
    NodeSelected(EmployeeId),
    /// A node was expanded or collapsed.
    NodeExpanded {
        /// The toggled node.
        id: EmployeeId,
        /// Whether its reports are now shown.
        expanded: bool,
    },
    /// A node was pinned. Reserved; pinning has no effect on the chart.
    NodePinned(EmployeeId),
    /// The displayed root changed.
    RootChanged(RootAnchor),
    /// The pan offset changed; carries the new offset.
    PanChanged(Vec2),
    /// The zoom factor changed; carries the new factor.
    ZoomChanged(f64),
}
