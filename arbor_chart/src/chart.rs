// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The org chart controller.

use alloc::vec::Vec;

use arbor_directory::{Directory, Employee, EmployeeId};
use arbor_layout::{Layout, layout};
use arbor_navigation::{NavAction, NavEffect, NavState};
use arbor_tree::{DepthLimit, RootAnchor};
use arbor_viewport::{Viewport, ZoomDirection};
use kurbo::{Point, Size};

use crate::{Card, CardFlags, ChartConfig, ChartError, ChartEvent, Scene, Theme};

/// What the chart can currently show.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ChartView<'a> {
    /// The directory has no records.
    Empty,
    /// The chart is rooted at an id the directory does not contain.
    NotFound(EmployeeId),
    /// A laid-out tree.
    Ready(&'a Layout),
}

/// An interactive org chart over one directory snapshot.
///
/// `OrgChart` owns the [`Directory`], the [`NavState`], the current
/// [`Layout`], and the [`Viewport`]. Structural actions (expand, select, jump,
/// depth, go up) rebuild the visible tree and relayout synchronously; pointer
/// and wheel input only touch the viewport. Changes are reported as
/// [`ChartEvent`]s queued for [`take_events`](Self::take_events).
#[derive(Clone, Debug)]
pub struct OrgChart {
    directory: Directory,
    config: ChartConfig,
    nav: NavState,
    max_depth: DepthLimit,
    layout: Option<Layout>,
    viewport: Viewport,
    canvas: Size,
    events: Vec<ChartEvent>,
}

impl OrgChart {
    /// Creates a chart showing the company root with its reports expanded.
    ///
    /// The canvas size starts at zero; call
    /// [`set_canvas_size`](Self::set_canvas_size) and then
    /// [`recenter`](Self::recenter) once the host knows its dimensions.
    pub fn new(directory: Directory, config: ChartConfig) -> Result<Self, ChartError> {
        config.validate()?;
        let nav = NavState::company(&directory);
        let mut chart = Self {
            viewport: Viewport::new(config.zoom),
            directory,
            config,
            nav,
            max_depth: DepthLimit::All,
            layout: None,
            canvas: Size::ZERO,
            events: Vec::new(),
        };
        chart.relayout();
        Ok(chart)
    }

    /// Validates `records` into a [`Directory`] and creates a chart over it.
    pub fn from_records(records: Vec<Employee>, config: ChartConfig) -> Result<Self, ChartError> {
        Self::new(Directory::new(records)?, config)
    }

    /// The directory snapshot.
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// The configuration in use.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// The navigation state.
    pub fn nav_state(&self) -> &NavState {
        &self.nav
    }

    /// The viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The active layout depth cutoff.
    pub fn max_depth(&self) -> DepthLimit {
        self.max_depth
    }

    /// Current layout, if the root resolves.
    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// What to draw.
    pub fn view(&self) -> ChartView<'_> {
        match (&self.layout, self.nav.root_anchor()) {
            (Some(layout), _) => ChartView::Ready(layout),
            (None, RootAnchor::Employee(id)) => ChartView::NotFound(id),
            (None, RootAnchor::Company) => ChartView::Empty,
        }
    }

    /// Number of expanded levels below the current root, for a depth selector.
    pub fn current_depth(&self) -> u32 {
        self.nav.current_depth(&self.directory)
    }

    /// Applies a navigation action, relayouts, and queues the matching events.
    pub fn dispatch(&mut self, action: NavAction) {
        #[cfg(feature = "tracing")]
        tracing::debug!(?action, "chart dispatch");

        let before = self.nav.root_anchor();
        let transition = self.nav.reduce(&self.directory, action);
        self.nav = transition.state;
        self.max_depth = match action {
            NavAction::ExpandToDepth { depth, .. } => depth,
            _ => DepthLimit::All,
        };
        self.relayout();

        match action {
            NavAction::ToggleExpand(id) => self.events.push(ChartEvent::NodeExpanded {
                id,
                expanded: self.nav.is_expanded(id),
            }),
            NavAction::Select(id) if self.directory.contains(id) => {
                self.events.push(ChartEvent::NodeSelected(id));
            }
            _ => {}
        }
        let after = self.nav.root_anchor();
        if after != before {
            self.events.push(ChartEvent::RootChanged(after));
        }
        if transition.effect == NavEffect::Recenter {
            self.recenter();
        }
    }

    /// Expands or collapses `id`. Ids outside the directory are ignored.
    pub fn toggle_expand(&mut self, id: EmployeeId) {
        if self.directory.contains(id) {
            self.dispatch(NavAction::ToggleExpand(id));
        }
    }

    /// Accordion select: opens the path to `id` and closes every other branch.
    pub fn select_node(&mut self, id: EmployeeId) {
        self.dispatch(NavAction::Select(id));
    }

    /// Re-roots the chart at `id` and recenters on it.
    pub fn jump_to(&mut self, id: EmployeeId) {
        self.dispatch(NavAction::JumpTo(id));
    }

    /// Re-roots at the current root's manager. No-op at the top.
    pub fn go_up(&mut self) {
        self.dispatch(NavAction::GoUp);
    }

    /// Returns to the company root.
    pub fn reset(&mut self) {
        self.dispatch(NavAction::Reset);
    }

    /// Shows `depth` levels below the current root, both in the expansion set
    /// and as a layout cutoff.
    ///
    /// Does nothing when the root does not resolve.
    ///
    /// [`current_depth`](Self::current_depth) is at least 1 whenever the root
    /// resolves, so it cannot tell `Levels(0)` from `Levels(1)`; read the
    /// active cutoff back from [`max_depth`](Self::max_depth) instead.
    pub fn show_levels(&mut self, depth: DepthLimit) {
        if let Some(root) = self.nav.root(&self.directory).map(|e| e.id) {
            self.dispatch(NavAction::ExpandToDepth { root, depth });
        }
    }

    /// Pins `id`. Reserved hook: only queues [`ChartEvent::NodePinned`].
    pub fn pin_node(&mut self, id: EmployeeId) {
        self.events.push(ChartEvent::NodePinned(id));
    }

    /// Records the canvas size used by [`recenter`](Self::recenter).
    pub fn set_canvas_size(&mut self, size: Size) {
        self.canvas = size;
    }

    /// Pans so the root card is horizontally centered, `top_margin` below the
    /// top of the canvas.
    pub fn recenter(&mut self) {
        let Some(root) = self.layout.as_ref().map(|l| l.root().position) else {
            return;
        };
        let changed = self
            .viewport
            .recenter(root.x, self.canvas.width, self.config.top_margin);
        if changed {
            self.pan_changed();
        }
    }

    /// Pointer pressed on the canvas: starts panning.
    pub fn pointer_down(&mut self, screen: Point) {
        self.viewport.begin_drag(screen);
    }

    /// Pointer moved: pans if a drag is in progress.
    pub fn pointer_move(&mut self, screen: Point) {
        if self.viewport.drag_to(screen) {
            self.pan_changed();
        }
    }

    /// Pointer released.
    pub fn pointer_up(&mut self) {
        self.viewport.end_drag();
    }

    /// Pointer left the canvas; any drag ends.
    pub fn pointer_leave(&mut self) {
        self.viewport.pointer_leave();
    }

    /// Wheel tick at `screen`: zooms one step anchored at the cursor.
    pub fn wheel(&mut self, screen: Point, delta_y: f64) {
        let Some(direction) = ZoomDirection::from_wheel_delta(delta_y) else {
            return;
        };
        let pan = self.viewport.pan();
        if self.viewport.zoom_at(screen, direction) {
            self.zoom_changed();
            if self.viewport.pan() != pan {
                self.pan_changed();
            }
        }
    }

    /// Zoom-in button.
    pub fn zoom_in(&mut self) {
        if self.viewport.zoom_in() {
            self.zoom_changed();
        }
    }

    /// Zoom-out button.
    pub fn zoom_out(&mut self) {
        if self.viewport.zoom_out() {
            self.zoom_changed();
        }
    }

    /// Changes the color scheme used for subsequent scenes.
    pub fn set_theme(&mut self, theme: Theme) {
        self.config.theme = theme;
    }

    /// The employee whose card is under the screen point, if any.
    pub fn employee_at(&self, screen: Point) -> Option<&Employee> {
        let world = self.viewport.screen_to_world(screen);
        let node = self.layout.as_ref()?.node_at(world)?;
        self.directory.get(node.id)
    }

    /// Renderer input for the current frame, or `None` when there is nothing to
    /// lay out (see [`view`](Self::view)).
    pub fn scene(&self) -> Option<Scene<'_>> {
        let layout = self.layout.as_ref()?;
        let cards = layout
            .nodes()
            .iter()
            .enumerate()
            .filter_map(|(index, node)| {
                let employee = self.directory.get(node.id)?;
                let mut flags = CardFlags::empty();
                flags.set(CardFlags::ROOT, index == 0);
                flags.set(CardFlags::EXPANDED, !node.children.is_empty());
                flags.set(CardFlags::HAS_REPORTS, self.directory.has_reports(node.id));
                flags.set(CardFlags::PLACEHOLDER, employee.is_tbh);
                Some(Card {
                    employee,
                    rect: layout.card_rect(node),
                    kind: employee.card_kind(),
                    flags,
                })
            })
            .collect();
        Some(Scene {
            cards,
            connectors: layout.connectors().collect(),
            transform: self.viewport.transform(),
            theme: self.config.theme,
        })
    }

    /// Drains queued events, oldest first.
    pub fn take_events(&mut self) -> Vec<ChartEvent> {
        core::mem::take(&mut self.events)
    }

    fn relayout(&mut self) {
        self.layout = self
            .nav
            .visible_tree(&self.directory)
            .map(|tree| layout(&tree, self.max_depth, &self.config.layout));

        #[cfg(feature = "tracing")]
        match &self.layout {
            Some(l) => tracing::debug!(
                nodes = l.len(),
                width = l.width(),
                height = l.height(),
                "chart relayout"
            ),
            None => tracing::debug!(root = ?self.nav.root_anchor(), "chart root does not resolve"),
        };
    }

    fn pan_changed(&mut self) {
        let pan = self.viewport.pan();
        #[cfg(feature = "tracing")]
        tracing::trace!(x = pan.x, y = pan.y, "pan changed");
        self.events.push(ChartEvent::PanChanged(pan));
    }

    fn zoom_changed(&mut self) {
        let zoom = self.viewport.zoom();
        #[cfg(feature = "tracing")]
        tracing::trace!(zoom, "zoom changed");
        self.events.push(ChartEvent::ZoomChanged(zoom));
    }
}
