// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan and zoom state for one canvas.

use kurbo::{Affine, Point, Vec2};

use crate::ZoomConfig;

/// Which way a zoom step goes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ZoomDirection {
    /// Increase the zoom factor by one step.
    In,
    /// Decrease the zoom factor by one step.
    Out,
}

impl ZoomDirection {
    /// Maps a vertical wheel delta to a direction.
    ///
    /// Scrolling up (negative delta) zooms in. A zero or non-finite delta
    /// yields `None`.
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if !delta_y.is_finite() || delta_y == 0.0 {
            None
        } else if delta_y < 0.0 {
            Some(Self::In)
        } else {
            Some(Self::Out)
        }
    }

    fn apply(self, zoom: f64, step: f64) -> f64 {
        match self {
            Self::In => zoom + step,
            Self::Out => zoom - step,
        }
    }
}

/// Pan/zoom controller.
///
/// The display transform is `translate(pan) * scale(zoom)`: a world point `w`
/// lands on screen at `pan + w * zoom`. Every operation is O(1) and none of
/// them look at the layout. Mutators return `true` when pan or zoom changed.
///
/// Out-of-range zoom requests are clamped and non-finite inputs are ignored;
/// no viewport operation can fail.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    zoom: f64,
    pan: Vec2,
    drag_anchor: Option<Vec2>,
    config: ZoomConfig,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ZoomConfig::default())
    }
}

impl Viewport {
    /// Creates a viewport at zoom `1.0` (clamped into range) with no pan.
    ///
    /// `config` is expected to pass [`ZoomConfig::validate`]. With a `min` at
    /// or below zero the zoom still never drops under [`ZoomConfig::FLOOR`].
    pub fn new(config: ZoomConfig) -> Self {
        Self {
            zoom: config.clamp(1.0),
            pan: Vec2::ZERO,
            drag_anchor: None,
            config,
        }
    }

    /// Current zoom factor.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Current pan offset in screen pixels.
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// The zoom limits in use.
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// Returns `true` between [`begin_drag`](Self::begin_drag) and the next
    /// pointer-up or pointer-leave.
    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Starts a pan gesture at screen point `pointer`.
    pub fn begin_drag(&mut self, pointer: Point) {
        if is_finite_point(pointer) {
            self.drag_anchor = Some(pointer.to_vec2() - self.pan);
        }
    }

    /// Moves an active pan gesture so the grabbed point follows `pointer`.
    ///
    /// Does nothing when no drag is in progress.
    pub fn drag_to(&mut self, pointer: Point) -> bool {
        match self.drag_anchor {
            Some(anchor) if is_finite_point(pointer) => self.set_pan(pointer.to_vec2() - anchor),
            _ => false,
        }
    }

    /// Ends the pan gesture (pointer-up).
    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    /// Ends the pan gesture because the pointer left the canvas.
    pub fn pointer_leave(&mut self) {
        self.end_drag();
    }

    /// Steps the zoom keeping the world point under `cursor` fixed on screen.
    pub fn zoom_at(&mut self, cursor: Point, direction: ZoomDirection) -> bool {
        if !is_finite_point(cursor) {
            return false;
        }
        let zoom = self.config.clamp(direction.apply(self.zoom, self.config.step));
        if zoom == self.zoom {
            return false;
        }
        let world = self.screen_to_world(cursor);
        self.zoom = zoom;
        self.pan = cursor.to_vec2() - world.to_vec2() * zoom;
        true
    }

    /// Steps the zoom in, anchored at the transform origin.
    pub fn zoom_in(&mut self) -> bool {
        self.step(ZoomDirection::In)
    }

    /// Steps the zoom out, anchored at the transform origin.
    pub fn zoom_out(&mut self) -> bool {
        self.step(ZoomDirection::Out)
    }

    fn step(&mut self, direction: ZoomDirection) -> bool {
        self.set_zoom(direction.apply(self.zoom, self.config.step))
    }

    /// Sets the zoom factor, clamped into range. Pan is unchanged.
    pub fn set_zoom(&mut self, zoom: f64) -> bool {
        if !zoom.is_finite() {
            return false;
        }
        let zoom = self.config.clamp(zoom);
        let changed = zoom != self.zoom;
        self.zoom = zoom;
        changed
    }

    /// Sets the pan offset.
    pub fn set_pan(&mut self, pan: Vec2) -> bool {
        if !pan.is_finite() || pan == self.pan {
            return false;
        }
        self.pan = pan;
        true
    }

    /// Offsets the pan by `delta` screen pixels.
    pub fn pan_by(&mut self, delta: Vec2) -> bool {
        self.set_pan(self.pan + delta)
    }

    /// Pans so world x-coordinate `world_x` sits at the horizontal center of a
    /// canvas `canvas_width` wide, with world `y = 0` at `top_margin`.
    ///
    /// Zoom is kept. Used after re-rooting to bring the new root card into view.
    pub fn recenter(&mut self, world_x: f64, canvas_width: f64, top_margin: f64) -> bool {
        self.set_pan(Vec2::new(
            canvas_width / 2.0 - world_x * self.zoom,
            top_margin,
        ))
    }

    /// World to screen transform.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.pan) * Affine::scale(self.zoom)
    }

    /// Maps a screen point into world space.
    pub fn screen_to_world(&self, screen: Point) -> Point {
        ((screen.to_vec2() - self.pan) / self.zoom).to_point()
    }

    /// Maps a world point onto the screen.
    pub fn world_to_screen(&self, world: Point) -> Point {
        self.transform() * world
    }
}

fn is_finite_point(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
