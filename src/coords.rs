//! Mapping between world pixels and the coordinates shown to the user.
//!
//! Storage is always in world pixels. What the user reads depends on the active
//! [`CoordSystem`]: the CG convention shows world pixels as-is, the math convention moves
//! the origin to the canvas center and flips Y so it grows upward.

use crate::types::CoordSystem;
use eframe::egui;
use std::fmt;

/// Integer coordinates displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserCoords {
    /// Horizontal user coordinate
    pub x: i64,
    /// Vertical user coordinate, direction depends on the coordinate system
    pub y: i64,
}

impl fmt::Display for UserCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The active coordinate system together with the math-mode origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateFrame {
    system: CoordSystem,
    /// Canvas center captured on first layout; `None` until then
    math_origin: Option<egui::Pos2>,
}

impl Default for CoordinateFrame {
    fn default() -> Self {
        Self::new(CoordSystem::Cg)
    }
}

impl CoordinateFrame {
    /// Creates a frame with no math origin captured yet.
    pub fn new(system: CoordSystem) -> Self {
        Self {
            system,
            math_origin: None,
        }
    }

    /// Creates a frame whose math origin is already fixed.
    pub fn with_math_origin(system: CoordSystem, origin: egui::Pos2) -> Self {
        Self {
            system,
            math_origin: Some(origin),
        }
    }

    /// The active coordinate system.
    pub fn system(&self) -> CoordSystem {
        self.system
    }

    /// Switches the displayed convention. Stored positions are unaffected.
    pub fn set_system(&mut self, system: CoordSystem) {
        self.system = system;
    }

    /// Records the canvas size after a layout pass.
    ///
    /// Only the first call with a non-empty size fixes the math origin at the canvas
    /// center; later resizes leave it where it is so labels stay stable.
    ///
    /// # Returns
    ///
    /// `true` if this call captured the origin
    pub fn on_layout(&mut self, canvas_size: egui::Vec2) -> bool {
        if self.math_origin.is_some() || canvas_size.x <= 0.0 || canvas_size.y <= 0.0 {
            return false;
        }
        self.math_origin = Some((canvas_size * 0.5).to_pos2());
        true
    }

    /// The math-mode origin in world pixels (world zero until the first layout).
    pub fn math_origin(&self) -> egui::Pos2 {
        self.math_origin.unwrap_or(egui::Pos2::ZERO)
    }

    /// World position of the active system's origin.
    pub fn origin(&self) -> egui::Pos2 {
        match self.system {
            CoordSystem::Cg => egui::Pos2::ZERO,
            CoordSystem::Math => self.math_origin(),
        }
    }

    /// Whether user Y grows upward on screen.
    pub fn y_up(&self) -> bool {
        matches!(self.system, CoordSystem::Math)
    }

    /// Continuous user coordinates of a world point (no rounding).
    pub fn world_to_user_exact(&self, world: egui::Pos2) -> egui::Vec2 {
        match self.system {
            CoordSystem::Cg => world.to_vec2(),
            CoordSystem::Math => {
                let o = self.math_origin();
                egui::vec2(world.x - o.x, o.y - world.y)
            }
        }
    }

    /// Integer coordinates the user sees for a world point.
    pub fn world_to_user(&self, world: egui::Pos2) -> UserCoords {
        let exact = self.world_to_user_exact(world);
        UserCoords {
            x: exact.x.round() as i64,
            y: exact.y.round() as i64,
        }
    }

    /// World position of user coordinates; exact inverse of [`Self::world_to_user_exact`].
    pub fn user_to_world(&self, ux: f32, uy: f32) -> egui::Pos2 {
        match self.system {
            CoordSystem::Cg => egui::pos2(ux, uy),
            CoordSystem::Math => {
                let o = self.math_origin();
                egui::pos2(ux + o.x, o.y - uy)
            }
        }
    }
}
