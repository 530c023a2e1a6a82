//! Element Definitions - particle record and material prototypes
//!
//! One flat `Particle` record per occupied cell. Category-specific data lives
//! in the `Matter` payload instead of a type hierarchy, and the rule that
//! drives a particle is picked from its `BehaviorKind`.

/// Palette index of an element prototype
pub type ElementId = u8;

/// Behavioral class of a particle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Solid,
    Powder,
    Liquid,
    Gas,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Solid => "solid",
            Category::Powder => "powder",
            Category::Liquid => "liquid",
            Category::Gas => "gas",
        }
    }
}

/// Which update rule runs for a particle each tick
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BehaviorKind {
    /// No rule (solids, gases)
    None,
    /// Granular pile with angle of repose
    Powder,
    /// Powder that jitters sideways while resting (metal scraps)
    ScatterPowder,
    /// Spreads flat, reflects on impact
    Liquid,
}

impl BehaviorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BehaviorKind::None => "none",
            BehaviorKind::Powder => "powder",
            BehaviorKind::ScatterPowder => "scatter_powder",
            BehaviorKind::Liquid => "liquid",
        }
    }
}

/// Category-specific material data
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Matter {
    Solid,
    Gas,
    Powder {
        /// Horizontal jitter range used by scatter powders
        powderity_min: f32,
        powderity_max: f32,
    },
    Liquid {
        fluid_pouring: i32,
        fluid_pouring_min: f32,
        fluid_pouring_max: f32,
        viscosity: f32,
        density: f32,
    },
}

impl Matter {
    #[inline]
    pub fn category(&self) -> Category {
        match self {
            Matter::Solid => Category::Solid,
            Matter::Gas => Category::Gas,
            Matter::Powder { .. } => Category::Powder,
            Matter::Liquid { .. } => Category::Liquid,
        }
    }
}

/// Material constants of a palette entry
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementProps {
    pub color: u32,
    pub behavior: BehaviorKind,
    pub friction: f32,
    pub bounciness: f32,
    pub energy_consumption: f32,
    pub matter: Matter,
}

/// Pack RGBA into the ABGR layout used by the color buffer
/// (little-endian bytes come out as [R, G, B, A]).
#[inline]
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((a as u32) << 24) | ((b as u32) << 16) | ((g as u32) << 8) | (r as u32)
}

#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    rgba(r, g, b, 0xFF)
}

/// A single simulated particle.
///
/// The occupancy map owns every instance; rules work on a copy and write it
/// back once they are done with the tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub element: ElementId,
    pub behavior: BehaviorKind,
    pub color: u32,

    pub x_velocity: f32,
    pub y_velocity: f32,
    pub is_falling: bool,

    pub friction: f32,
    pub bounciness: f32,
    pub energy_consumption: f32,

    pub matter: Matter,
}

impl Particle {
    /// Fresh instance of a prototype: same material, default kinematics.
    pub fn spawn(element: ElementId, props: &ElementProps) -> Self {
        Self {
            element,
            behavior: props.behavior,
            color: props.color,
            x_velocity: 0.0,
            y_velocity: 0.0,
            is_falling: true,
            friction: props.friction,
            bounciness: props.bounciness,
            energy_consumption: props.energy_consumption,
            matter: props.matter,
        }
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.matter.category()
    }

    #[inline]
    pub fn is_liquid(&self) -> bool {
        self.category() == Category::Liquid
    }

    #[inline]
    pub fn is_powder(&self) -> bool {
        self.category() == Category::Powder
    }

    /// Momentum transfer: keep `energy_consumption` of the incoming velocity.
    #[inline]
    pub fn receive_velocity(&mut self, dx: f32, dy: f32) {
        self.x_velocity += dx * self.energy_consumption;
        self.y_velocity += dy * self.energy_consumption;
    }

    /// Jitter range for scatter powders, `None` for anything else
    #[inline]
    pub fn powderity_range(&self) -> Option<(f32, f32)> {
        match self.matter {
            Matter::Powder { powderity_min, powderity_max } => Some((powderity_min, powderity_max)),
            _ => None,
        }
    }

    #[inline]
    pub fn stop(&mut self) {
        self.x_velocity = 0.0;
        self.y_velocity = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water_props() -> ElementProps {
        ElementProps {
            color: rgb(30, 144, 255),
            behavior: BehaviorKind::Liquid,
            friction: 0.5,
            bounciness: 2.0,
            energy_consumption: 0.5,
            matter: Matter::Liquid {
                fluid_pouring: 1,
                fluid_pouring_min: 0.2,
                fluid_pouring_max: 1.0,
                viscosity: 0.1,
                density: 1.0,
            },
        }
    }

    #[test]
    fn spawn_copies_material_and_resets_kinematics() {
        let props = water_props();
        let p = Particle::spawn(2, &props);
        assert_eq!(p.element, 2);
        assert_eq!(p.category(), Category::Liquid);
        assert_eq!(p.color, props.color);
        assert_eq!(p.x_velocity, 0.0);
        assert_eq!(p.y_velocity, 0.0);
        assert!(p.is_falling);
    }

    #[test]
    fn receive_velocity_is_damped_by_energy_consumption() {
        let mut p = Particle::spawn(0, &water_props());
        p.receive_velocity(2.0, -4.0);
        assert_eq!(p.x_velocity, 1.0);
        assert_eq!(p.y_velocity, -2.0);

        p.receive_velocity(2.0, 0.0);
        assert_eq!(p.x_velocity, 2.0);
    }

    #[test]
    fn rgba_packs_abgr() {
        assert_eq!(rgba(0x11, 0x22, 0x33, 0x44), 0x4433_2211);
        assert_eq!(rgb(10, 10, 10), 0xFF0A_0A0A);
    }
}
