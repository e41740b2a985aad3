use crate::constants::{HOVER_ROTATE_DEG, HOVER_SCALE, IDLE_ROTATE_DEG, IDLE_SCALE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverState {
    Idle,
    Hovered,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CharacterTransform {
    pub scale: f64,
    pub rotate_deg: f64,
}

impl CharacterTransform {
    pub const IDENTITY: Self = Self {
        scale: IDLE_SCALE,
        rotate_deg: IDLE_ROTATE_DEG,
    };

    /// e.g. `scale(1.05) rotate(2deg)`
    pub fn to_css(&self) -> String {
        format!("scale({}) rotate({}deg)", self.scale, self.rotate_deg)
    }
}

/// Transform applied to a character while hovered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverParams {
    pub hovered: CharacterTransform,
}

impl Default for HoverParams {
    fn default() -> Self {
        Self {
            hovered: CharacterTransform {
                scale: HOVER_SCALE,
                rotate_deg: HOVER_ROTATE_DEG,
            },
        }
    }
}

impl HoverParams {
    #[inline]
    pub fn transform_for(&self, state: HoverState) -> CharacterTransform {
        match state {
            HoverState::Idle => CharacterTransform::IDENTITY,
            HoverState::Hovered => self.hovered,
        }
    }
}
