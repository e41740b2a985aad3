// The two page effects as explicit components, plus the message type the
// DOM listeners use to drive them.
//
// Components only talk to the page through `TransformTarget` and
// `EyeGeometry`, so the same code runs against `web_sys` elements in the
// browser and against in-memory fakes in host tests.

use crate::constants::{CHARACTER_SELECTOR, PUPIL_SELECTOR};
use crate::gaze::{pupil_transform_css, EyeRect, GazeParams};
use crate::hover::{HoverParams, HoverState};
use glam::DVec2;

/// Something whose inline CSS `transform` can be replaced.
pub trait TransformTarget {
    fn set_transform(&self, css: &str);
}

/// Live geometry of the eye that owns a pupil. Read on every call, never
/// cached, since scrolling and resizing move eyes around.
pub trait EyeGeometry {
    fn eye_rect(&self) -> Option<EyeRect>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct EffectParams {
    pub pupil_selector: String,
    pub character_selector: String,
    pub gaze: GazeParams,
    pub hover: HoverParams,
}

impl Default for EffectParams {
    fn default() -> Self {
        Self {
            pupil_selector: PUPIL_SELECTOR.to_string(),
            character_selector: CHARACTER_SELECTOR.to_string(),
            gaze: GazeParams::default(),
            hover: HoverParams::default(),
        }
    }
}

pub struct PupilTracker<P> {
    pupils: Vec<P>,
    params: GazeParams,
}

impl<P: TransformTarget + EyeGeometry> PupilTracker<P> {
    pub fn new(pupils: Vec<P>, params: GazeParams) -> Self {
        Self { pupils, params }
    }

    pub fn len(&self) -> usize {
        self.pupils.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pupils.is_empty()
    }

    pub fn on_pointer_move(&self, pointer_x: f64, pointer_y: f64) {
        let pointer = DVec2::new(pointer_x, pointer_y);
        for pupil in &self.pupils {
            // Eye detached or otherwise unmeasurable: leave the pupil as is.
            let Some(rect) = pupil.eye_rect() else {
                continue;
            };
            let offset = self.params.offset_for_eye(pointer, &rect);
            pupil.set_transform(&pupil_transform_css(offset));
        }
    }
}

pub struct CharacterHoverEffect<C> {
    characters: Vec<C>,
    params: HoverParams,
}

impl<C: TransformTarget> CharacterHoverEffect<C> {
    pub fn new(characters: Vec<C>, params: HoverParams) -> Self {
        Self { characters, params }
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn characters(&self) -> &[C] {
        &self.characters
    }

    pub fn on_pointer_enter(&self, index: usize) {
        self.apply(index, HoverState::Hovered);
    }

    pub fn on_pointer_leave(&self, index: usize) {
        self.apply(index, HoverState::Idle);
    }

    fn apply(&self, index: usize, state: HoverState) {
        if let Some(character) = self.characters.get(index) {
            character.set_transform(&self.params.transform_for(state).to_css());
        }
    }
}

/// Input forwarded from native listeners. Character events carry the index
/// of the character in discovery order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerMove { x: f64, y: f64 },
    PointerEnter(usize),
    PointerLeave(usize),
}

pub struct Effects<P, C> {
    pub tracker: PupilTracker<P>,
    pub hover: CharacterHoverEffect<C>,
}

impl<P, C> Effects<P, C>
where
    P: TransformTarget + EyeGeometry,
    C: TransformTarget,
{
    pub fn new(pupils: Vec<P>, characters: Vec<C>, params: &EffectParams) -> Self {
        Self {
            tracker: PupilTracker::new(pupils, params.gaze),
            hover: CharacterHoverEffect::new(characters, params.hover),
        }
    }

    pub fn dispatch(&self, event: InputEvent) {
        match event {
            InputEvent::PointerMove { x, y } => self.tracker.on_pointer_move(x, y),
            InputEvent::PointerEnter(i) => self.hover.on_pointer_enter(i),
            InputEvent::PointerLeave(i) => self.hover.on_pointer_leave(i),
        }
    }
}
