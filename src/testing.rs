//! Synthetic hands for unit tests.

use crate::types::{
    HandObservation, INDEX_MCP, INDEX_TIP, LandmarkSet, MIDDLE_MCP, MIDDLE_TIP, NUM_LANDMARKS,
    PINKY_MCP, PINKY_TIP, RING_MCP, RING_TIP, THUMB_TIP,
};

/// Extension comfortably above every openness threshold.
pub const OPEN: f32 = 0.09;
/// Extension below every openness threshold.
pub const CLOSED: f32 = 0.02;

/// World-space points whose finger extensions (thumb, index, middle, ring,
/// pinky) are exactly `extensions`. Knuckles sit along the x axis, finger tips
/// point down -y and the thumb tip sticks out along +z from the index knuckle.
pub fn world_points(extensions: [f32; 5]) -> Vec<[f32; 3]> {
    let [thumb, index, middle, ring, pinky] = extensions;
    let mut points = vec![[0.0f32; 3]; NUM_LANDMARKS];
    let knuckles = [
        (INDEX_MCP, INDEX_TIP, 0.0, index),
        (MIDDLE_MCP, MIDDLE_TIP, 0.02, middle),
        (RING_MCP, RING_TIP, 0.04, ring),
        (PINKY_MCP, PINKY_TIP, 0.06, pinky),
    ];
    for (base, tip, x, extension) in knuckles {
        points[base] = [x, 0.0, 0.0];
        points[tip] = [x, -extension, 0.0];
    }
    points[THUMB_TIP] = [0.0, 0.0, thumb];
    points
}

pub fn world_hand(extensions: [f32; 5]) -> LandmarkSet {
    LandmarkSet::from_points(&world_points(extensions)).expect("synthetic hand has 21 points")
}

pub fn extensions_for(pattern: [bool; 5]) -> [f32; 5] {
    pattern.map(|open| if open { OPEN } else { CLOSED })
}

pub fn world_hand_for(pattern: [bool; 5]) -> LandmarkSet {
    world_hand(extensions_for(pattern))
}

/// Image-space hand with every landmark at the wrist position.
pub fn image_hand(wrist: (f32, f32)) -> LandmarkSet {
    let points = vec![[wrist.0, wrist.1, 0.0]; NUM_LANDMARKS];
    LandmarkSet::from_points(&points).expect("synthetic hand has 21 points")
}

pub fn observation(pattern: [bool; 5], wrist: (f32, f32)) -> HandObservation {
    HandObservation {
        landmarks: image_hand(wrist),
        world_landmarks: world_hand_for(pattern),
    }
}

pub const FLAT_HAND: [bool; 5] = [false, true, true, true, true];
pub const FIST: [bool; 5] = [false; 5];
