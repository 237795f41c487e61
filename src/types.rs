use std::fmt;

use serde::Deserialize;
use thiserror::Error;

pub const NUM_LANDMARKS: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_TIP: usize = 20;

#[derive(Debug, Error, PartialEq)]
pub enum LandmarkError {
    #[error("unexpected landmark count: got {got}, expected {expected}")]
    InvalidLength { expected: usize, got: usize },
    #[error("landmark {index} has a non-finite coordinate")]
    NonFinite { index: usize },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub fn distance(&self, other: &Landmark) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f32; 3]> for Landmark {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}

/// One hand's 21 anatomically indexed landmarks, either in normalized image
/// space or in metric world space. Length is checked on construction so the
/// named indices above can never go out of range.
#[derive(Clone, Debug, PartialEq)]
pub struct LandmarkSet([Landmark; NUM_LANDMARKS]);

impl LandmarkSet {
    pub fn from_slice(points: &[Landmark]) -> Result<Self, LandmarkError> {
        let array: [Landmark; NUM_LANDMARKS] =
            points.try_into().map_err(|_| LandmarkError::InvalidLength {
                expected: NUM_LANDMARKS,
                got: points.len(),
            })?;
        if let Some(index) = array.iter().position(|p| !p.is_finite()) {
            return Err(LandmarkError::NonFinite { index });
        }
        Ok(Self(array))
    }

    pub fn from_points(points: &[[f32; 3]]) -> Result<Self, LandmarkError> {
        let landmarks: Vec<Landmark> = points.iter().copied().map(Landmark::from).collect();
        Self::from_slice(&landmarks)
    }

    pub fn get(&self, index: usize) -> Option<&Landmark> {
        self.0.get(index)
    }

    pub fn wrist(&self) -> Landmark {
        self.0[WRIST]
    }

    /// Euclidean distance between two landmarks of this set.
    pub fn distance(&self, a: usize, b: usize) -> f32 {
        self.0[a].distance(&self.0[b])
    }
}

impl std::ops::Index<usize> for LandmarkSet {
    type Output = Landmark;

    fn index(&self, index: usize) -> &Landmark {
        &self.0[index]
    }
}

impl TryFrom<Vec<Landmark>> for LandmarkSet {
    type Error = LandmarkError;

    fn try_from(points: Vec<Landmark>) -> Result<Self, Self::Error> {
        Self::from_slice(&points)
    }
}

/// Image-space and world-space landmarks of the same hand in the same frame.
#[derive(Clone, Debug, PartialEq)]
pub struct HandObservation {
    pub landmarks: LandmarkSet,
    pub world_landmarks: LandmarkSet,
}

/// Everything the hand tracker reported for one video frame. The tracker may
/// report up to two hands; only the first one drives the engine.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackerResults {
    pub hands: Vec<HandObservation>,
}

impl TrackerResults {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn single(hand: HandObservation) -> Self {
        Self { hands: vec![hand] }
    }

    pub fn primary(&self) -> Option<&HandObservation> {
        self.hands.first()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    /// The four fingers that must be open for a flat hand.
    pub const NON_THUMB: [Finger; 4] = [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky];

    /// (tip, base) landmark indices. The thumb measures against the index
    /// knuckle since its own base barely moves relative to the tip.
    pub fn tip_and_base(self) -> (usize, usize) {
        match self {
            Finger::Thumb => (THUMB_TIP, INDEX_MCP),
            Finger::Index => (INDEX_TIP, INDEX_MCP),
            Finger::Middle => (MIDDLE_TIP, MIDDLE_MCP),
            Finger::Ring => (RING_TIP, RING_MCP),
            Finger::Pinky => (PINKY_TIP, PINKY_MCP),
        }
    }

    fn slot(self) -> usize {
        match self {
            Finger::Thumb => 0,
            Finger::Index => 1,
            Finger::Middle => 2,
            Finger::Ring => 3,
            Finger::Pinky => 4,
        }
    }
}

/// Per-finger open flags in thumb, index, middle, ring, pinky order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpennessVector([bool; 5]);

impl OpennessVector {
    pub const fn new(pattern: [bool; 5]) -> Self {
        Self(pattern)
    }

    pub fn is_open(&self, finger: Finger) -> bool {
        self.0[finger.slot()]
    }

    pub fn set(&mut self, finger: Finger, open: bool) {
        self.0[finger.slot()] = open;
    }

    pub fn pattern(&self) -> [bool; 5] {
        self.0
    }

    pub fn fingers_open(&self, fingers: &[Finger]) -> bool {
        fingers.iter().all(|&finger| self.is_open(finger))
    }
}

impl fmt::Display for OpennessVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for open in self.0 {
            f.write_str(if open { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Digit {
    Zero,
    One,
    Two,
    Three,
}

impl Digit {
    pub fn value(self) -> u8 {
        match self {
            Digit::Zero => 0,
            Digit::One => 1,
            Digit::Two => 2,
            Digit::Three => 3,
        }
    }
}

impl TryFrom<u8> for Digit {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Digit::Zero),
            1 => Ok(Digit::One),
            2 => Ok(Digit::Two),
            3 => Ok(Digit::Three),
            other => Err(other),
        }
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PalmPosition {
    pub x: f32,
    pub y: f32,
}

impl From<Landmark> for PalmPosition {
    fn from(point: Landmark) -> Self {
        Self {
            x: point.x,
            y: point.y,
        }
    }
}

/// Control signals handed to the application's command sink.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    SetActiveDigit(Digit),
    /// Zoom percentage, unclamped.
    ApplyZoom(f32),
    /// Raw horizontal rotation delta; accumulation is up to the sink.
    SetHorizontalRotation(f32),
    SetVerticalRotation(f32),
}

impl Command {
    pub fn label(&self) -> &'static str {
        match self {
            Command::SetActiveDigit(_) => "set_active_digit",
            Command::ApplyZoom(_) => "apply_zoom",
            Command::SetHorizontalRotation(_) => "set_horizontal_rotation",
            Command::SetVerticalRotation(_) => "set_vertical_rotation",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::SetActiveDigit(digit) => write!(f, "{} {digit}", self.label()),
            Command::ApplyZoom(percent) => write!(f, "{} {percent:.2}", self.label()),
            Command::SetHorizontalRotation(delta) | Command::SetVerticalRotation(delta) => {
                write!(f, "{} {delta:.4}", self.label())
            }
        }
    }
}
