use crate::{
    config::OpennessThresholds,
    types::{Digit, Finger, LandmarkSet, OpennessVector},
};

// Exactly these fingers open, all others folded. Thumbs-up is zero, then
// one to three fingers counted from the index. Disjoint, so at most one matches.
const DIGIT_PATTERNS: [(&[Finger], Digit); 4] = [
    (&[Finger::Thumb], Digit::Zero),
    (&[Finger::Index], Digit::One),
    (&[Finger::Index, Finger::Middle], Digit::Two),
    (&[Finger::Index, Finger::Middle, Finger::Ring], Digit::Three),
];

/// Metric distance from a finger's tip to its base reference.
pub fn finger_extension(world: &LandmarkSet, finger: Finger) -> f32 {
    let (tip, base) = finger.tip_and_base();
    world.distance(tip, base)
}

/// A finger is open when its extension strictly exceeds its threshold.
pub fn classify_openness(world: &LandmarkSet, thresholds: &OpennessThresholds) -> OpennessVector {
    let mut openness = OpennessVector::default();
    for finger in Finger::ALL {
        let open = finger_extension(world, finger) > thresholds.for_finger(finger);
        openness.set(finger, open);
    }
    openness
}

pub fn match_digit(openness: &OpennessVector) -> Option<Digit> {
    DIGIT_PATTERNS
        .iter()
        .find(|(open, _)| {
            Finger::ALL
                .iter()
                .all(|finger| openness.is_open(*finger) == open.contains(finger))
        })
        .map(|&(_, digit)| digit)
}
