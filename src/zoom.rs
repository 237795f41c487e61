use crate::{
    config::ZoomConfig,
    gesture::finger_extension,
    types::{Finger, INDEX_TIP, LandmarkSet, OpennessVector, THUMB_TIP},
};

/// Pinch zoom: with the index loosely extended, the other three fingers
/// folded and the thumb pulled away from the fist, the thumb-to-index tip
/// distance maps linearly to a zoom percentage. Not debounced.
pub fn estimate_zoom(
    world: &LandmarkSet,
    openness: &OpennessVector,
    config: &ZoomConfig,
) -> Option<f32> {
    let pinch_ready = finger_extension(world, Finger::Index) > config.index_extension
        && !openness.is_open(Finger::Middle)
        && !openness.is_open(Finger::Ring)
        && !openness.is_open(Finger::Pinky)
        && finger_extension(world, Finger::Thumb) > config.thumb_extension;
    if !pinch_ready {
        return None;
    }

    let distance = world.distance(THUMB_TIP, INDEX_TIP);
    Some(distance / config.distance_unit * config.percent_per_unit)
}
