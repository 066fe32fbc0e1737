/// Keyframe tracks and one-shot tweens over millisecond time.
pub mod anim;
pub mod ease;
