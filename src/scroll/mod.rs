/// Header labels driven by the scroll offset.
pub mod mapper;
/// Clamped piecewise-linear input/output ranges.
pub mod range;
