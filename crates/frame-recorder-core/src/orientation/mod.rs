mod tracker;

pub use tracker::OrientationTracker;

#[cfg(test)]
pub(crate) use tracker::ORIENTATION_HYSTERESIS_DEGREES;
