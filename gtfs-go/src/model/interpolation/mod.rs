mod canonical_stop_group;
mod stop_grouping;
mod stop_interpolator;

pub use canonical_stop_group::CanonicalStopGroup;
pub use stop_grouping::StopGrouping;
pub use stop_interpolator::StopInterpolator;
