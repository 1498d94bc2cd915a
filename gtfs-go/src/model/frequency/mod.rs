mod frequency_engine;
mod frequency_record;
mod headway_class;
mod time_window;

pub use frequency_engine::FrequencyEngine;
pub use frequency_record::FrequencyRecord;
pub use headway_class::HeadwayClass;
pub use time_window::TimeWindow;
