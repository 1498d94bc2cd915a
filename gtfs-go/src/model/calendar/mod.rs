mod calendar_resolver;
mod date_ops;
mod service;
mod service_date;

pub use calendar_resolver::CalendarResolver;
pub use service::Service;
pub use service_date::ServiceDate;
