mod geometry_builder;

pub use geometry_builder::GeometryBuilder;
