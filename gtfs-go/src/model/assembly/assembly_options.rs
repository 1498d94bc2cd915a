/// switches controlling which features are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblyOptions {
    /// draw routes from shapes.txt when possible
    pub use_shapes: bool,
    /// drop stops that no trip calls at. only applies to simple mode.
    pub ignore_no_route_stops: bool,
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self {
            use_shapes: true,
            ignore_no_route_stops: false,
        }
    }
}
