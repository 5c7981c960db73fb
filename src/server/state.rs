use crate::region::RegionResolver;

/// Shared, read-only server state. The catalog is immutable, so no locks.
pub struct AppState {
    pub resolver: RegionResolver,
}
