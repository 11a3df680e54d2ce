use thiserror::Error;

/// Fatal, programmer-level registration failures.
///
/// Everything user-authored degrades gracefully: name collisions become
/// [`NamingConflict`](crate::NamingConflict)s on the registry and malformed
/// input becomes [`Problem`](crate::Problem)s on a load result. A
/// `ConstructionError` is different — it means the application's own
/// declarations are structurally broken, and registration stops immediately.
#[derive(Debug, Error)]
pub enum ConstructionError {
    /// The same property instance was submitted to the registry twice,
    /// possibly under a different group or field name. Each declared property
    /// is one configuration point and may be registered exactly once.
    #[error(
        "property '{canonical}' (group '{group}') was already registered; \
         a property instance may be registered only once"
    )]
    DuplicateProperty { canonical: String, group: String },
}
