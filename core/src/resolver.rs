use crate::types::ResolvedVersion;

/// Looks up the version a dependency should be moved to.
///
/// Implementations handle their own failures: a lookup that cannot be
/// completed resolves to `None` and never aborts the run. The returned version
/// is not compared against the declared one here; that is up to the caller.
#[allow(async_fn_in_trait)]
pub trait VersionResolver {
    async fn resolve(&self, name: &str) -> ResolvedVersion;
}
