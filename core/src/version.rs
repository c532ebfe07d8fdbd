/// Check if a registry version number is a plain release.
///
/// Anything with a `-` (pre-release or a build suffix written with a hyphen)
/// is excluded, matching how semver marks pre-releases.
pub fn is_stable_release(num: &str) -> bool {
    !num.contains('-')
}
