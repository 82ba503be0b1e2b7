//! Container names derived from image references.

/// Returns the container name for an image reference.
///
/// The registry and repository path are stripped, then anything after the first `:` and
/// finally anything after the first `@` of what remains. The two truncations run in that order
/// and do not parse the reference grammar, so `nn/image@sha256:abc` first becomes
/// `image@sha256` and then `image`.
pub fn container_name(image: &str) -> &str {
    let name = image.rsplit('/').next().unwrap_or(image);
    let name = name.split_once(':').map_or(name, |(name, _)| name);
    name.split_once('@').map_or(name, |(name, _)| name)
}
