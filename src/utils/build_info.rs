/// Compile-time build metadata produced by `build.rs`.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub git_tree: &'static str,
    pub built_at: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
}

/// Returns the statically-embedded build metadata.
pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: option_env!("FINSIGHT_BUILD_HASH").unwrap_or("unknown"),
        git_tree: option_env!("FINSIGHT_BUILD_TREE").unwrap_or("unknown"),
        built_at: option_env!("FINSIGHT_BUILD_TIMESTAMP").unwrap_or("unknown"),
        target: option_env!("FINSIGHT_BUILD_TARGET").unwrap_or("unknown"),
        profile: option_env!("FINSIGHT_BUILD_PROFILE").unwrap_or("unknown"),
    }
}

impl BuildMetadata {
    pub fn summary(&self) -> String {
        format!(
            "finsight {} ({} {}, {} {}, built {})",
            self.version, self.git_hash, self.git_tree, self.target, self.profile, self.built_at
        )
    }
}
