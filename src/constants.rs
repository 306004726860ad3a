/// Image naming constants
pub mod image {
    /// Registry namespace every image is pushed under
    pub const NAMESPACE: &str = "glomdom";

    /// Container image tag applied to every image
    pub const TAG: &str = "latest";
}

/// Build context layout, relative to the working directory
pub mod layout {
    /// Directory holding one build context per service
    pub const SERVICES_DIR: &str = "services";

    /// Name and build context of the API gateway
    pub const GATEWAY: &str = "api-gateway";
}

/// Container engine defaults
pub mod engine {
    /// Engine binary used when nothing else is configured
    pub const DEFAULT: &str = "docker";
}
