//! Image naming
//!
//! Derives the build context directory and image tag for each service and
//! for the API gateway. Names follow `<namespace>/<name>:latest` with no
//! variation for version or architecture.

use std::path::PathBuf;

use crate::constants::{image, layout};


/// One image to build and push
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTarget {
    pub name: String,
    pub context: PathBuf,
    pub tag: String,
}

impl ImageTarget {
    /// Target for a service whose build context is `services/<name>`
    pub fn for_service(name: &str) -> Self {
        Self {
            name: name.to_string(),
            context: PathBuf::from(layout::SERVICES_DIR).join(name),
            tag: image_tag(name),
        }
    }

    /// Target for the API gateway, built from `api-gateway`
    pub fn gateway() -> Self {
        Self {
            name: layout::GATEWAY.to_string(),
            context: PathBuf::from(layout::GATEWAY),
            tag: image_tag(layout::GATEWAY),
        }
    }
}

pub fn image_tag(name: &str) -> String {
    format!("{}/{}:{}", image::NAMESPACE, name, image::TAG)
}

/// Every service in argument order, then the gateway
pub fn plan<S: AsRef<str>>(services: &[S]) -> Vec<ImageTarget> {
    services
        .iter()
        .map(|s| ImageTarget::for_service(s.as_ref()))
        .chain(std::iter::once(ImageTarget::gateway()))
        .collect()
}
