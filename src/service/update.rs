//! Update service
//!
//! Builds and pushes each service image in order, then the API gateway.
//! The first failure aborts the run; later images are never attempted.

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

use crate::{
    engine::ContainerEngine,
    error::UpdateError,
    image::{plan, ImageTarget},
};


/// Result of a completed run
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Tags of every image built, in order
    pub built: Vec<String>,
    /// Tags of every image pushed, in order
    pub pushed: Vec<String>,
}

/// Service for orchestrating the build and push of all images
pub struct UpdateService<E> {
    engine: E,
    root: Option<PathBuf>,
    no_push: bool,
}

impl<E: ContainerEngine> UpdateService<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            root: None,
            no_push: false,
        }
    }

    /// Resolve build contexts under `root` instead of the working directory
    #[cfg(test)]
    pub(crate) fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn with_no_push(mut self, no_push: bool) -> Self {
        self.no_push = no_push;
        self
    }

    /// Build and push every service in order, then the gateway
    pub fn run<S: AsRef<str>>(&self, services: &[S]) -> Result<UpdateResult> {
        let mut result = UpdateResult::default();

        for target in plan(services) {
            info!("Updating {}", target.name);
            self.build_step(&target)?;
            result.built.push(target.tag.clone());

            if self.no_push {
                info!("Skipping push of {} (--no-push specified)", target.tag);
                continue;
            }

            self.push_step(&target)?;
            result.pushed.push(target.tag);
        }

        Ok(result)
    }

    /// The build context must exist before the engine is invoked
    pub fn build_step(&self, target: &ImageTarget) -> Result<()> {
        let context = self.context_dir(target);
        if !context.is_dir() {
            return Err(UpdateError::MissingContext { path: context }.into());
        }

        self.engine.build(&target.tag, &context)
    }

    pub fn push_step(&self, target: &ImageTarget) -> Result<()> {
        self.engine.push(&target.tag)
    }

    fn context_dir(&self, target: &ImageTarget) -> PathBuf {
        match &self.root {
            Some(root) => root.join(&target.context),
            None => target.context.clone(),
        }
    }
}
