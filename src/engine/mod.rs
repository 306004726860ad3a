use anyhow::{Context, Result};
use std::cell::OnceCell;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, error, info};

#[cfg(test)]
mod tests;

/// The external toolchain that builds and pushes images
pub trait ContainerEngine {
    /// Build `context` into an image named `tag`
    fn build(&self, tag: &str, context: &Path) -> Result<()>;

    /// Push the image named `tag` to its registry
    fn push(&self, tag: &str) -> Result<()>;
}

/// A docker-compatible CLI such as `docker` or `podman`
///
/// The binary is looked up on PATH on first use.
pub struct ContainerCli {
    program: String,
    resolved: OnceCell<PathBuf>,
    build_args: Vec<String>,
}

impl ContainerCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            resolved: OnceCell::new(),
            build_args: Vec::new(),
        }
    }

    pub fn with_build_args(mut self, args: Vec<String>) -> Self {
        self.build_args = args;
        self
    }

    /// Resolve the engine on PATH (or use it as given if it is a path)
    fn program(&self) -> Result<&Path> {
        if let Some(program) = self.resolved.get() {
            return Ok(program.as_path());
        }

        let resolved = which::which(&self.program)
            .with_context(|| format!("Container engine '{}' not found", self.program))?;
        debug!("Using container engine at {}", resolved.display());
        Ok(self.resolved.get_or_init(|| resolved).as_path())
    }

    fn build_command(&self, program: &Path, tag: &str, context: &Path) -> Command {
        let mut cmd = Command::new(program);
        cmd.arg("build").arg("-t").arg(tag);
        for arg in &self.build_args {
            cmd.arg(arg);
        }
        cmd.arg(context);
        cmd
    }

    fn push_command(&self, program: &Path, tag: &str) -> Command {
        let mut cmd = Command::new(program);
        cmd.arg("push").arg(tag);
        cmd
    }

    /// Run with inherited stdio so the engine's own output reaches the terminal
    fn run(mut cmd: Command, action: &str, tag: &str) -> Result<()> {
        debug!("Running command: {:?}", cmd);

        let status = cmd
            .status()
            .with_context(|| format!("Failed to execute {} for {}", action, tag))?;

        if !status.success() {
            error!("{} failed for {}", action, tag);
            anyhow::bail!("{} failed for {} ({})", action, tag, status);
        }

        Ok(())
    }
}

impl ContainerEngine for ContainerCli {
    fn build(&self, tag: &str, context: &Path) -> Result<()> {
        info!("Building {} from {}", tag, context.display());
        let cmd = self.build_command(self.program()?, tag, context);
        Self::run(cmd, "Image build", tag)
    }

    fn push(&self, tag: &str) -> Result<()> {
        info!("Pushing {}", tag);
        let cmd = self.push_command(self.program()?, tag);
        Self::run(cmd, "Image push", tag)
    }
}
