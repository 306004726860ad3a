#[cfg(test)]
mod tests {
    use super::super::*;
    use std::ffi::OsStr;

    fn args(cmd: &Command) -> Vec<&OsStr> {
        cmd.get_args().collect()
    }

    #[test]
    fn test_build_command() {
        let cli = ContainerCli::new("docker");
        let cmd = cli.build_command(
            Path::new("docker"),
            "glomdom/auth-service:latest",
            Path::new("services/auth-service"),
        );

        assert_eq!(cmd.get_program(), "docker");
        assert_eq!(
            args(&cmd),
            vec![
                "build",
                "-t",
                "glomdom/auth-service:latest",
                "services/auth-service"
            ]
        );
    }

    #[test]
    fn test_build_command_with_extra_args() {
        let cli = ContainerCli::new("podman")
            .with_build_args(vec!["--pull".to_string(), "--no-cache".to_string()]);
        let cmd = cli.build_command(
            Path::new("/usr/bin/podman"),
            "glomdom/api-gateway:latest",
            Path::new("api-gateway"),
        );

        assert_eq!(cmd.get_program(), "/usr/bin/podman");
        assert_eq!(
            args(&cmd),
            vec![
                "build",
                "-t",
                "glomdom/api-gateway:latest",
                "--pull",
                "--no-cache",
                "api-gateway"
            ]
        );
    }

    #[test]
    fn test_push_command() {
        let cli = ContainerCli::new("docker");
        let cmd = cli.push_command(Path::new("docker"), "glomdom/api-gateway:latest");

        assert_eq!(args(&cmd), vec!["push", "glomdom/api-gateway:latest"]);
    }

    #[test]
    fn test_new_does_not_resolve_engine() {
        let cli = ContainerCli::new("definitely-not-a-container-engine");
        assert!(cli.resolved.get().is_none());
    }

    #[test]
    fn test_missing_engine_reported_on_use() {
        let cli = ContainerCli::new("definitely-not-a-container-engine");

        let result = cli.push("glomdom/api-gateway:latest");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Container engine 'definitely-not-a-container-engine' not found"));

        let result = cli.build("glomdom/api-gateway:latest", Path::new("api-gateway"));
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_program_resolved_once() {
        let cli = ContainerCli::new("sh");
        let first = cli.program().unwrap().to_path_buf();
        assert!(first.is_absolute());
        assert_eq!(cli.program().unwrap(), first.as_path());
    }

    #[cfg(unix)]
    #[test]
    fn test_run_reports_nonzero_exit() {
        let result = ContainerCli::run(Command::new("false"), "Image push", "glomdom/x:latest");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Image push failed for glomdom/x:latest"));
    }

    #[test]
    fn test_run_spawn_failure() {
        let result = ContainerCli::run(
            Command::new("/nonexistent/engine"),
            "Image push",
            "glomdom/x:latest",
        );
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to execute"));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_success() {
        assert!(ContainerCli::run(Command::new("true"), "Image build", "glomdom/x:latest").is_ok());
    }
}
