//! Command lines for every child process a run can start.

use crate::config::settings::InitSettings;
use crate::domain::model::CloneRequest;

fn argv<I, S>(parts: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    parts.into_iter().map(Into::into).collect()
}

/// `git config --global credential.helper store`
pub fn configure_credentials(settings: &InitSettings) -> Vec<String> {
    argv([
        settings.git_program.as_str(),
        "config",
        "--global",
        "credential.helper",
        "store",
    ])
}

/// `<keyscan script> <hostname>`
pub fn register_host_key(settings: &InitSettings, hostname: &str) -> Vec<String> {
    argv([settings.keyscan_script.as_str(), hostname])
}

/// `git clone <repository> <directory>`
pub fn clone(settings: &InitSettings, request: &CloneRequest) -> Vec<String> {
    argv([
        settings.git_program.as_str(),
        "clone",
        request.repository.as_str(),
        request.directory.as_str(),
    ])
}

/// `git -C <directory> checkout <checkout>`
pub fn checkout(settings: &InitSettings, request: &CloneRequest) -> Vec<String> {
    argv([
        settings.git_program.as_str(),
        "-C",
        request.directory.as_str(),
        "checkout",
        request.checkout.as_str(),
    ])
}

pub fn list_ssh_identities() -> Vec<String> {
    argv(["ssh-add", "-l"])
}

pub fn show_known_hosts(settings: &InitSettings) -> Vec<String> {
    argv(["cat", settings.known_hosts.as_str()])
}

pub fn list_directory(request: &CloneRequest) -> Vec<String> {
    argv(["ls", "-al", request.directory.as_str()])
}

pub fn status(settings: &InitSettings, request: &CloneRequest) -> Vec<String> {
    argv([
        settings.git_program.as_str(),
        "-C",
        request.directory.as_str(),
        "status",
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CloneRequest {
        CloneRequest {
            repository: "https://github.com/eclipse-theia/theia-cloud.git".to_string(),
            directory: "/home/project/theia-cloud".to_string(),
            checkout: "v1.0.0".to_string(),
        }
    }

    #[test]
    fn test_git_command_lines() {
        let settings = InitSettings::default();
        let request = request();

        assert_eq!(
            configure_credentials(&settings),
            ["git", "config", "--global", "credential.helper", "store"]
        );
        assert_eq!(
            clone(&settings, &request),
            [
                "git",
                "clone",
                "https://github.com/eclipse-theia/theia-cloud.git",
                "/home/project/theia-cloud"
            ]
        );
        assert_eq!(
            checkout(&settings, &request),
            ["git", "-C", "/home/project/theia-cloud", "checkout", "v1.0.0"]
        );
        assert_eq!(
            status(&settings, &request),
            ["git", "-C", "/home/project/theia-cloud", "status"]
        );
    }

    #[test]
    fn test_configured_programs_are_used() {
        let settings = InitSettings {
            git_program: "/opt/git/bin/git".to_string(),
            keyscan_script: "/usr/local/bin/keyscan".to_string(),
            known_hosts: "/home/theia/.ssh/known_hosts".to_string(),
            ..InitSettings::default()
        };

        assert_eq!(configure_credentials(&settings)[0], "/opt/git/bin/git");
        assert_eq!(
            register_host_key(&settings, "github.com"),
            ["/usr/local/bin/keyscan", "github.com"]
        );
        assert_eq!(
            show_known_hosts(&settings),
            ["cat", "/home/theia/.ssh/known_hosts"]
        );
    }

    #[test]
    fn test_arguments_are_not_split_or_escaped() {
        let settings = InitSettings::default();
        let request = CloneRequest {
            repository: "repo with spaces; rm -rf /".to_string(),
            directory: String::new(),
            checkout: "$(whoami)".to_string(),
        };

        let line = clone(&settings, &request);
        assert_eq!(line.len(), 4);
        assert_eq!(line[2], "repo with spaces; rm -rf /");
        assert_eq!(line[3], "");
        assert_eq!(checkout(&settings, &request)[4], "$(whoami)");
    }
}
