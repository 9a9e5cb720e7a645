//! Artifact path derivation from a resolved configuration.

use super::{BuildConfiguration, OutputStyle, Target};

/// Separator appended when a directory needs terminating.
pub const SEPARATOR: char = '/';

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Returns true if the path ends with `/` or `\`.
pub fn ends_with_separator(path: &str) -> bool {
    path.ends_with(is_separator)
}

/// Removes every trailing separator.
pub fn trim_trailing_separators(path: &str) -> &str {
    path.trim_end_matches(is_separator)
}

/// Returns the path terminated by a separator.
pub fn with_trailing_separator(path: &str) -> String {
    let mut dir = path.to_string();
    if !ends_with_separator(&dir) {
        dir.push(SEPARATOR);
    }
    dir
}

/// Maps a [`BuildConfiguration`] to the path handed to the build invoker.
pub struct OutputPathResolver;

impl OutputPathResolver {
    /// Resolves the artifact path for a configuration.
    ///
    /// The artifact name is `packageName` when given, else the project name.
    pub fn resolve(config: &BuildConfiguration) -> String {
        let artifact_name = config
            .package_name()
            .unwrap_or_else(|| config.project_name());
        let path = Self::resolve_path(config.target(), config.output_dir(), artifact_name);
        log::debug!("Output path for {}: {}", config.target(), path);
        path
    }

    /// Resolves the artifact path for a target, directory and artifact name.
    ///
    /// - Package targets get `<dir>/<name>` with the target's suffix rule
    ///   applied (`.apk`, `.exe` appended once; `.unity3d` stripped).
    /// - Single-directory targets lose any trailing separator.
    /// - Everything else passes through.
    ///
    /// Reapplying the target's suffix rule to a resolved path leaves it unchanged.
    pub fn resolve_path(target: Target, output_dir: &str, artifact_name: &str) -> String {
        match target.output_style() {
            OutputStyle::Package(rule) => rule.apply(&format!(
                "{}{}",
                with_trailing_separator(output_dir),
                artifact_name
            )),
            OutputStyle::SingleDirectory => trim_trailing_separators(output_dir).to_string(),
            OutputStyle::PassThrough => output_dir.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn android_appends_apk_once() {
        assert_eq!(
            OutputPathResolver::resolve_path(Target::Android, "/builds/Android", "Game"),
            "/builds/Android/Game.apk"
        );
        assert_eq!(
            OutputPathResolver::resolve_path(Target::Android, "/builds/Android/", "Game.apk"),
            "/builds/Android/Game.apk"
        );
    }

    #[test]
    fn windows_appends_exe_once() {
        for target in [Target::Windows32, Target::Windows64] {
            assert_eq!(
                OutputPathResolver::resolve_path(target, "C:\\builds\\", "Game"),
                "C:\\builds\\Game.exe"
            );
            assert_eq!(
                OutputPathResolver::resolve_path(target, "/b", "Game.exe"),
                "/b/Game.exe"
            );
        }
    }

    #[test]
    fn web_strips_bundle_suffix() {
        for target in [Target::WebStandard, Target::WebStreamed, Target::WebGl] {
            assert_eq!(
                OutputPathResolver::resolve_path(target, "/b/WebPlayer", "Game.unity3d"),
                "/b/WebPlayer/Game"
            );
            assert_eq!(
                OutputPathResolver::resolve_path(target, "/b/WebPlayer", "Game"),
                "/b/WebPlayer/Game"
            );
        }
    }

    #[test]
    fn ios_drops_trailing_separators() {
        assert_eq!(
            OutputPathResolver::resolve_path(Target::Ios, "/b/iOS//", "Game"),
            "/b/iOS"
        );
        assert_eq!(
            OutputPathResolver::resolve_path(Target::TvOs, "/b/tvOS", "Game"),
            "/b/tvOS"
        );
    }

    #[test]
    fn pass_through_targets_are_unchanged() {
        assert_eq!(
            OutputPathResolver::resolve_path(Target::MacOs, "/b/Clients/", "Game"),
            "/b/Clients/"
        );
    }

    #[test]
    fn suffix_rule_is_stable_on_resolved_paths() {
        let cases = [
            (Target::Android, "/builds/Android", "Game"),
            (Target::Android, "/builds/Android", "nested/Game"),
            (Target::Windows64, "/builds", "Game"),
            (Target::WebGl, "/builds", "Game.unity3d"),
        ];
        for (target, dir, name) in cases {
            let once = OutputPathResolver::resolve_path(target, dir, name);
            let OutputStyle::Package(rule) = target.output_style() else {
                panic!("{target} is not a package target");
            };
            assert_eq!(rule.apply(&once), once, "{target}");
        }
    }

    #[test]
    fn folder_named_like_project_still_gets_artifact() {
        for target in [Target::WebStandard, Target::WebStreamed, Target::WebGl] {
            assert_eq!(
                OutputPathResolver::resolve_path(target, "/deploy/Game", "Game"),
                "/deploy/Game/Game"
            );
            assert_eq!(
                OutputPathResolver::resolve_path(target, "/deploy/Game/", "Game"),
                "/deploy/Game/Game"
            );
        }
        assert_eq!(
            OutputPathResolver::resolve_path(Target::Android, "/deploy/Game.apk", "Game"),
            "/deploy/Game.apk/Game.apk"
        );
        assert_eq!(
            OutputPathResolver::resolve_path(Target::Windows32, "/deploy/Game.exe/", "Game"),
            "/deploy/Game.exe/Game.exe"
        );
    }

    #[test]
    fn folder_named_like_artifact_with_separator_keeps_file_name() {
        assert_eq!(
            OutputPathResolver::resolve_path(Target::Android, "/deploy/Game.apk/", "Game"),
            "/deploy/Game.apk/Game.apk"
        );
    }

    #[test]
    fn same_name_in_parent_folder_is_not_mistaken_for_artifact() {
        assert_eq!(
            OutputPathResolver::resolve_path(Target::Android, "/builds/XGame.apk", "Game"),
            "/builds/XGame.apk/Game.apk"
        );
    }

    #[test]
    fn separator_helpers() {
        assert_eq!(with_trailing_separator("/a"), "/a/");
        assert_eq!(with_trailing_separator("/a/"), "/a/");
        assert_eq!(with_trailing_separator("C:\\a\\"), "C:\\a\\");
        assert_eq!(trim_trailing_separators("/a/\\/"), "/a");
        assert!(!ends_with_separator("/a"));
    }
}
