// Path Tests

#[cfg(test)]
mod tests {
    use crate::path::*;

    mod util_tests {
        use super::*;

        #[test]
        fn should_normalize_separators() {
            assert_eq!(normalize_separators("a\\b\\c.js"), "a/b/c.js");
        }

        #[test]
        fn should_clean_dot_segments() {
            assert_eq!(clean_path("/a/./b/../c/"), "/a/c");
            assert_eq!(clean_path("C:\\app\\src\\..\\lib"), "C:/app/lib");
            assert_eq!(clean_path("/"), "/");
        }

        #[test]
        fn should_take_dirname() {
            assert_eq!(dirname("/lib/mod/index.js"), "/lib/mod");
            assert_eq!(dirname("/index.js"), "/");
            assert_eq!(dirname("index.js"), ".");
        }

        #[test]
        fn should_compute_relative_paths() {
            assert_eq!(
                relative("/app/src", "/app/src/widgets/button.js").as_deref(),
                Some("widgets/button.js")
            );
            assert_eq!(
                relative("/app/src", "/app/lib/x.js").as_deref(),
                Some("../lib/x.js")
            );
            assert_eq!(relative("/lib/mod/index.js", "/lib/mod/index.js").as_deref(), Some(""));
        }

        #[test]
        fn should_resolve_relative_paths_against_cwd() {
            let resolved = resolve("src");
            assert!(is_rooted(&resolved));
            assert!(resolved.ends_with("/src"));
            assert!(!resolved.contains('\\'));
        }

        #[test]
        fn should_detect_upward_paths() {
            assert!(is_upward("../x"));
            assert!(is_upward(".."));
            assert!(!is_upward("x/../y"));
            assert!(!is_upward(""));
        }
    }

    mod request_tests {
        use super::*;

        #[test]
        fn should_remove_loaders() {
            assert_eq!(remove_loaders("style!css!./foo.css"), "./foo.css");
            assert_eq!(remove_loaders("async!./lazy"), "./lazy");
            assert_eq!(remove_loaders("lodash"), "lodash");
            assert_eq!(remove_loaders("raw!"), "");
        }

        #[test]
        fn should_detect_package_folder() {
            assert!(is_in_package_folder("/app/node_modules/pkg/index.js"));
            assert!(is_in_package_folder("C:\\app\\Node_Modules\\pkg\\index.js"));
            assert!(!is_in_package_folder("/app/my_node_modules_copy/x.js"));
        }

        #[test]
        fn should_extract_plain_package_name() {
            assert_eq!(
                extract_package_name("/app/node_modules/pkg/dist/index.js").as_deref(),
                Some("pkg")
            );
        }

        #[test]
        fn should_extract_scoped_package_name() {
            assert_eq!(
                extract_package_name("/app/node_modules/@scope/pkg/sub/file.js").as_deref(),
                Some("@scope/pkg")
            );
            assert_eq!(
                extract_package_name("C:\\app\\node_modules\\@scope\\pkg\\file.js").as_deref(),
                Some("@scope/pkg")
            );
        }

        #[test]
        fn should_use_innermost_package_folder() {
            assert_eq!(
                extract_package_name("/app/node_modules/outer/node_modules/inner/a.js").as_deref(),
                Some("inner")
            );
        }

        #[test]
        fn should_fail_without_name_segment() {
            assert_eq!(extract_package_name("/app/node_modules"), None);
            assert_eq!(extract_package_name("/app/node_modules/pkg/node_modules"), None);
        }

        #[test]
        fn should_detect_async_marker() {
            assert!(has_async_marker("async!./lazy"));
            assert!(has_async_marker("async?lazy=true!./lazy"));
            assert!(!has_async_marker("./async"));
            assert!(!has_async_marker("asyncx!./lazy"));
        }
    }
}
