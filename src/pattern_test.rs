use super::*;

mod parse {
    use super::*;

    #[test]
    fn when_exact_path_should_not_be_wildcard() {
        let pattern = ResourcePattern::parse("/api/status").unwrap();

        assert!(!pattern.is_wildcard());
        assert_eq!(pattern.as_str(), "/api/status");
    }

    #[test]
    fn when_trailing_wildcard_should_be_prefix() {
        let pattern = ResourcePattern::parse("/public/*").unwrap();

        assert!(pattern.is_wildcard());
        assert_eq!(pattern.to_string(), "/public/*");
    }

    #[test]
    fn when_missing_leading_slash_should_fail() {
        let err = ResourcePattern::parse("api/*").unwrap_err();

        assert!(matches!(
            err,
            ConfigError::InvalidResourcePattern { ref pattern, .. } if pattern == "api/*"
        ));
    }

    #[test]
    fn when_wildcard_not_trailing_segment_should_fail() {
        assert!(ResourcePattern::parse("/a/*/b").is_err());
        assert!(ResourcePattern::parse("/files*").is_err());
        assert!(ResourcePattern::parse("/a/**").is_err());
    }

    #[test]
    fn when_pattern_has_query_or_whitespace_should_fail() {
        assert!(ResourcePattern::parse("/a?b").is_err());
        assert!(ResourcePattern::parse("/a b").is_err());
    }
}

mod matches {
    use super::*;

    #[test]
    fn when_exact_should_match_only_identical_path() {
        let pattern = ResourcePattern::parse("/api/status").unwrap();

        assert!(pattern.matches("/api/status"));
        assert!(!pattern.matches("/api/status/"));
        assert!(!pattern.matches("/api/statuses"));
    }

    #[test]
    fn when_prefix_should_match_any_path_below_it() {
        let pattern = ResourcePattern::parse("/public/*").unwrap();

        assert!(pattern.matches("/public/"));
        assert!(pattern.matches("/public/x"));
        assert!(pattern.matches("/public/x/y/z"));
        assert!(!pattern.matches("/public"));
        assert!(!pattern.matches("/publicity"));
    }

    #[test]
    fn when_root_wildcard_should_match_every_absolute_path() {
        let pattern = ResourcePattern::parse("/*").unwrap();

        assert!(pattern.matches("/"));
        assert!(pattern.matches("/anything/else"));
    }

    #[test]
    fn when_lone_star_should_match_everything() {
        let pattern = ResourcePattern::parse("*").unwrap();

        assert!(pattern.matches(""));
        assert!(pattern.matches("/x"));
    }
}
