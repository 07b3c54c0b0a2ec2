use super::*;
use serde_json::json;

mod from_json_value {
    use super::*;

    #[test]
    fn when_all_recognized_keys_present_should_parse_each() {
        // Arrange
        let value = json!({
            "origins": ["http://foo.com"],
            "allow_credentials": true,
            "allow_methods": ["GET", "POST"],
            "allow_headers": "*",
            "expose_headers": ["X-Total-Count"],
            "max_age": 600,
            "allow_private_network": true,
            "preflight_status": 204
        });

        // Act
        let options = ResourceOptions::from_json_value(value).expect("valid options");

        // Assert
        assert!(matches!(
            options.origins,
            Some(OriginsOption::List(ref list)) if list == &["http://foo.com".to_string()]
        ));
        assert_eq!(options.allow_credentials, Some(true));
        assert_eq!(
            options.allow_methods,
            Some(ListOrWildcard::list(["GET", "POST"]))
        );
        assert_eq!(options.allow_headers, Some(ListOrWildcard::wildcard()));
        assert_eq!(
            options.expose_headers,
            Some(vec!["X-Total-Count".to_string()])
        );
        assert_eq!(options.max_age, Some(600));
        assert_eq!(options.allow_private_network, Some(true));
        assert_eq!(options.preflight_status, Some(204));
    }

    #[test]
    fn when_unknown_key_present_should_fail() {
        // Arrange
        let value = json!({ "origins": "*", "allow_origin": "*" });

        // Act
        let err = ResourceOptions::from_json_value(value).unwrap_err();

        // Assert
        assert!(err.to_string().contains("unknown field `allow_origin`"));
    }

    #[test]
    fn when_origins_is_wildcard_string_should_parse_wildcard() {
        let options = ResourceOptions::from_json_value(json!({ "origins": "*" })).unwrap();

        assert!(matches!(options.origins, Some(OriginsOption::Wildcard)));
    }

    #[test]
    fn when_origins_is_single_string_should_parse_one_element_list() {
        let options =
            ResourceOptions::from_json_value(json!({ "origins": "https://a.dev" })).unwrap();

        assert!(matches!(
            options.origins,
            Some(OriginsOption::List(ref list)) if list.len() == 1 && list[0] == "https://a.dev"
        ));
    }

    #[test]
    fn when_origins_is_pattern_object_should_parse_pattern() {
        let options = ResourceOptions::from_json_value(
            json!({ "origins": { "pattern": "^https://.*\\.a\\.dev$" } }),
        )
        .unwrap();

        assert!(matches!(
            options.origins,
            Some(OriginsOption::Pattern(ref pattern)) if pattern == r"^https://.*\.a\.dev$"
        ));
    }

    #[test]
    fn when_pattern_object_has_unknown_key_should_fail() {
        // Arrange
        let value = json!({ "origins": { "pattern": "^https://a\\.dev$", "flags": "i" } });

        // Act
        let result = ResourceOptions::from_json_value(value);

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn when_empty_object_should_leave_every_field_unset() {
        let options = ResourceOptions::from_json_value(json!({})).unwrap();

        assert!(options.origins.is_none());
        assert!(options.allow_methods.is_none());
        assert!(options.max_age.is_none());
    }
}

mod merged_over {
    use super::*;

    #[test]
    fn when_field_declared_should_override_default() {
        // Arrange
        let defaults = CorsDefaults::new().max_age(60).allow_credentials(true);
        let declared = ResourceOptions::new().max_age(600);

        // Act
        let merged = declared.merged_over(&defaults);

        // Assert
        assert_eq!(merged.max_age, Some(600));
        assert_eq!(merged.allow_credentials, Some(true));
    }

    #[test]
    fn when_field_absent_everywhere_should_stay_unset() {
        let merged = ResourceOptions::new().merged_over(&CorsDefaults::new());

        assert!(merged.origins.is_none());
        assert!(merged.expose_headers.is_none());
        assert!(merged.preflight_status.is_none());
    }

    #[test]
    fn when_declared_false_should_not_inherit_true_default() {
        let defaults = CorsDefaults::new().allow_private_network(true);
        let declared = ResourceOptions::new().allow_private_network(false);

        let merged = declared.merged_over(&defaults);

        assert_eq!(merged.allow_private_network, Some(false));
    }
}
