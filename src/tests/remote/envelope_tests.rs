    use super::*;
    use crate::model::{CUSTOM_LIST_KEYS, CustomFile};
    use serde_json::json;

    fn transport_err(status: u16, status_text: &str, body: Option<&str>) -> TransportError {
        TransportError {
            status,
            status_text: status_text.to_string(),
            body: body.map(str::to_string),
        }
    }

    #[test]
    fn list_key_wins_over_other_keys() {
        let body = json!({
            "status-code": 200,
            "entity": {
                "message": "ignored",
                "custom-jars": [{"name": "other.jar"}],
                "custom-files": [{"name": "a.csv"}, {"name": "b.csv"}]
            }
        });
        let out = extract(body, CUSTOM_LIST_KEYS);
        assert_eq!(
            out,
            Extracted::List(vec![json!({"name": "a.csv"}), json!({"name": "b.csv"})])
        );
    }

    #[test]
    fn jars_list_is_found_when_files_key_is_absent() {
        let body = json!({"entity": {"custom-jars": [{"name": "a.jar", "version": "1.0"}]}});
        let files: Vec<CustomFile> = extract(body, CUSTOM_LIST_KEYS)
            .into_list()
            .expect("list");
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "a.jar");
        assert_eq!(files[0].version.as_deref(), Some("1.0"));
    }

    #[test]
    fn message_only_body_yields_the_message() {
        let out = extract(json!({"entity": {"message": "deleted"}}), CUSTOM_LIST_KEYS);
        assert_eq!(out, Extracted::Message("deleted".to_string()));
        assert_eq!(out.into_message().expect("message"), "deleted");
    }

    #[test]
    fn unrecognized_body_is_returned_unmodified() {
        let body = json!({"entity": {"instances": ["i1"]}});
        assert_eq!(extract(body.clone(), CUSTOM_LIST_KEYS), Extracted::Body(body));

        let no_entity = json!({"anything": true});
        assert_eq!(
            extract(no_entity.clone(), CUSTOM_LIST_KEYS),
            Extracted::Body(no_entity)
        );
    }

    #[test]
    fn list_key_holding_a_non_array_is_skipped() {
        let body = json!({"entity": {"custom-files": null, "message": "empty"}});
        assert_eq!(
            extract(body, CUSTOM_LIST_KEYS),
            Extracted::Message("empty".to_string())
        );
    }

    #[test]
    fn into_message_rejects_list_payloads() {
        let out = Extracted::List(vec![]);
        assert_eq!(out.into_message(), Err(EnvelopeParseError::MissingMessage));
    }

    #[test]
    fn extract_item_requires_the_key() {
        let item = extract_item(json!({"entity": {"stream": {"name": "s1"}}}), "stream")
            .expect("item");
        assert_eq!(item, json!({"name": "s1"}));

        assert_eq!(
            extract_item(json!({"entity": {}}), "stream"),
            Err(EnvelopeParseError::MissingKey("stream".to_string()))
        );
    }

    #[test]
    fn map_error_surfaces_entity_message() {
        let err = transport_err(
            422,
            "Unprocessable Entity",
            Some(r#"{"status-code":422,"entity":{"message":"Stream 's1' is used by instance i1"}}"#),
        );
        assert_eq!(map_error(&err), "Stream 's1' is used by instance i1");
    }

    #[test]
    fn map_error_degrades_on_non_json_body() {
        let err = transport_err(502, "Bad Gateway", Some("<html>upstream down</html>"));
        assert_eq!(map_error(&err), "<html>upstream down</html>");
    }

    #[test]
    fn map_error_uses_status_line_when_body_is_empty() {
        let err = transport_err(503, "Service Unavailable", None);
        assert_eq!(map_error(&err), "503 - Service Unavailable");

        let err = transport_err(500, "Internal Server Error", Some(""));
        assert_eq!(map_error(&err), "500 - Internal Server Error");
    }

    #[test]
    fn map_error_falls_back_for_network_failures() {
        let err = TransportError::network("connection refused");
        assert_eq!(map_error(&err), "Server error");
    }

    #[test]
    fn parse_error_envelope_distinguishes_failure_kinds() {
        assert!(matches!(
            parse_error_envelope("not json"),
            Err(EnvelopeParseError::NotJson(_))
        ));
        assert_eq!(
            parse_error_envelope(r#"{"entity":{}}"#),
            Err(EnvelopeParseError::MissingMessage)
        );
        assert_eq!(
            parse_error_envelope(r#"{"entity":{"message":"nope"}}"#),
            Ok(ApplicationError {
                message: "nope".to_string()
            })
        );
    }

    #[test]
    fn related_instances_are_read_from_entity_or_top_level() {
        let wrapped = json!({"status-code": 200, "entity": {"instances": ["i1", "i2"]}});
        assert_eq!(
            extract_related(wrapped),
            Ok(vec!["i1".to_string(), "i2".to_string()])
        );

        let bare = json!({"instances": ["i1", "i2"]});
        assert_eq!(
            extract_related(bare),
            Ok(vec!["i1".to_string(), "i2".to_string()])
        );

        let empty = json!({"entity": {"instances": []}, "instances": ["ignored"]});
        assert_eq!(extract_related(empty), Ok(Vec::new()));
    }

    #[test]
    fn related_without_instances_is_a_missing_key() {
        assert_eq!(
            extract_related(json!({"entity": {"message": "ok"}})),
            Err(EnvelopeParseError::MissingKey("instances".to_string()))
        );
        assert!(matches!(
            extract_related(json!({"instances": [1, 2]})),
            Err(EnvelopeParseError::Unexpected { kind: "related", .. })
        ));
    }
