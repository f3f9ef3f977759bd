    use super::*;

    #[test]
    fn draft_starts_with_local_generator_and_no_tags() {
        let s = Stream::draft();
        assert!(s.tags.is_empty());
        assert_eq!(s.generator, Some(Generator::default()));
        assert_eq!(s.generator.as_ref().map(|g| g.generator_type.as_str()), Some("local"));
    }

    #[test]
    fn generator_is_dropped_for_non_tstreams() {
        let mut s = Stream::draft();
        s.stream_type = "stream.apache-kafka".to_string();
        assert!(s.prepared_for_save().generator.is_none());

        let mut t = Stream::draft();
        t.stream_type = T_STREAM_TYPE.to_string();
        assert!(t.prepared_for_save().generator.is_some());
    }

    #[test]
    fn wire_shape_uses_camel_case_and_type_key() {
        let s = Stream {
            name: "s1".to_string(),
            stream_type: T_STREAM_TYPE.to_string(),
            service: "tstream-svc".to_string(),
            tags: vec!["a".to_string()],
            replication_factor: Some(2),
            generator: Some(Generator::default()),
            ..Stream::default()
        };
        let v = serde_json::to_value(&s).expect("serialize");
        assert_eq!(v["type"], "stream.t-stream");
        assert_eq!(v["replicationFactor"], 2);
        assert_eq!(v["generator"]["generatorType"], "local");
        assert_eq!(v["generator"]["instanceCount"], 0);
        assert!(v.get("description").is_none());
    }
