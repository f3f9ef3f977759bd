    use super::*;

    fn create_args(stream_type: &str, tags: &str) -> CreateArgs {
        CreateArgs {
            name: "s1".to_string(),
            stream_type: stream_type.to_string(),
            service: "kafka-svc".to_string(),
            description: None,
            tags: tags.to_string(),
            partitions: Some(3),
            replication_factor: None,
            primary: None,
            force: false,
            generator_type: Some("global".to_string()),
            generator_service: Some("zk".to_string()),
            instance_count: Some(2),
        }
    }

    #[test]
    fn tags_split_on_any_whitespace() {
        assert_eq!(parse_tags("raw  eu\tprod "), vec!["raw", "eu", "prod"]);
        assert!(parse_tags("").is_empty());
        assert!(parse_tags("   ").is_empty());
    }

    #[test]
    fn generator_flags_only_survive_for_tstreams() {
        let t = stream_from_args(create_args("stream.t-stream", "a b"));
        let generator = t.generator.expect("generator");
        assert_eq!(generator.generator_type, "global");
        assert_eq!(generator.service, "zk");
        assert_eq!(generator.instance_count, 2);
        assert_eq!(t.tags, vec!["a", "b"]);

        let kafka = stream_from_args(create_args("stream.apache-kafka", ""));
        assert!(kafka.generator.is_none());
        assert_eq!(kafka.partitions, Some(3));
    }
