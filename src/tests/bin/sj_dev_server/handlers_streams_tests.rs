    use super::*;

    use sj_console::model::Generator;

    fn catalog() -> BTreeMap<String, Service> {
        let mut services = BTreeMap::new();
        services.insert(
            "kafka".to_string(),
            Service {
                name: "kafka".to_string(),
                service_type: "service.apache-kafka".to_string(),
                description: None,
                provider: None,
                extra: serde_json::Map::new(),
            },
        );
        services
    }

    fn stream(stream_type: &str) -> Stream {
        Stream {
            name: "s1".to_string(),
            stream_type: stream_type.to_string(),
            service: "kafka".to_string(),
            ..Stream::default()
        }
    }

    #[test]
    fn generator_is_rejected_outside_tstreams() {
        let mut s = stream("stream.apache-kafka");
        assert_eq!(validate_stream(&s, &catalog()), Ok(()));
        s.generator = Some(Generator::default());
        assert!(validate_stream(&s, &catalog()).is_err());

        let mut t = stream(T_STREAM_TYPE);
        t.generator = Some(Generator::default());
        assert_eq!(validate_stream(&t, &catalog()), Ok(()));
    }

    #[test]
    fn unknown_service_and_type_are_rejected() {
        let mut s = stream("stream.apache-kafka");
        s.service = "nope".to_string();
        assert_eq!(
            validate_stream(&s, &catalog()),
            Err("Service 'nope' does not exist.".to_string())
        );
        assert_eq!(
            validate_stream(&stream("stream.bogus"), &catalog()),
            Err("Unknown stream type 'stream.bogus'.".to_string())
        );
    }
