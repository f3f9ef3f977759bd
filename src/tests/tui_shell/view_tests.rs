    use super::*;

    use time::Duration;

    #[test]
    fn fmt_since_buckets() {
        let now = OffsetDateTime::UNIX_EPOCH + Duration::days(100);
        assert_eq!(fmt_since(now - Duration::seconds(5), now), "just now");
        assert_eq!(fmt_since(now - Duration::minutes(7), now), "7m ago");
        assert_eq!(fmt_since(now - Duration::hours(30), now), "30h ago");
        assert_eq!(fmt_since(OffsetDateTime::UNIX_EPOCH, now), "1970-01-01");
        // Clock skew reads as "just now".
        assert_eq!(fmt_since(now + Duration::seconds(30), now), "just now");
    }

    #[test]
    fn detail_lines_skip_absent_fields() {
        let stream = Stream {
            name: "s1".to_string(),
            stream_type: "stream.apache-kafka".to_string(),
            service: "kafka".to_string(),
            tags: vec!["a".to_string(), "b".to_string()],
            ..Stream::default()
        };
        assert_eq!(
            stream_detail_lines(&stream),
            vec![
                "name: s1",
                "type: stream.apache-kafka",
                "service: kafka",
                "tags: a, b",
            ]
        );
    }
