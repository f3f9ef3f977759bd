    use super::*;

    #[test]
    fn url_is_rooted_at_v1_without_double_slashes() {
        let t = Transport::new("http://127.0.0.1:18080/", None).expect("transport");
        assert_eq!(t.api_root(), "http://127.0.0.1:18080/v1/");
        assert_eq!(t.url("custom/files"), "http://127.0.0.1:18080/v1/custom/files");
        assert_eq!(t.url("/streams"), "http://127.0.0.1:18080/v1/streams");
    }

    #[test]
    fn json_options_set_content_type() {
        let opts = RequestOptions::json().with_header("X-Trace", "1");
        assert_eq!(
            opts.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(opts.headers.get("X-Trace").map(String::as_str), Some("1"));
        assert_eq!(opts.mode, ResponseMode::Json);
        assert_eq!(RequestOptions::blob().mode, ResponseMode::Blob);
    }

    #[tokio::test]
    async fn building_a_request_does_not_touch_the_network() {
        let t = Transport::new("http://127.0.0.1:9", None).expect("transport");
        // Never polled; must not panic or block.
        let fut = t.request(Method::Get, "streams", RequestOptions::json());
        drop(fut);
    }

    #[tokio::test]
    async fn refused_connection_is_a_status_zero_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);

        let t = Transport::new(&format!("http://{}", addr), None).expect("transport");
        let err = t
            .request(Method::Get, "streams", RequestOptions::json())
            .await
            .expect_err("nothing is listening");
        assert!(err.is_network());
        assert_eq!(err.status, 0);
        assert!(err.body.is_none());
    }
