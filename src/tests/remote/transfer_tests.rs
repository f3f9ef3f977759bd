    use super::*;

    fn response_with_disposition(value: Option<&str>) -> RawResponse {
        let mut headers = reqwest::header::HeaderMap::new();
        if let Some(value) = value {
            headers.insert(
                reqwest::header::CONTENT_DISPOSITION,
                reqwest::header::HeaderValue::from_str(value).expect("header value"),
            );
        }
        RawResponse {
            status: 200,
            headers,
            body: b"payload".to_vec(),
        }
    }

    #[test]
    fn filename_is_the_substring_after_the_token() {
        assert_eq!(
            filename_from_content_disposition("attachment; filename=engine-1.0.jar"),
            Some("engine-1.0.jar")
        );
    }

    #[test]
    fn filename_keeps_quotes_and_trailing_parameters() {
        assert_eq!(
            filename_from_content_disposition("attachment; filename=\"a b.txt\"; size=12"),
            Some("\"a b.txt\"; size=12")
        );
    }

    #[test]
    fn missing_token_yields_none() {
        assert_eq!(filename_from_content_disposition("inline"), None);
    }

    #[test]
    fn download_requires_the_header() {
        assert_eq!(
            download_from_response(response_with_disposition(None)),
            Err(DownloadError::MissingHeader)
        );
        assert_eq!(
            download_from_response(response_with_disposition(Some("inline"))),
            Err(DownloadError::MissingFilename("inline".to_string()))
        );

        let d = download_from_response(response_with_disposition(Some(
            "attachment; filename=a.csv",
        )))
        .expect("download");
        assert_eq!(d.filename, "a.csv");
        assert_eq!(d.bytes, b"payload");
    }

    #[test]
    fn sanitized_names_never_escape_the_target_directory() {
        assert_eq!(sanitize_download_filename("a.csv"), "a.csv");
        assert_eq!(sanitize_download_filename("\"a b.txt\"; size=12"), "a b.txt");
        assert_eq!(sanitize_download_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_download_filename("dir\\x.jar"), "x.jar");
        assert_eq!(sanitize_download_filename(".."), "download");
        assert_eq!(sanitize_download_filename(""), "download");
    }
