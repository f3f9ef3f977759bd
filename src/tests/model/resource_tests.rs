    use super::*;

    #[test]
    fn files_are_addressed_by_name_only() {
        let d = ResourceDescriptor::versioned("report.csv", "1.0");
        assert_eq!(
            Collection::FILES.addressable_path(&d).expect("path"),
            "files/report.csv"
        );
        assert_eq!(
            Collection::FILES.resource_path(&d).expect("path"),
            "custom/files/report.csv"
        );
    }

    #[test]
    fn other_custom_collections_append_version() {
        let d = ResourceDescriptor::versioned("engine.jar", "2.1");
        for segment in ["jars", "modules", "schemas"] {
            let c = Collection::custom(segment);
            assert_eq!(
                c.addressable_path(&d).expect("path"),
                format!("{}/engine.jar/2.1", segment)
            );
        }
    }

    #[test]
    fn missing_version_is_rejected_outside_files() {
        let err = Collection::JARS
            .addressable_path(&ResourceDescriptor::named("engine.jar"))
            .expect_err("version required");
        assert_eq!(
            err,
            PathError::MissingVersion {
                collection: "jars".to_string(),
                name: "engine.jar".to_string(),
            }
        );
    }

    #[test]
    fn root_collections_use_name_only() {
        let d = ResourceDescriptor::named("s1");
        assert_eq!(
            Collection::STREAMS.resource_path(&d).expect("path"),
            "streams/s1"
        );
        assert_eq!(Collection::STREAMS.related_path("s1"), "streams/s1/related");
        assert_eq!(Collection::STREAMS.types_path(), "streams/_types");
    }

    #[test]
    fn empty_name_is_rejected() {
        assert_eq!(
            Collection::FILES.addressable_path(&ResourceDescriptor::named("")),
            Err(PathError::EmptyName)
        );
    }

    #[test]
    fn upload_field_depends_on_collection() {
        assert_eq!(Collection::JARS.upload_field(), "jar");
        assert_eq!(Collection::FILES.upload_field(), "file");
        assert_eq!(Collection::custom("modules").upload_field(), "file");
    }

    #[test]
    fn descriptor_omits_missing_version_on_the_wire() {
        let v = serde_json::to_value(ResourceDescriptor::named("a.jar")).expect("serialize");
        assert_eq!(v, serde_json::json!({"name": "a.jar"}));
    }
