    use super::*;

    #[test]
    fn jar_version_comes_from_the_file_name() {
        assert_eq!(jar_version("regular-engine-1.2.jar"), "1.2");
        // Only the last dash-separated part is considered.
        assert_eq!(jar_version("engine-0.9-SNAPSHOT.jar"), DEFAULT_JAR_VERSION);
        assert_eq!(jar_version("engine.jar"), DEFAULT_JAR_VERSION);
        assert_eq!(jar_version("engine-final.jar"), DEFAULT_JAR_VERSION);
    }

    #[tokio::test]
    async fn seeded_instances_reference_seeded_streams() {
        let state = AppState::default();
        state.seed_demo().await;
        assert_eq!(state.instances_using("input-stream").await, vec!["demo-instance"]);
        assert!(state.instances_using("missing").await.is_empty());
        assert_eq!(state.services.read().await.len(), 3);
    }
