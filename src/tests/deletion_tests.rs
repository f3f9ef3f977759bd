    use super::*;
    use std::sync::Mutex;

    use crate::alerts::Severity;

    struct FakeBackend {
        related: Result<Related, String>,
        remove_result: Result<String, String>,
        removed: Mutex<Vec<ResourceDescriptor>>,
    }

    impl FakeBackend {
        fn new(blockers: &[&str], remove_result: Result<&str, &str>) -> Self {
            Self {
                related: Ok(Related {
                    instances: blockers.iter().map(|s| s.to_string()).collect(),
                }),
                remove_result: remove_result.map(str::to_string).map_err(str::to_string),
                removed: Mutex::new(Vec::new()),
            }
        }

        fn removed(&self) -> Vec<ResourceDescriptor> {
            self.removed.lock().expect("lock").clone()
        }
    }

    impl DeletionBackend for FakeBackend {
        fn list_related(
            &self,
            _name: &str,
        ) -> impl Future<Output = Result<Related, String>> + Send {
            std::future::ready(self.related.clone())
        }

        fn remove(
            &self,
            target: &ResourceDescriptor,
        ) -> impl Future<Output = Result<String, String>> + Send {
            self.removed.lock().expect("lock").push(target.clone());
            std::future::ready(self.remove_result.clone())
        }
    }

    #[tokio::test]
    async fn blockers_are_advisory_by_default() {
        let backend = FakeBackend::new(&["instance-a", "instance-b"], Ok("deleted"));
        let mut alerts = AlertBoard::default();
        let mut machine = SafeDeletion::default();

        let pending = machine
            .begin(&backend, ResourceDescriptor::named("s1"), &mut alerts)
            .await
            .expect("confirming");
        assert_eq!(pending.blockers, vec!["instance-a", "instance-b"]);

        let outcome = machine
            .confirm_and_delete(&backend, &mut alerts)
            .await
            .expect("advisory policy lets it through");
        assert_eq!(
            outcome,
            DeletionOutcome::Deleted {
                message: "deleted".to_string()
            }
        );
        assert!(outcome.needs_refresh());
        assert!(machine.is_idle());
        assert_eq!(backend.removed(), vec![ResourceDescriptor::named("s1")]);

        let alert = alerts.latest().expect("alert");
        assert_eq!(alert.severity, Severity::Success);
        assert_eq!(alert.message, "deleted");
        assert!(alert.auto_dismiss.is_some());
    }

    #[tokio::test]
    async fn enforce_policy_refuses_while_blockers_exist() {
        let backend = FakeBackend::new(&["instance-a"], Ok("deleted"));
        let mut alerts = AlertBoard::default();
        let mut machine = SafeDeletion::new(BlockerPolicy::Enforce);

        machine
            .begin(&backend, ResourceDescriptor::named("s1"), &mut alerts)
            .await;
        let err = machine
            .confirm_and_delete(&backend, &mut alerts)
            .await
            .expect_err("blocked");
        assert_eq!(
            err,
            ConfirmError::Blocked {
                name: "s1".to_string(),
                blockers: vec!["instance-a".to_string()],
            }
        );
        assert!(backend.removed().is_empty());
        // Still confirming; the user can cancel.
        assert!(machine.pending().is_some());
        assert!(machine.cancel().is_some());
        assert!(machine.is_idle());
    }

    #[tokio::test]
    async fn enforce_policy_allows_unreferenced_targets() {
        let backend = FakeBackend::new(&[], Ok("gone"));
        let mut alerts = AlertBoard::default();
        let mut machine = SafeDeletion::new(BlockerPolicy::Enforce);
        machine
            .begin(&backend, ResourceDescriptor::named("s2"), &mut alerts)
            .await;
        let outcome = machine
            .confirm_and_delete(&backend, &mut alerts)
            .await
            .expect("no blockers");
        assert!(outcome.needs_refresh());
    }

    #[tokio::test]
    async fn failed_delete_raises_a_persistent_danger_alert() {
        let backend = FakeBackend::new(&[], Err("Stream 's1' has not been found."));
        let mut alerts = AlertBoard::default();
        let mut machine = SafeDeletion::default();
        machine
            .begin(&backend, ResourceDescriptor::named("s1"), &mut alerts)
            .await;
        let outcome = machine
            .confirm_and_delete(&backend, &mut alerts)
            .await
            .expect("confirmed");
        assert!(!outcome.needs_refresh());
        assert!(machine.is_idle());

        let alert = alerts.latest().expect("alert");
        assert_eq!(alert.severity, Severity::Danger);
        assert_eq!(alert.auto_dismiss, None);
        assert!(alert.dismissible);
        assert_eq!(alert.message, "Stream 's1' has not been found.");
    }

    #[test]
    fn cancel_discards_without_network() {
        let mut alerts = AlertBoard::default();
        let mut machine = SafeDeletion::default();
        let t = machine.request(ResourceDescriptor::named("s1"));
        assert!(machine.blockers_loaded(t, Ok(Related::default()), &mut alerts));

        let dropped = machine.cancel().expect("pending");
        assert_eq!(dropped.target.name, "s1");
        assert!(machine.is_idle());
        assert_eq!(machine.confirm(), Err(ConfirmError::NotConfirming));
    }

    #[test]
    fn newer_request_replaces_the_outstanding_one() {
        let mut alerts = AlertBoard::default();
        let mut machine = SafeDeletion::default();
        let first = machine.request(ResourceDescriptor::named("s1"));
        let second = machine.request(ResourceDescriptor::named("s2"));
        assert!(second > first);

        let stale = Related {
            instances: vec!["old".to_string()],
        };
        assert!(!machine.blockers_loaded(first, Ok(stale), &mut alerts));
        assert!(matches!(machine.state(), DeletionState::Checking { ticket, .. } if *ticket == second));

        assert!(machine.blockers_loaded(second, Ok(Related::default()), &mut alerts));
        let pending = machine.pending().expect("confirming");
        assert_eq!(pending.target.name, "s2");
        assert!(pending.blockers.is_empty());
    }

    #[test]
    fn failed_lookup_still_reaches_confirmation() {
        let mut alerts = AlertBoard::default();
        let mut machine = SafeDeletion::default();
        let t = machine.request(ResourceDescriptor::named("s1"));
        assert!(machine.blockers_loaded(t, Err("lookup failed".to_string()), &mut alerts));
        assert!(machine.pending().expect("confirming").blockers.is_empty());
        assert_eq!(
            alerts.latest().map(|a| a.message.as_str()),
            Some("lookup failed")
        );
    }

    #[test]
    fn late_delete_result_does_not_reset_a_newer_attempt() {
        let mut alerts = AlertBoard::default();
        let mut machine = SafeDeletion::default();
        let t1 = machine.request(ResourceDescriptor::named("s1"));
        machine.blockers_loaded(t1, Ok(Related::default()), &mut alerts);
        let (ticket, _) = machine.confirm().expect("confirm");

        let t2 = machine.request(ResourceDescriptor::named("s2"));
        let outcome = machine.deletion_finished(ticket, Ok("deleted s1".to_string()), &mut alerts);
        assert!(outcome.needs_refresh());
        assert!(matches!(machine.state(), DeletionState::Checking { ticket, .. } if *ticket == t2));
    }

    #[tokio::test]
    async fn blocked_reports_the_refusal_before_confirming() {
        let backend = FakeBackend::new(&["instance-a"], Ok("deleted"));
        let mut alerts = AlertBoard::default();

        let mut advisory = SafeDeletion::default();
        advisory
            .begin(&backend, ResourceDescriptor::named("s1"), &mut alerts)
            .await;
        assert_eq!(advisory.blocked(), None);

        let mut enforced = SafeDeletion::new(BlockerPolicy::Enforce);
        assert_eq!(enforced.blocked(), None);
        enforced
            .begin(&backend, ResourceDescriptor::named("s1"), &mut alerts)
            .await;
        assert_eq!(
            enforced.blocked(),
            Some(ConfirmError::Blocked {
                name: "s1".to_string(),
                blockers: vec!["instance-a".to_string()],
            })
        );
        // Asking does not move the machine.
        assert!(enforced.pending().is_some());
        assert!(backend.removed().is_empty());
    }
