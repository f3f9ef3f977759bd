    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn types() -> Vec<String> {
        vec!["stream.apache-kafka".to_string(), T_STREAM_TYPE.to_string()]
    }

    fn services() -> Vec<Service> {
        ["kafka-svc", "tstream-svc"]
            .iter()
            .map(|n| Service {
                name: n.to_string(),
                service_type: String::new(),
                description: None,
                provider: None,
                extra: serde_json::Map::new(),
            })
            .collect()
    }

    fn type_text(form: &mut CreateForm, tags: &mut TagBuffer, text: &str) {
        for c in text.chars() {
            form.handle_key(key(KeyCode::Char(c)), tags, &types(), &services());
        }
    }

    fn tab_to(form: &mut CreateForm, tags: &mut TagBuffer, field: FormField) {
        while form.focused(&types()) != field {
            form.handle_key(key(KeyCode::Tab), tags, &types(), &services());
        }
    }

    #[test]
    fn generator_fields_appear_only_for_tstreams() {
        let mut form = CreateForm::default();
        assert!(!form.fields(&types()).contains(&FormField::InstanceCount));
        form.type_idx = 1;
        assert!(form.fields(&types()).contains(&FormField::InstanceCount));
    }

    #[test]
    fn tags_field_uses_tag_entry_keys_and_commits_on_leave() {
        let mut form = CreateForm::default();
        let mut tags = TagBuffer::new();
        tab_to(&mut form, &mut tags, FormField::Tags);

        type_text(&mut form, &mut tags, "raw eu");
        assert_eq!(tags.tags(), ["raw"]);
        assert_eq!(tags.partial(), "eu");

        form.handle_key(key(KeyCode::Tab), &mut tags, &types(), &services());
        assert_eq!(tags.tags(), ["raw", "eu"]);
        assert_eq!(tags.partial(), "");
    }

    #[test]
    fn focus_request_jumps_to_tags() {
        let mut form = CreateForm::default();
        let mut tags = TagBuffer::new();
        form.handle_key(
            KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL),
            &mut tags,
            &types(),
            &services(),
        );
        assert_eq!(form.focused(&types()), FormField::Tags);
    }

    #[test]
    fn numeric_fields_ignore_letters() {
        let mut form = CreateForm::default();
        let mut tags = TagBuffer::new();
        tab_to(&mut form, &mut tags, FormField::Partitions);
        type_text(&mut form, &mut tags, "1x2");
        assert_eq!(form.partitions.buf, "12");
    }

    #[test]
    fn apply_fills_the_draft() {
        let mut form = CreateForm::default();
        let mut tags = TagBuffer::new();
        type_text(&mut form, &mut tags, "s1");
        form.handle_key(key(KeyCode::Tab), &mut tags, &types(), &services());
        form.handle_key(key(KeyCode::Right), &mut tags, &types(), &services());
        form.handle_key(key(KeyCode::Tab), &mut tags, &types(), &services());
        form.handle_key(key(KeyCode::Right), &mut tags, &types(), &services());

        let mut draft = Stream::draft();
        form.apply_to(&mut draft, &types(), &services())
            .expect("valid form");
        assert_eq!(draft.name, "s1");
        assert_eq!(draft.stream_type, T_STREAM_TYPE);
        assert_eq!(draft.service, "tstream-svc");
        assert_eq!(draft.partitions, None);
        assert_eq!(
            draft.generator.map(|g| g.generator_type),
            Some("local".to_string())
        );
    }

    #[test]
    fn apply_requires_a_name() {
        let form = CreateForm::default();
        let mut draft = Stream::draft();
        assert_eq!(
            form.apply_to(&mut draft, &types(), &services()),
            Err("Stream name is required".to_string())
        );
    }

    #[test]
    fn escape_and_enter_are_reported() {
        let mut form = CreateForm::default();
        let mut tags = TagBuffer::new();
        assert_eq!(
            form.handle_key(key(KeyCode::Enter), &mut tags, &types(), &services()),
            FormAction::Submit
        );
        assert_eq!(
            form.handle_key(key(KeyCode::Esc), &mut tags, &types(), &services()),
            FormAction::Close
        );
    }
