    use super::*;
    use crossterm::event::KeyModifiers;

    use crate::config::ConsoleConfig;
    use crate::model::Stream;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn offline_app() -> App {
        let config = ConsoleConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            ..ConsoleConfig::default()
        };
        let mut app = App::new(TuiRunOptions { config }).expect("app");
        app.controller.types = vec!["stream.apache-kafka".to_string()];
        app
    }

    fn type_tag(app: &mut App, text: &str) {
        modal::handle_modal_key(app, KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL));
        for c in text.chars() {
            modal::handle_modal_key(app, key(KeyCode::Char(c)));
        }
        modal::handle_modal_key(app, key(KeyCode::Char(' ')));
    }

    #[test]
    fn cancelling_the_create_form_discards_typed_tags() {
        let mut app = offline_app();
        app.open_create();
        type_tag(&mut app, "foo");
        assert_eq!(app.controller.tags.tags(), ["foo"]);

        modal::handle_modal_key(&mut app, key(KeyCode::Esc));
        assert!(app.modal.is_none());
        assert!(app.controller.tags.tags().is_empty());
        assert_eq!(app.controller.tags.partial(), "");
    }

    #[test]
    fn reopening_the_create_form_starts_from_a_blank_draft() {
        let mut app = offline_app();
        app.open_create();
        type_tag(&mut app, "stale");
        app.controller.draft.name = "half-done".to_string();

        // Replaced without going through the close path.
        app.open_create();
        assert!(app.controller.tags.tags().is_empty());
        assert_eq!(app.controller.draft, Stream::draft());
    }

    #[test]
    fn closing_a_viewer_keeps_the_draft() {
        let mut app = offline_app();
        app.controller.tags.type_char('x');
        app.modal = Some(Modal::viewer("Service", vec!["name: s".to_string()]));
        modal::handle_modal_key(&mut app, key(KeyCode::Esc));
        assert!(app.modal.is_none());
        assert_eq!(app.controller.tags.partial(), "x");
    }
