    use super::*;

    #[test]
    fn edits_happen_at_the_cursor() {
        let mut input = Input::default();
        for c in "stram".chars() {
            input.insert_char(c);
        }
        input.move_left();
        input.move_left();
        input.insert_char('e');
        assert_eq!(input.buf, "stream");

        input.move_right();
        input.backspace();
        assert_eq!(input.buf, "strem");
        input.delete();
        assert_eq!(input.buf, "stre");
    }

    #[test]
    fn multibyte_text_is_edited_by_character() {
        let mut input = Input::default();
        input.set("поток".to_string());
        assert_eq!(input.cursor, 5);
        input.backspace();
        assert_eq!(input.buf, "пото");
        input.move_left();
        input.insert_char('ш');
        assert_eq!(input.buf, "потшо");
    }

    #[test]
    fn blank_values_are_none() {
        let mut input = Input::default();
        input.set("   ".to_string());
        assert_eq!(input.value(), None);
        input.set(" x ".to_string());
        assert_eq!(input.value().as_deref(), Some("x"));
    }
