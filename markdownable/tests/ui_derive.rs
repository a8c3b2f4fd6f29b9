mod markdown {
    #[test]
    fn accepts_renamed_and_annotated_fields() {
        let t = trybuild::TestCases::new();
        t.pass("tests/ui/markdown_renamed_fields_ok.rs");
    }

    #[test]
    fn accepts_generic_and_empty_enums() {
        let t = trybuild::TestCases::new();
        t.pass("tests/ui/markdown_generic_enum_ok.rs");
    }
}

mod custom_markdown {
    #[test]
    fn accepts_generic_custom_encoder() {
        let t = trybuild::TestCases::new();
        t.pass("tests/ui/custom_markdown_generic_ok.rs");
    }
}
