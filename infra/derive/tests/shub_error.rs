#[test]
fn shub_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/shub_error_pass.rs");
    t.pass("tests/ui/shub_error_qualified_context.rs");
}
