use crate::{Diagnostic, Related, Report, Severity};

struct Redeclared {
    name: &'static str,
    line: usize,
    first: usize,
}

impl Report for Redeclared {
    fn report(&self) -> Diagnostic {
        Diagnostic::error(format!("`{}` is already declared", self.name))
            .with_line(self.line)
            .with_related(self.first, "previously declared here")
            .with_help("rename one of the declarations")
    }
}

#[test]
fn builder_methods_fill_fields() {
    let diagnostic = Redeclared { name: "f", line: 4, first: 3 }.report();

    assert_eq!(diagnostic.severity, Severity::Error);
    assert_eq!(diagnostic.line, Some(4));
    assert_eq!(diagnostic.related, [Related::new(
        3,
        "previously declared here".to_owned()
    )]);
    assert_eq!(
        diagnostic.help_message.as_deref(),
        Some("rename one of the declarations")
    );
    assert!(diagnostic.is_error());
}

#[test]
fn display_contains_every_part() {
    let rendered =
        Redeclared { name: "f", line: 4, first: 3 }.report().to_string();

    assert!(rendered.contains("[error]:"));
    assert!(rendered.contains("`f` is already declared"));
    assert!(rendered.contains("line 4"));
    assert!(rendered.contains("previously declared here"));
    assert!(rendered.contains("line 3"));
    assert!(rendered.contains("rename one of the declarations"));
}

#[test]
fn boxed_reports_delegate() {
    let boxed: Box<dyn Report> =
        Box::new(Redeclared { name: "x", line: 1, first: 1 });

    assert_eq!(boxed.report().message, "`x` is already declared");
}

#[test]
fn warning_has_no_location_by_default() {
    let diagnostic = Diagnostic::warning("scope left open");

    assert_eq!(diagnostic.line, None);
    assert!(!diagnostic.is_error());
    assert!(diagnostic.to_string().contains("[warning]:"));
}
