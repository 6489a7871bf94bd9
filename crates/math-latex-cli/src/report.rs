use std::ops::Range;

use ariadne::{Label, Report, ReportKind, Source};

/// Renders a TOML error as an [`ariadne`] report pointing at the offending text.
///
/// Errors without a location are attached to the start of the file.
pub fn toml_error_report(
    err: &toml::de::Error,
    source_name: &str,
    source: &str,
    with_color: bool,
) -> String {
    let span: Range<usize> = err.span().unwrap_or(0..0);
    let mut config = ariadne::Config::default().with_index_type(ariadne::IndexType::Byte);
    if !with_color {
        config = config.with_color(false);
    }
    let report = Report::build(ReportKind::Error, (source_name, span.start..span.start))
        .with_config(config)
        .with_message("invalid TOML input")
        .with_label(Label::new((source_name, span)).with_message(err.message()))
        .finish();
    let mut buf = Vec::new();
    if report
        .write((source_name, Source::from(source)), &mut buf)
        .is_err()
    {
        return err.to_string();
    }
    String::from_utf8(buf).unwrap_or_else(|_| err.to_string())
}
