use comrak::plugins::syntect::SyntectAdapter;
use comrak::{ComrakOptions, ComrakPlugins, markdown_to_html_with_plugins};
use once_cell::sync::Lazy;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

// Raw HTML in replies is never rendered; comrak replaces it with a comment.
static MARKDOWN_OPTIONS: Lazy<ComrakOptions> = Lazy::new(|| {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.tasklist = true;
    options.extension.autolink = true;
    options.render.unsafe_ = false;
    options
});

// Loading the syntax and theme sets is expensive; build the adapter once.
static SYNTAX_ADAPTER: Lazy<SyntectAdapter> =
    Lazy::new(|| SyntectAdapter::new(Some("base16-ocean.dark")));

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] = format_description!(
    "[hour repr:12 padding:none]:[minute padding:zero]:[second padding:zero] [period case:upper]"
);

pub fn markdown_to_html(md: &str) -> String {
    let mut plugins = ComrakPlugins::default();
    plugins.render.codefence_syntax_highlighter = Some(&*SYNTAX_ADAPTER);
    markdown_to_html_with_plugins(md, &MARKDOWN_OPTIONS, &plugins)
}

/// Time of day in the local offset when it can be determined, UTC otherwise.
pub fn format_message_timestamp(timestamp: OffsetDateTime) -> String {
    let mut datetime = timestamp;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime
        .format(MESSAGE_TIME_FORMAT)
        .unwrap_or_else(|_| datetime.time().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn renders_headings_emphasis_and_lists() {
        let html = markdown_to_html("# Result\n\n**valid** until\n\n- one\n- two\n");
        assert!(html.contains("<h1>Result</h1>"));
        assert!(html.contains("<strong>valid</strong>"));
        assert!(html.contains("<li>one</li>"));
    }

    #[test]
    fn raw_html_is_not_passed_through() {
        let html = markdown_to_html("<script>alert(1)</script>\n\nhello <img src=x onerror=alert(1)>");
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<img"));
        assert!(html.contains("hello"));
    }

    #[test]
    fn code_fences_share_one_highlighter() {
        let source = "```rust\nlet x = 1;\n```\n";
        let first = markdown_to_html(source);
        assert!(first.contains("<pre"));
        assert!(Lazy::get(&SYNTAX_ADAPTER).is_some());
        assert_eq!(first, markdown_to_html(source));
    }

    #[test]
    fn timestamp_is_a_time_of_day() {
        let formatted = format_message_timestamp(datetime!(2024-05-01 13:04:05 UTC));
        assert!(formatted.ends_with(" AM") || formatted.ends_with(" PM"));
        assert!(formatted.contains(":05 "));
    }
}
