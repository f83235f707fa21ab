//! Line-oriented HTML builder

/// Build an HTML document as an ordered list of lines
///
/// Nesting depth is tracked by [`open`](Self::open) and [`close`](Self::close);
/// every other line is indented two spaces per level. Text is inserted as
/// given, nothing is escaped.
#[derive(Debug, Default)]
pub struct HtmlBuilder {
    lines: Vec<String>,
    depth: usize,
}

impl HtmlBuilder {
    /// Create a new, empty builder
    pub fn new() -> Self {
        Self::default()
    }

    fn indent_str(&self) -> String {
        "  ".repeat(self.depth)
    }

    /// Add a line at the current depth
    pub fn line(&mut self, text: impl AsRef<str>) {
        let line = format!("{}{}", self.indent_str(), text.as_ref());
        self.lines.push(line);
    }

    /// Add text without indentation
    pub fn raw(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    /// Open a tag and nest subsequent lines inside it
    pub fn open(&mut self, tag: &str, class: Option<&str>) {
        self.line(start_tag(tag, class));
        self.depth += 1;
    }

    /// Close the innermost open tag
    pub fn close(&mut self, tag: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.line(format!("</{tag}>"));
    }

    /// Add a complete element on one line
    pub fn element(&mut self, tag: &str, class: Option<&str>, content: &str) {
        self.line(format!("{}{}</{}>", start_tag(tag, class), content, tag));
    }

    /// Add a `<span class="...">` element
    pub fn span(&mut self, class: &str, content: &str) {
        self.element("span", Some(class), content);
    }

    /// Add a `<ul>` with one `<li>` per item; an empty list still emits the `<ul>`
    pub fn list<S: AsRef<str>>(&mut self, class: &str, items: &[S]) {
        self.open("ul", Some(class));
        for item in items {
            self.element("li", None, item.as_ref());
        }
        self.close("ul");
    }

    #[cfg(test)]
    fn depth(&self) -> usize {
        self.depth
    }

    /// Join all lines into the final document (no trailing newline)
    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}

fn start_tag(tag: &str, class: Option<&str>) -> String {
    match class {
        Some(class) => format!(r#"<{tag} class="{class}">"#),
        None => format!("<{tag}>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nesting_indents() {
        let mut b = HtmlBuilder::new();
        b.open("div", Some("job"));
        b.span("job-company", "Acme");
        b.close("div");
        assert_eq!(b.depth(), 0);
        assert_eq!(
            b.build(),
            "<div class=\"job\">\n  <span class=\"job-company\">Acme</span>\n</div>"
        );
    }

    #[test]
    fn test_raw_ignores_depth() {
        let mut b = HtmlBuilder::new();
        b.open("style", None);
        b.raw("body {}\n  p {}");
        b.close("style");
        assert_eq!(b.build(), "<style>\nbody {}\n  p {}\n</style>");
    }

    #[test]
    fn test_list_items_verbatim() {
        let mut b = HtmlBuilder::new();
        b.list("job-details", &["<b>bold</b> & more", "second"]);
        assert_eq!(
            b.build(),
            "<ul class=\"job-details\">\n  <li><b>bold</b> & more</li>\n  <li>second</li>\n</ul>"
        );
    }

    #[test]
    fn test_empty_list() {
        let mut b = HtmlBuilder::new();
        b.list::<&str>("project-details", &[]);
        assert_eq!(b.build(), "<ul class=\"project-details\">\n</ul>");
    }

    #[test]
    fn test_close_never_underflows() {
        let mut b = HtmlBuilder::new();
        b.close("body");
        assert_eq!(b.depth(), 0);
        assert_eq!(b.build(), "</body>");
    }
}
