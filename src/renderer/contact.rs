//! Contact block under the name heading

use crate::record::Basics;

use super::{ContactStyle, HtmlBuilder};

/// Separator between contact items on one line
pub const CONTACT_SEPARATOR: &str = " ⋄ ";

/// Lines of the contact block, without markup
///
/// With [`ContactStyle::Split`] the website never shares a line with email or
/// GitHub. Empty items are dropped, and a line with no items is omitted.
pub fn contact_lines(basics: &Basics, style: ContactStyle) -> Vec<String> {
    let email = basics.email();
    let github = basics.resolved_github();
    let website = basics.website();

    let groups: Vec<Vec<&str>> = match style {
        ContactStyle::Split => vec![vec![email, github], vec![website]],
        ContactStyle::Inline => vec![vec![email, website, github]],
    };

    groups
        .into_iter()
        .map(|group| {
            group
                .into_iter()
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(CONTACT_SEPARATOR)
        })
        .filter(|line| !line.is_empty())
        .collect()
}

/// Render the `contact-info` block; the wrapper is emitted even when empty
pub fn render_contact(basics: &Basics, style: ContactStyle, builder: &mut HtmlBuilder) {
    builder.open("div", Some("contact-info"));
    for line in contact_lines(basics, style) {
        builder.element("p", None, &line);
    }
    builder.close("div");
}
