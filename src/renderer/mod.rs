//! HTML renderer for resume records
//!
//! Each section is rendered by a pure function appending lines to an
//! [`HtmlBuilder`]; the document is joined once at the end, with the CSS
//! class names the stylesheet is expected to target.

mod builder;
pub mod config;
pub mod contact;
pub mod html;
pub mod sections;
pub mod work;

pub use builder::HtmlBuilder;
pub use config::{ConfigError, ContactStyle, EducationDates, HtmlConfig};
pub use html::{render_html, render_html_with_config};
