/// Fixed style block installed into the shadow subtree at configuration
/// time. Class names are a stable contract for styling and testing.
pub const CARD_STYLE: &str = "
.container {
    padding: 10px;
    font-size: 130%;
    line-height: 1.5em;
}
.stop {
    opacity: 0.6;
    font-weight: 400;
    width: 100%;
    text-align: left;
    padding: 10px 10px 5px 5px;
}
.departures {
    width: 100%;
    font-weight: 400;
    line-height: 1.5em;
    padding-bottom: 20px;
}
.departure {
    padding-top: 10px;
    display: flex;
    flex-direction: row;
    flex-wrap: nowrap;
    align-items: flex-start;
    gap: 20px;
}
.departure-cancelled {
    text-decoration: line-through;
    filter: grayscale(50%);
    padding-top: 10px;
    display: flex;
    flex-direction: row;
    flex-wrap: nowrap;
    align-items: flex-start;
    gap: 20px;
}
.line {
    min-width: 70px;
    text-align: right;
}
.line-icon {
    display: inline-block;
    border-radius: 20px;
    padding: 7px 10px 5px;
    font-size: 120%;
    font-weight: 700;
    line-height: 1em;
    color: #FFFFFF;
    text-align: center;
}
.direction {
    align-self: center;
    flex-grow: 1;
}
.time {
    align-self: flex-start;
    font-weight: 700;
    line-height: 2em;
    padding-right: 10px;
}
";

/// The card's isolated display subtree: a card element holding the fixed
/// style block and one content container whose inner HTML is replaced
/// wholesale on every render tick. Styles and markup in here never leak
/// into the host page and the host page never reaches in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowRoot {
    header: Option<String>,
    style: &'static str,
    content: String,
}

impl ShadowRoot {
    /// Fresh subtree with the style block installed and an empty container.
    pub fn new(header: Option<String>) -> Self {
        Self {
            header,
            style: CARD_STYLE,
            content: String::new(),
        }
    }

    /// Replaces the container's entire contents in one write.
    pub fn set_content(&mut self, html: String) {
        self.content = html;
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    /// Serializes the whole subtree, card element included.
    // TODO: quote characters in a configured title would break the header
    // attribute; fine as long as titles stay plain text.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        match &self.header {
            Some(title) => html.push_str(&format!("<ha-card header=\"{title}\">")),
            None => html.push_str("<ha-card>"),
        }
        html.push_str(&format!("<style>{}</style>", self.style));
        html.push_str(&format!(
            "<div id=\"container\" class=\"container\">{}</div>",
            self.content
        ));
        html.push_str("</ha-card>");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_covers_all_output_classes() {
        for class in [
            ".container",
            ".stop",
            ".departures",
            ".departure",
            ".departure-cancelled",
            ".line",
            ".line-icon",
            ".direction",
            ".time",
        ] {
            assert!(CARD_STYLE.contains(class), "style is missing {class}");
        }
    }

    #[test]
    fn test_fresh_subtree_has_empty_container() {
        let root = ShadowRoot::new(None);
        assert_eq!(root.content(), "");
        let html = root.to_html();
        assert!(html.starts_with("<ha-card><style>"));
        assert!(html.contains("<div id=\"container\" class=\"container\"></div>"));
    }

    #[test]
    fn test_title_becomes_header_attribute() {
        let root = ShadowRoot::new(Some("Nearby departures".to_string()));
        assert!(root.to_html().starts_with("<ha-card header=\"Nearby departures\">"));
    }

    #[test]
    fn test_set_content_replaces_wholesale() {
        let mut root = ShadowRoot::new(None);
        root.set_content("<div class=\"stop\">A</div>".to_string());
        root.set_content("<div class=\"stop\">B</div>".to_string());
        assert_eq!(root.content(), "<div class=\"stop\">B</div>");
    }
}
