/*! Lang-8 page parsing

A Lang-8 journal entry looks like (trimmed down):

```html
<ul>
  <li class='speaking' data-title='Native language' rel='tooltip' title='Native language'>Spanish</li>
</ul>
<div id='body_show_ori'>
  Today I went to the <b>market</b>.
  I bought many things.
</div>
```

[PageParser] recovers the native language (`Spanish`) and the normalized entry text
(`Today I went to the market . I bought many things.` keeps text node boundaries as single spaces).
!*/
use itertools::Itertools;
use scraper::{Html, Selector};

use crate::error::Error;

/// Compiled selectors for the two parts of a page we care about.
pub struct PageParser {
    speaking: Selector,
    body: Selector,
}

impl PageParser {
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            speaking: compile("li.speaking")?,
            body: compile("div#body_show_ori")?,
        })
    }

    /// Parse a page, returning the native language (if any) and the entry text.
    pub fn parse(&self, html: &str) -> (Option<String>, String) {
        let page = Html::parse_document(html);
        (self.native_language(&page), self.body(&page))
    }

    /// Text of the first `<li>` carrying a `speaking` class token, trimmed.
    fn native_language(&self, page: &Html) -> Option<String> {
        page.select(&self.speaking)
            .next()
            .map(|li| li.text().collect::<String>().trim().to_string())
    }

    /// Text of the original post body, whitespace normalized.
    /// Missing container means empty text.
    fn body(&self, page: &Html) -> String {
        page.select(&self.body)
            .next()
            .map(|div| normalize_whitespace(&div.text().join(" ")))
            .unwrap_or_default()
    }
}

fn compile(selector: &str) -> Result<Selector, Error> {
    Selector::parse(selector).map_err(|e| Error::Selector(format!("{}: {:?}", selector, e)))
}

/// Collapse every whitespace run (newlines included) to a single space and trim ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().join(" ")
}

#[cfg(test)]
mod tests {
    use super::{normalize_whitespace, PageParser};

    #[test]
    fn minimal_page() {
        let p = PageParser::new().unwrap();
        let html = r#"<li class="speaking">Spanish</li><div id="body_show_ori">Hello world.</div>"#;
        let (l1, text) = p.parse(html);
        assert_eq!(l1, Some("Spanish".to_string()));
        assert_eq!(text, "Hello world.");
    }

    #[test]
    fn whitespace_is_collapsed() {
        let p = PageParser::new().unwrap();
        let html = r#"<li class="speaking">French</li><div id="body_show_ori">   Many    white    space  </div>"#;
        let (_, text) = p.parse(html);
        assert_eq!(text, "Many white space");
    }

    #[test]
    fn newlines_and_nested_tags() {
        let p = PageParser::new().unwrap();
        let html = "<html><body><div id='body_show_ori'>\n  Today I went\n to the <b>market</b>.<br/>\n\n I bought  things.\n</div></body></html>";
        let (l1, text) = p.parse(html);
        assert_eq!(l1, None);
        assert_eq!(text, "Today I went to the market . I bought things.");
    }

    #[test]
    fn label_is_trimmed_and_first_wins() {
        let p = PageParser::new().unwrap();
        let html = r#"<ul>
            <li class="studying">English</li>
            <li class='speaking' data-title='Native language' rel='tooltip'>
                Japanese
            </li>
            <li class="speaking">Korean</li>
        </ul>"#;
        let (l1, text) = p.parse(html);
        assert_eq!(l1, Some("Japanese".to_string()));
        assert_eq!(text, "");
    }

    #[test]
    fn class_token_must_match_exactly() {
        let p = PageParser::new().unwrap();
        let html = r#"<li class="nonspeaking">French</li><li class="speaking-lang">French</li>"#;
        let (l1, _) = p.parse(html);
        assert_eq!(l1, None);

        let html = r#"<li class="lang speaking">French</li>"#;
        let (l1, _) = p.parse(html);
        assert_eq!(l1, Some("French".to_string()));
    }

    #[test]
    fn body_must_be_a_div() {
        let p = PageParser::new().unwrap();
        let html = r#"<span id="body_show_ori">not here</span>"#;
        let (_, text) = p.parse(html);
        assert_eq!(text, "");
    }

    #[test]
    fn empty_page() {
        let p = PageParser::new().unwrap();
        assert_eq!(p.parse(""), (None, String::new()));
    }

    #[test]
    fn normalize() {
        assert_eq!(normalize_whitespace(" a\n\tb  c "), "a b c");
        assert_eq!(normalize_whitespace("   "), "");
    }
}
