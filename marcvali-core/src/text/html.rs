//! Markup-aware walker
//!
//! A single left-to-right pass over the document. Markup is copied through
//! verbatim and only the text between tags reaches the callback, so nothing
//! inside a tag, comment or opaque element is ever rewritten.

/// Elements whose content is copied verbatim
pub const OPAQUE_TAGS: [&str; 5] = ["script", "style", "code", "pre", "textarea"];

/// Rewrite the text nodes of an HTML fragment with `text`
pub fn walk_html<F>(html: &str, mut text: F) -> String
where
    F: FnMut(&str) -> String,
{
    // ASCII lowercasing keeps byte offsets aligned with `html`
    let lower = html.to_ascii_lowercase();
    let mut output = String::with_capacity(html.len() + html.len() / 4);
    let mut text_start = 0;
    let mut pos = 0;

    while let Some(found) = html[pos..].find('<') {
        let lt = pos + found;

        let Some(end) = markup_end(html, lt) else {
            // a stray '<' is ordinary text
            pos = lt + 1;
            continue;
        };

        flush(&mut output, &html[text_start..lt], &mut text);
        output.push_str(&html[lt..end]);
        pos = end;

        if let Some(name) = opaque_element(&html[lt..end]) {
            if let Some(close_end) = closing_tag_end(&lower, end, name) {
                output.push_str(&html[end..close_end]);
                pos = close_end;
            }
        }

        text_start = pos;
    }

    flush(&mut output, &html[text_start..], &mut text);
    output
}

fn flush<F>(output: &mut String, span: &str, text: &mut F)
where
    F: FnMut(&str) -> String,
{
    if !span.is_empty() {
        output.push_str(&text(span));
    }
}

/// End (exclusive) of the markup starting at `lt`, if it is markup at all
fn markup_end(html: &str, lt: usize) -> Option<usize> {
    let rest = &html[lt..];

    if let Some(body) = rest.strip_prefix("<!--") {
        // an unterminated comment swallows the rest of the document
        return Some(match body.find("-->") {
            Some(end) => lt + 4 + end + 3,
            None => html.len(),
        });
    }

    let next = rest[1..].chars().next()?;
    if !(next.is_ascii_alphabetic() || matches!(next, '/' | '!' | '?')) {
        return None;
    }

    rest.find('>').map(|gt| lt + gt + 1)
}

/// Element name when `tag` opens one of the opaque elements
fn opaque_element(tag: &str) -> Option<&'static str> {
    if tag.ends_with("/>") {
        return None;
    }

    let name: String = tag[1..]
        .chars()
        .take_while(|ch| ch.is_ascii_alphanumeric() || *ch == '-')
        .map(|ch| ch.to_ascii_lowercase())
        .collect();

    OPAQUE_TAGS.iter().copied().find(|opaque| *opaque == name)
}

/// End (exclusive) of the first `</name>` at or after `from`
fn closing_tag_end(lower: &str, from: usize, name: &str) -> Option<usize> {
    let needle = format!("</{name}");

    for (offset, _) in lower[from..].match_indices(&needle) {
        let after = from + offset + needle.len();
        let terminated = lower[after..]
            .chars()
            .next()
            .is_some_and(|ch| ch == '>' || ch == '/' || ch.is_ascii_whitespace());
        if terminated {
            return lower[after..].find('>').map(|gt| after + gt + 1);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bracket(html: &str) -> String {
        walk_html(html, |text| format!("[{text}]"))
    }

    #[test]
    fn test_text_between_tags() {
        assert_eq!(bracket("<p>ერთი</p> ორი"), "<p>[ერთი]</p>[ ორი]");
    }

    #[test]
    fn test_attributes_untouched() {
        assert_eq!(
            bracket(r#"<a title="საქართველო">ტექსტი</a>"#),
            r#"<a title="საქართველო">[ტექსტი]</a>"#
        );
    }

    #[test]
    fn test_opaque_elements() {
        assert_eq!(
            bracket("<script>var x = 1 < 2;</script>ა"),
            "<script>var x = 1 < 2;</script>[ა]"
        );
        assert_eq!(
            bracket("<PRE class=x>სიტყვა</Pre >ბ"),
            "<PRE class=x>სიტყვა</Pre >[ბ]"
        );
    }

    #[test]
    fn test_opaque_name_must_match_exactly() {
        // <precode> is not <pre>
        assert_eq!(bracket("<precode>ა</precode>"), "<precode>[ა]</precode>");
        // </codex> does not close <code>
        assert_eq!(
            bracket("<code>ა</codex>ბ</code>გ"),
            "<code>ა</codex>ბ</code>[გ]"
        );
    }

    #[test]
    fn test_unclosed_opaque_tag() {
        assert_eq!(bracket("<code>ანბანი"), "<code>[ანბანი]");
    }

    #[test]
    fn test_comments_and_declarations() {
        assert_eq!(
            bracket("<!DOCTYPE html><!-- <p>ა</p> -->ბ<?xml x?>"),
            "<!DOCTYPE html><!-- <p>ა</p> -->[ბ]<?xml x?>"
        );
        assert_eq!(bracket("ა<!-- open"), "[ა]<!-- open");
    }

    #[test]
    fn test_stray_angle_brackets_are_text() {
        assert_eq!(bracket("1 < 2 და 3 > 2"), "[1 < 2 და 3 > 2]");
        assert_eq!(bracket("<ა>"), "[<ა>]");
        assert_eq!(bracket("ა <b"), "[ა <b]");
    }

    #[test]
    fn test_placeholder_like_text_survives() {
        let html = "<p>__MARCVALI_0__</p>";
        assert_eq!(walk_html(html, str::to_string), html);
    }
}
