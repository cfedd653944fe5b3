use yew::prelude::*;

/// A piece of rendered chat message content.
#[derive(Debug, PartialEq, Eq)]
pub enum Fragment<'a> {
    Text(&'a str),
    Link(&'a str),
    LineBreak,
}

/// Splits message content into plain text, bare http(s) links and line
/// breaks. Presentation only; the stored transcript is untouched.
pub fn message_fragments(content: &str) -> Vec<Fragment<'_>> {
    let mut fragments = Vec::new();
    let mut rest = content;

    while !rest.is_empty() {
        let next_url = ["https://", "http://"]
            .iter()
            .filter_map(|scheme| rest.find(scheme))
            .min();

        match next_url {
            Some(start) => {
                if start > 0 {
                    push_text(&mut fragments, &rest[..start]);
                }
                let tail = &rest[start..];
                let end = tail.find(char::is_whitespace).unwrap_or(tail.len());
                fragments.push(Fragment::Link(&tail[..end]));
                rest = &tail[end..];
            }
            None => {
                push_text(&mut fragments, rest);
                rest = "";
            }
        }
    }

    fragments
}

fn push_text<'a>(fragments: &mut Vec<Fragment<'a>>, text: &'a str) {
    let mut lines = text.split('\n');
    if let Some(first) = lines.next() {
        if !first.is_empty() {
            fragments.push(Fragment::Text(first));
        }
        for line in lines {
            fragments.push(Fragment::LineBreak);
            if !line.is_empty() {
                fragments.push(Fragment::Text(line));
            }
        }
    }
}

/// Renders fragmented message content; links open in a new tab.
pub fn render_message_content(content: &str) -> Html {
    message_fragments(content)
        .into_iter()
        .map(|fragment| match fragment {
            Fragment::Text(text) => html! { <span>{ text }</span> },
            Fragment::Link(url) => html! {
                <a href={url.to_owned()} target="_blank" rel="noopener noreferrer">{ url }</a>
            },
            Fragment::LineBreak => html! { <br/> },
        })
        .collect::<Html>()
}

/// Current wall-clock time as an ISO-8601 string.
pub fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

/// Formats an ISO-8601 stamp as a local time for display.
pub fn local_time(timestamp: &str) -> String {
    js_sys::Date::new(&timestamp.into())
        .to_locale_time_string("en-US")
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_one_fragment() {
        assert_eq!(
            message_fragments("just some advice"),
            vec![Fragment::Text("just some advice")]
        );
    }

    #[test]
    fn bare_urls_become_links() {
        assert_eq!(
            message_fragments("see https://example.org/tb for details"),
            vec![
                Fragment::Text("see "),
                Fragment::Link("https://example.org/tb"),
                Fragment::Text(" for details"),
            ]
        );
    }

    #[test]
    fn newlines_become_line_breaks() {
        assert_eq!(
            message_fragments("first\nsecond\n\nthird"),
            vec![
                Fragment::Text("first"),
                Fragment::LineBreak,
                Fragment::Text("second"),
                Fragment::LineBreak,
                Fragment::LineBreak,
                Fragment::Text("third"),
            ]
        );
    }

    #[test]
    fn url_ends_at_whitespace_including_newline() {
        assert_eq!(
            message_fragments("http://a.example\nnext line"),
            vec![
                Fragment::Link("http://a.example"),
                Fragment::LineBreak,
                Fragment::Text("next line"),
            ]
        );
    }

    #[test]
    fn multiple_urls_are_all_linkified() {
        let fragments = message_fragments("https://a.example and http://b.example");
        assert_eq!(
            fragments,
            vec![
                Fragment::Link("https://a.example"),
                Fragment::Text(" and "),
                Fragment::Link("http://b.example"),
            ]
        );
    }
}
