//! Inline tokenization.
//!
//! Text is split into [`Span`]s by a fixed pipeline of passes:
//! images, links, bold (`**`), italic (`_`), then code (`` ` ``). Each pass only
//! looks at spans that are still `Plain`; anything typed by an earlier pass is
//! passed through untouched, so link and image text is never formatted further.

use crate::span::{Span, SpanKind};
use once_cell::sync::Lazy;
use regex::Regex;

static IMAGE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("image pattern is valid")
});

static LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("link pattern is valid"));

type Pass = fn(Vec<Span>) -> Vec<Span>;

/// Pass order matters: images must be taken before links (`![a](b)` contains `[a](b)`),
/// and both before the delimiter passes so URLs keep their `_` characters.
const PASSES: [Pass; 5] = [
    split_images,
    split_links,
    split_bold,
    split_italic,
    split_code,
];

/// Splits `text` into typed spans.
///
/// Never fails: unmatched delimiters stay in the output as plain text.
pub fn tokenize(text: &str) -> Vec<Span> {
    PASSES
        .iter()
        .fold(vec![Span::plain(text)], |spans, pass| pass(spans))
}

pub fn split_images(spans: Vec<Span>) -> Vec<Span> {
    map_plain(spans, |text, out| {
        let mut last = 0;
        for caps in IMAGE_PATTERN.captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            push_plain(out, &text[last..whole.start()]);
            out.push(Span::image(&caps[1], &caps[2]));
            last = whole.end();
        }
        push_plain(out, &text[last..]);
    })
}

pub fn split_links(spans: Vec<Span>) -> Vec<Span> {
    map_plain(spans, |text, out| {
        let mut last = 0;
        let mut pos = 0;
        while let Some(caps) = LINK_PATTERN.captures_at(text, pos) {
            let Some(whole) = caps.get(0) else {
                break;
            };
            if text[..whole.start()].ends_with('!') {
                // Image syntax, not a link; retry past the opening bracket.
                pos = whole.start() + 1;
                continue;
            }
            push_plain(out, &text[last..whole.start()]);
            out.push(Span::link(&caps[1], &caps[2]));
            last = whole.end();
            pos = last;
        }
        push_plain(out, &text[last..]);
    })
}

pub fn split_bold(spans: Vec<Span>) -> Vec<Span> {
    split_delimiter(spans, "**", SpanKind::Bold)
}

pub fn split_italic(spans: Vec<Span>) -> Vec<Span> {
    split_delimiter(spans, "_", SpanKind::Italic)
}

pub fn split_code(spans: Vec<Span>) -> Vec<Span> {
    split_delimiter(spans, "`", SpanKind::Code)
}

/// Turns every `marker`-enclosed run of plain text into a span of `kind`.
///
/// Pairs are matched left to right: an opener takes the next marker after it as its
/// closer. An opener without a closer leaves the rest of the text, marker included,
/// as one trailing plain span. Pairs that enclose nothing produce no span.
pub fn split_delimiter(spans: Vec<Span>, marker: &str, kind: SpanKind) -> Vec<Span> {
    map_plain(spans, |text, out| {
        let mut rest = text;
        while let Some(open) = rest.find(marker) {
            let after = &rest[open + marker.len()..];
            push_plain(out, &rest[..open]);
            let Some(close) = after.find(marker) else {
                rest = &rest[open..];
                break;
            };
            let inner = &after[..close];
            if !inner.is_empty() {
                out.push(Span::new(inner, kind));
            }
            rest = &after[close + marker.len()..];
        }
        push_plain(out, rest);
    })
}

fn map_plain(spans: Vec<Span>, mut split: impl FnMut(&str, &mut Vec<Span>)) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if span.is_plain() {
            split(&span.text, &mut out);
        } else {
            out.push(span);
        }
    }
    out
}

fn push_plain(out: &mut Vec<Span>, text: &str) {
    if !text.is_empty() {
        out.push(Span::plain(text));
    }
}

#[cfg(test)]
mod tests {
    use super::{split_delimiter, split_images, split_links, tokenize};
    use crate::span::{Span, SpanKind};

    #[test]
    fn splits_code_delimiter() {
        let spans = split_delimiter(
            vec![Span::plain("This is text with a `code block` word")],
            "`",
            SpanKind::Code,
        );
        assert_eq!(
            spans,
            vec![
                Span::plain("This is text with a "),
                Span::new("code block", SpanKind::Code),
                Span::plain(" word"),
            ]
        );
    }

    #[test]
    fn splits_multiple_bold_pairs() {
        let spans = split_delimiter(
            vec![Span::plain("This is text with a **bolded** word and **another**")],
            "**",
            SpanKind::Bold,
        );
        assert_eq!(
            spans,
            vec![
                Span::plain("This is text with a "),
                Span::new("bolded", SpanKind::Bold),
                Span::plain(" word and "),
                Span::new("another", SpanKind::Bold),
            ]
        );
    }

    #[test]
    fn unmatched_delimiter_becomes_trailing_plain_span() {
        let spans = split_delimiter(
            vec![Span::plain("a **b** c **d")],
            "**",
            SpanKind::Bold,
        );
        assert_eq!(
            spans,
            vec![
                Span::plain("a "),
                Span::new("b", SpanKind::Bold),
                Span::plain(" c "),
                Span::plain("**d"),
            ]
        );
    }

    #[test]
    fn empty_pair_produces_no_span() {
        let spans = split_delimiter(vec![Span::plain("a****b")], "**", SpanKind::Bold);
        assert_eq!(spans, vec![Span::plain("a"), Span::plain("b")]);
    }

    #[test]
    fn typed_spans_are_left_alone() {
        let spans = split_delimiter(
            vec![Span::new("keep_this_", SpanKind::Code), Span::plain("x _y_")],
            "_",
            SpanKind::Italic,
        );
        assert_eq!(
            spans,
            vec![
                Span::new("keep_this_", SpanKind::Code),
                Span::plain("x "),
                Span::new("y", SpanKind::Italic),
            ]
        );
    }

    #[test]
    fn extracts_images() {
        let spans = split_images(vec![Span::plain(
            "This is text with an ![image](https://i.imgur.com/zjjcJKZ.png) and another ![second image](https://i.imgur.com/3elNhQu.png)",
        )]);
        assert_eq!(
            spans,
            vec![
                Span::plain("This is text with an "),
                Span::image("image", "https://i.imgur.com/zjjcJKZ.png"),
                Span::plain(" and another "),
                Span::image("second image", "https://i.imgur.com/3elNhQu.png"),
            ]
        );
    }

    #[test]
    fn extracts_links_but_not_images() {
        let spans = split_links(vec![Span::plain(
            "a [to boot dev](https://www.boot.dev) and ![img](x.png)",
        )]);
        assert_eq!(
            spans,
            vec![
                Span::plain("a "),
                Span::link("to boot dev", "https://www.boot.dev"),
                Span::plain(" and ![img](x.png)"),
            ]
        );
    }

    #[test]
    fn link_with_empty_parts_keeps_empty_target() {
        assert_eq!(tokenize("[]()"), vec![Span::link("", "")]);
    }

    #[test]
    fn tokenizes_every_kind_in_order() {
        let text = "This is **text** with an _italic_ word and a `code block` and an ![obi wan image](https://i.imgur.com/fJRm4Vk.jpeg) and a [link](https://boot.dev)";
        assert_eq!(
            tokenize(text),
            vec![
                Span::plain("This is "),
                Span::new("text", SpanKind::Bold),
                Span::plain(" with an "),
                Span::new("italic", SpanKind::Italic),
                Span::plain(" word and a "),
                Span::new("code block", SpanKind::Code),
                Span::plain(" and an "),
                Span::image("obi wan image", "https://i.imgur.com/fJRm4Vk.jpeg"),
                Span::plain(" and a "),
                Span::link("link", "https://boot.dev"),
            ]
        );
    }

    #[test]
    fn link_text_is_not_formatted() {
        assert_eq!(
            tokenize("see [**docs**](https://x.dev/a_b_c)"),
            vec![
                Span::plain("see "),
                Span::link("**docs**", "https://x.dev/a_b_c"),
            ]
        );
    }

    #[test]
    fn empty_text_has_no_spans() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn plain_text_is_one_span() {
        assert_eq!(tokenize("just words"), vec![Span::plain("just words")]);
    }
}
