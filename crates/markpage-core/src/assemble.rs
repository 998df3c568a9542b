use crate::block::{BlockKind, classify, heading_level, non_blank_lines, split_blocks};
use crate::element::Element;
use crate::inline::tokenize;

/// Converts a markdown document into an element tree rooted at a `div` container.
///
/// An empty document produces a root with no children, which fails on render.
pub fn assemble(document: &str) -> Element {
    let document = document.replace("\r\n", "\n");
    let children = split_blocks(&document)
        .into_iter()
        .map(|block| {
            let kind = classify(block);
            log::trace!("classified block as {:?}: {:?}", kind, block);
            block_to_element(block, kind)
        })
        .collect();
    Element::container("div", children)
}

fn block_to_element(block: &str, kind: BlockKind) -> Element {
    match kind {
        BlockKind::Paragraph => Element::container("p", inline_children(block)),
        BlockKind::Heading => {
            let level = heading_level(block).unwrap_or(1);
            let content = block.trim_start_matches('#').trim();
            Element::container(format!("h{}", level), inline_children(content))
        }
        // Fence lines are part of the emitted code text.
        BlockKind::Code => Element::container("pre", vec![Element::leaf("code", block.trim())]),
        BlockKind::Quote => {
            let joined = block
                .lines()
                .map(|line| line.strip_prefix('>').unwrap_or(line).trim_start())
                .collect::<Vec<_>>()
                .join("\n");
            Element::container("blockquote", inline_children(&joined))
        }
        BlockKind::UnorderedList => {
            let items = block
                .lines()
                .map(|line| list_item(line.strip_prefix("- ").unwrap_or(line)))
                .collect();
            Element::container("ul", items)
        }
        BlockKind::OrderedList => {
            let items = non_blank_lines(block)
                .map(|line| {
                    let text = line.split_once(". ").map_or(line, |(_, text)| text);
                    list_item(text)
                })
                .collect();
            Element::container("ol", items)
        }
    }
}

fn list_item(text: &str) -> Element {
    Element::container("li", inline_children(text))
}

fn inline_children(text: &str) -> Vec<Element> {
    tokenize(text).into_iter().map(|span| span.into_element()).collect()
}
