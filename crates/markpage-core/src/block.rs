#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum BlockKind {
    Paragraph,
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

pub(crate) const CODE_FENCE: &str = "```";

/// Splits a document into blank-line separated blocks.
///
/// Each block is trimmed; blocks that are empty after trimming are dropped.
pub fn split_blocks(document: &str) -> Vec<&str> {
    document
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classifies a single block. The first matching rule wins.
pub fn classify(block: &str) -> BlockKind {
    if heading_level(block).is_some() {
        BlockKind::Heading
    } else if is_code(block) {
        BlockKind::Code
    } else if is_quote(block) {
        BlockKind::Quote
    } else if is_unordered_list(block) {
        BlockKind::UnorderedList
    } else if is_ordered_list(block) {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    }
}

/// Number of leading `#` characters when they form a level 1-6 heading marker.
pub fn heading_level(block: &str) -> Option<u8> {
    let hashes = block.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&hashes) && block.as_bytes().get(hashes) == Some(&b' ') {
        Some(hashes as u8)
    } else {
        None
    }
}

fn is_code(block: &str) -> bool {
    block.starts_with(CODE_FENCE)
        && block.ends_with(CODE_FENCE)
        && block.matches(CODE_FENCE).count() == 2
}

fn is_quote(block: &str) -> bool {
    non_blank_lines(block).all(|line| line.starts_with('>'))
}

fn is_unordered_list(block: &str) -> bool {
    block.lines().all(|line| line.starts_with("- "))
}

fn is_ordered_list(block: &str) -> bool {
    non_blank_lines(block).all(|line| {
        let digit_led = line.bytes().next().is_some_and(|b| b.is_ascii_digit());
        let number = line
            .split_once('.')
            .and_then(|(prefix, _)| prefix.parse::<u64>().ok());
        digit_led && line.contains(". ") && number.is_some()
    })
}

pub(crate) fn non_blank_lines(block: &str) -> impl Iterator<Item = &str> {
    block.lines().filter(|line| !line.trim().is_empty())
}
