use crate::error::RenderError;

/// Attribute list, serialized in insertion order.
pub type Attributes = Vec<(String, String)>;

// Tags rendered without content or a closing tag.
const VOID_TAGS: &[&str] = &["img", "br", "hr", "input", "meta", "link"];

/// A node of the output HTML tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Element {
    Leaf(Leaf),
    Container(Container),
}

/// A childless node: either a bare text run (`tag == None`) or a tagged value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Leaf {
    pub tag: Option<String>,
    pub value: String,
    pub attributes: Attributes,
}

/// A tagged node that owns an ordered, non-empty sequence of children.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Container {
    pub tag: String,
    pub children: Vec<Element>,
    pub attributes: Attributes,
}

impl Element {
    pub fn text(value: impl Into<String>) -> Self {
        Element::Leaf(Leaf {
            tag: None,
            value: value.into(),
            attributes: Attributes::new(),
        })
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Element::Leaf(Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attributes: Attributes::new(),
        })
    }

    pub fn container(tag: impl Into<String>, children: Vec<Element>) -> Self {
        Element::Container(Container {
            tag: tag.into(),
            children,
            attributes: Attributes::new(),
        })
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes_mut().push((key.into(), value.into()));
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Element::Leaf(leaf) => leaf.tag.as_deref(),
            Element::Container(container) => Some(&container.tag),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            Element::Leaf(leaf) => &leaf.attributes,
            Element::Container(container) => &container.attributes,
        }
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        match self {
            Element::Leaf(leaf) => &mut leaf.attributes,
            Element::Container(container) => &mut container.attributes,
        }
    }

    pub fn children(&self) -> &[Element] {
        match self {
            Element::Leaf(_) => &[],
            Element::Container(container) => &container.children,
        }
    }

    /// Renders the tree to an HTML string.
    ///
    /// Structural invariants are checked for every node before any output is returned:
    /// leaves need a non-empty value, containers need a tag and at least one child.
    /// Text and attribute values are emitted verbatim, without escaping.
    pub fn render(&self) -> Result<String, RenderError> {
        let mut writer = HtmlWriter::new();
        writer.element(self)?;
        Ok(writer.finish())
    }
}

struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    fn new() -> Self {
        Self { out: String::new() }
    }

    fn element(&mut self, element: &Element) -> Result<(), RenderError> {
        match element {
            Element::Leaf(leaf) => self.leaf(leaf),
            Element::Container(container) => self.container(container),
        }
    }

    fn leaf(&mut self, leaf: &Leaf) -> Result<(), RenderError> {
        if leaf.value.is_empty() {
            return Err(RenderError::EmptyValue {
                tag: leaf.tag.clone(),
            });
        }
        match leaf.tag.as_deref() {
            None => self.out.push_str(&leaf.value),
            Some(tag) if VOID_TAGS.contains(&tag) => self.open_tag(tag, &leaf.attributes),
            Some(tag) => {
                self.open_tag(tag, &leaf.attributes);
                self.out.push_str(&leaf.value);
                self.close_tag(tag);
            }
        }
        Ok(())
    }

    fn container(&mut self, container: &Container) -> Result<(), RenderError> {
        if container.tag.is_empty() {
            return Err(RenderError::MissingTag);
        }
        if container.children.is_empty() {
            return Err(RenderError::EmptyChildren {
                tag: container.tag.clone(),
            });
        }
        self.open_tag(&container.tag, &container.attributes);
        for child in &container.children {
            self.element(child)?;
        }
        self.close_tag(&container.tag);
        Ok(())
    }

    fn open_tag(&mut self, tag: &str, attributes: &Attributes) {
        self.out.push('<');
        self.out.push_str(tag);
        for (key, value) in attributes {
            self.out.push(' ');
            self.out.push_str(key);
            self.out.push_str("=\"");
            self.out.push_str(value);
            self.out.push('"');
        }
        self.out.push('>');
    }

    fn close_tag(&mut self, tag: &str) {
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
    }

    fn finish(self) -> String {
        self.out
    }
}
