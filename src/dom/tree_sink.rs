//! html5ever TreeSink implementation for ArenaDom.

use std::borrow::Cow;
use std::cell::{Cell, RefCell};

use html5ever::tendril::StrTendril;
use html5ever::tree_builder::{ElementFlags, NodeOrText, QuirksMode, TreeSink};
use html5ever::{Attribute as Html5Attribute, QualName};

use super::arena::{ArenaDom, ArenaNodeData, ArenaNodeId, Attribute};

/// Handle used by TreeSink to reference nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeHandle(pub ArenaNodeId);

impl Default for NodeHandle {
    fn default() -> Self {
        NodeHandle(ArenaNodeId::NONE)
    }
}

/// TreeSink implementation that builds an ArenaDom.
///
/// Uses interior mutability because html5ever's TreeSink trait
/// requires methods to take `&self` but we need to mutate the DOM.
pub(crate) struct ArenaSink {
    dom: RefCell<ArenaDom>,
    current_line: Cell<u64>,
}

impl Default for ArenaSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ArenaSink {
    pub fn new() -> Self {
        Self {
            dom: RefCell::new(ArenaDom::new()),
            current_line: Cell::new(1),
        }
    }

    /// Consume the sink and return the DOM.
    pub fn into_dom(self) -> ArenaDom {
        self.dom.into_inner()
    }

    fn append_to(dom: &mut ArenaDom, parent: ArenaNodeId, child: NodeOrText<NodeHandle>, line: u64) {
        match child {
            NodeOrText::AppendNode(node) => dom.append(parent, node.0),
            NodeOrText::AppendText(text) => dom.append_text(parent, &text, line),
        }
    }
}

impl TreeSink for ArenaSink {
    type Handle = NodeHandle;
    type Output = Self;
    type ElemName<'a>
        = &'a QualName
    where
        Self: 'a;

    fn finish(self) -> Self::Output {
        self
    }

    fn parse_error(&self, _msg: Cow<'static, str>) {
        // Exports are rarely valid HTML; structure problems surface later
    }

    fn set_current_line(&self, line_number: u64) {
        self.current_line.set(line_number);
    }

    fn get_document(&self) -> Self::Handle {
        NodeHandle(self.dom.borrow().document())
    }

    fn elem_name<'a>(&'a self, target: &'a Self::Handle) -> Self::ElemName<'a> {
        static EMPTY: QualName = QualName {
            prefix: None,
            ns: html5ever::ns!(),
            local: html5ever::local_name!(""),
        };

        let dom = self.dom.borrow();
        match dom.get(target.0).map(|n| &n.data) {
            Some(ArenaNodeData::Element { name, .. }) => {
                let name: *const QualName = &**name;
                // SAFETY: the QualName is boxed, so reallocating the node
                // vector moves the Box but not the name. Nodes are never
                // removed and names never replaced, so the allocation lives
                // as long as self. The RefCell guard hides that from the
                // borrow checker.
                unsafe { &*name }
            }
            _ => &EMPTY,
        }
    }

    fn create_element(
        &self,
        name: QualName,
        attrs: Vec<Html5Attribute>,
        _flags: ElementFlags,
    ) -> Self::Handle {
        let converted_attrs: Vec<Attribute> = attrs
            .into_iter()
            .map(|a| Attribute {
                name: a.name,
                value: a.value.to_string(),
            })
            .collect();

        let id = self
            .dom
            .borrow_mut()
            .create_element(name, converted_attrs, self.current_line.get());
        NodeHandle(id)
    }

    fn create_comment(&self, _text: StrTendril) -> Self::Handle {
        NodeHandle(self.dom.borrow_mut().create_other(self.current_line.get()))
    }

    fn create_pi(&self, _target: StrTendril, _data: StrTendril) -> Self::Handle {
        NodeHandle(self.dom.borrow_mut().create_other(self.current_line.get()))
    }

    fn append(&self, parent: &Self::Handle, child: NodeOrText<Self::Handle>) {
        let mut dom = self.dom.borrow_mut();
        Self::append_to(&mut dom, parent.0, child, self.current_line.get());
    }

    fn append_based_on_parent_node(
        &self,
        element: &Self::Handle,
        prev_element: &Self::Handle,
        child: NodeOrText<Self::Handle>,
    ) {
        let parent = self.dom.borrow().get(element.0).map(|n| n.parent);
        if let Some(parent) = parent
            && parent.is_some()
        {
            let mut dom = self.dom.borrow_mut();
            Self::append_to(&mut dom, parent, child, self.current_line.get());
            return;
        }
        self.append(prev_element, child);
    }

    fn append_doctype_to_document(
        &self,
        _name: StrTendril,
        _public_id: StrTendril,
        _system_id: StrTendril,
    ) {
        let mut dom = self.dom.borrow_mut();
        let doc = dom.document();
        let doctype = dom.create_other(self.current_line.get());
        dom.append(doc, doctype);
    }

    fn get_template_contents(&self, target: &Self::Handle) -> Self::Handle {
        *target
    }

    fn same_node(&self, x: &Self::Handle, y: &Self::Handle) -> bool {
        x.0 == y.0
    }

    fn set_quirks_mode(&self, _mode: QuirksMode) {}

    fn append_before_sibling(&self, sibling: &Self::Handle, new_node: NodeOrText<Self::Handle>) {
        let mut dom = self.dom.borrow_mut();
        match new_node {
            NodeOrText::AppendNode(node) => {
                dom.insert_before(sibling.0, node.0);
            }
            NodeOrText::AppendText(text) => {
                let text_node = dom.create_text(text.to_string(), self.current_line.get());
                dom.insert_before(sibling.0, text_node);
            }
        }
    }

    fn add_attrs_if_missing(&self, target: &Self::Handle, attrs: Vec<Html5Attribute>) {
        let mut dom = self.dom.borrow_mut();
        if let Some(node) = dom.get_mut(target.0)
            && let ArenaNodeData::Element {
                attrs: existing, ..
            } = &mut node.data
        {
            for attr in attrs {
                if !existing.iter().any(|a| a.name == attr.name) {
                    existing.push(Attribute {
                        name: attr.name,
                        value: attr.value.to_string(),
                    });
                }
            }
        }
    }

    fn remove_from_parent(&self, target: &Self::Handle) {
        self.dom.borrow_mut().detach(target.0);
    }

    fn reparent_children(&self, node: &Self::Handle, new_parent: &Self::Handle) {
        let children: Vec<_> = self.dom.borrow().children(node.0).collect();

        let mut dom = self.dom.borrow_mut();
        for child in children {
            dom.detach(child);
            dom.append(new_parent.0, child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::parse_html;

    #[test]
    fn test_basic_parse() {
        let dom = parse_html("<html><body><p>Hello</p></body></html>");

        let p = dom
            .locate(dom.document(), |n| n.is_element_named("p"))
            .expect("should find p");
        assert_eq!(dom.text_of(p), "Hello");
    }

    #[test]
    fn test_class_attribute_kept_verbatim() {
        let dom = parse_html(r#"<div class="noteHeading">Note - Location 795</div>"#);

        let div = dom
            .locate(dom.document(), |n| n.is_element_named("div"))
            .expect("should find div");
        assert_eq!(dom.class_of(div), Some("noteHeading"));
    }

    #[test]
    fn test_lines_are_recorded() {
        let dom = parse_html("<html>\n<body>\n<div class=\"a\"></div>\n\n<div class=\"b\"></div>\n</body>\n</html>");

        let a = dom.locate(dom.document(), |n| n.class() == Some("a")).unwrap();
        let b = dom.locate(dom.document(), |n| n.class() == Some("b")).unwrap();
        assert_eq!(dom.line_of(a), 3);
        assert_eq!(dom.line_of(b), 5);
    }

    #[test]
    fn test_sibling_order_survives_parse() {
        let dom = parse_html(
            r#"
            <div class="c">
                <p>First</p>
                <p>Second</p>
                <p>Third</p>
            </div>
        "#,
        );

        let div = dom.locate(dom.document(), |n| n.class() == Some("c")).unwrap();
        let texts: Vec<_> = dom
            .element_children(div)
            .map(|id| dom.text_of(id))
            .collect();
        assert_eq!(texts, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_open_element_names_survive_arena_growth() {
        // Deep nesting keeps many elements open while the arena reallocates
        let mut html = String::from("<html><body>");
        for i in 0..2000 {
            html.push_str(&format!("<div class=\"d{i}\"><span>{i}</span>"));
        }
        for _ in 0..2000 {
            html.push_str("</div>");
        }
        html.push_str("<p class=\"after\">tail</p></body></html>");

        let dom = parse_html(&html);
        let deepest = dom.locate(dom.document(), |n| n.class() == Some("d1999")).unwrap();
        assert_eq!(dom.text_of(deepest), "1999");

        // The paragraph only lands after the divs if every close tag matched
        let after = dom.locate(dom.document(), |n| n.class() == Some("after")).unwrap();
        let body = dom.locate(dom.document(), |n| n.is_element_named("body")).unwrap();
        assert!(dom.element_children(body).any(|id| id == after));
    }
}
