//! HTML5 / XML parser implementation
//!
//! Uses html5ever's (or xml5ever's) RcDom and converts to our DOM format.
//! This is simpler and more reliable than implementing TreeSink directly.

use fos_dom::{DomTree, ElementData, Node, NodeData, NodeId, NodeRef};
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{ParseOpts, QualName, local_name, ns, parse_document, parse_fragment};
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

/// Parser settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Use the XML tree builder instead of the HTML5 one
    pub xml_mode: bool,
    /// Parse `<noscript>` as if scripting were on
    pub scripting_enabled: bool,
    /// Drop text nodes that contain only whitespace
    pub ignore_whitespace: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            xml_mode: false,
            scripting_enabled: true,
            ignore_whitespace: false,
        }
    }
}

/// HTML5 / XML parser
#[derive(Debug, Default)]
pub struct HtmlParser {
    options: ParseOptions,
}

impl HtmlParser {
    /// Create a parser with default options
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parse a complete document
    pub fn parse_document(&self, html: &str) -> NodeRef {
        self.parse(html, true)
    }

    /// Parse a fragment; its top-level nodes become children of the root
    pub fn parse_fragment(&self, html: &str) -> NodeRef {
        self.parse(html, false)
    }

    /// Parse into a frozen tree, returning the document node
    pub fn parse(&self, markup: &str, is_document: bool) -> NodeRef {
        if self.options.xml_mode {
            return self.parse_xml(markup);
        }

        let opts = ParseOpts {
            tree_builder: TreeBuilderOpts {
                scripting_enabled: self.options.scripting_enabled,
                ..Default::default()
            },
            ..Default::default()
        };

        let mut tree = DomTree::new();
        if is_document {
            tracing::debug!(len = markup.len(), "Parsing HTML document");
            let dom = parse_document(RcDom::default(), opts).one(markup);
            report_errors(&dom);
            self.convert_children(&dom.document, &mut tree, NodeId::ROOT);
        } else {
            tracing::debug!(len = markup.len(), "Parsing HTML fragment");
            let context = QualName::new(None, ns!(html), local_name!("body"));
            let dom = parse_fragment(
                RcDom::default(),
                opts,
                context,
                Vec::new(),
                self.options.scripting_enabled,
            )
            .one(markup);
            report_errors(&dom);

            // Fragment output is wrapped in a synthetic <html> element
            let wrapper = dom
                .document
                .children
                .borrow()
                .iter()
                .find(|c| matches!(c.data, RcNodeData::Element { .. }))
                .cloned();
            if let Some(wrapper) = wrapper {
                self.convert_children(&wrapper, &mut tree, NodeId::ROOT);
            }
        }

        tracing::debug!("Parsed {} nodes", tree.len());
        tree.into_root()
    }

    fn parse_xml(&self, markup: &str) -> NodeRef {
        tracing::debug!(len = markup.len(), "Parsing XML");
        let dom = xml5ever::driver::parse_document(RcDom::default(), Default::default())
            .one(markup);
        report_errors(&dom);

        let mut tree = DomTree::new();
        self.convert_children(&dom.document, &mut tree, NodeId::ROOT);
        tracing::debug!("Parsed {} nodes", tree.len());
        tree.into_root()
    }

    fn convert_children(&self, handle: &Handle, tree: &mut DomTree, parent: NodeId) {
        for child in handle.children.borrow().iter() {
            self.convert_node(child, tree, parent);
        }
    }

    /// Convert an RcDom node to our DOM format
    fn convert_node(&self, handle: &Handle, tree: &mut DomTree, parent: NodeId) {
        match &handle.data {
            RcNodeData::Document => {
                // Document node - just process children
                self.convert_children(handle, tree, parent);
            }
            RcNodeData::Doctype {
                name,
                public_id,
                system_id,
            } => {
                let id = tree.push(Node::new(NodeData::Doctype {
                    name: name.to_string(),
                    public_id: public_id.to_string(),
                    system_id: system_id.to_string(),
                }));
                tree.append_child(parent, id);
            }
            RcNodeData::Text { contents } => {
                let text = contents.borrow();
                if self.options.ignore_whitespace && text.trim().is_empty() {
                    return;
                }
                let id = tree.create_text(&text);
                tree.append_child(parent, id);
            }
            RcNodeData::Comment { contents } => {
                let id = tree.create_comment(contents);
                tree.append_child(parent, id);
            }
            RcNodeData::Element { name, attrs, .. } => {
                let mut elem = ElementData::new(qualified(name));
                elem.namespace = name.ns.to_string();

                // set_attr caches id and class
                for attr in attrs.borrow().iter() {
                    elem.set_attr(qualified(&attr.name), attr.value.to_string());
                }

                let id = tree.create_element_with(elem);
                tree.append_child(parent, id);

                // Process children
                self.convert_children(handle, tree, id);
            }
            RcNodeData::ProcessingInstruction { target, contents } => {
                let id = tree.push(Node::new(NodeData::ProcessingInstruction {
                    target: target.to_string(),
                    data: contents.to_string(),
                }));
                tree.append_child(parent, id);
            }
        }
    }
}

/// Log the errors the tree builder recovered from; returns how many there were
fn report_errors(dom: &RcDom) -> usize {
    let errors = dom.errors.borrow();
    for error in errors.iter() {
        tracing::debug!(error = %error, "parse error");
    }
    errors.len()
}

/// `prefix:local` when a prefix is present (XML), otherwise the local name
fn qualified(name: &QualName) -> String {
    match &name.prefix {
        Some(prefix) => format!("{}:{}", prefix, name.local),
        None => name.local.to_string(),
    }
}
