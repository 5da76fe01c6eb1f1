//! `class` attribute extraction from static HTML, for scanning saved pages
//! outside the browser.
//!
//! The document goes through html5ever's tree builder, so tag soup, raw-text
//! elements and comments end up where a browser would put them. The sink
//! keeps only the element tree and each element's `class` value; text is
//! dropped on arrival.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::{StrTendril, TendrilSink};
use html5ever::tree_builder::{ElementFlags, NodeOrText, QuirksMode, TreeSink};
use html5ever::{Attribute, QualName};

/// Class lists of every element carrying a non-empty `class` attribute, in
/// tree order.
pub fn class_attributes(html: &str) -> Vec<Vec<String>> {
    parse_document(ClassSink::default(), ParseOpts::default())
        .from_utf8()
        .one(html.as_bytes())
}

type Handle = Rc<Node>;

/// Document, element, comment or template-contents node. Only elements have
/// a name.
#[derive(Default)]
struct Node {
    name: Option<QualName>,
    class: RefCell<Option<String>>,
    parent: RefCell<Weak<Node>>,
    children: RefCell<Vec<Handle>>,
    template_contents: Option<Handle>,
}

impl Node {
    fn detach(self: &Rc<Self>) {
        let parent = self.parent.replace(Weak::new());
        if let Some(parent) = parent.upgrade() {
            parent.children.borrow_mut().retain(|c| !Rc::ptr_eq(c, self));
        }
    }

    fn push_child(self: &Rc<Self>, child: Handle) {
        child.detach();
        *child.parent.borrow_mut() = Rc::downgrade(self);
        self.children.borrow_mut().push(child);
    }
}

fn class_of(attrs: &[Attribute]) -> Option<String> {
    attrs
        .iter()
        .find(|a| a.name.local.as_ref() == "class")
        .map(|a| a.value.to_string())
}

struct ClassSink {
    document: Handle,
}

impl Default for ClassSink {
    fn default() -> Self {
        Self {
            document: Rc::new(Node::default()),
        }
    }
}

impl TreeSink for ClassSink {
    type Handle = Handle;
    type Output = Vec<Vec<String>>;
    type ElemName<'a>
        = &'a QualName
    where
        Self: 'a;

    fn finish(self) -> Self::Output {
        let mut lists = Vec::new();
        let mut stack = vec![self.document];
        while let Some(node) = stack.pop() {
            if let Some(class) = node.class.borrow().as_deref() {
                let classes: Vec<String> = class.split_whitespace().map(str::to_string).collect();
                if !classes.is_empty() {
                    lists.push(classes);
                }
            }
            stack.extend(node.children.borrow().iter().rev().cloned());
        }
        lists
    }

    fn parse_error(&self, _msg: std::borrow::Cow<'static, str>) {}

    fn get_document(&self) -> Handle {
        Rc::clone(&self.document)
    }

    fn elem_name<'a>(&'a self, target: &'a Handle) -> &'a QualName {
        static NONE: QualName = QualName {
            prefix: None,
            ns: html5ever::ns!(),
            local: html5ever::local_name!(""),
        };
        target.name.as_ref().unwrap_or(&NONE)
    }

    fn create_element(&self, name: QualName, attrs: Vec<Attribute>, flags: ElementFlags) -> Handle {
        Rc::new(Node {
            name: Some(name),
            class: RefCell::new(class_of(&attrs)),
            template_contents: flags.template.then(|| Rc::new(Node::default())),
            ..Node::default()
        })
    }

    fn create_comment(&self, _text: StrTendril) -> Handle {
        Rc::new(Node::default())
    }

    fn create_pi(&self, _target: StrTendril, _data: StrTendril) -> Handle {
        Rc::new(Node::default())
    }

    fn append(&self, parent: &Handle, child: NodeOrText<Handle>) {
        if let NodeOrText::AppendNode(node) = child {
            parent.push_child(node);
        }
    }

    fn append_based_on_parent_node(
        &self,
        element: &Handle,
        prev_element: &Handle,
        child: NodeOrText<Handle>,
    ) {
        if element.parent.borrow().upgrade().is_some() {
            self.append_before_sibling(element, child);
        } else {
            self.append(prev_element, child);
        }
    }

    fn append_doctype_to_document(
        &self,
        _name: StrTendril,
        _public_id: StrTendril,
        _system_id: StrTendril,
    ) {
    }

    fn get_template_contents(&self, target: &Handle) -> Handle {
        target
            .template_contents
            .as_ref()
            .map_or_else(|| Rc::clone(target), Rc::clone)
    }

    fn same_node(&self, x: &Handle, y: &Handle) -> bool {
        Rc::ptr_eq(x, y)
    }

    fn set_quirks_mode(&self, _mode: QuirksMode) {}

    fn append_before_sibling(&self, sibling: &Handle, new_node: NodeOrText<Handle>) {
        let NodeOrText::AppendNode(node) = new_node else {
            return;
        };
        let Some(parent) = sibling.parent.borrow().upgrade() else {
            return;
        };
        node.detach();
        let mut children = parent.children.borrow_mut();
        let at = children
            .iter()
            .position(|c| Rc::ptr_eq(c, sibling))
            .unwrap_or(children.len());
        *node.parent.borrow_mut() = Rc::downgrade(&parent);
        children.insert(at, node);
    }

    fn add_attrs_if_missing(&self, target: &Handle, attrs: Vec<Attribute>) {
        let mut class = target.class.borrow_mut();
        if class.is_none() {
            *class = class_of(&attrs);
        }
    }

    fn remove_from_parent(&self, target: &Handle) {
        target.detach();
    }

    fn reparent_children(&self, node: &Handle, new_parent: &Handle) {
        let children = node.children.take();
        for child in children {
            *child.parent.borrow_mut() = Rc::downgrade(new_parent);
            new_parent.children.borrow_mut().push(child);
        }
    }
}
