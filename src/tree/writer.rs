//! Canonical XML serialization.
//!
//! Attributes and children are written in insertion order; text content is
//! emitted as CDATA. Fragments are spliced inline, the way a document
//! fragment behaves when appended.

use super::node::Node;

/// Serialize a tree as a standalone document with an XML declaration.
pub fn write_document(root: &Node) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    write_node(root, &mut out);
    out
}

/// Serialize one node into `out`.
pub fn write_node(node: &Node, out: &mut String) {
    let Some(name) = node.name.as_deref() else {
        // Fragment: content only.
        write_content(node, out);
        return;
    };

    out.push('<');
    out.push_str(name);
    for (attr, value) in &node.attributes {
        out.push(' ');
        out.push_str(attr);
        out.push_str("=\"");
        out.push_str(&escape_attribute(value));
        out.push('"');
    }

    if node.children.is_empty() && node.text.is_none() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    write_content(node, out);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn write_content(node: &Node, out: &mut String) {
    for child in &node.children {
        write_node(child, out);
    }
    if let Some(text) = node.text.as_deref() {
        write_cdata(text, out);
    }
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn write_cdata(text: &str, out: &mut String) {
    out.push_str("<![CDATA[");
    // "]]>" may not appear inside a CDATA section; split it across two.
    out.push_str(&text.replace("]]>", "]]]]><![CDATA[>"));
    out.push_str("]]>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Node;

    #[test]
    fn test_empty_element_self_closes() {
        assert_eq!(Node::element("user").to_xml(), "<user/>");
    }

    #[test]
    fn test_attributes_in_insertion_order() {
        let mut node = Node::element("user");
        node.attributes.insert("name".into(), "alice".into());
        node.attributes.insert("age".into(), "30".into());
        assert_eq!(node.to_xml(), r#"<user name="alice" age="30"/>"#);
    }

    #[test]
    fn test_attribute_escaping() {
        let mut node = Node::element("q");
        node.attributes.insert("expr".into(), r#"a<b & c>"d""#.into());
        assert_eq!(
            node.to_xml(),
            r#"<q expr="a&lt;b &amp; c&gt;&quot;d&quot;"/>"#
        );
    }

    #[test]
    fn test_text_as_cdata() {
        let mut node = Node::element("note");
        node.text = Some("x < y".into());
        assert_eq!(node.to_xml(), "<note><![CDATA[x < y]]></note>");
    }

    #[test]
    fn test_cdata_terminator_split() {
        let mut node = Node::element("raw");
        node.text = Some("a]]>b".into());
        assert_eq!(node.to_xml(), "<raw><![CDATA[a]]]]><![CDATA[>b]]></raw>");
    }

    #[test]
    fn test_fragment_splices_children() {
        let mut frag = Node::fragment();
        frag.children.push(Node::element("a"));
        frag.children.push(Node::element("b"));
        assert_eq!(frag.to_xml(), "<a/><b/>");
    }

    #[test]
    fn test_document_declaration() {
        let doc = write_document(&Node::element("root"));
        assert_eq!(doc, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<root/>");
    }
}
