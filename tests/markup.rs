//! End-to-end markup pipeline: tagged data through the filter chain and
//! tree builder into a final string, directly or via a stylesheet.

use indexmap::IndexMap;
use ozark::render::{RenderError, Stylesheet, StylesheetError, StylesheetLoader};
use ozark::{FilterChain, Node, Renderer, TreeBuilder, Value};

fn map(pairs: Vec<(&str, Value)>) -> Value {
    Value::Map(pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
}

#[test]
fn recipe_page_renders_with_filters() {
    let filters = FilterChain::standard();
    let builder = TreeBuilder::new(&filters);

    let data = map(vec![(
        "recipe",
        map(vec![
            ("title", Value::from("Pancakes (c) J Smith")),
            (
                "step",
                Value::List(vec![
                    map(vec![("", Value::from("mix 1/2 cup flour"))]),
                    map(vec![("", Value::from("add 3/4 cup milk --- slowly"))]),
                ]),
            ),
        ]),
    )]);

    let tree = builder.build(&data);
    let out = Renderer::new()
        .render(&tree, None, &IndexMap::new())
        .unwrap();

    assert_eq!(
        out,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <recipe title=\"Pancakes \u{a9} J\u{a0}Smith\">\
         <step><![CDATA[mix \u{bd} cup flour]]></step>\
         <step><![CDATA[add \u{be} cup milk \u{2014} slowly]]></step>\
         </recipe>"
    );
}

#[test]
fn store_rows_become_sibling_elements() {
    let mut row_a = ozark::store::Row::new();
    row_a.insert("id".to_string(), Value::from(1i64));
    row_a.insert("name".to_string(), Value::from("ann"));
    let mut row_b = ozark::store::Row::new();
    row_b.insert("id".to_string(), Value::from(2i64));
    row_b.insert("name".to_string(), Value::from("bob"));

    let data = map(vec![(
        "user",
        ozark::store::rows_to_value(vec![row_a, row_b]),
    )]);

    let filters = FilterChain::empty();
    let tree = TreeBuilder::new(&filters).build(&data);
    assert_eq!(
        tree.to_xml(),
        r#"<user id="1" name="ann"/><user id="2" name="bob"/>"#
    );
}

struct WrapSheet;

impl Stylesheet for WrapSheet {
    fn transform(
        &self,
        tree: &Node,
        parameters: &IndexMap<String, String>,
    ) -> Result<String, StylesheetError> {
        let lang = parameters
            .get("lang")
            .ok_or("missing parameter: lang")?
            .clone();
        Ok(format!(r#"<html lang="{lang}">{}</html>"#, tree.to_xml()))
    }
}

struct WrapLoader;

impl StylesheetLoader for WrapLoader {
    fn load(&self, reference: &str) -> Result<Box<dyn Stylesheet>, StylesheetError> {
        match reference {
            "wrap.xsl" => Ok(Box::new(WrapSheet)),
            other => Err(format!("template not found: {other}").into()),
        }
    }
}

#[test]
fn stylesheet_receives_bound_parameters() {
    let renderer = Renderer::with_loader(Box::new(WrapLoader));
    let mut params = IndexMap::new();
    params.insert("lang".to_string(), "en".to_string());

    let out = renderer
        .render(&Node::element("body"), Some("wrap.xsl"), &params)
        .unwrap();
    assert_eq!(out, r#"<html lang="en"><body/></html>"#);
}

#[test]
fn missing_template_surfaces_as_load_error() {
    let renderer = Renderer::with_loader(Box::new(WrapLoader));
    let err = renderer
        .render(&Node::element("body"), Some("absent.xsl"), &IndexMap::new())
        .unwrap_err();
    match err {
        RenderError::Load { reference, reason } => {
            assert_eq!(reference, "absent.xsl");
            assert!(reason.contains("not found"));
        }
        other => panic!("expected load error, got {other:?}"),
    }
}

#[test]
fn transform_failure_surfaces_as_transform_error() {
    let renderer = Renderer::with_loader(Box::new(WrapLoader));
    // No "lang" parameter bound: the sheet itself fails.
    let err = renderer
        .render(&Node::element("body"), Some("wrap.xsl"), &IndexMap::new())
        .unwrap_err();
    assert!(matches!(err, RenderError::Transform { .. }));
}
