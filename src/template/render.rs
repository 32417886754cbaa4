// src/template/render.rs

use serde_json::Value as JsonValue;

use crate::error::PlaceholderError;

use super::tags::{collapse_section_paragraphs, parse_nodes, referenced_names, tokenize, Node};
use super::xml::{chunk_part, escape_text, merge_split_tags};

const LINE_BREAK: &str = r#"</w:t><w:br/><w:t xml:space="preserve">"#;

/// Parse one XML part into its section tree.
pub fn parse_part(part: &str, xml: &str) -> Result<Vec<Node>, Vec<PlaceholderError>> {
    let mut errors = Vec::new();

    let mut chunks = chunk_part(xml);
    merge_split_tags(&mut chunks, part, &mut errors);
    let tokens = collapse_section_paragraphs(tokenize(chunks, part, &mut errors));
    let nodes = parse_nodes(tokens, part, &mut errors);

    if errors.is_empty() {
        Ok(nodes)
    } else {
        Err(errors)
    }
}

/// Render one XML part against `data`.
pub fn render_part(part: &str, xml: &str, data: &JsonValue) -> Result<String, Vec<PlaceholderError>> {
    let nodes = parse_part(part, xml)?;

    let mut out = String::with_capacity(xml.len());
    let mut scopes = vec![data];
    render_nodes(&nodes, &mut scopes, part, &mut out);
    Ok(out)
}

/// Names referenced by a part, for template/record coverage checks.
pub fn part_names(part: &str, xml: &str) -> Result<std::collections::BTreeSet<String>, Vec<PlaceholderError>> {
    parse_part(part, xml).map(|nodes| referenced_names(&nodes))
}

fn render_nodes<'a>(nodes: &[Node], scopes: &mut Vec<&'a JsonValue>, part: &str, out: &mut String) {
    for node in nodes {
        match node {
            Node::Markup(s) | Node::Text(s) => out.push_str(s),
            Node::Scalar(name) => {
                let text = lookup(scopes, name).and_then(scalar_text);
                match text {
                    Some(t) => push_value(out, &t),
                    None => {
                        // missing values render empty instead of failing the document
                        tracing::warn!(placeholder = %name, part, "missing value for placeholder");
                    }
                }
            }
            Node::Section {
                name,
                inverted,
                body,
            } => {
                let value = lookup(scopes, name);

                if *inverted {
                    if !is_truthy(value) {
                        render_nodes(body, scopes, part, out);
                    }
                    continue;
                }

                match value {
                    Some(JsonValue::Array(items)) => {
                        for item in items {
                            scopes.push(item);
                            render_nodes(body, scopes, part, out);
                            scopes.pop();
                        }
                    }
                    Some(v) if is_truthy(Some(v)) => {
                        scopes.push(v);
                        render_nodes(body, scopes, part, out);
                        scopes.pop();
                    }
                    _ => {}
                }
            }
        }
    }
}

/// Innermost scope wins; `.` is the innermost scope itself.
fn lookup<'a>(scopes: &[&'a JsonValue], name: &str) -> Option<&'a JsonValue> {
    if name == "." {
        return scopes.last().copied();
    }

    scopes
        .iter()
        .rev()
        .find_map(|&scope| scope.as_object().and_then(|m| m.get(name)))
}

fn scalar_text(v: &JsonValue) -> Option<String> {
    match v {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        JsonValue::Null | JsonValue::Array(_) | JsonValue::Object(_) => None,
    }
}

fn is_truthy(v: Option<&JsonValue>) -> bool {
    match v {
        None | Some(JsonValue::Null) => false,
        Some(JsonValue::Bool(b)) => *b,
        Some(JsonValue::String(s)) => !s.is_empty(),
        Some(JsonValue::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Some(JsonValue::Array(a)) => !a.is_empty(),
        Some(JsonValue::Object(_)) => true,
    }
}

fn push_value(out: &mut String, raw: &str) {
    let normalized = raw.replace("\r\n", "\n");
    let mut lines = normalized.split('\n');
    if let Some(first) = lines.next() {
        out.push_str(&escape_text(first));
    }
    for line in lines {
        out.push_str(LINE_BREAK);
        out.push_str(&escape_text(line));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlaceholderErrorKind;
    use serde_json::json;

    fn para(text: &str) -> String {
        format!("<w:p><w:r><w:t>{text}</w:t></w:r></w:p>")
    }

    fn body(paras: &[&str]) -> String {
        let inner: String = paras.iter().map(|p| para(p)).collect();
        format!("<w:document><w:body>{inner}</w:body></w:document>")
    }

    fn preserved(text: &str) -> String {
        format!(r#"<w:p><w:r><w:t xml:space="preserve">{text}</w:t></w:r></w:p>"#)
    }

    #[test]
    fn substitutes_and_escapes_scalars() {
        let out = render_part(
            "doc",
            &body(&["Dear {client_first_name}, re: {firm_name}"]),
            &json!({ "client_first_name": "Jo", "firm_name": "A&B <Eng>" }),
        )
        .unwrap();

        assert!(out.contains(&preserved("Dear Jo, re: A&amp;B &lt;Eng&gt;")));
    }

    #[test]
    fn missing_values_render_empty() {
        let out = render_part("doc", &body(&["[{nope}]"]), &json!({})).unwrap();
        assert!(out.contains(&preserved("[]")));
    }

    #[test]
    fn line_breaks_become_word_breaks() {
        let out = render_part(
            "doc",
            &body(&["{project_summary}"]),
            &json!({ "project_summary": "one\ntwo" }),
        )
        .unwrap();
        assert!(out.contains(r#"one</w:t><w:br/><w:t xml:space="preserve">two"#));
    }

    #[test]
    fn paragraph_loop_repeats_rows_in_order() {
        let xml = body(&["{#phases}", "{name}: ${fee}", "{/phases}", "Total ${total_fee}"]);
        let data = json!({
            "phases": [ { "name": "Scoping", "fee": "1,000" }, { "name": "Bidding", "fee": "2,500" } ],
            "total_fee": "3,500",
        });

        let out = render_part("doc", &xml, &data).unwrap();
        let expected = format!(
            "<w:document><w:body>{}{}{}</w:body></w:document>",
            preserved("Scoping: $1,000"),
            preserved("Bidding: $2,500"),
            preserved("Total $3,500"),
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn list_of_lines_uses_dot() {
        let xml = body(&["{#mechanical_summary}", "- {.}", "{/mechanical_summary}"]);
        let out = render_part(
            "doc",
            &xml,
            &json!({ "mechanical_summary": ["Rooftop units", "VAV boxes"] }),
        )
        .unwrap();
        assert!(out.contains(&preserved("- Rooftop units")));
        assert!(out.contains(&preserved("- VAV boxes")));
    }

    #[test]
    fn conditionals_and_inverted_sections() {
        let xml = body(&[
            "{#include_plumbing}",
            "Plumbing",
            "{/include_plumbing}",
            "{^has_subconsultants}",
            "No subconsultants",
            "{/has_subconsultants}",
            "Fee{#is_hourly_nte} (NTE){/is_hourly_nte}",
        ]);
        let data = json!({
            "include_plumbing": false,
            "has_subconsultants": false,
            "is_hourly_nte": true,
        });

        let out = render_part("doc", &xml, &data).unwrap();
        assert!(!out.contains("Plumbing"));
        assert!(out.contains(&preserved("No subconsultants")));
        assert!(out.contains(&preserved("Fee (NTE)")));
    }

    #[test]
    fn section_closed_inline_keeps_paragraphs_balanced() {
        let xml = body(&["{#include_plumbing}", "Plumbing text{/include_plumbing}"]);
        let balanced = |out: &str, paras: usize| {
            assert_eq!(out.matches("<w:p>").count(), paras);
            assert_eq!(out.matches("</w:p>").count(), paras);
            assert_eq!(out.matches("<w:r>").count(), out.matches("</w:r>").count());
        };

        let off = render_part("doc", &xml, &json!({ "include_plumbing": false })).unwrap();
        assert!(!off.contains("Plumbing"));
        balanced(&off, 1);

        let on = render_part("doc", &xml, &json!({ "include_plumbing": true })).unwrap();
        assert!(on.contains("Plumbing text"));
        balanced(&on, 2);
    }

    #[test]
    fn outer_scope_is_visible_inside_loops() {
        let xml = body(&["{#phases}", "{name} for {project_name}", "{/}"]);
        let data = json!({ "project_name": "MOB", "phases": [ { "name": "Study", "fee": "1" } ] });
        let out = render_part("doc", &xml, &data).unwrap();
        assert!(out.contains(&preserved("Study for MOB")));
    }

    #[test]
    fn empty_list_renders_nothing() {
        let xml = body(&["{#phases}", "{name}", "{/phases}"]);
        let out = render_part("doc", &xml, &json!({ "phases": [] })).unwrap();
        assert_eq!(out, "<w:document><w:body></w:body></w:document>");
    }

    #[test]
    fn structural_errors_fail_the_part() {
        let errs = render_part("word/document.xml", &body(&["{#phases}", "{name"]), &json!({}))
            .unwrap_err();
        let kinds: Vec<_> = errs.iter().map(|e| e.kind.clone()).collect();
        assert!(kinds.contains(&PlaceholderErrorKind::UnclosedTag));
        assert!(kinds.contains(&PlaceholderErrorKind::UnclosedSection));
        assert!(errs.iter().all(|e| e.part == "word/document.xml"));
    }

    #[test]
    fn part_names_lists_placeholders() {
        let names = part_names("doc", &body(&["{date}", "{#phases}", "{fee}", "{/phases}"])).unwrap();
        assert!(names.contains("date"));
        assert!(names.contains("phases"));
        assert!(names.contains("fee"));
    }
}
