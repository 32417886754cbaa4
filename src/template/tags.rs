// src/template/tags.rs

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{PlaceholderError, PlaceholderErrorKind};

use super::xml::{Chunk, TAG_CLOSE, TAG_OPEN};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tag {
    /// `{name}` or `{.}`
    Scalar(String),
    /// `{#name}`
    Open(String),
    /// `{^name}`
    Inverted(String),
    /// `{/name}`; empty name for `{/}`
    Close(String),
}

impl Tag {
    fn is_section_boundary(&self) -> bool {
        !matches!(self, Tag::Scalar(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Markup(String),
    Text(String),
    Tag(Tag),
    ParaStart(String),
    ParaEnd(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Markup(String),
    Text(String),
    Scalar(String),
    Section {
        name: String,
        inverted: bool,
        body: Vec<Node>,
    },
}

/// Split merged text chunks into literal text and tags.
pub fn tokenize(chunks: Vec<Chunk>, part: &str, errors: &mut Vec<PlaceholderError>) -> Vec<Token> {
    let mut out = Vec::with_capacity(chunks.len());

    for chunk in chunks {
        match chunk {
            Chunk::Markup(s) => out.push(Token::Markup(s)),
            Chunk::ParaStart(s) => out.push(Token::ParaStart(s)),
            Chunk::ParaEnd(s) => out.push(Token::ParaEnd(s)),
            Chunk::Text(s) => split_text(&s, part, &mut out, errors),
        }
    }

    out
}

fn split_text(s: &str, part: &str, out: &mut Vec<Token>, errors: &mut Vec<PlaceholderError>) {
    let mut rest = s;

    while let Some(open) = rest.find(TAG_OPEN) {
        let Some(close_rel) = rest[open..].find(TAG_CLOSE) else {
            // already reported while merging runs
            out.push(Token::Text(rest.to_string()));
            return;
        };
        let close = open + close_rel;

        if open > 0 {
            out.push(Token::Text(rest[..open].to_string()));
        }

        match parse_tag(&rest[open + 1..close]) {
            Some(tag) => out.push(Token::Tag(tag)),
            None => errors.push(PlaceholderError {
                kind: PlaceholderErrorKind::EmptyTag,
                tag: String::new(),
                part: part.to_string(),
            }),
        }

        rest = &rest[close + 1..];
    }

    if !rest.is_empty() {
        out.push(Token::Text(rest.to_string()));
    }
}

fn parse_tag(raw: &str) -> Option<Tag> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let tag = if let Some(name) = raw.strip_prefix('#') {
        Tag::Open(name.trim().to_string())
    } else if let Some(name) = raw.strip_prefix('^') {
        Tag::Inverted(name.trim().to_string())
    } else if let Some(name) = raw.strip_prefix('/') {
        Tag::Close(name.trim().to_string())
    } else {
        Tag::Scalar(raw.to_string())
    };
    Some(tag)
}

/// When both tags of a section sit alone in their own paragraphs, those two
/// paragraphs are replaced by the bare tags, so the section repeats whole
/// paragraphs instead of leaving empty ones behind. A section with either
/// tag sharing its paragraph stays inline.
pub fn collapse_section_paragraphs(tokens: Vec<Token>) -> Vec<Token> {
    // tag index -> (start, end) of the paragraph it sits alone in
    let mut sole_paras: BTreeMap<usize, (usize, usize)> = BTreeMap::new();
    let mut open_paras: Vec<usize> = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::ParaStart(_) => open_paras.push(i),
            Token::ParaEnd(_) => {
                let Some(start) = open_paras.pop() else {
                    continue;
                };
                if let Some(tag_idx) = sole_section_tag(&tokens[start..=i]) {
                    sole_paras.insert(start + tag_idx, (start, i));
                }
            }
            _ => {}
        }
    }

    let mut keep = vec![true; tokens.len()];
    let mut open_tags: Vec<usize> = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::Tag(Tag::Open(_) | Tag::Inverted(_)) => open_tags.push(i),
            Token::Tag(Tag::Close(_)) => {
                let Some(open) = open_tags.pop() else {
                    continue;
                };
                let (Some(&open_para), Some(&close_para)) =
                    (sole_paras.get(&open), sole_paras.get(&i))
                else {
                    continue;
                };
                for (tag, (start, end)) in [(open, open_para), (i, close_para)] {
                    keep[start..=end].fill(false);
                    keep[tag] = true;
                }
            }
            _ => {}
        }
    }

    tokens
        .into_iter()
        .zip(keep)
        .filter_map(|(t, k)| k.then_some(t))
        .collect()
}

fn sole_section_tag(para: &[Token]) -> Option<usize> {
    let mut found = None;

    for (i, t) in para.iter().enumerate() {
        match t {
            Token::Tag(tag) if tag.is_section_boundary() => {
                if found.is_some() {
                    return None;
                }
                found = Some(i);
            }
            Token::Tag(_) => return None,
            Token::Text(s) if !s.trim().is_empty() => return None,
            _ => {}
        }
    }

    found
}

/// Build the section tree. Structural faults are reported and parsing goes
/// on, so a single pass lists every problem in the part.
pub fn parse_nodes(tokens: Vec<Token>, part: &str, errors: &mut Vec<PlaceholderError>) -> Vec<Node> {
    // (name, inverted, body) per open section; index 0 is the root
    let mut stack: Vec<(String, bool, Vec<Node>)> = vec![(String::new(), false, Vec::new())];

    for token in tokens {
        let node = match token {
            Token::Markup(s) | Token::ParaStart(s) | Token::ParaEnd(s) => Node::Markup(s),
            Token::Text(s) => Node::Text(s),
            Token::Tag(Tag::Scalar(name)) => Node::Scalar(name),
            Token::Tag(Tag::Open(name)) => {
                stack.push((name, false, Vec::new()));
                continue;
            }
            Token::Tag(Tag::Inverted(name)) => {
                stack.push((name, true, Vec::new()));
                continue;
            }
            Token::Tag(Tag::Close(name)) => {
                if stack.len() == 1 {
                    errors.push(PlaceholderError {
                        kind: PlaceholderErrorKind::UnopenedSection,
                        tag: name,
                        part: part.to_string(),
                    });
                    continue;
                }

                let (open_name, inverted, body) = stack.pop().unwrap_or_default();
                if !name.is_empty() && name != open_name {
                    errors.push(PlaceholderError {
                        kind: PlaceholderErrorKind::MismatchedSection {
                            open: open_name.clone(),
                            close: name.clone(),
                        },
                        tag: name,
                        part: part.to_string(),
                    });
                }

                Node::Section {
                    name: open_name,
                    inverted,
                    body,
                }
            }
        };

        if let Some(top) = stack.last_mut() {
            top.2.push(node);
        }
    }

    while stack.len() > 1 {
        let (name, inverted, body) = stack.pop().unwrap_or_default();
        errors.push(PlaceholderError {
            kind: PlaceholderErrorKind::UnclosedSection,
            tag: name.clone(),
            part: part.to_string(),
        });
        if let Some(top) = stack.last_mut() {
            top.2.push(Node::Section {
                name,
                inverted,
                body,
            });
        }
    }

    stack.pop().map(|(_, _, body)| body).unwrap_or_default()
}

/// Every placeholder and section name used in `nodes`.
pub fn referenced_names(nodes: &[Node]) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    collect_names(nodes, &mut out);
    out
}

fn collect_names(nodes: &[Node], out: &mut BTreeSet<String>) {
    for n in nodes {
        match n {
            Node::Scalar(name) if name != "." => {
                out.insert(name.clone());
            }
            Node::Section { name, body, .. } => {
                out.insert(name.clone());
                collect_names(body, out);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_chunks(s: &str) -> Vec<Chunk> {
        vec![Chunk::Text(s.to_string())]
    }

    #[test]
    fn tokenizes_tag_kinds() {
        let mut errs = Vec::new();
        let t = tokenize(text_chunks("a{x}{#s}{^n}{/s}{/}{ . }"), "p", &mut errs);
        assert!(errs.is_empty());
        assert_eq!(
            t,
            vec![
                Token::Text("a".into()),
                Token::Tag(Tag::Scalar("x".into())),
                Token::Tag(Tag::Open("s".into())),
                Token::Tag(Tag::Inverted("n".into())),
                Token::Tag(Tag::Close("s".into())),
                Token::Tag(Tag::Close("".into())),
                Token::Tag(Tag::Scalar(".".into())),
            ]
        );
    }

    #[test]
    fn empty_tag_is_an_error() {
        let mut errs = Vec::new();
        tokenize(text_chunks("a{ }b"), "p", &mut errs);
        assert_eq!(errs[0].kind, PlaceholderErrorKind::EmptyTag);
    }

    #[test]
    fn section_paragraphs_collapse_to_their_tag() {
        let tokens = vec![
            Token::ParaStart("<w:p>".into()),
            Token::Markup("<w:r><w:t>".into()),
            Token::Tag(Tag::Open("phases".into())),
            Token::Markup("</w:t></w:r>".into()),
            Token::ParaEnd("</w:p>".into()),
            Token::ParaStart("<w:p>".into()),
            Token::Tag(Tag::Scalar("name".into())),
            Token::ParaEnd("</w:p>".into()),
            Token::ParaStart("<w:p>".into()),
            Token::Text("  ".into()),
            Token::Tag(Tag::Close("phases".into())),
            Token::ParaEnd("</w:p>".into()),
        ];

        let out = collapse_section_paragraphs(tokens);
        assert_eq!(
            out,
            vec![
                Token::Tag(Tag::Open("phases".into())),
                Token::ParaStart("<w:p>".into()),
                Token::Tag(Tag::Scalar("name".into())),
                Token::ParaEnd("</w:p>".into()),
                Token::Tag(Tag::Close("phases".into())),
            ]
        );
    }

    #[test]
    fn inline_sections_are_left_in_place() {
        let tokens = vec![
            Token::ParaStart("<w:p>".into()),
            Token::Text("Fee: ".into()),
            Token::Tag(Tag::Open("is_hourly_nte".into())),
            Token::Text("NTE".into()),
            Token::Tag(Tag::Close("is_hourly_nte".into())),
            Token::ParaEnd("</w:p>".into()),
        ];
        let out = collapse_section_paragraphs(tokens.clone());
        assert_eq!(out, tokens);
    }

    #[test]
    fn section_with_one_inline_tag_keeps_both_paragraphs() {
        let tokens = vec![
            Token::ParaStart("<w:p>".into()),
            Token::Tag(Tag::Open("include_plumbing".into())),
            Token::ParaEnd("</w:p>".into()),
            Token::ParaStart("<w:p>".into()),
            Token::Text("Plumbing text".into()),
            Token::Tag(Tag::Close("include_plumbing".into())),
            Token::ParaEnd("</w:p>".into()),
        ];
        let out = collapse_section_paragraphs(tokens.clone());
        assert_eq!(out, tokens);
    }

    #[test]
    fn unmatched_section_tag_is_not_collapsed() {
        let tokens = vec![
            Token::ParaStart("<w:p>".into()),
            Token::Tag(Tag::Open("phases".into())),
            Token::ParaEnd("</w:p>".into()),
        ];
        let out = collapse_section_paragraphs(tokens.clone());
        assert_eq!(out, tokens);
    }

    #[test]
    fn nested_sections_parse() {
        let mut errs = Vec::new();
        let tokens = tokenize(text_chunks("{#a}x{^b}y{/b}{/a}"), "p", &mut errs);
        let nodes = parse_nodes(tokens, "p", &mut errs);

        assert!(errs.is_empty());
        assert_eq!(
            nodes,
            vec![Node::Section {
                name: "a".into(),
                inverted: false,
                body: vec![
                    Node::Text("x".into()),
                    Node::Section {
                        name: "b".into(),
                        inverted: true,
                        body: vec![Node::Text("y".into())],
                    },
                ],
            }]
        );
    }

    #[test]
    fn structural_faults_are_all_reported() {
        let mut errs = Vec::new();
        let tokens = tokenize(text_chunks("{/stray}{#a}{/b}{#c}"), "p", &mut errs);
        parse_nodes(tokens, "p", &mut errs);

        let kinds: Vec<_> = errs.iter().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                PlaceholderErrorKind::UnopenedSection,
                PlaceholderErrorKind::MismatchedSection {
                    open: "a".into(),
                    close: "b".into()
                },
                PlaceholderErrorKind::UnclosedSection,
            ]
        );
    }

    #[test]
    fn names_are_collected() {
        let mut errs = Vec::new();
        let tokens = tokenize(text_chunks("{date}{#phases}{name}{.}{/}"), "p", &mut errs);
        let nodes = parse_nodes(tokens, "p", &mut errs);
        let names: Vec<_> = referenced_names(&nodes).into_iter().collect();
        assert_eq!(names, vec!["date", "name", "phases"]);
    }
}
