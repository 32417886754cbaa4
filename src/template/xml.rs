// src/template/xml.rs

//! WordprocessingML chunking.
//!
//! A document part is split into markup and run text (`<w:t>` content).
//! Word freely splits typed text across runs, so a placeholder such as
//! `{client_name}` may arrive as `{client_` + `name}`. `merge_split_tags`
//! moves every tag into the text chunk where it starts.

use crate::error::{PlaceholderError, PlaceholderErrorKind};

pub const TAG_OPEN: char = '{';
pub const TAG_CLOSE: char = '}';

const PRESERVE_TEXT_OPEN: &str = r#"<w:t xml:space="preserve">"#;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Chunk {
    Markup(String),
    /// Raw (still XML-escaped) text of a `<w:t>` element.
    Text(String),
    ParaStart(String),
    ParaEnd(String),
}

/// Split a part into chunks. Bare `<w:t>` openers are rewritten to preserve
/// whitespace, since substituted values often start or end with spaces.
pub fn chunk_part(xml: &str) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut pos = 0;
    let mut in_text = false;

    while pos < xml.len() {
        let Some(rel) = xml[pos..].find('<') else {
            push_between(&mut chunks, &xml[pos..], in_text);
            break;
        };
        let start = pos + rel;
        if start > pos {
            push_between(&mut chunks, &xml[pos..start], in_text);
        }

        let end = match xml[start..].find('>') {
            Some(rel_end) => start + rel_end + 1,
            None => {
                chunks.push(Chunk::Markup(xml[start..].to_string()));
                break;
            }
        };
        let tag = &xml[start..end];

        if is_element_open(tag, "w:t") {
            in_text = true;
            let opener = if tag == "<w:t>" { PRESERVE_TEXT_OPEN } else { tag };
            chunks.push(Chunk::Markup(opener.to_string()));
        } else if tag == "</w:t>" {
            in_text = false;
            chunks.push(Chunk::Markup(tag.to_string()));
        } else if is_element_open(tag, "w:p") {
            chunks.push(Chunk::ParaStart(tag.to_string()));
        } else if tag == "</w:p>" {
            chunks.push(Chunk::ParaEnd(tag.to_string()));
        } else {
            chunks.push(Chunk::Markup(tag.to_string()));
        }

        pos = end;
    }

    chunks
}

fn push_between(chunks: &mut Vec<Chunk>, s: &str, in_text: bool) {
    if in_text {
        chunks.push(Chunk::Text(s.to_string()));
    } else {
        chunks.push(Chunk::Markup(s.to_string()));
    }
}

/// `<name>` or `<name attr=..>`, excluding self-closing elements and longer
/// names sharing the prefix (`<w:tab/>`, `<w:pPr>`).
fn is_element_open(tag: &str, name: &str) -> bool {
    let Some(rest) = tag.strip_prefix('<').and_then(|t| t.strip_prefix(name)) else {
        return false;
    };
    if tag.ends_with("/>") {
        return false;
    }
    matches!(rest.chars().next(), Some('>') | Some(' ') | Some('\t') | Some('\n'))
}

/// Gather each `{...}` into the text chunk holding its opening delimiter.
pub fn merge_split_tags(chunks: &mut [Chunk], part: &str, errors: &mut Vec<PlaceholderError>) {
    let text_slots: Vec<usize> = chunks
        .iter()
        .enumerate()
        .filter(|(_, c)| matches!(c, Chunk::Text(_)))
        .map(|(i, _)| i)
        .collect();

    let mut texts: Vec<String> = text_slots
        .iter()
        .map(|&i| match &mut chunks[i] {
            Chunk::Text(s) => std::mem::take(s),
            _ => String::new(),
        })
        .collect();

    // (owning slot, tag text so far)
    let mut open: Option<(usize, String)> = None;

    for slot in 0..texts.len() {
        let src = std::mem::take(&mut texts[slot]);

        for ch in src.chars() {
            match open.as_mut() {
                None => {
                    texts[slot].push(ch);
                    if ch == TAG_OPEN {
                        open = Some((slot, String::new()));
                    } else if ch == TAG_CLOSE {
                        errors.push(PlaceholderError {
                            kind: PlaceholderErrorKind::UnopenedTag,
                            tag: trailing_context(&texts[slot]),
                            part: part.to_string(),
                        });
                    }
                }
                Some((owner, body)) => {
                    if ch == TAG_OPEN {
                        errors.push(PlaceholderError {
                            kind: PlaceholderErrorKind::UnclosedTag,
                            tag: body.clone(),
                            part: part.to_string(),
                        });
                        texts[slot].push(ch);
                        open = Some((slot, String::new()));
                        continue;
                    }

                    let owner = *owner;
                    texts[owner].push(ch);
                    if ch == TAG_CLOSE {
                        open = None;
                    } else {
                        body.push(ch);
                    }
                }
            }
        }
    }

    if let Some((_, body)) = open {
        errors.push(PlaceholderError {
            kind: PlaceholderErrorKind::UnclosedTag,
            tag: body,
            part: part.to_string(),
        });
    }

    for (slot, text) in text_slots.into_iter().zip(texts) {
        chunks[slot] = Chunk::Text(text);
    }
}

fn trailing_context(s: &str) -> String {
    let start = s
        .char_indices()
        .rev()
        .nth(20)
        .map(|(i, _)| i)
        .unwrap_or(0);
    s[start..].trim_end_matches(TAG_CLOSE).to_string()
}

/// Escape a substituted value for element content.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(chunks: &[Chunk]) -> Vec<&str> {
        chunks
            .iter()
            .filter_map(|c| match c {
                Chunk::Text(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn chunks_runs_and_paragraphs() {
        let xml = r#"<w:p><w:pPr/><w:r><w:t>Hi {name}</w:t></w:r><w:r><w:tab/></w:r></w:p>"#;
        let c = chunk_part(xml);

        assert_eq!(c[0], Chunk::ParaStart("<w:p>".into()));
        assert_eq!(c[1], Chunk::Markup("<w:pPr/>".into()));
        assert_eq!(
            c[3],
            Chunk::Markup(r#"<w:t xml:space="preserve">"#.into())
        );
        assert_eq!(texts(&c), vec!["Hi {name}"]);
        assert!(c.contains(&Chunk::Markup("<w:tab/>".into())));
        assert_eq!(c.last(), Some(&Chunk::ParaEnd("</w:p>".into())));
    }

    #[test]
    fn paragraph_properties_are_not_paragraphs() {
        let c = chunk_part(r#"<w:p w:rsidR="00A1"><w:pPr><w:jc w:val="left"/></w:pPr></w:p>"#);
        assert_eq!(c[0], Chunk::ParaStart(r#"<w:p w:rsidR="00A1">"#.into()));
        assert_eq!(c[1], Chunk::Markup("<w:pPr>".into()));
    }

    #[test]
    fn merges_tag_split_over_three_runs() {
        let xml = "<w:p><w:r><w:t>Dear {client_</w:t></w:r><w:r><w:t>first_</w:t></w:r><w:r><w:t>name},</w:t></w:r></w:p>";
        let mut c = chunk_part(xml);
        let mut errs = Vec::new();
        merge_split_tags(&mut c, "word/document.xml", &mut errs);

        assert!(errs.is_empty());
        assert_eq!(texts(&c), vec!["Dear {client_first_name}", "", ","]);
    }

    #[test]
    fn reports_unclosed_and_unopened_tags() {
        let mut c = vec![Chunk::Text("a } b {open".into())];
        let mut errs = Vec::new();
        merge_split_tags(&mut c, "p", &mut errs);

        assert_eq!(errs.len(), 2);
        assert_eq!(errs[0].kind, PlaceholderErrorKind::UnopenedTag);
        assert_eq!(errs[1].kind, PlaceholderErrorKind::UnclosedTag);
        assert_eq!(errs[1].tag, "open");
    }

    #[test]
    fn escape() {
        assert_eq!(escape_text(r#"A&B <"x">'"#), "A&amp;B &lt;&quot;x&quot;&gt;&apos;");
    }
}
