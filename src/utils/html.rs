// src/utils/html.rs

use std::{borrow::Cow, sync::LazyLock};

use regex::{Captures, Regex};

/// Sandbox tokens for the frame that shows a sanitized document.
/// Same-origin only, so scripts stay disabled inside the frame.
pub const PREVIEW_SANDBOX: &str = "allow-same-origin";

const DOCUMENT_HEAD: &str = concat!(
    "<!DOCTYPE html>\n",
    "<html>\n",
    "<head>\n",
    "<meta charset=\"utf-8\">\n",
    "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    "<style>\n",
    "body { font-family: system-ui, sans-serif; padding: 1rem; margin: 0; }\n",
    "* { max-width: 100%; }\n",
    "</style>\n",
    "</head>\n",
    "<body>",
);

const DOCUMENT_TAIL: &str = "</body>\n</html>\n";

/// Removed together with their content when opened and closed.
const PAIRED_ELEMENTS: &[&str] = &["object", "embed"];

/// Removed as open/close pairs and in their self-closing form.
const METADATA_ELEMENTS: &[&str] = &["applet", "meta", "link"];
const FORM_ELEMENTS: &[&str] = &["form", "input", "textarea", "button", "select", "option"];

/// One `on…=` attribute, quoted or bare. An unterminated quote runs to the
/// end of input, a bare value up to whitespace or `>`.
const HANDLER: &str = r#"on\w+\s*=\s*(?:"[^"]*"?|'[^']*'?|[^"'\s>]*)"#;

/// Passes over the fragment before what is left gets escaped wholesale.
/// Ordinary markup settles in one or two.
const MAX_PASSES: usize = 4;

enum Rewrite {
    Delete(Regex),
    /// Deletes an `on…=` attribute. The captured separator is kept when it
    /// is the quote closing the previous attribute value; otherwise a single
    /// space stands in if the next attribute follows without one.
    DeleteHandler(Regex),
}

impl Rewrite {
    fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match self {
            Rewrite::Delete(re) => re.replace_all(text, ""),
            Rewrite::DeleteHandler(re) => re.replace_all(text, |caps: &Captures| match &caps[1] {
                quote @ ("\"" | "'") => quote.to_owned(),
                _ if joins_tokens(&text[caps.get_match().end()..]) => " ".to_owned(),
                _ => String::new(),
            }),
        }
    }
}

/// True when deleting up to `rest` would glue the previous token to the next.
fn joins_tokens(rest: &str) -> bool {
    rest.chars()
        .next()
        .is_some_and(|c| !(c.is_whitespace() || c == '/' || c == '>'))
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("sanitizer pattern must compile")
}

fn paired(tag: &str) -> Rewrite {
    Rewrite::Delete(compile(&format!(r"(?is)<{tag}\b[^>]*>.*?</{tag}\s*>")))
}

fn self_closing(tag: &str) -> Rewrite {
    Rewrite::Delete(compile(&format!(r"(?i)<{tag}\b[^>]*/>")))
}

static STAGES: LazyLock<Vec<Rewrite>> = LazyLock::new(|| {
    let mut stages = vec![
        // Whole script elements, each up to its own closing tag.
        Rewrite::Delete(compile(r"(?is)<script\b.*?</script\s*>")),
        // A run of handlers written back to back goes in one match.
        Rewrite::DeleteHandler(compile(&format!(
            r#"(?i)(^|[\s/"']){HANDLER}(?:[\s/]*{HANDLER})*"#
        ))),
        Rewrite::Delete(compile(r#"(?i)javascript:[^"'\s>]*"#)),
        Rewrite::Delete(compile(r#"(?i)data:[^"']*base64[^"']*"#)),
        Rewrite::Delete(compile(r#"(?i)vbscript:[^"'\s>]*"#)),
    ];

    stages.extend(PAIRED_ELEMENTS.iter().map(|tag| paired(tag)));
    for group in [METADATA_ELEMENTS, FORM_ELEMENTS] {
        stages.extend(group.iter().map(|tag| paired(tag)));
        stages.extend(group.iter().map(|tag| self_closing(tag)));
    }

    // Stray tags left by unterminated or badly nested elements. Their text
    // content stays behind as inert text.
    stages.push(Rewrite::Delete(compile(r"(?i)</?script[^>]*>?")));
    let residual = PAIRED_ELEMENTS
        .iter()
        .chain(METADATA_ELEMENTS)
        .chain(FORM_ELEMENTS)
        .copied()
        .collect::<Vec<_>>()
        .join("|");
    stages.push(Rewrite::Delete(compile(&format!(
        r"(?i)</?(?:{residual})\b[^>]*>?"
    ))));

    stages
});

/// Runs every stage once. `None` when no stage changed anything.
fn run_stages(fragment: &str) -> Option<String> {
    let mut current = Cow::Borrowed(fragment);
    for stage in STAGES.iter() {
        if let Cow::Owned(next) = stage.apply(&current) {
            current = Cow::Owned(next);
        }
    }
    match current {
        Cow::Borrowed(_) => None,
        Cow::Owned(next) => Some(next),
    }
}

/// Strips dangerous constructs from a candidate fragment.
///
/// The stages run in order, each on the output of the previous one, and
/// the whole pipeline repeats until nothing changes, so a deletion can
/// never splice together a new dangerous construct that survives.
///
/// Nesting built to outlast the pass budget (`<scr<scr<script>…`) is
/// escaped as text instead. Escaped text has no `<`, `=` or quotes, so
/// only the URL-scheme stages can still match and it settles at once.
pub fn sanitize_fragment(candidate: &str) -> String {
    let mut fragment = candidate.to_owned();
    for _ in 0..MAX_PASSES {
        match run_stages(&fragment) {
            Some(next) => fragment = next,
            None => return fragment,
        }
    }

    fragment = ammonia::clean_text(&fragment);
    while let Some(next) = run_stages(&fragment) {
        fragment = next;
    }
    fragment
}

/// Wraps a fragment in the standalone document rendered by the preview frame.
pub fn wrap_document(fragment: &str) -> String {
    format!("{DOCUMENT_HEAD}{fragment}{DOCUMENT_TAIL}")
}

/// Returns the fragment inside a document produced by [`wrap_document`].
pub fn document_body(document: &str) -> Option<&str> {
    document
        .strip_prefix(DOCUMENT_HEAD)?
        .strip_suffix(DOCUMENT_TAIL)
}

/// Sanitizes untrusted markup into a complete document.
///
/// Total over all input: malformed or partial markup is accepted and the
/// result is always a full document, even for an empty candidate.
pub fn sanitize(candidate: &str) -> String {
    wrap_document(&sanitize_fragment(candidate))
}
