// tests/sanitizer_tests.rs

use std::time::{Duration, Instant};

use doner_preview::{
    RiskReason, RiskVerdict, classify, config::Config, sanitize, sanitize_fragment,
    utils::html::document_body,
};

const SCRIPT_INPUTS: &[&str] = &[
    "<script>alert(1)</script>",
    "<SCRIPT>alert(1)</SCRIPT>",
    "<ScRiPt src=\"https://evil.example/x.js\"></sCrIpT>",
    "<p>a</p><script>\nlet x = '<b>';\n</script><p>b</p>",
    "<script>unterminated",
    "<div><script>one()</script><script>two()</script></div>",
    "<scr<script>x</script>ipt>alert(1)</script>",
];

const SAFE_INPUTS: &[&str] = &[
    "",
    "<p>hello</p>",
    "<h1>Willkommen!</h1>\n<ul>\n  <li>Erstes Element</li>\n  <li>Zweites Element</li>\n</ul>",
    "<a href=\"https://example.org\" title=\"Beispiel\">Link</a>",
    "<table><tr><td>1</td><td>2</td></tr></table>",
    "Text ohne Markup & mit Umlauten: äöü",
];

fn has_script_tag(text: &str) -> bool {
    text.to_lowercase().contains("<script")
}

#[test]
fn script_tags_are_flagged_and_removed() {
    for html in SCRIPT_INPUTS {
        assert_eq!(
            classify(html),
            RiskVerdict::Risk(RiskReason::ScriptTag),
            "{html}"
        );
        assert!(!has_script_tag(&sanitize(html)), "{html}");
    }
}

#[test]
fn event_handler_attributes_are_removed_in_place() {
    let cases = [
        (r#"<img src=x onerror="alert(1)">"#, "<img src=x>"),
        (r#"<div class="a" onclick='go()'>t</div>"#, r#"<div class="a">t</div>"#),
        ("<body onload=init()>t</body>", "<body>t</body>"),
        (r#"<p onmouseover = "x" id="p1">t</p>"#, r#"<p id="p1">t</p>"#),
        (r#"<img src=x onerror="a"onload="b">"#, "<img src=x>"),
        (r#"<a onclick="x"onmouseover="y">t</a>"#, "<a>t</a>"),
    ];

    for (html, expected) in cases {
        assert_eq!(
            classify(html),
            RiskVerdict::Risk(RiskReason::EventHandler),
            "{html}"
        );
        assert_eq!(document_body(&sanitize(html)), Some(expected), "{html}");
    }
}

#[test]
fn safe_inputs_are_untouched() {
    for html in SAFE_INPUTS {
        assert_eq!(classify(html), RiskVerdict::NoRisk, "{html}");
        assert_eq!(document_body(&sanitize(html)), Some(*html), "{html}");
    }
}

#[test]
fn sanitizing_clean_output_changes_nothing() {
    for html in SAFE_INPUTS.iter().chain(SCRIPT_INPUTS) {
        let document = sanitize(html);
        let body = document_body(&document).expect("document shell");
        assert_eq!(sanitize_fragment(body), body, "{html}");
    }
}

#[test]
fn output_is_always_a_document() {
    let inputs = [
        "",
        "<",
        "<<>>",
        "</p>",
        "<div",
        "\"'",
        "<object><object>",
        "onclick=",
        "\u{0}\u{feff}",
    ];
    for html in inputs {
        let document = sanitize(html);
        assert!(
            document.to_lowercase().starts_with("<!doctype html>"),
            "{html:?}"
        );
        assert!(document.trim_end().ends_with("</html>"), "{html:?}");
    }
}

#[test]
fn script_outranks_javascript_url() {
    let html = r#"<a href="javascript:alert(1)">x</a><script>y()</script>"#;
    assert_eq!(classify(html), RiskVerdict::Risk(RiskReason::ScriptTag));
}

#[test]
fn javascript_url_is_reported_and_stripped() {
    let html = r#"<a href="javascript:alert(1)">click</a>"#;
    assert_eq!(classify(html), RiskVerdict::Risk(RiskReason::JavascriptUrl));

    let document = sanitize(html);
    assert!(!document.contains("javascript:alert(1)"));
    assert!(document.contains(r#"<a href="">click</a>"#));
}

#[test]
fn form_elements_are_reported_and_removed() {
    let html = r#"<form><input type="text"></form>"#;
    assert_eq!(
        classify(html),
        RiskVerdict::Risk(RiskReason::DangerousElement)
    );

    let document = sanitize(html);
    assert!(!document.contains("<form"));
    assert!(!document.contains("<input"));
}

#[test]
fn empty_input_gives_empty_body() {
    assert_eq!(classify(""), RiskVerdict::NoRisk);
    assert_eq!(document_body(&sanitize("")), Some(""));
}

#[test]
fn repeated_calls_agree() {
    for html in SAFE_INPUTS.iter().chain(SCRIPT_INPUTS) {
        assert_eq!(classify(html), classify(html));
        assert_eq!(sanitize(html), sanitize(html));
    }
}

#[test]
fn deeply_nested_script_splices_finish_quickly() {
    // Every removal of the inner pair splices one more `<script>` together.
    let depth = 6000;
    let html = format!(
        "{}<script></script>{}",
        "<scr".repeat(depth),
        "ipt></script>".repeat(depth)
    );
    assert!(html.len() <= Config::default().max_input_bytes);

    let started = Instant::now();
    let document = sanitize(&html);
    let elapsed = started.elapsed();

    assert!(elapsed < Duration::from_secs(5), "took {elapsed:?}");
    assert!(!has_script_tag(&document));
    let body = document_body(&document).expect("document shell");
    assert_eq!(sanitize_fragment(body), body);
}
