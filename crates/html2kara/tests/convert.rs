use html2kara::{convert, contains_html, ConversionOptions, FormatterConfig, KaraConverter};

/// Join expected lines, each terminated by a newline
fn lines(expected: &[&str]) -> String {
    expected.iter().map(|line| format!("{line}\n")).collect()
}

fn run(html: &str) -> String {
    convert(html, &ConversionOptions::default(), &FormatterConfig::default()).unwrap()
}

fn run_with_links(html: &str) -> String {
    let options = ConversionOptions {
        href_to_direct_link: true,
    };
    convert(html, &options, &FormatterConfig::default()).unwrap()
}

#[test]
fn simple_text() {
    assert_eq!(
        run("<div> text </div>"),
        lines(&["div {", "\t+\"text\"", "}"])
    );
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(
        run("\n    <div> text </div>\n  "),
        lines(&["div {", "\t+\"text\"", "}"])
    );
}

#[test]
fn several_lines_of_text() {
    let html = "<div>\n    line1\n    line2\n</div>";
    assert_eq!(
        run(html),
        lines(&["div {", "\t\"\"\"", "\t\tline1", "\t\tline2", "\t\"\"\"", "}"])
    );
}

#[test]
fn class_style() {
    assert_eq!(
        run(r#"<div class = "class-1"> text </div>"#),
        lines(&["div(c = class_1) {", "\t+\"text\"", "}"])
    );
    assert_eq!(
        run(r#"<div class = "class-1 btn-info"> text </div>"#),
        lines(&["div(c = class_1 + btn_info) {", "\t+\"text\"", "}"])
    );
}

#[test]
fn comment() {
    assert_eq!(run("<!-- Comment -->"), lines(&["/*", "\tComment", "*/"]));
}

#[test]
fn multi_line_text_is_escaped() {
    let html = "<p>a \"q\" $x\nb\\c</p>";
    assert_eq!(
        run(html),
        lines(&["p {", "\t\"\"\"", "\t\ta \\\"q\\\" \\$x", "\t\tb\\\\c", "\t\"\"\"", "}"])
    );
}

#[test]
fn multi_line_comment_is_not_escaped() {
    assert_eq!(
        run("<!--\n  costs $5\n  \"quoted\"\n-->"),
        lines(&["/*", "\tcosts $5", "\t\"quoted\"", "*/"])
    );
}

#[test]
fn input_type_attribute() {
    assert_eq!(
        run(r#"<button type="submit">Submit</button>"#),
        lines(&["button(inputType = InputType.submit) {", "\t+\"Submit\"", "}"])
    );
}

#[test]
fn several_attributes() {
    assert_eq!(
        run(r#"<button type="submit" class = "class-1 btn-info">Submit</button>"#),
        lines(&[
            "button(inputType = InputType.submit, c = class_1 + btn_info) {",
            "\t+\"Submit\"",
            "}",
        ])
    );
}

#[test]
fn href_attribute() {
    assert_eq!(
        run(r##"<a href="#">Link</a>"##),
        lines(&["a(href = \"#\") {", "\t+\"Link\"", "}"])
    );
    assert_eq!(
        run_with_links(r##"<a href="#">Link</a>"##),
        lines(&["a(href = DirectLink(\"#\")) {", "\t+\"Link\"", "}"])
    );
}

#[test]
fn for_attribute() {
    assert_eq!(
        run(r#"<label for="inputId">Label</label>"#),
        lines(&["label(forId = \"inputId\") {", "\t+\"Label\"", "}"])
    );
}

#[test]
fn childless_elements_have_no_block() {
    assert_eq!(
        run(r#"<img src="a.png" alt="A"/><br><p></p>"#),
        lines(&["img(src = \"a.png\", alt = \"A\")", "br", "p"])
    );
}

#[test]
fn whitespace_between_siblings_emits_nothing() {
    assert_eq!(
        run("<ul>\n  <li>one</li>\n  <li>two</li>\n</ul>"),
        lines(&[
            "ul {",
            "\tli {",
            "\t\t+\"one\"",
            "\t}",
            "\tli {",
            "\t\t+\"two\"",
            "\t}",
            "}",
        ])
    );
}

#[test]
fn all_whitespace_input_is_empty() {
    for input in ["", " ", "\n\t  \n", "   \r\n  "] {
        assert_eq!(run(input), "", "input {input:?}");
    }
}

#[test]
fn plain_text_fragment() {
    assert_eq!(run("just some words"), lines(&["+\"just some words\""]));
}

#[test]
fn entities_are_decoded_and_escaped() {
    assert_eq!(
        run("<p>&quot;$x&quot; &amp; y</p>"),
        lines(&["p {", "\t+\"\\\"\\$x\\\" & y\"", "}"])
    );
}

#[test]
fn style_content_is_raw_data() {
    assert_eq!(
        run("<style>\n  p { color: red; }\n</style>"),
        lines(&["style {", "\t\"\"\"", "\t\tp { color: red; }", "\t\"\"\"", "}"])
    );
}

#[test]
fn full_document_emits_head_and_body() {
    let html = "<!DOCTYPE html><html><head><title>T</title></head><body><p>Hi</p></body></html>";
    assert_eq!(
        run(html),
        lines(&[
            "head {",
            "\ttitle {",
            "\t\t+\"T\"",
            "\t}",
            "}",
            "body {",
            "\tp {",
            "\t\t+\"Hi\"",
            "\t}",
            "}",
        ])
    );
}

#[test]
fn body_tag_detection_is_case_insensitive() {
    for html in ["<BODY><br></BODY>", "<body ><br></body>", "<Body><br></Body>"] {
        assert_eq!(run(html), lines(&["head", "body {", "\tbr", "}"]), "{html}");
    }
}

#[test]
fn base_indent_depth_offsets_everything() {
    let formatter = FormatterConfig::new("    ", "\n", 2).unwrap();
    let result = convert(
        "<div><!-- c --><span>x</span></div>",
        &ConversionOptions::default(),
        &formatter,
    )
    .unwrap();

    let pad = "        ";
    let expected: String = [
        "div {",
        "    /*",
        "        c",
        "    */",
        "    span {",
        "        +\"x\"",
        "    }",
        "}",
    ]
    .iter()
    .map(|line| format!("{pad}{line}\n"))
    .collect();
    assert_eq!(result, expected);
}

#[test]
fn invalid_formatter_is_rejected() {
    let formatter = FormatterConfig {
        line_break: String::new(),
        ..Default::default()
    };
    assert!(convert("<p>x</p>", &ConversionOptions::default(), &formatter).is_err());
}

#[test]
fn contains_html_classification() {
    assert!(contains_html("<div>x</div>"));
    assert!(contains_html("<BODY>"));
    assert!(!contains_html("plain prose, no tags"));
}

#[test]
fn parallel_conversions() {
    let converter = KaraConverter::new();
    let expected = lines(&["div {", "\t+\"text\"", "}"]);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| converter.convert("<div> text </div>")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn deeply_nested_input() {
    let depth = 20_000;
    let html = format!("{}x{}", "<div>".repeat(depth), "</div>".repeat(depth));
    let formatter = FormatterConfig::new("", "\n", 0).unwrap();
    let result = convert(&html, &ConversionOptions::default(), &formatter).unwrap();

    assert_eq!(result.lines().count(), 2 * depth + 1);
    assert_eq!(result.lines().next(), Some("div {"));
    assert!(result.contains("\n+\"x\"\n"));
    assert!(result.ends_with("}\n"));
}
