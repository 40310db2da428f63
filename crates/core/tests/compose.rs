use tgmd_core::{
    CONTROL_CHARS, Message, MarkupError, Part, SendMessage, escape, evaluate, markdown_v2, md,
    template,
};

#[test]
fn literal_markup_is_escaped() {
    assert_eq!(markdown_v2!["*bold*"], r"\*bold\*");
    assert_eq!(markdown_v2!["*bold* ", md::bold("text")], r"\*bold\* *text*");
    assert_eq!(markdown_v2!["Hello world"], "Hello world");
    assert_eq!(markdown_v2!["*_italic_*"], r"\*\_italic\_\*");
}

#[test]
fn escape_covers_every_control_char() {
    let all: String = CONTROL_CHARS.iter().collect();
    let escaped = escape(&all);
    let mut chars = escaped.as_str().chars();
    for expected in CONTROL_CHARS {
        assert_eq!(chars.next(), Some('\\'));
        assert_eq!(chars.next(), Some(expected));
    }
    assert_eq!(chars.next(), None);
    assert_eq!(markdown_v2![all.as_str()], escaped.as_str());
}

#[test]
fn safe_fragments_are_never_escaped_twice() {
    assert_eq!(markdown_v2![md::bold("_italic_")], r"*\_italic\_*");
    assert_eq!(markdown_v2![md::bold(escape("_italic_"))], r"*\_italic\_*");

    let raw = "1+1=2. (yes!)";
    let once = escape(raw);
    for wrapped in [
        md::bold(&once).into_string(),
        md::italic(&once).into_string(),
        md::underline(&once).into_string(),
        md::strikethrough(&once).into_string(),
        md::spoiler(&once).into_string(),
        md::inline_code(&once).into_string(),
        md::inline_url("https://example.com").text(&once).into_string(),
        md::inline_mention(1).text(&once).into_string(),
        md::block_quote(&once).into_string(),
        md::expandable_block_quote(&once).into_string(),
    ] {
        assert!(wrapped.contains(once.as_str()));
        assert!(!wrapped.contains(r"\\"));
    }
}

#[test]
fn nesting_composes_both_ways() {
    assert_eq!(md::bold(md::italic("x")).as_str(), "*_x_*");
    assert_eq!(md::italic(md::bold("x")).as_str(), "_*x*_");
    assert_eq!(
        markdown_v2!["Hello ", md::bold(md::strikethrough("world")), "!"],
        r"Hello *~world~*\!"
    );
    assert_eq!(
        markdown_v2![
            "Hello ",
            md::strikethrough(md::inline_url("https://example.com").text("world")),
            "!"
        ],
        r"Hello ~[world](https://example.com)~\!"
    );
}

#[test]
fn mixed_interpolation_with_trailing_code_block() {
    let literals = [
        "\n            *bold* ",
        " \n            zel ",
        " \n            kel ",
        " \n            dsdsd ",
        " \n            dsdsd ",
        " \n            dsdsd ",
        "\n        ",
    ];
    let values = [
        Part::from(md::bold("text")),
        Part::from(md::italic("italic")),
        Part::from(md::underline("underline")),
        Part::from(md::strikethrough("strikethrough")),
        Part::from(md::inline_code("code")),
        Part::from(md::code_block("code block", None)),
    ];
    let expected = concat!(
        "\n            \\*bold\\* *text* ",
        "\n            zel _italic_ ",
        "\n            kel __underline__ ",
        "\n            dsdsd ~strikethrough~ ",
        "\n            dsdsd `code` ",
        "\n            dsdsd",
        "\n```\ncode block\n```",
        "\n        ",
    );
    assert_eq!(evaluate(&literals, values).unwrap(), expected);
}

#[test]
fn block_quote_after_text_starts_a_new_line() {
    assert_eq!(
        markdown_v2!["Summary:   ", md::block_quote("a\nb")],
        "Summary:\n>a\n>b"
    );
    assert_eq!(
        markdown_v2!["Summary:\n", md::block_quote("a")],
        "Summary:\n>a"
    );
}

#[test]
fn expandable_quote_inside_message() {
    let quote = md::expandable_block_quote(template![
        "Hello ",
        md::bold("world"),
        "\ntralala\nsd"
    ]);
    let text = markdown_v2!["\n    test\n    ", quote, "test\n    "];
    assert_eq!(
        text,
        "\n    test\n**>Hello *world*\n>tralala\n>sd||\ntest\n    "
    );
}

#[test]
fn expandable_quote_structure() {
    let quote = md::expandable_block_quote("a\nb\nc");
    let text = quote.as_str();
    assert!(text.starts_with("**>a"));
    assert!(text.contains("\n>b\n"));
    assert!(text.contains("\n>c"));
    assert!(text.ends_with("||\n"));

    assert_eq!(md::expandable_block_quote("").as_str(), "**>||\n");
}

#[test]
fn message_builder_matches_macro() {
    let mut message = Message::new();
    message
        .push("Deploy ")
        .push(md::bold("v1.2"))
        .push(" to ")
        .push(md::inline_code("prod-eu"))
        .push(md::code_block("ok", Some("log")));
    assert_eq!(
        message.render(),
        markdown_v2![
            "Deploy ",
            md::bold("v1.2"),
            " to ",
            md::inline_code("prod-eu"),
            md::code_block("ok", Some("log")),
        ]
    );
    assert_eq!(
        message.to_string(),
        "Deploy *v1\\.2* to `prod\\-eu`\n```log\nok\n```"
    );
}

#[test]
fn empty_template() {
    assert_eq!(markdown_v2![], "");
    assert_eq!(markdown_v2![""], "");
    assert_eq!(evaluate(&[""], Vec::<Part>::new()).unwrap(), "");
}

#[test]
fn arity_mismatch_is_reported() {
    let err = evaluate(&["a", "b", "c"], [Part::from(1)]).unwrap_err();
    assert!(matches!(
        err,
        MarkupError::TemplateArity {
            literals: 3,
            values: 1
        }
    ));
}

#[test]
fn payload_snapshot() {
    let payload = SendMessage::new(123, markdown_v2![md::bold("Hello"), " world"]);
    insta::assert_json_snapshot!(payload, @r#"
    {
      "chat_id": 123,
      "text": "*Hello* world",
      "parse_mode": "MarkdownV2",
      "disable_web_page_preview": true
    }
    "#);
}
