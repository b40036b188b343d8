#![allow(missing_docs, dead_code)]

/// A configuration-style document with a bit of everything.
pub const DOCUMENT: &str = r#"
{
    "moderation": {
        "decision": "allow",
        "reason": null
    },
    "request": {
        "filename": "example.rs",
        "language": "rust",
        "options": {
            "opt_level": "2",
            "features": [
                "serde",
                "tokio"
            ]
        }
    },
    "snippets": [
        "fn main() {}",
        "println!(\"hi\")"
    ],
    "entities": [
        {
            "type": "function",
            "name": "main",
            "line": 1
        },
        {
            "type": "macro",
            "name": "println",
            "line": 2
        }
    ],
    "matrix": [
        [
            1.5,
            -2e3
        ],
        []
    ],
    "mixed": [
        "s",
        {
            "k": "v"
        },
        true,
        [
            "u"
        ],
        null
    ],
    "escapes": "tab\there é \\ \"quoted\""
}
"#;
