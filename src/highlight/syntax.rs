//! Tokenizers for code-block languages (basic implementation)
//!
//! A small keyword scanner, not a grammar: words, line comments, string
//! literals and bare numbers are classified, everything else passes through
//! as plain text. Output is render-agnostic — the frontend decides colors.
//!
//! Invariant: concatenating the span texts of [`tokenize`] reproduces the
//! input exactly.

use std::collections::HashSet;

/// Classification of a highlighted span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Unclassified source text
    Plain,
    /// Language keyword
    Keyword,
    /// String literal
    Literal,
    /// Numeric literal
    Number,
    /// Line comment
    Comment,
}

/// A run of source text with one classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpan {
    pub text: String,
    pub kind: SpanKind,
}

impl HighlightSpan {
    /// A single plain span covering the whole source (the "leave as-is"
    /// result for unsupported languages)
    pub fn plain(source: &str) -> Vec<HighlightSpan> {
        vec![HighlightSpan {
            text: source.to_string(),
            kind: SpanKind::Plain,
        }]
    }
}

/// Static description of one supported language
struct SyntaxDef {
    name: &'static str,
    aliases: &'static [&'static str],
    keywords: &'static [&'static str],
    line_comment: Option<&'static str>,
    string_delims: &'static [char],
}

const SYNTAX_DEFS: &[SyntaxDef] = &[
    SyntaxDef {
        name: "rust",
        aliases: &["rs"],
        keywords: &[
            "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
            "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod",
            "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super",
            "trait", "true", "type", "unsafe", "use", "where", "while",
        ],
        line_comment: Some("//"),
        string_delims: &['"'],
    },
    SyntaxDef {
        name: "python",
        aliases: &["py"],
        keywords: &[
            "and", "as", "async", "await", "break", "class", "continue", "def", "del", "elif",
            "else", "except", "finally", "for", "from", "global", "if", "import", "in", "is",
            "lambda", "None", "not", "or", "pass", "raise", "return", "True", "False", "try",
            "while", "with", "yield",
        ],
        line_comment: Some("#"),
        string_delims: &['"', '\''],
    },
    SyntaxDef {
        name: "javascript",
        aliases: &["js", "jsx", "ts", "tsx", "typescript"],
        keywords: &[
            "async", "await", "break", "case", "catch", "class", "const", "continue", "default",
            "delete", "do", "else", "export", "extends", "false", "finally", "for", "from",
            "function", "if", "import", "in", "instanceof", "let", "new", "null", "of", "return",
            "static", "switch", "this", "throw", "true", "try", "typeof", "undefined", "var",
            "while", "yield",
        ],
        line_comment: Some("//"),
        string_delims: &['"', '\'', '`'],
    },
    SyntaxDef {
        name: "bash",
        aliases: &["sh", "shell", "zsh"],
        keywords: &[
            "case", "do", "done", "elif", "else", "esac", "exit", "export", "fi", "for",
            "function", "if", "in", "local", "return", "then", "while",
        ],
        line_comment: Some("#"),
        string_delims: &['"', '\''],
    },
    SyntaxDef {
        name: "toml",
        aliases: &[],
        keywords: &["true", "false"],
        line_comment: Some("#"),
        string_delims: &['"', '\''],
    },
];

/// One language's compiled lookup tables
pub struct CompiledSyntax {
    name: &'static str,
    aliases: &'static [&'static str],
    keywords: HashSet<&'static str>,
    line_comment: Option<&'static str>,
    string_delims: &'static [char],
}

impl CompiledSyntax {
    /// The canonical language tag
    pub fn name(&self) -> &'static str {
        self.name
    }

    fn matches(&self, tag: &str) -> bool {
        self.name.eq_ignore_ascii_case(tag) || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(tag))
    }
}

/// The highlighting capability: every supported language, compiled for
/// lookup. Built once, lazily, on the worker thread.
pub struct Registry {
    syntaxes: Vec<CompiledSyntax>,
}

impl Registry {
    /// Compile the language tables
    pub fn load() -> Self {
        let syntaxes = SYNTAX_DEFS
            .iter()
            .map(|def| CompiledSyntax {
                name: def.name,
                aliases: def.aliases,
                keywords: def.keywords.iter().copied().collect(),
                line_comment: def.line_comment,
                string_delims: def.string_delims,
            })
            .collect();
        Self { syntaxes }
    }

    /// Find a language by tag or alias, case-insensitive
    pub fn find(&self, tag: &str) -> Option<&CompiledSyntax> {
        self.syntaxes.iter().find(|s| s.matches(tag.trim()))
    }

    /// Number of supported languages
    pub fn len(&self) -> usize {
        self.syntaxes.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.syntaxes.is_empty()
    }
}

/// Append `text` to `spans`, merging into the previous span when the kind
/// matches so plain runs stay contiguous
fn push(spans: &mut Vec<HighlightSpan>, kind: SpanKind, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(last) = spans.last_mut() {
        if last.kind == kind {
            last.text.push_str(text);
            return;
        }
    }
    spans.push(HighlightSpan {
        text: text.to_string(),
        kind,
    });
}

fn word_kind(syntax: &CompiledSyntax, word: &str) -> SpanKind {
    if syntax.keywords.contains(word) {
        SpanKind::Keyword
    } else if word.chars().all(|c| c.is_ascii_digit() || c == '_') && word.starts_with(|c: char| c.is_ascii_digit()) {
        SpanKind::Number
    } else {
        SpanKind::Plain
    }
}

/// Tokenize `source` for one language
pub fn tokenize(syntax: &CompiledSyntax, source: &str) -> Vec<HighlightSpan> {
    let mut spans = Vec::new();
    let mut chars = source.chars().peekable();
    let mut word = String::new();

    while let Some(c) = chars.next() {
        if c.is_alphanumeric() || c == '_' {
            word.push(c);
            continue;
        }

        // Flush the pending word
        if !word.is_empty() {
            push(&mut spans, word_kind(syntax, &word), &word);
            word.clear();
        }

        // Line comment: consume to (but not including) the newline
        if let Some(marker) = syntax.line_comment {
            let starts = match marker.len() {
                1 => c == marker.chars().next().unwrap(),
                _ => {
                    c == marker.chars().next().unwrap()
                        && chars.peek() == Some(&marker.chars().nth(1).unwrap())
                }
            };
            if starts {
                let mut comment = String::new();
                comment.push(c);
                if marker.len() > 1 {
                    comment.push(chars.next().unwrap());
                }
                while let Some(&next) = chars.peek() {
                    if next == '\n' {
                        break;
                    }
                    comment.push(chars.next().unwrap());
                }
                push(&mut spans, SpanKind::Comment, &comment);
                continue;
            }
        }

        // String literal: consume to the matching delimiter, honoring
        // backslash escapes; unterminated literals run to end of input
        if syntax.string_delims.contains(&c) {
            let mut literal = String::new();
            literal.push(c);
            while let Some(next) = chars.next() {
                literal.push(next);
                if next == c {
                    break;
                }
                if next == '\\' {
                    if let Some(escaped) = chars.next() {
                        literal.push(escaped);
                    }
                }
            }
            push(&mut spans, SpanKind::Literal, &literal);
            continue;
        }

        push(&mut spans, SpanKind::Plain, &c.to_string());
    }

    if !word.is_empty() {
        push(&mut spans, word_kind(syntax, &word), &word);
    }

    spans
}
