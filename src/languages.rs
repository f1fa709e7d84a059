//! Built-in language table
//!
//! Data-driven registry of per-language comment delimiters, looked up by
//! exact language identifier. Delimiters here are literal text; escaping
//! happens at grammar resolution, except for entries flagged `raw_line`,
//! whose single-line delimiter is already a hand-written pattern.

/// One row of the language table
#[derive(Debug, Clone, Copy)]
pub(crate) struct GrammarEntry {
    /// Language identifiers sharing this grammar
    pub ids: &'static [&'static str],
    /// Single-line comment delimiter (None = single-line recognition off)
    pub line: Option<&'static str>,
    /// Block comment delimiters
    pub block: Option<(&'static str, &'static str)>,
    /// `line` is a raw pattern fragment and must not be escaped
    pub raw_line: bool,
    /// Language has a `/** ... */` doc-comment convention
    pub doc_block: bool,
    /// First line of the document is exempt from tag matching
    pub ignore_first_line: bool,
}

const fn entry(
    ids: &'static [&'static str],
    line: Option<&'static str>,
    block: Option<(&'static str, &'static str)>,
) -> GrammarEntry {
    GrammarEntry {
        ids,
        line,
        block,
        raw_line: false,
        doc_block: false,
        ignore_first_line: false,
    }
}

impl GrammarEntry {
    const fn with_doc_block(mut self) -> Self {
        self.doc_block = true;
        self
    }

    const fn with_ignore_first_line(mut self) -> Self {
        self.ignore_first_line = true;
        self
    }

    const fn with_raw_line(mut self) -> Self {
        self.raw_line = true;
        self
    }
}

static TABLE: &[GrammarEntry] = &[
    entry(
        &[
            "al",
            "c",
            "cpp",
            "csharp",
            "cuda-cpp",
            "go",
            "groovy",
            "java",
            "jsonc",
            "kotlin",
            "less",
            "objective-c",
            "objective-cpp",
            "rust",
            "scala",
            "scss",
            "shaderlab",
            "stylus",
            "swift",
            "verilog",
        ],
        Some("//"),
        Some(("/*", "*/")),
    ),
    entry(
        &[
            "apex",
            "dart",
            "javascript",
            "javascriptreact",
            "typescript",
            "typescriptreact",
            "vue",
        ],
        Some("//"),
        Some(("/*", "*/")),
    )
    .with_doc_block(),
    entry(&["asciidoc"], Some("//"), Some(("////", "////"))),
    entry(&["fsharp"], Some("//"), Some(("(*", "*)"))),
    // CSS has no single-line comment form; block recognition only.
    entry(&["css"], None, Some(("/*", "*/"))),
    entry(
        &[
            "dockerfile",
            "elixir",
            "gdscript",
            "graphql",
            "julia",
            "makefile",
            "perl",
            "puppet",
            "r",
            "ruby",
            "shellscript",
            "tcl",
            "yaml",
        ],
        Some("#"),
        None,
    ),
    entry(&["powershell"], Some("#"), Some(("<#", "#>"))),
    entry(&["python"], Some("#"), Some(("\"\"\"", "\"\"\"")))
        .with_ignore_first_line(),
    entry(&["coffeescript"], Some("#"), Some(("###", "###"))),
    entry(&["nim"], Some("#"), Some(("#[", "]#"))),
    entry(&["terraform"], Some("#"), Some(("/*", "*/"))),
    entry(&["ada"], Some("--"), None),
    entry(&["haskell"], Some("--"), Some(("{-", "-}"))),
    entry(&["elm", "purescript"], Some("--"), Some(("{-", "-}"))),
    entry(&["lua"], Some("--"), Some(("--[[", "]]"))),
    entry(&["plsql", "sql"], Some("--"), Some(("/*", "*/"))),
    entry(&["bibtex", "erlang", "latex", "matlab"], Some("%"), None),
    entry(&["clojure", "lisp", "racket", "scheme"], Some(";"), None),
    entry(&["cobol"], Some("*>"), None),
    // Raw: fixed-form comment letter anchored to line start.
    entry(&["fortran", "fortran-modern"], Some("^[cC]"), None).with_raw_line(),
    // Raw: PHP accepts either of two single-line markers.
    entry(&["php"], Some("//|#"), Some(("/*", "*/"))).with_raw_line(),
    entry(&["sas", "stata"], Some("*"), Some(("/*", "*/"))),
    entry(
        &["html", "markdown", "razor", "xml"],
        Some("<!--"),
        Some(("<!--", "-->")),
    ),
    entry(&["twig"], Some("{#"), Some(("{#", "#}"))),
    entry(&["cfml"], Some("<!---"), Some(("<!---", "--->"))),
    entry(&["vb"], Some("'"), None),
    entry(&["genstat"], Some("\\"), Some(("\"", "\""))),
];

/// Look up the table entry for a language identifier
pub(crate) fn entry_for(language_id: &str) -> Option<&'static GrammarEntry> {
    TABLE.iter().find(|e| e.ids.contains(&language_id))
}
