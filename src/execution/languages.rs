//! Supported-language registry
//!
//! Closed strategy table mapping a language name to its execution-engine id
//! and the combine step that inserts user code into a question's
//! boilerplate. Adding a language means adding one row here and a
//! boilerplate template on each question.

use crate::constants::USER_CODE_MARKER;

/// One supported language
pub struct LanguageSpec {
    pub name: &'static str,
    /// Numeric id understood by the execution engine
    pub language_id: i32,
    /// Merge user code into the question's boilerplate template
    pub combine: fn(&str, &str) -> String,
}

/// Default combine: user code replaces the template marker
fn combine_marker(template: &str, user_code: &str) -> String {
    template.replace(USER_CODE_MARKER, user_code)
}

/// Java combine: a pasted complete file replaces the template entirely,
/// since nesting a public class inside the template's class would not compile
fn combine_java(template: &str, user_code: &str) -> String {
    if user_code.contains("public class") {
        user_code.to_string()
    } else {
        template.replace(USER_CODE_MARKER, user_code)
    }
}

/// All supported languages
pub const LANGUAGES: &[LanguageSpec] = &[
    LanguageSpec {
        name: "javascript",
        language_id: 63,
        combine: combine_marker,
    },
    LanguageSpec {
        name: "python",
        language_id: 71,
        combine: combine_marker,
    },
    LanguageSpec {
        name: "java",
        language_id: 62,
        combine: combine_java,
    },
    LanguageSpec {
        name: "cpp",
        language_id: 54,
        combine: combine_marker,
    },
    LanguageSpec {
        name: "c",
        language_id: 50,
        combine: combine_marker,
    },
];

/// Look up a language by name (case-insensitive)
pub fn lookup(name: &str) -> Option<&'static LanguageSpec> {
    let name = name.to_ascii_lowercase();
    LANGUAGES.iter().find(|l| l.name == name)
}

/// Names of all supported languages
pub fn supported_names() -> Vec<&'static str> {
    LANGUAGES.iter().map(|l| l.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("python").unwrap().language_id, 71);
        assert_eq!(lookup("JavaScript").unwrap().language_id, 63);
        assert!(lookup("brainfuck").is_none());
    }

    #[test]
    fn test_combine_replaces_marker() {
        let spec = lookup("python").unwrap();
        let combined = (spec.combine)("import sys\n{{USER_CODE}}\n", "print('hi')");
        assert_eq!(combined, "import sys\nprint('hi')\n");
    }

    #[test]
    fn test_java_full_file_wins() {
        let spec = lookup("java").unwrap();
        let template = "public class Main {\n{{USER_CODE}}\n}";

        let snippet = "static int add(int a, int b) { return a + b; }";
        assert!((spec.combine)(template, snippet).contains("public class Main"));

        let full_file = "public class Main { public static void main(String[] a) {} }";
        assert_eq!((spec.combine)(template, full_file), full_file);
    }
}
