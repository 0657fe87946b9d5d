//! Text normalization applied to descriptions and keywords before matching.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fold `text` into its matching form.
///
/// Lower-cases, decomposes accented characters and drops the combining marks,
/// removes everything that is neither alphanumeric nor whitespace, and trims the
/// ends. Inner whitespace is left untouched.
#[must_use]
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .filter(|ch| ch.is_alphanumeric() || ch.is_whitespace())
        .collect();

    folded.trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_case_and_accents() {
        assert_eq!(normalize("Alumínio"), "aluminio");
        assert_eq!(normalize("PAPELÃO"), "papelao");
        assert_eq!(normalize("maçã"), "maca");
    }

    #[test]
    fn removes_punctuation_and_trims() {
        assert_eq!(normalize("  pilha AA, do controle!  "), "pilha aa do controle");
        assert_eq!(normalize("(65) 1234-5678"), "65 12345678");
    }

    #[test]
    fn keeps_inner_whitespace() {
        assert_eq!(normalize("casca  de\tbanana"), "casca  de\tbanana");
    }

    #[test]
    fn empty_and_symbol_only_inputs() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("?!… ♻️"), "");
    }

    #[test]
    fn is_idempotent() {
        let samples = [
            "Garrafinha de PLÁSTICO!",
            "  Óleo de cozinha; usado ",
            "İstanbul ǅ ﬁ ß",
            "gárrafá",
            "",
            "123 ABC é_e",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }
}
