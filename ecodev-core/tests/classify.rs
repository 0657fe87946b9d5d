use std::io::Write;

use ecodev_core::{Category, KnowledgeBase, KnowledgeError, Matcher, classify, fallback, normalize};
use tempfile::NamedTempFile;

#[test]
fn known_descriptions() {
    let cases = [
        ("garrafinha de plástico", Category::Recyclable, "Garrafa PET"),
        ("pilha AA do controle", Category::Hazardous, "Pilha/Bateria"),
        ("casca de banana", Category::Organic, "Resíduo Orgânico"),
        ("caixa de papelão", Category::Recyclable, "Papel/Papelão"),
        ("pote de vidro", Category::Recyclable, "Vidro"),
        ("lata de alumínio", Category::Recyclable, "Metal/Alumínio"),
    ];

    for (input, category, name) in cases {
        let result = classify(input);
        assert_eq!(result.category, category, "category for {input:?}");
        assert_eq!(result.name, name, "name for {input:?}");
    }
}

#[test]
fn case_and_accents_do_not_matter() {
    let upper = classify("GARRAFA");
    assert_eq!(upper, classify("garrafa"));
    assert_eq!(upper, classify("gárrafá"));
    assert_eq!(upper.name, "Garrafa PET");
}

#[test]
fn keyword_inside_longer_text_is_enough() {
    assert_eq!(classify("uma garrafinha pet azul").name, "Garrafa PET");
}

#[test]
fn earlier_entry_wins_in_embedded_base() {
    // "refrigerante" belongs to the PET entry, which precedes the metal entry.
    assert_eq!(classify("lata de refrigerante").name, "Garrafa PET");
}

#[test]
fn unknown_and_empty_inputs_fall_back() {
    let unknown = classify("xyzzyunknownobject123");
    assert_eq!(unknown, fallback());
    assert_eq!(unknown.category, Category::General);

    assert_eq!(classify(""), fallback());
    assert_eq!(classify("   ...!?   "), fallback());
}

#[test]
fn same_entry_gives_identical_classifications() {
    assert_eq!(classify("pilha"), classify("bateria do celular"));
}

#[test]
fn normalization_is_idempotent_on_inputs() {
    for input in ["Óleo de Cozinha!!", "  PILHA  aa ", "açaí, maçã & pão"] {
        let once = normalize(input);
        assert_eq!(normalize(&once), once);
    }
}

#[test]
fn custom_base_loads_from_file() {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"[{{
            "keywords": ["isopor"],
            "classification": {{
                "category": "general",
                "name": "Isopor",
                "description": "Poliestireno expandido.",
                "disposal": "Lixo comum.",
                "tip": "Evite isopor sempre que possível.",
                "collection_points": []
            }}
        }}]"#
    )
    .expect("write fixture");

    let base = KnowledgeBase::from_path(file.path()).expect("load base");
    assert_eq!(base.len(), 1);

    let matcher = Matcher::new(&base);
    assert_eq!(matcher.classify("bandeja de ISOPOR").name, "Isopor");
    assert_eq!(matcher.classify("garrafa"), fallback());
}

#[test]
fn missing_file_is_an_io_error() {
    let err = KnowledgeBase::from_path(std::path::Path::new("/nonexistent/base.json"))
        .expect_err("missing file");
    assert!(matches!(err, KnowledgeError::Io(_)));
}
