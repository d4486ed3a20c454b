#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::dialect::builtin;
    use crate::dialect::table::*;
    use crate::dialect::{CompilerFamily, Origin, ProfileError, SymbolRewriteRule};

    const STM8: &str = "
id: stm8-lite
family: iar-stm8
target: stm8
undefines:
  - __GNUC__
rules:
  - symbol: __near
    kind: keyword-elision
  - symbol: __interrupt
    kind: parameterized-elision
    params: [x]
  - symbol: __VER__
    kind: value-macro
    body: '311'
  - symbol: __get_interrupt_state
    kind: prototype-stub
    returns: __istate_t
    signature: void
  - symbol: __istate_t
    kind: type-alias
    target: unsigned char
";

    #[test]
    fn read_yaml() {
        let table = Table::read(STM8.as_bytes(), TableFormat::Yaml).unwrap();
        assert_eq!(table.id(), "stm8-lite");

        let profile = table.into_profile("stm8.yaml").unwrap();
        assert_eq!(profile.family(), CompilerFamily::IarStm8);
        assert_eq!(profile.undefines(), &["__GNUC__".to_string()][..]);
        assert_eq!(
            profile.rules(),
            &[
                SymbolRewriteRule::keyword("__near"),
                SymbolRewriteRule::elide_call("__interrupt", &["x"]),
                SymbolRewriteRule::value("__VER__", "311"),
                SymbolRewriteRule::prototype("__get_interrupt_state", "__istate_t", "void"),
                SymbolRewriteRule::type_alias("__istate_t", "unsigned char"),
            ][..]
        );
    }

    #[test]
    fn read_json() {
        let text = r#"{
            "id": "mini",
            "family": "other",
            "target": "none",
            "rules": [
                { "symbol": "__swap", "kind": "value-macro", "params": ["x"], "body": "(x)" }
            ]
        }"#;
        let profile = Table::read(text.as_bytes(), TableFormat::Json)
            .unwrap()
            .into_profile("mini.json")
            .unwrap();
        assert_eq!(
            profile.get("__swap"),
            Some(&SymbolRewriteRule::function_macro("__swap", &["x"], "(x)"))
        );
        assert!(profile.undefines().is_empty());
    }

    #[test]
    fn builtin_profiles_survive_export() {
        for profile in builtin::profiles().unwrap() {
            for format in vec![TableFormat::Yaml, TableFormat::Json] {
                let mut buf = vec![];
                Table::extract(&profile).write(&mut buf, format).unwrap();

                let read = Table::read(buf.as_slice(), format)
                    .unwrap()
                    .into_profile(profile.id())
                    .unwrap();
                assert_eq!(read, profile, "{} {:?}", profile.id(), format);
            }
        }
    }

    #[test]
    fn missing_field() {
        let text = "
id: broken
family: other
target: none
rules:
  - symbol: sfr16
    kind: type-alias
";
        match Table::read(text.as_bytes(), TableFormat::Yaml)
            .unwrap()
            .into_profile("broken.yaml")
        {
            Err(TableError::MissingField { symbol, field }) => {
                assert_eq!(symbol, "sfr16");
                assert_eq!(field, "target");
            }
            other => panic!("Expected a missing field, got {:?}", other),
        }
    }

    #[test]
    fn conflicting_rules() {
        let text = "
id: far
family: iar-stm8
target: stm8
rules:
  - symbol: __far
    kind: keyword-elision
  - symbol: __near
    kind: keyword-elision
  - symbol: __far
    kind: parameterized-elision
    params: [x]
";
        match Table::read(text.as_bytes(), TableFormat::Yaml)
            .unwrap()
            .into_profile("far.yaml")
        {
            Err(TableError::Profile(err)) => assert_eq!(
                err,
                ProfileError::DuplicateSymbolDefinition {
                    profile: "far".into(),
                    symbol: "__far".into(),
                    first: Origin::new("far.yaml rule 1", 0),
                    second: Origin::new("far.yaml rule 3", 0),
                }
            ),
            other => panic!("Expected a duplicate definition, got {:?}", other),
        }
    }

    #[test]
    fn invalid_yaml() {
        assert!(matches!(
            Table::read("id: [".as_bytes(), TableFormat::Yaml),
            Err(TableError::Yaml(_))
        ));
        assert!(matches!(
            Table::read("{".as_bytes(), TableFormat::Json),
            Err(TableError::Json(_))
        ));
    }

    #[test]
    fn formats() {
        assert_eq!(
            TableFormat::from_path(Path::new("a/keil.yaml")),
            Some(TableFormat::Yaml)
        );
        assert_eq!(
            TableFormat::from_path(Path::new("keil.YML")),
            Some(TableFormat::Yaml)
        );
        assert_eq!(
            TableFormat::from_path(Path::new("keil.json")),
            Some(TableFormat::Json)
        );
        assert_eq!(TableFormat::from_path(Path::new("keil.h")), None);
        assert_eq!(TableFormat::from_path(Path::new("keil")), None);
        assert_eq!("json".parse::<TableFormat>(), Ok(TableFormat::Json));
        assert!("toml".parse::<TableFormat>().is_err());
    }

    #[test]
    fn load_unknown_format() {
        assert!(matches!(
            Table::load(Path::new("keil.h")),
            Err(TableError::UnknownFormat(_))
        ));
    }
}
