#[cfg(test)]
mod tests {
    use crate::dialect::profile::*;

    fn builder() -> ProfileBuilder {
        ProfileBuilder::new("test", CompilerFamily::Other, "none")
    }

    #[test]
    fn kinds() {
        for (rule, kind) in vec![
            (SymbolRewriteRule::keyword("__irq"), RuleKind::KeywordElision),
            (
                SymbolRewriteRule::elide_call("__attribute__", &["x"]),
                RuleKind::ParameterizedElision,
            ),
            (SymbolRewriteRule::value("__ARM_ARCH", "4"), RuleKind::ValueMacro),
            (
                SymbolRewriteRule::function_macro("__builtin_bswap32", &["x"], "(x)"),
                RuleKind::ValueMacro,
            ),
            (
                SymbolRewriteRule::prototype("__nop", "void", "void"),
                RuleKind::PrototypeStub,
            ),
            (
                SymbolRewriteRule::type_alias("sfr16", "volatile unsigned short"),
                RuleKind::TypeAlias,
            ),
        ] {
            assert_eq!(rule.kind(), kind, "{}", rule.symbol_name());
        }
    }

    #[test]
    fn text_is_normalized() {
        assert_eq!(
            SymbolRewriteRule::type_alias("sfr16", "  volatile\tunsigned   short "),
            SymbolRewriteRule::type_alias("sfr16", "volatile unsigned short")
        );
        assert_eq!(
            SymbolRewriteRule::prototype("__ror", "unsigned  int", "unsigned int val,\n unsigned int shift"),
            SymbolRewriteRule::prototype("__ror", "unsigned int", "unsigned int val, unsigned int shift")
        );
    }

    #[test]
    fn add_and_get() {
        let mut b = builder();
        b.add(SymbolRewriteRule::keyword("__irq"), Origin::new("a.h", 1))
            .unwrap();
        b.add(SymbolRewriteRule::keyword("__weak"), Origin::new("a.h", 2))
            .unwrap();
        let profile = b.build();

        assert_eq!(profile.len(), 2);
        assert!(profile.contains("__irq"));
        assert!(!profile.contains("__IRQ"));
        assert_eq!(
            profile.get("__weak"),
            Some(&SymbolRewriteRule::keyword("__weak"))
        );
        assert_eq!(profile.symbols().collect::<Vec<_>>(), vec!["__irq", "__weak"]);
    }

    #[test]
    fn identical_redefinition_is_collapsed() {
        let mut b = builder();
        b.add(SymbolRewriteRule::keyword("__far"), Origin::new("a.h", 1))
            .unwrap();
        b.add(SymbolRewriteRule::keyword("__far"), Origin::new("b.h", 7))
            .unwrap();
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn conflicting_redefinition_is_an_error() {
        let mut b = builder();
        b.add(SymbolRewriteRule::keyword("__far"), Origin::new("a.h", 1))
            .unwrap();
        let result = b.add(
            SymbolRewriteRule::elide_call("__far", &["x"]),
            Origin::new("b.h", 7),
        );
        assert_eq!(
            result,
            Err(ProfileError::DuplicateSymbolDefinition {
                profile: "test".into(),
                symbol: "__far".into(),
                first: Origin::new("a.h", 1),
                second: Origin::new("b.h", 7),
            })
        );
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn different_bodies_conflict() {
        let mut b = builder();
        b.add(SymbolRewriteRule::value("__VER__", "311"), Origin::new("a.h", 1))
            .unwrap();
        assert!(b
            .add(SymbolRewriteRule::value("__VER__", "7080002"), Origin::new("a.h", 2))
            .is_err());
    }

    #[test]
    fn invalid_symbol() {
        let mut b = builder();
        let result = b.add(SymbolRewriteRule::keyword("not valid"), Origin::builtin("test"));
        assert!(matches!(result, Err(ProfileError::InvalidSymbol { .. })));
    }

    #[test]
    fn undefines_are_unique() {
        let mut b = builder();
        b.undefine("_WIN32");
        b.undefine("_MSC_VER");
        b.undefine("_WIN32");
        assert_eq!(b.build().undefines(), &["_WIN32".to_string(), "_MSC_VER".to_string()][..]);
    }

    #[test]
    fn family_names() {
        for family in vec![
            CompilerFamily::ArmClang,
            CompilerFamily::ArmCc,
            CompilerFamily::KeilC51,
            CompilerFamily::Sdcc,
            CompilerFamily::IarArm,
            CompilerFamily::IarStm8,
            CompilerFamily::Other,
        ] {
            assert_eq!(family.name().parse::<CompilerFamily>(), Ok(family));
        }
        assert!("armclang".parse::<CompilerFamily>().is_err());
    }

    #[test]
    fn origin_display() {
        assert_eq!(Origin::new("lint_sdcc.h", 12).to_string(), "lint_sdcc.h:12");
        assert_eq!(Origin::builtin("sdcc").to_string(), "<builtin sdcc>");
    }

    #[test]
    fn empty_body_elides() {
        assert_eq!(
            SymbolRewriteRule::value("__inline", "  "),
            SymbolRewriteRule::keyword("__inline")
        );
        assert_eq!(
            SymbolRewriteRule::function_macro("__at", &["x"], ""),
            SymbolRewriteRule::elide_call("__at", &["x"])
        );
    }
}
