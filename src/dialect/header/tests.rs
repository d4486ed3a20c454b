#[cfg(test)]
mod tests {
    use crate::diagnostics::TracingConfig;
    use crate::dialect::header::*;
    use crate::dialect::{
        CompilerFamily, DialectError, LexerError, Origin, ProfileBuilder, ProfileError, Source,
        SymbolRewriteRule,
    };

    fn rules(text: &str) -> Vec<SymbolRewriteRule> {
        let source = Source::new("test.h", text);
        parse_header(&source, TracingConfig::Off)
            .expect("Expected a valid header")
            .into_iter()
            .filter_map(|item| match item {
                HeaderItem::Rule { rule, .. } => Some(rule),
                HeaderItem::Undefine { .. } => None,
            })
            .collect()
    }

    fn parse_err(text: &str) -> HeaderError {
        let source = Source::new("test.h", text);
        parse_header(&source, TracingConfig::Off)
            .unwrap_err()
            .into_inner()
    }

    #[test]
    fn define_shapes() {
        assert_eq!(
            rules(
                "#define __irq\n\
                 #define __attribute__(x)\n\
                 #define __ARM_ARCH 4\n\
                 #define __builtin_va_arg(x, t) ((t)0)\n\
                 #define __builtin_arm_nop()\n"
            ),
            vec![
                SymbolRewriteRule::keyword("__irq"),
                SymbolRewriteRule::elide_call("__attribute__", &["x"]),
                SymbolRewriteRule::value("__ARM_ARCH", "4"),
                SymbolRewriteRule::function_macro("__builtin_va_arg", &["x", "t"], "((t)0)"),
                SymbolRewriteRule::elide_call("__builtin_arm_nop", &[]),
            ]
        );
    }

    #[test]
    fn parenthesis_after_space_is_body() {
        assert_eq!(
            rules("#define __DBL_MIN_EXP__ (-1021)\n"),
            vec![SymbolRewriteRule::value("__DBL_MIN_EXP__", "(-1021)")]
        );
    }

    #[test]
    fn comments_are_not_part_of_the_body() {
        assert_eq!(
            rules("#define __absolute            // Makes references use absolute addressing\n"),
            vec![SymbolRewriteRule::keyword("__absolute")]
        );
        assert_eq!(
            rules("#define __bit   /* internal */ bool\n"),
            vec![SymbolRewriteRule::value("__bit", "bool")]
        );
    }

    #[test]
    fn continued_define() {
        assert_eq!(
            rules("#define __INTADDR__(x) \\\n    x\n"),
            vec![SymbolRewriteRule::function_macro("__INTADDR__", &["x"], "x")]
        );
    }

    #[test]
    fn variadic_parameters() {
        assert_eq!(
            rules("#define __printf_like(fmt, ...)\n"),
            vec![SymbolRewriteRule::elide_call("__printf_like", &["fmt", "..."])]
        );
    }

    #[test]
    fn guards_are_skipped() {
        let text = "#ifndef __VSCODE_CPPTOOL\n\
                    #error \"Don't include this file in your project !\"\n\
                    #endif // !\n\
                    #ifdef _WIN32\n\
                    #undef _WIN32\n\
                    #endif\n\
                    #pragma once\n\
                    #define __weak\n";
        let source = Source::new("lint.h", text);
        let items = parse_header(&source, TracingConfig::Off).unwrap();
        assert_eq!(
            items,
            vec![
                HeaderItem::Undefine {
                    name: "_WIN32".into(),
                    line: 5
                },
                HeaderItem::Rule {
                    rule: SymbolRewriteRule::keyword("__weak"),
                    line: 8
                },
            ]
        );
    }

    #[test]
    fn typedefs() {
        assert_eq!(
            rules(
                "typedef volatile unsigned short sfr16;\n\
                 typedef struct\n{\n    void *__ap;\n} __builtin_va_list;\n"
            ),
            vec![
                SymbolRewriteRule::type_alias("sfr16", "volatile unsigned short"),
                SymbolRewriteRule::type_alias("__builtin_va_list", "struct { void *__ap; }"),
            ]
        );
    }

    #[test]
    fn prototypes() {
        assert_eq!(
            rules(
                "void __breakpoint(int val);\n\
                 unsigned int __current_pc(void);\n\
                 int __semihost(int val, const void *ptr);\n\
                 unsigned long __LDREX(unsigned long *);\n\
                 unsigned int __usat16(unsigned int val1, /* constant */ unsigned int val2);\n"
            ),
            vec![
                SymbolRewriteRule::prototype("__breakpoint", "void", "int val"),
                SymbolRewriteRule::prototype("__current_pc", "unsigned int", "void"),
                SymbolRewriteRule::prototype("__semihost", "int", "int val, const void *ptr"),
                SymbolRewriteRule::prototype("__LDREX", "unsigned long", "unsigned long *"),
                SymbolRewriteRule::prototype(
                    "__usat16",
                    "unsigned int",
                    "unsigned int val1, unsigned int val2"
                ),
            ]
        );
    }

    #[test]
    fn unsupported_declaration() {
        assert_eq!(
            parse_err("int x = 5;\n"),
            HeaderError::UnsupportedDeclaration("int x = 5".into())
        );
    }

    #[test]
    fn missing_semicolon() {
        assert_eq!(parse_err("void f(void)\n"), HeaderError::ExpectedSemicolon);
    }

    #[test]
    fn unknown_directive() {
        assert_eq!(
            parse_err("#frobnicate X\n"),
            HeaderError::UnknownDirective("frobnicate".into())
        );
    }

    #[test]
    fn define_without_name() {
        assert_eq!(
            parse_err("#define 5\n"),
            HeaderError::ExpectedIdentifier("number 5".into())
        );
    }

    #[test]
    fn unterminated_parameters() {
        assert_eq!(
            parse_err("#define F(a, b\nint x;\n"),
            HeaderError::UnterminatedParameters
        );
    }

    #[test]
    fn lexer_errors_are_located() {
        let source = Source::new("test.h", "#define A\n#define B \"oops\n");
        let err = parse_header(&source, TracingConfig::Off).unwrap_err();
        assert_eq!(err.line(), 2);
        assert_eq!(
            *err.inner(),
            HeaderError::Lexer(LexerError::UnterminatedString)
        );
    }

    #[test]
    fn load_into_builder() {
        let mut builder = ProfileBuilder::new("sdcc-custom", CompilerFamily::Sdcc, "mcs51");
        let source = Source::new(
            "lint_sdcc.h",
            "#ifdef _MSC_VER\n#undef _MSC_VER\n#endif\n#define __xdata\n#define __sfr16 volatile unsigned short\n",
        );
        load_header(&mut builder, &source, TracingConfig::Off).unwrap();
        let profile = builder.build();

        assert_eq!(profile.undefines(), &["_MSC_VER".to_string()][..]);
        assert_eq!(profile.len(), 2);
        assert!(profile.contains("__xdata"));
    }

    #[test]
    fn conflicting_headers() {
        let mut builder = ProfileBuilder::new("iar-stm8", CompilerFamily::IarStm8, "stm8");
        let first = Source::new("a.h", "#define __far\n");
        let second = Source::new("b.h", "\n#define __far(x)\n");

        load_header(&mut builder, &first, TracingConfig::Off).unwrap();
        match load_header(&mut builder, &second, TracingConfig::Off) {
            Err(DialectError::Profile(err)) => assert_eq!(
                err,
                ProfileError::DuplicateSymbolDefinition {
                    profile: "iar-stm8".into(),
                    symbol: "__far".into(),
                    first: Origin::new("a.h", 1),
                    second: Origin::new("b.h", 2),
                }
            ),
            other => panic!("Expected a duplicate definition, got {:?}", other),
        }
    }

    #[test]
    fn identical_headers_collapse() {
        let mut builder = ProfileBuilder::new("keil-c51", CompilerFamily::KeilC51, "mcs51");
        let text = "#define _at_\ntypedef volatile unsigned char sfr;\n";
        load_header(&mut builder, &Source::new("a.h", text), TracingConfig::Off).unwrap();
        load_header(&mut builder, &Source::new("b.h", text), TracingConfig::Off).unwrap();
        assert_eq!(builder.len(), 2);
    }
}
