#[cfg(test)]
mod tests {
    use crate::diagnostics::TracingConfig;
    use crate::dialect::builtin;
    use crate::dialect::rewrite::*;
    use crate::dialect::{
        tokenize, CompilerFamily, DialectProfile, LexerError, Origin, ProfileBuilder, Registry,
        Replacement, Source, SymbolRewriteRule,
    };

    fn profile(rules: Vec<SymbolRewriteRule>) -> DialectProfile {
        let mut builder = ProfileBuilder::new("test", CompilerFamily::Other, "none");
        builder.extend(rules, &Origin::new("test.h", 0)).unwrap();
        builder.build()
    }

    fn rewrite(profile: &DialectProfile, text: &str) -> String {
        Rewriter::new(profile, TracingConfig::Off)
            .rewrite(&Source::new("unit.c", text))
            .unwrap_or_else(|e| panic!("{}", e))
    }

    fn rewrite_err(profile: &DialectProfile, text: &str) -> (u32, RewriteError) {
        let err = Rewriter::new(profile, TracingConfig::Off)
            .rewrite(&Source::new("unit.c", text))
            .unwrap_err();
        (err.line(), err.into_inner())
    }

    #[test]
    fn keyword_elision() {
        let p = profile(vec![SymbolRewriteRule::keyword("__irq")]);
        assert_eq!(rewrite(&p, "__irq void handler(void);"), "void handler(void);");
        assert_eq!(rewrite(&p, "void f(void) __irq\n{\n}"), "void f(void)\n{\n}");
        assert_eq!(
            rewrite(&p, "    __irq __irq void g(void);"),
            "    void g(void);"
        );
    }

    #[test]
    fn only_whole_identifiers() {
        let p = profile(vec![SymbolRewriteRule::keyword("__irq")]);
        let text = "int __irqx, __irq_, x__irq;";
        assert_eq!(rewrite(&p, text), text);
    }

    #[test]
    fn literals_and_comments_are_untouched() {
        let p = profile(vec![SymbolRewriteRule::keyword("__irq")]);
        let text = "puts(\"__irq\"); // __irq\n/* __irq */ char c = '_';\n";
        assert_eq!(rewrite(&p, text), text);
    }

    #[test]
    fn attribute_before_and_after() {
        let p = profile(vec![SymbolRewriteRule::elide_call("__attribute__", &["x"])]);
        assert_eq!(rewrite(&p, "__attribute__((packed)) int x;"), "int x;");
        assert_eq!(rewrite(&p, "int x __attribute__((packed));"), "int x;");
        assert_eq!(
            rewrite(&p, "struct s { char c; } __attribute__((aligned(4), packed)) v;"),
            "struct s { char c; } v;"
        );
    }

    #[test]
    fn argument_list_across_lines() {
        let p = profile(vec![SymbolRewriteRule::elide_call("__attribute__", &["x"])]);
        assert_eq!(
            rewrite(&p, "__attribute__((section(\".text\"),\n    used)) int y;"),
            "int y;"
        );
    }

    #[test]
    fn elided_call_without_arguments() {
        let rule = SymbolRewriteRule::elide_call("__asm", &["x"]);
        let apply_to = |text: &str| apply(&rule, &Source::new("unit.c", text)).unwrap();

        assert_eq!(apply_to("__asm(\"nop\");"), ";");
        assert_eq!(apply_to("__asm void nop(void);"), "void nop(void);");
    }

    #[test]
    fn unterminated_arguments() {
        let p = profile(vec![SymbolRewriteRule::elide_call("__attribute__", &["x"])]);
        assert_eq!(
            rewrite_err(&p, "int a;\n__attribute__((packed) int x;"),
            (2, RewriteError::UnterminatedArguments("__attribute__".into()))
        );
    }

    #[test]
    fn directive_ends_an_argument_list() {
        let p = profile(vec![SymbolRewriteRule::elide_call("__has_feature", &["x"])]);
        assert_eq!(
            rewrite_err(&p, "#if __has_feature(a\n)\n#endif\n"),
            (1, RewriteError::UnterminatedArguments("__has_feature".into()))
        );
    }

    #[test]
    fn values() {
        let p = profile(vec![
            SymbolRewriteRule::value("__ARMCC_VERSION", "6100100"),
            SymbolRewriteRule::value("__DBL_MIN_EXP__", "(-1021)"),
        ]);
        assert_eq!(
            rewrite(&p, "#if __ARMCC_VERSION >= 6000000\nint e = __DBL_MIN_EXP__;\n#endif\n"),
            "#if 6100100 >= 6000000\nint e = (-1021);\n#endif\n"
        );
    }

    #[test]
    fn macro_names_in_directives_are_kept() {
        let p = profile(vec![
            SymbolRewriteRule::keyword("__irq"),
            SymbolRewriteRule::value("__ARM_ARCH", "7"),
        ]);
        let text = "#ifdef __irq\n#undef __irq\n#define __irq\n#endif\n";
        assert_eq!(rewrite(&p, text), text);
        assert_eq!(
            rewrite(&p, "#if defined(__irq) && __ARM_ARCH > 6\n#endif\n"),
            "#if defined(__irq) && 7 > 6\n#endif\n"
        );
        assert_eq!(
            rewrite(&p, "#define HANDLER __irq void\n"),
            "#define HANDLER void\n"
        );
    }

    #[test]
    fn function_macros() {
        let p = profile(vec![
            SymbolRewriteRule::function_macro("__builtin_va_arg", &["x", "t"], "((t)0)"),
            SymbolRewriteRule::function_macro("__builtin_bswap32", &["x"], "(x)"),
        ]);
        assert_eq!(rewrite(&p, "v = __builtin_va_arg(ap, int);"), "v = ((int)0);");
        assert_eq!(rewrite(&p, "w = __builtin_bswap32(v);"), "w = (v);");
        assert_eq!(
            rewrite(&p, "w = __builtin_bswap32(__builtin_bswap32(v));"),
            "w = ((v));"
        );
    }

    #[test]
    fn function_macro_name_alone_is_kept() {
        let p = profile(vec![SymbolRewriteRule::function_macro(
            "__builtin_bswap32",
            &["x"],
            "(x)",
        )]);
        let text = "fp = __builtin_bswap32;";
        assert_eq!(rewrite(&p, text), text);
    }

    #[test]
    fn argument_count() {
        let p = profile(vec![SymbolRewriteRule::function_macro(
            "__builtin_va_arg",
            &["x", "t"],
            "((t)0)",
        )]);
        assert_eq!(
            rewrite_err(&p, "v = __builtin_va_arg(ap);"),
            (
                1,
                RewriteError::ArgumentCountMismatch {
                    symbol: "__builtin_va_arg".into(),
                    expected: 2,
                    found: 1,
                }
            )
        );
    }

    #[test]
    fn empty_argument() {
        let p = profile(vec![
            SymbolRewriteRule::function_macro("ONE", &["x"], "[x]"),
            SymbolRewriteRule::function_macro("NONE", &[], "0"),
        ]);
        assert_eq!(rewrite(&p, "ONE() NONE()"), "[] 0");
    }

    #[test]
    fn variadic_arguments() {
        let p = profile(vec![SymbolRewriteRule::function_macro(
            "__trace",
            &["fmt", "..."],
            "printf(fmt, __VA_ARGS__)",
        )]);
        assert_eq!(
            rewrite(&p, "__trace(\"%d %d\", a, (b, c));"),
            "printf(\"%d %d\", a, (b, c));"
        );
    }

    #[test]
    fn expansions_are_rescanned() {
        let p = profile(vec![
            SymbolRewriteRule::function_macro("__builtin_va_arg", &["x", "t"], "((t)0)"),
            SymbolRewriteRule::function_macro("__va_arg", &["ap", "type"], "__builtin_va_arg(ap, type)"),
            SymbolRewriteRule::type_alias("__ul", "unsigned long"),
            SymbolRewriteRule::type_alias("__istate_t", "__ul"),
        ]);
        assert_eq!(rewrite(&p, "x = __va_arg(ap, char);"), "x = ((char)0);");
        assert_eq!(rewrite(&p, "__istate_t s;"), "unsigned long s;");
    }

    #[test]
    fn value_ending_in_call() {
        let p = profile(vec![
            SymbolRewriteRule::value("__ALIGNOF__", "__alignof__"),
            SymbolRewriteRule::function_macro("__alignof__", &["x"], "sizeof(x)"),
        ]);
        assert_eq!(rewrite(&p, "n = __ALIGNOF__(int);"), "n = sizeof(int);");
        assert_eq!(rewrite(&p, "n = __ALIGNOF__;"), "n = __alignof__;");
    }

    #[test]
    fn expansion_hides_itself() {
        let p = profile(vec![
            SymbolRewriteRule::value("foo", "foo + 1"),
            SymbolRewriteRule::value("a", "b"),
            SymbolRewriteRule::value("b", "a"),
        ]);
        assert_eq!(rewrite(&p, "x = foo;"), "x = foo + 1;");
        assert_eq!(rewrite(&p, "x = a;"), "x = a;");
    }

    #[test]
    fn expansion_depth() {
        let chain = |n: usize| {
            let mut rules: Vec<SymbolRewriteRule> = (0..n)
                .map(|i| SymbolRewriteRule::value(&format!("m{}", i), &format!("m{}", i + 1)))
                .collect();
            rules.push(SymbolRewriteRule::value(&format!("m{}", n), "0"));
            profile(rules)
        };

        assert_eq!(rewrite(&chain(10), "x = m0;"), "x = 0;");

        let (line, err) = rewrite_err(&chain(40), "\nx = m0;");
        assert_eq!(line, 2);
        assert!(matches!(err, RewriteError::ExpansionTooDeep(_)), "{:?}", err);
    }

    #[test]
    fn prototype_stubs() {
        let p = profile(vec![
            SymbolRewriteRule::type_alias("__ul", "unsigned long"),
            SymbolRewriteRule::prototype("__nop", "void", "void"),
            SymbolRewriteRule::prototype("__get_PRIMASK", "__ul", "void"),
            SymbolRewriteRule::prototype("__unused", "void", "void"),
        ]);
        assert_eq!(
            rewrite(&p, "void f(void) { __nop(); __nop(); m = __get_PRIMASK(); }\n"),
            "void __nop(void);\nunsigned long __get_PRIMASK(void);\n\
             void f(void) { __nop(); __nop(); m = __get_PRIMASK(); }\n"
        );
        assert_eq!(rewrite(&p, "int x;\n"), "int x;\n");
    }

    #[test]
    fn lexer_errors() {
        let p = profile(vec![SymbolRewriteRule::keyword("__irq")]);
        assert_eq!(
            rewrite_err(&p, "int a;\nchar *s = \"oops;\n"),
            (2, RewriteError::Lexer(LexerError::UnterminatedString))
        );
    }

    #[test]
    fn apply_one_rule() {
        let rule = SymbolRewriteRule::keyword("_at_");
        assert_eq!(
            apply(&rule, &Source::new("unit.c", "sfr16 P0 _at_ 0x80;")).unwrap(),
            "sfr16 P0 0x80;"
        );
    }

    #[test]
    fn armclang_packed() {
        let registry = Registry::builtin().unwrap();
        assert_eq!(
            registry
                .rewrite("armclang", &Source::new("unit.c", "__attribute__((packed)) int x;"))
                .unwrap(),
            "int x;"
        );
    }

    #[test]
    fn armclang_inline_asm() {
        let registry = Registry::builtin().unwrap();
        let rewrite = |text: &str| {
            registry
                .rewrite("armclang", &Source::new("unit.c", text))
                .unwrap()
        };

        assert_eq!(rewrite("__asm volatile (\"cpsie i\" : : : \"memory\");"), ";");
        assert_eq!(
            rewrite("void f(void){ __asm volatile (\"cpsie i\" : : : \"memory\"); }"),
            "void f(void){; }"
        );
        assert_eq!(rewrite("__asm(\"nop\");"), ";");
        assert_eq!(rewrite("volatile int x;"), "volatile int x;");
    }

    #[test]
    fn predefined_types() {
        let registry = Registry::builtin().unwrap();
        assert_eq!(
            registry
                .rewrite(
                    "iar-stm8",
                    &Source::new("unit.c", "__INT_FAST8_T_TYPE__ x; __DATA_MEM0__ int y;")
                )
                .unwrap(),
            "signed char x; int y;"
        );
        assert_eq!(
            registry
                .rewrite("armclang", &Source::new("unit.c", "__INT_LEAST8_TYPE__ x;"))
                .unwrap(),
            "signed char x;"
        );
    }

    #[test]
    fn bare_keyword_is_kept() {
        let p = profile(vec![SymbolRewriteRule::elide_call("volatile", &["x"])]);
        assert_eq!(rewrite(&p, "volatile(\"dsb\"); volatile int x;"), "; volatile int x;");
        assert_eq!(rewrite(&p, "volatile\n(0);"), ";");
    }

    #[test]
    fn numeric_operand_without_parentheses() {
        let p = profile(vec![
            SymbolRewriteRule::elide_call("interrupt", &["n"]),
            SymbolRewriteRule::elide_call("__va_start", &["ap", "p"]),
        ]);
        assert_eq!(rewrite(&p, "void f(void) interrupt 3;"), "void f(void);");
        assert_eq!(rewrite(&p, "void f(void) interrupt (3);"), "void f(void);");
        assert_eq!(rewrite(&p, "interrupt x;"), "x;");
        assert_eq!(rewrite(&p, "interrupt\n3;"), "\n3;");
        assert_eq!(rewrite(&p, "__va_start 1;"), "1;");
    }

    #[test]
    fn keil_c51_interrupt_handler() {
        let registry = Registry::builtin().unwrap();
        assert_eq!(
            registry
                .rewrite(
                    "keil-c51",
                    &Source::new("unit.c", "void isr(void) interrupt 1 using 2\n{\n}\n")
                )
                .unwrap(),
            "void isr(void)\n{\n}\n"
        );
    }

    #[test]
    fn dollar_identifiers() {
        let registry = Registry::builtin().unwrap();
        assert_eq!(
            registry
                .rewrite("keil-c51", &Source::new("unit.c", "xdata int a$b;"))
                .unwrap(),
            "int a$b;"
        );
    }

    #[test]
    fn keil_c51_located_sfr() {
        let registry = Registry::builtin().unwrap();
        assert_eq!(
            registry
                .rewrite("keil-c51", &Source::new("unit.c", "sfr16 P0 _at_ 0x80;"))
                .unwrap(),
            "volatile unsigned short P0 0x80;"
        );
    }

    #[test]
    fn profiles_do_not_leak() {
        let registry = Registry::builtin().unwrap();
        let text = "xdata unsigned char buf[4];";
        assert_eq!(
            registry.rewrite("keil-c51", &Source::new("unit.c", text)).unwrap(),
            "unsigned char buf[4];"
        );
        assert_eq!(
            registry.rewrite("armclang", &Source::new("unit.c", text)).unwrap(),
            text
        );
    }

    /// A fragment which uses every symbol of `profile` except its intrinsics
    fn uses(profile: &DialectProfile) -> String {
        let mut text = String::new();
        for rule in profile.rules() {
            let name = rule.symbol_name();
            let zeros = |params: &[String]| vec!["0"; params.len()].join(", ");
            let usage = match rule.replacement() {
                Replacement::Prototype { .. } => continue,
                Replacement::Arguments(params) => format!("{}({})", name, zeros(params)),
                Replacement::Expression {
                    params: Some(params),
                    ..
                } => format!("{}({})", name, zeros(params)),
                _ => name.to_string(),
            };
            text.push_str(&usage);
            text.push_str(";\n");
        }
        text
    }

    #[test]
    fn no_vendor_tokens_remain() {
        for profile in builtin::profiles().unwrap() {
            let out = rewrite(&profile, &uses(&profile));
            let source = Source::new("out.c", &out);

            for token in tokenize(&source, TracingConfig::Off).unwrap() {
                if let Some(rule) = token.id().and_then(|id| profile.get(id)) {
                    let declared = match rule.replacement() {
                        Replacement::Prototype { .. } | Replacement::Arguments(_) => true,
                        Replacement::Expression { params, .. } => params.is_some(),
                        _ => false,
                    };
                    assert!(declared, "{}: {} left in {}", profile.id(), rule, out);
                }
            }
        }
    }
}
