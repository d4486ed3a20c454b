//! Renders a profile as a header which a host force includes ahead of each
//! translation unit.  The rendered header reads back through
//! [`parse_header`](super::parse_header) into the same rules.

use std::fmt::{Display, Formatter, Result};

use super::{DialectProfile, Replacement, SymbolRewriteRule};

/// The prologue of a profile: a banner, the retraction of host macros, then
/// every rule in authoring order.
pub struct Prologue<'a>(pub &'a DialectProfile);

impl<'a> Display for Prologue<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let profile = self.0;

        writeln!(f, "/*")?;
        writeln!(f, " * Dialect prologue for {}", profile)?;
        if !profile.description().is_empty() {
            writeln!(f, " * {}", profile.description().replace("*/", "* /"))?;
        }
        writeln!(f, " */")?;

        for name in profile.undefines() {
            writeln!(f, "#ifdef {}\n#undef {}\n#endif", name, name)?;
        }

        for rule in profile.rules() {
            writeln!(f, "{}", render_rule(rule))?;
        }

        Ok(())
    }
}

/// Renders the prologue of `profile`.
pub fn render_prologue(profile: &DialectProfile) -> String {
    Prologue(profile).to_string()
}

/// Renders one rule as the directive or declaration which defines it.
pub fn render_rule(rule: &SymbolRewriteRule) -> String {
    let name = rule.symbol_name();
    match rule.replacement() {
        Replacement::Nothing => format!("#define {}", name),
        Replacement::Arguments(params) => format!("#define {}({})", name, params.join(", ")),
        Replacement::Expression { params: None, body } => format!("#define {} {}", name, body),
        Replacement::Expression {
            params: Some(params),
            body,
        } => format!("#define {}({}) {}", name, params.join(", "), body),
        Replacement::Prototype { returns, params } => format!("{} {}({});", returns, name, params),
        Replacement::Type(target) => format!("typedef {} {};", target, name),
    }
}

#[cfg(test)]
mod tests {
    use crate::diagnostics::TracingConfig;
    use crate::dialect::builtin;
    use crate::dialect::*;

    #[test]
    fn rules() {
        for (rule, expected) in vec![
            (SymbolRewriteRule::keyword("__irq"), "#define __irq"),
            (
                SymbolRewriteRule::elide_call("__attribute__", &["x"]),
                "#define __attribute__(x)",
            ),
            (
                SymbolRewriteRule::elide_call("__disable_irq", &[]),
                "#define __disable_irq()",
            ),
            (
                SymbolRewriteRule::value("__DBL_MIN_EXP__", "(-1021)"),
                "#define __DBL_MIN_EXP__ (-1021)",
            ),
            (
                SymbolRewriteRule::function_macro("__builtin_va_arg", &["x", "t"], "((t)0)"),
                "#define __builtin_va_arg(x, t) ((t)0)",
            ),
            (
                SymbolRewriteRule::prototype("__ror", "unsigned int", "unsigned int val, unsigned int shift"),
                "unsigned int __ror(unsigned int val, unsigned int shift);",
            ),
            (
                SymbolRewriteRule::type_alias("sfr16", "volatile unsigned short"),
                "typedef volatile unsigned short sfr16;",
            ),
        ] {
            assert_eq!(render_rule(&rule), expected);
        }
    }

    #[test]
    fn layout() {
        let mut builder = ProfileBuilder::new("keil-c51", CompilerFamily::KeilC51, "mcs51");
        builder.description("Keil C51");
        builder.undefine("_WIN32");
        builder
            .add(SymbolRewriteRule::keyword("_at_"), Origin::new("a.h", 1))
            .unwrap();
        let profile = builder.build();
        let text = render_prologue(&profile);
        assert_eq!(format!("{}", Prologue(&profile)), text);

        assert_eq!(
            text,
            "/*\n * Dialect prologue for keil-c51 (keil-c51, mcs51)\n * Keil C51\n */\n\
             #ifdef _WIN32\n#undef _WIN32\n#endif\n\
             #define _at_\n"
        );
    }

    #[test]
    fn builtin_prologues_read_back() {
        for profile in builtin::profiles().unwrap() {
            let text = render_prologue(&profile);
            let source = Source::new(profile.id(), &text);

            let mut builder = ProfileBuilder::new(profile.id(), profile.family(), profile.target());
            builder.description(profile.description());
            load_header(&mut builder, &source, TracingConfig::Off)
                .unwrap_or_else(|e| panic!("{}: {}", profile.id(), e));

            assert_eq!(builder.build(), profile, "{}", profile.id());
        }
    }
}
