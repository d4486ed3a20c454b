#[cfg(test)]
mod tests {
    use crate::dialect::registry::*;
    use crate::dialect::{
        CompilerFamily, DialectError, Origin, ProfileBuilder, Source, SymbolRewriteRule,
    };

    fn profile(id: &str, rules: Vec<SymbolRewriteRule>) -> crate::dialect::DialectProfile {
        let mut builder = ProfileBuilder::new(id, CompilerFamily::Other, "none");
        builder.extend(rules, &Origin::new("test.h", 0)).unwrap();
        builder.build()
    }

    #[test]
    fn builtin_ids() {
        let registry = Registry::builtin().unwrap();
        assert_eq!(
            registry.ids().collect::<Vec<_>>(),
            vec!["armcc", "armclang", "iar-arm", "iar-stm8", "keil-c51", "sdcc"]
        );
    }

    #[test]
    fn lookup_is_exact() {
        let registry = Registry::builtin().unwrap();
        assert!(registry.lookup("armclang").is_ok());
        for id in vec!["ArmClang", "arm", "armclang ", "keil", "", "Keil C51"] {
            assert_eq!(
                registry.lookup(id).unwrap_err(),
                RegistryError::UnknownProfile(id.into())
            );
        }
    }

    #[test]
    fn lookup_is_stable() {
        let registry = Registry::builtin().unwrap();
        for profile in registry.profiles() {
            for symbol in profile.symbols() {
                for _ in 0..2 {
                    assert!(registry.lookup(profile.id()).unwrap().contains(symbol));
                }
            }
        }
    }

    #[test]
    fn shared_symbols_resolve_per_profile() {
        let registry = Registry::builtin().unwrap();
        let stm8 = registry.lookup("iar-stm8").unwrap().get("__far").cloned();
        let sdcc = registry.lookup("sdcc").unwrap().get("__far").cloned();
        assert_eq!(stm8, Some(SymbolRewriteRule::keyword("__far")));
        assert_eq!(sdcc, Some(SymbolRewriteRule::keyword("__far")));
        assert!(!registry.lookup("armclang").unwrap().contains("__far"));
    }

    #[test]
    fn register() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());

        registry
            .register(profile("custom", vec![SymbolRewriteRule::keyword("__x")]))
            .unwrap();
        assert_eq!(
            registry.register(profile("custom", vec![])),
            Err(RegistryError::DuplicateProfile("custom".into()))
        );
        assert_eq!(registry.len(), 1);
        assert!(registry.lookup("custom").unwrap().contains("__x"));
    }

    #[test]
    fn prologue() {
        let mut registry = Registry::new();
        registry
            .register(profile("custom", vec![SymbolRewriteRule::keyword("__x")]))
            .unwrap();
        assert!(registry.prologue("custom").unwrap().ends_with("#define __x\n"));
        assert_eq!(
            registry.prologue("other"),
            Err(RegistryError::UnknownProfile("other".into()))
        );
    }

    #[test]
    fn rewrite_unknown_profile() {
        let registry = Registry::new();
        match registry.rewrite("armclang", &Source::new("unit.c", "int x;")) {
            Err(DialectError::Registry(RegistryError::UnknownProfile(id))) => {
                assert_eq!(id, "armclang")
            }
            other => panic!("Expected an unknown profile, got {:?}", other),
        }
    }

    #[test]
    fn shareable_between_threads() {
        fn shareable<T: Send + Sync>(_: &T) {}
        let registry = Registry::builtin().unwrap();
        shareable(&registry);

        let registry = std::sync::Arc::new(registry);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = registry.clone();
                std::thread::spawn(move || {
                    registry
                        .rewrite("keil-c51", &Source::new("unit.c", "bit flag;"))
                        .unwrap()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), "_Bool flag;");
        }
    }
}
