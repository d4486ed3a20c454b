//! Keil C51 for the 8051
//!
//! `interrupt`, `using`, `_task_` and `_priority_` take a number without
//! parentheses; they are elided calls so that the number goes with them.

use super::BuiltinTable;
use crate::dialect::CompilerFamily;

pub static TABLE: BuiltinTable = BuiltinTable {
    id: "keil-c51",
    family: CompilerFamily::KeilC51,
    target: "mcs51",
    description: "Keil C51 (8051)",
    undefines: &[],
    values: &[],
    keywords: &[
        "__C51__",
        // Function attributes
        "_at_",
        "reentrant",
        // Memory models
        "compact",
        "small",
        "large",
        // Memory types
        "data",
        "bdata",
        "idata",
        "pdata",
        "xdata",
        "code",
    ],
    elided_calls: &[
        ("interrupt", &["n"]),
        ("using", &["n"]),
        ("_task_", &["n"]),
        ("_priority_", &["n"]),
    ],
    function_macros: &[],
    type_aliases: &[
        ("bit", "_Bool"),
        ("sbit", "volatile _Bool"),
        ("sfr", "volatile unsigned char"),
        ("sfr16", "volatile unsigned short"),
        ("sfr32", "volatile unsigned long"),
    ],
    prototypes: &[],
};
