//! Small Device C Compiler targeting the 8051

use super::BuiltinTable;
use crate::dialect::CompilerFamily;

pub static TABLE: BuiltinTable = BuiltinTable {
    id: "sdcc",
    family: CompilerFamily::Sdcc,
    target: "mcs51",
    description: "SDCC (8051)",
    undefines: &[],
    values: &[],
    keywords: &[
        "__reentrant",
        "__trap",
        "__critical",
        "__naked",
        // PIC ports
        "__wparam",
        "__shadowregs",
        // Storage classes
        "__data",
        "__idata",
        "__pdata",
        "__xdata",
        "__code",
        "__far",
        "__near",
    ],
    elided_calls: &[
        ("__interrupt", &["x"]),
        ("__using", &["x"]),
        ("__at", &["x"]),
        ("__asm__", &["x"]),
    ],
    function_macros: &[],
    type_aliases: &[
        ("__bit", "_Bool"),
        ("__sbit", "volatile _Bool"),
        ("__sfr", "volatile unsigned char"),
        ("__sfr16", "volatile unsigned short"),
        ("__sfr32", "volatile unsigned long"),
    ],
    prototypes: &[],
};
