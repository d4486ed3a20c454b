//! IAR C/C++ Compiler for ARM

use super::BuiltinTable;
use crate::dialect::CompilerFamily;

pub static TABLE: BuiltinTable = BuiltinTable {
    id: "iar-arm",
    family: CompilerFamily::IarArm,
    target: "arm",
    description: "IAR C/C++ Compiler for ARM",
    undefines: &["__GNUC__"],
    values: &[
        ("__IAR_SYSTEMS_ICC__", "8"),
        ("__ICCarm__", "1"),
        ("__VER__", "7080002"),
    ],
    keywords: &[
        "__absolute",
        "__arm",
        "__big_endian",
        "__fiq",
        "__interwork",
        "__intrinsic",
        "__irq",
        "__little_endian",
        "__no_alloc",
        "__no_alloc16",
        "__nested",
        "__no_init",
        "__noreturn",
        "__packed",
        "__pcrel",
        "__ramfunc",
        "__root",
        "__ro_placement",
        "__sbrel",
        "__stackless",
        "__swi",
        "__task",
        "__thumb",
        "__weak",
    ],
    elided_calls: &[("__no_alloc_str", &["str"]), ("__no_alloc_str16", &["str"])],
    function_macros: &[],
    type_aliases: &[("__istate_t", "unsigned long"), ("__ul", "unsigned long")],
    prototypes: &[
        ("void", "__CLREX", "void"),
        ("unsigned char", "__CLZ", "unsigned long"),
        // Interrupt control
        ("void", "__disable_fiq", "void"),
        ("void", "__disable_interrupt", "void"),
        ("void", "__disable_irq", "void"),
        ("void", "__enable_fiq", "void"),
        ("void", "__enable_interrupt", "void"),
        ("void", "__enable_irq", "void"),
        ("__istate_t", "__get_interrupt_state", "void"),
        ("void", "__set_interrupt_state", "__istate_t"),
        // Barriers
        ("void", "__DMB", "void"),
        ("void", "__DSB", "void"),
        ("void", "__ISB", "void"),
        // Special registers
        ("unsigned long", "__get_BASEPRI", "void"),
        ("unsigned long", "__get_CONTROL", "void"),
        ("unsigned long", "__get_CPSR", "void"),
        ("unsigned long", "__get_FAULTMASK", "void"),
        ("unsigned long", "__get_FPSCR", "void"),
        ("unsigned long", "__get_IPSR", "void"),
        ("unsigned long", "__get_LR", "void"),
        ("unsigned long", "__get_MSP", "void"),
        ("unsigned long", "__get_PRIMASK", "void"),
        ("unsigned long", "__get_PSP", "void"),
        ("unsigned long", "__get_PSR", "void"),
        ("unsigned long", "__get_SB", "void"),
        ("unsigned long", "__get_SP", "void"),
        ("void", "__set_BASEPRI", "unsigned long"),
        ("void", "__set_CONTROL", "unsigned long"),
        ("void", "__set_CPSR", "unsigned long"),
        ("void", "__set_FAULTMASK", "unsigned long"),
        ("void", "__set_FPSCR", "unsigned long"),
        ("void", "__set_LR", "unsigned long"),
        ("void", "__set_MSP", "unsigned long"),
        ("void", "__set_PRIMASK", "unsigned long"),
        ("void", "__set_PSP", "unsigned long"),
        ("void", "__set_SB", "unsigned long"),
        ("void", "__set_SP", "unsigned long"),
        // Coprocessor access
        ("void", "__LDC", "__ul coproc, __ul CRn, __ul const *src"),
        ("void", "__LDCL", "__ul coproc, __ul CRn, __ul const *src"),
        ("void", "__LDC2", "__ul coproc, __ul CRn, __ul const *src"),
        ("void", "__LDC2L", "__ul coproc, __ul CRn, __ul const *src"),
        ("void", "__LDC_noidx", "__ul coproc, __ul CRn, __ul const *src, __ul option"),
        ("void", "__LDCL_noidx", "__ul coproc, __ul CRn, __ul const *src, __ul option"),
        ("void", "__LDC2_noidx", "__ul coproc, __ul CRn, __ul const *src, __ul option"),
        ("void", "__LDC2L_noidx", "__ul coproc, __ul CRn, __ul const *src, __ul option"),
        ("void", "__MCR", "__ul coproc, __ul opcode_1, __ul src, __ul CRn, __ul CRm, __ul opcode_2"),
        ("void", "__MCR2", "__ul coproc, __ul opcode_1, __ul src, __ul CRn, __ul CRm, __ul opcode_2"),
        ("unsigned long", "__MRC", "__ul coproc, __ul opcode_1, __ul CRn, __ul CRm, __ul opcode_2"),
        ("unsigned long", "__MRC2", "__ul coproc, __ul opcode_1, __ul CRn, __ul CRm, __ul opcode_2"),
        // Exclusive access
        ("unsigned long", "__LDREX", "unsigned long *"),
        ("unsigned char", "__LDREXB", "unsigned char *"),
        ("unsigned long long", "__LDREXD", "unsigned long long *"),
        ("unsigned short", "__LDREXH", "unsigned short *"),
        // Instructions
        ("void", "__no_operation", "void"),
        ("unsigned long", "__PKHBT", "unsigned long x, unsigned long y, unsigned long count"),
        ("unsigned long", "__PKHTB", "unsigned long x, unsigned long y, unsigned long count"),
        ("void", "__PLD", "void const *"),
        ("void", "__PLDW", "void const *"),
        ("void", "__PLI", "void const *"),
        ("signed long", "__QADD", "signed long, signed long"),
        ("signed long", "__QDADD", "signed long, signed long"),
        ("signed long", "__QDSUB", "signed long, signed long"),
        ("signed long", "__QSUB", "signed long, signed long"),
        ("unsigned long", "__QADD8", "unsigned long, unsigned long"),
        ("unsigned long", "__QADD16", "unsigned long, unsigned long"),
        ("unsigned long", "__QASX", "unsigned long, unsigned long"),
        ("unsigned long", "__QSAX", "unsigned long, unsigned long"),
        ("unsigned long", "__QSUB8", "unsigned long, unsigned long"),
        ("unsigned long", "__QSUB16", "unsigned long, unsigned long"),
        ("unsigned long", "__QCFlag", "void"),
        ("signed long", "__QDOUBLE", "signed long"),
        ("int", "__QFlag", "void"),
        ("unsigned long", "__RBIT", "unsigned long"),
        ("void", "__reset_Q_flag", "void"),
        ("void", "__reset_QC_flag", "void"),
        ("unsigned long", "__REV", "unsigned long"),
        ("unsigned long", "__REV16", "unsigned long"),
        ("signed long", "__REVSH", "short"),
        ("unsigned long", "__SADD8", "unsigned long, unsigned long"),
        ("unsigned long", "__SADD16", "unsigned long, unsigned long"),
        ("unsigned long", "__SASX", "unsigned long, unsigned long"),
        ("unsigned long", "__SSAX", "unsigned long, unsigned long"),
        ("unsigned long", "__SSUB8", "unsigned long, unsigned long"),
        ("unsigned long", "__SSUB16", "unsigned long, unsigned long"),
        ("unsigned long", "__SEL", "unsigned long, unsigned long"),
        ("void", "__SEV", "void"),
        ("long", "__WFI", "void"),
        ("long", "__WFE", "void"),
        ("long", "__YIELD", "void"),
    ],
};
