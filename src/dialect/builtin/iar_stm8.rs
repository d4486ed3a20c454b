//! IAR C/C++ Compiler for STM8
//!
//! The memory list macros of the compiler (`__DATA_MEMORY_LIST1__()` and
//! friends) expand to helper macros that only the vendor's own library
//! headers define, so they are not part of this table.

use super::BuiltinTable;
use crate::dialect::CompilerFamily;

pub static TABLE: BuiltinTable = BuiltinTable {
    id: "iar-stm8",
    family: CompilerFamily::IarStm8,
    target: "stm8",
    description: "IAR C/C++ Compiler for STM8",
    undefines: &["__GNUC__"],
    values: &[
        // Compiler identification
        ("__IAR_SYSTEMS_ICC__", "8"),
        ("__ICCSTM8__", "1"),
        ("__VER__", "311"),
        ("__SUBVERSION__", "1"),
        ("__BUILD_NUMBER__", "207"),
        ("__IAR_COMPILERBASE__", "595716"),
        ("__TID__", "0x3800"),
        ("__VERSION__", "\"IAR C/C++ Compiler V3.11.1.207 for STM8\""),
        ("__STDC__", "1"),
        ("__STDC_VERSION__", "199901L"),
        ("__STDC_HOSTED__", "1"),
        ("__STDC_NO_VLA__", "1"),
        ("__STDC_NO_ATOMICS__", "1"),
        ("__EDG__", "1"),
        ("__EDG_VERSION__", "410"),
        // Core and memory models
        ("__STM8__", "1"),
        ("__CORE__", "__STM8__"),
        ("__SMALL_CODE_MODEL__", "1"),
        ("__MEDIUM_CODE_MODEL__", "2"),
        ("__LARGE_CODE_MODEL__", "3"),
        ("__SMALL_DATA_MODEL__", "1"),
        ("__MEDIUM_DATA_MODEL__", "2"),
        ("__LARGE_DATA_MODEL__", "3"),
        ("__CODE_MODEL__", "__MEDIUM_CODE_MODEL__"),
        ("__DATA_MODEL__", "__MEDIUM_DATA_MODEL__"),
        ("__DEF_PTR_MEM__", "__near"),
        ("__DEF_PTR_SIZE__", "2"),
        ("__DEF_HEAP_MEM__", "__near"),
        ("__LITTLE_ENDIAN__", "0"),
        ("__HAS_WEAK__", "1"),
        ("__HAS_LOCATED_DECLARATION__", "1"),
        ("__HAS_LOCATED_WITH_INIT__", "1"),
        ("__PLAIN_INT_BITFIELD_IS_SIGNED__", "1"),
        ("__MULTIPLE_HEAPS__", "0"),
        // Memory attributes
        ("__CODE_MEM0__", "__far_func"),
        ("__CODE_MEM0_POINTER_OK__", "1"),
        ("__CODE_MEM0_UNIQUE_POINTER__", "0"),
        ("__CODE_MEM0_VAR_OK__", "1"),
        ("__CODE_MEM1__", "__huge_func"),
        ("__CODE_MEM1_POINTER_OK__", "1"),
        ("__CODE_MEM1_UNIQUE_POINTER__", "1"),
        ("__CODE_MEM1_VAR_OK__", "1"),
        ("__DATA_MEM0__", "__tiny"),
        ("__DATA_MEM0_POINTER_OK__", "1"),
        ("__DATA_MEM0_UNIQUE_POINTER__", "1"),
        ("__DATA_MEM0_VAR_OK__", "1"),
        ("__DATA_MEM0_INDEX_TYPE__", "signed char"),
        ("__DATA_MEM0_SIZE_TYPE__", "unsigned char"),
        ("__DATA_MEM0_INTPTR_TYPE__", "signed char"),
        ("__DATA_MEM0_UINTPTR_TYPE__", "unsigned char"),
        ("__DATA_MEM0_INTPTR_SIZE_PREFIX__", "\"hh\""),
        ("__DATA_MEM0_MAX_SIZE__", "0xff"),
        ("__DATA_MEM1__", "__near"),
        ("__DATA_MEM1_POINTER_OK__", "1"),
        ("__DATA_MEM1_UNIQUE_POINTER__", "1"),
        ("__DATA_MEM1_VAR_OK__", "1"),
        ("__DATA_MEM1_INDEX_TYPE__", "short"),
        ("__DATA_MEM1_SIZE_TYPE__", "unsigned short"),
        ("__DATA_MEM1_INTPTR_TYPE__", "short int"),
        ("__DATA_MEM1_UINTPTR_TYPE__", "unsigned short int"),
        ("__DATA_MEM1_INTPTR_SIZE_PREFIX__", "\"h\""),
        ("__DATA_MEM1_MAX_SIZE__", "0xffff"),
        ("__DATA_MEM1_HEAP_SEGMENT__", "\"HEAP\""),
        ("__DATA_MEM1_PAGE_SIZE__", "0"),
        ("__DATA_MEM1_HEAP__", "1"),
        ("__DATA_MEM2__", "__far"),
        ("__DATA_MEM2_POINTER_OK__", "1"),
        ("__DATA_MEM2_UNIQUE_POINTER__", "1"),
        ("__DATA_MEM2_VAR_OK__", "1"),
        ("__DATA_MEM2_INDEX_TYPE__", "short"),
        ("__DATA_MEM2_SIZE_TYPE__", "unsigned short"),
        ("__DATA_MEM2_INTPTR_TYPE__", "long int"),
        ("__DATA_MEM2_UINTPTR_TYPE__", "unsigned long int"),
        ("__DATA_MEM2_INTPTR_SIZE_PREFIX__", "\"l\""),
        ("__DATA_MEM2_MAX_SIZE__", "0xffff"),
        ("__DATA_MEM3__", "__huge"),
        ("__DATA_MEM3_POINTER_OK__", "1"),
        ("__DATA_MEM3_UNIQUE_POINTER__", "1"),
        ("__DATA_MEM3_VAR_OK__", "1"),
        ("__DATA_MEM3_INDEX_TYPE__", "long"),
        ("__DATA_MEM3_SIZE_TYPE__", "unsigned long"),
        ("__DATA_MEM3_INTPTR_TYPE__", "long int"),
        ("__DATA_MEM3_UINTPTR_TYPE__", "unsigned long int"),
        ("__DATA_MEM3_INTPTR_SIZE_PREFIX__", "\"l\""),
        ("__DATA_MEM3_MAX_SIZE__", "0xffffffff"),
        ("__DATA_MEM4__", "__eeprom"),
        ("__DATA_MEM4_POINTER_OK__", "1"),
        ("__DATA_MEM4_UNIQUE_POINTER__", "1"),
        ("__DATA_MEM4_VAR_OK__", "1"),
        ("__DATA_MEM4_INDEX_TYPE__", "short"),
        ("__DATA_MEM4_SIZE_TYPE__", "unsigned short"),
        ("__DATA_MEM4_INTPTR_TYPE__", "short int"),
        ("__DATA_MEM4_UINTPTR_TYPE__", "unsigned short int"),
        ("__DATA_MEM4_INTPTR_SIZE_PREFIX__", "\"h\""),
        ("__DATA_MEM4_MAX_SIZE__", "0xffff"),
        ("__HEAP_MEM0__", "1"),
        ("__HEAP_DEFAULT_MEM__", "1"),
        // Sizes and limits
        ("__CHAR_BITS__", "8"),
        ("__CHAR_MAX__", "0xff"),
        ("__CHAR_MIN__", "0"),
        ("__CHAR_SIZE__", "1"),
        ("__UNSIGNED_CHAR_MAX__", "0xff"),
        ("__SIGNED_CHAR_MAX__", "127"),
        ("__SIGNED_CHAR_MIN__", "(-__SIGNED_CHAR_MAX__-1)"),
        ("__SHORT_SIZE__", "2"),
        ("__UNSIGNED_SHORT_MAX__", "0xffffU"),
        ("__SIGNED_SHORT_MAX__", "32767"),
        ("__SIGNED_SHORT_MIN__", "(-__SIGNED_SHORT_MAX__-1)"),
        ("__INT_SIZE__", "2"),
        ("__UNSIGNED_INT_MAX__", "0xffffU"),
        ("__SIGNED_INT_MAX__", "32767"),
        ("__SIGNED_INT_MIN__", "(-__SIGNED_INT_MAX__-1)"),
        ("__LONG_SIZE__", "4"),
        ("__UNSIGNED_LONG_MAX__", "0xffffffffUL"),
        ("__SIGNED_LONG_MAX__", "2147483647L"),
        ("__SIGNED_LONG_MIN__", "(-__SIGNED_LONG_MAX__-1)"),
        ("__LONG_LONG_SIZE__", "4"),
        ("__UNSIGNED_LONG_LONG_MAX__", "0xffffffffULL"),
        ("__SIGNED_LONG_LONG_MAX__", "2147483647LL"),
        ("__SIGNED_LONG_LONG_MIN__", "(-__SIGNED_LONG_LONG_MAX__-1)"),
        ("__FLOAT_SIZE__", "4"),
        ("__DOUBLE_SIZE__", "4"),
        ("__LONG_DOUBLE_SIZE__", "4"),
        ("__BOOL_SIZE__", "1"),
        ("__WCHAR_T_SIZE__", "2"),
        ("__WCHAR_T_MAX__", "0xffffU"),
        ("__SIZE_T_MAX__", "0xffffU"),
        ("__PTRDIFF_T_MAX__", "32767"),
        ("__PTRDIFF_T_MIN__", "(-__PTRDIFF_T_MAX__-1)"),
        ("__CHAR_ALIGN__", "1"),
        ("__SHORT_ALIGN__", "1"),
        ("__INT_ALIGN__", "1"),
        ("__LONG_ALIGN__", "1"),
        ("__LONG_LONG_ALIGN__", "1"),
        ("__INT8_T_MAX__", "127"),
        ("__INT8_T_MIN__", "(-__INT8_T_MAX__-1)"),
        ("__UINT8_T_MAX__", "0xff"),
        ("__INT16_T_MAX__", "32767"),
        ("__INT16_T_MIN__", "(-__INT16_T_MAX__-1)"),
        ("__UINT16_T_MAX__", "0xffffU"),
        ("__INT32_T_MAX__", "2147483647L"),
        ("__INT32_T_MIN__", "(-__INT32_T_MAX__-1)"),
        ("__UINT32_T_MAX__", "0xffffffffUL"),
        ("__INT_LEAST8_T_MAX__", "127"),
        ("__INT_LEAST8_T_MIN__", "(-__INT_LEAST8_T_MAX__-1)"),
        ("__UINT_LEAST8_T_MAX__", "0xff"),
        ("__INT_LEAST16_T_MAX__", "32767"),
        ("__INT_LEAST16_T_MIN__", "(-__INT_LEAST16_T_MAX__-1)"),
        ("__UINT_LEAST16_T_MAX__", "0xffffU"),
        ("__INT_LEAST32_T_MAX__", "2147483647L"),
        ("__INT_LEAST32_T_MIN__", "(-__INT_LEAST32_T_MAX__-1)"),
        ("__UINT_LEAST32_T_MAX__", "0xffffffffUL"),
        ("__INT_FAST8_T_MAX__", "127"),
        ("__INT_FAST8_T_MIN__", "(-__INT_FAST8_T_MAX__-1)"),
        ("__UINT_FAST8_T_MAX__", "0xff"),
        ("__INT_FAST16_T_MAX__", "32767"),
        ("__INT_FAST16_T_MIN__", "(-__INT_FAST16_T_MAX__-1)"),
        ("__UINT_FAST16_T_MAX__", "0xffffU"),
        ("__INT_FAST32_T_MAX__", "2147483647L"),
        ("__INT_FAST32_T_MIN__", "(-__INT_FAST32_T_MAX__-1)"),
        ("__UINT_FAST32_T_MAX__", "0xffffffffUL"),
        ("__INTMAX_T_MAX__", "2147483647L"),
        ("__INTMAX_T_MIN__", "(-__INTMAX_T_MAX__-1)"),
        ("__UINTMAX_T_MAX__", "0xffffffffUL"),
        ("__FLOAT_ALIGN__", "1"),
        ("__DOUBLE_ALIGN__", "1"),
        ("__LONG_DOUBLE_ALIGN__", "1"),
        ("__INTPTR_T_MAX__", "32767"),
        ("__INTPTR_T_MIN__", "(-__INTPTR_T_MAX__-1)"),
        ("__UINTPTR_T_MAX__", "0xffffU"),
        // Types
        ("__INT8_T_TYPE__", "signed char"),
        ("__UINT8_T_TYPE__", "unsigned char"),
        ("__INT16_T_TYPE__", "signed int"),
        ("__UINT16_T_TYPE__", "unsigned int"),
        ("__INT32_T_TYPE__", "signed long int"),
        ("__UINT32_T_TYPE__", "unsigned long int"),
        ("__INTMAX_T_TYPE__", "signed long int"),
        ("__UINTMAX_T_TYPE__", "unsigned long int"),
        ("__SIZE_T_TYPE__", "unsigned short int"),
        ("__PTRDIFF_T_TYPE__", "signed short int"),
        ("__INTPTR_T_TYPE__", "signed short int"),
        ("__UINTPTR_T_TYPE__", "unsigned short int"),
        ("__WCHAR_T_TYPE__", "unsigned short int"),
        ("__BOOL_TYPE__", "unsigned char"),
        ("__UINT16_C_SUFFIX__", "U"),
        ("__INT32_C_SUFFIX__", "L"),
        ("__UINT32_C_SUFFIX__", "UL"),
        ("__INTMAX_C_SUFFIX__", "L"),
        ("__UINTMAX_C_SUFFIX__", "UL"),
        ("_DLIB_CONFIG_FILE_HEADER_NAME", "\"DLib_Config_Normal.h\""),
        ("_DLIB_CONFIG_FILE_STRING", "\"DLib_Config_Normal.h\""),
        ("__INT8_SIZE_PREFIX__", "\"hh\""),
        ("__INT16_SIZE_PREFIX__", "\"\""),
        ("__INT32_SIZE_PREFIX__", "\"l\""),
        ("__INT_LEAST8_T_TYPE__", "signed char"),
        ("__UINT_LEAST8_T_TYPE__", "unsigned char"),
        ("__INT_LEAST8_SIZE_PREFIX__", "\"hh\""),
        ("__INT_LEAST16_T_TYPE__", "signed int"),
        ("__UINT_LEAST16_T_TYPE__", "unsigned int"),
        ("__INT_LEAST16_SIZE_PREFIX__", "\"\""),
        ("__INT_LEAST32_T_TYPE__", "signed long int"),
        ("__UINT_LEAST32_T_TYPE__", "unsigned long int"),
        ("__INT_LEAST32_SIZE_PREFIX__", "\"l\""),
        ("__INT_FAST8_T_TYPE__", "signed char"),
        ("__UINT_FAST8_T_TYPE__", "unsigned char"),
        ("__INT_FAST8_SIZE_PREFIX__", "\"hh\""),
        ("__INT_FAST16_T_TYPE__", "signed int"),
        ("__UINT_FAST16_T_TYPE__", "unsigned int"),
        ("__INT_FAST16_SIZE_PREFIX__", "\"\""),
        ("__INT_FAST32_T_TYPE__", "signed long int"),
        ("__UINT_FAST32_T_TYPE__", "unsigned long int"),
        ("__INT_FAST32_SIZE_PREFIX__", "\"l\""),
        ("__INTMAX_SIZE_PREFIX__", "\"l\""),
        ("__INTPTR_SIZE_PREFIX__", "\"h\""),
        // Floating point and calling convention
        ("__NAN_HAS_HIGH_MANTISSA_BIT_SET__", "0"),
        ("__SUBNORMAL_FLOATING_POINTS__", "1"),
        ("__JMP_BUF_ELEMENT_TYPE__", "unsigned char"),
        ("__JMP_BUF_NUM_ELEMENTS__", "29"),
        ("__VA_STACK_DECREASING__", "1"),
        ("__VA_STACK_ALIGN__", "1"),
        ("__VA_STACK_ALIGN_EXTRA_BEFORE__", "1"),
        // EDG front end
        ("__MULTIPLE_INHERITANCE__", "1"),
        ("_RTSL_COMPARE_T", "unsigned char"),
        ("__EDG_IA64_ABI", "1"),
        ("__EDG_IA64_ABI_VARIANT_CTORS_AND_DTORS_RETURN_THIS", "1"),
        ("__EDG_IA64_ABI_USE_INT_STATIC_INIT_GUARD", "1"),
        ("__EDG_TYPE_TRAITS_ENABLED", "1"),
        ("__EDG_SIZE_TYPE__", "unsigned short"),
        ("__EDG_PTRDIFF_TYPE__", "short"),
        ("__EDG_DELTA_TYPE", "short"),
        ("__EDG_IA64_VTABLE_ENTRY_TYPE", "short"),
        ("__EDG_VIRTUAL_FUNCTION_INDEX_TYPE", "unsigned short"),
        ("__EDG_LOWER_VARIABLE_LENGTH_ARRAYS", "1"),
        ("__EDG_IA64_ABI_USE_VARIANT_ARRAY_COOKIES", "1"),
        ("__EDG_ABI_COMPATIBILITY_VERSION", "9999"),
        ("__EDG_ABI_CHANGES_FOR_RTTI", "1"),
        ("__EDG_ABI_CHANGES_FOR_ARRAY_NEW_AND_DELETE", "1"),
        ("__EDG_ABI_CHANGES_FOR_PLACEMENT_DELETE", "1"),
        ("__EDG_BSD", "0"),
        ("__EDG_SYSV", "0"),
        ("__EDG_ANSIC", "1"),
        ("__EDG_CPP11_IL_EXTENSIONS_SUPPORTED", "1"),
    ],
    keywords: &[
        "__INT8_C_SUFFIX__",
        "__UINT8_C_SUFFIX__",
        "__INT16_C_SUFFIX__",
        // Extended keywords
        "__eeprom",
        "__far",
        "__far_func",
        "__huge",
        "__huge_func",
        "__interrupt",
        "__intrinsic",
        "__monitor",
        "__near",
        "__near_func",
        "__no_init",
        "__noreturn",
        "__ramfunc",
        "__root",
        "__ro_placement",
        "__task",
        "__tiny",
        "__weak",
        "__nounwind",
        "__data16",
        "__regvar",
        "__raw",
        "__save_reg20",
    ],
    elided_calls: &[
        ("__trap", &[]),
        ("asm", &["str"]),
        ("__asm", &["str"]),
        ("_Pragma", &["x"]),
        ("__ALIGNOF__", &["x"]),
    ],
    function_macros: &[],
    type_aliases: &[],
    prototypes: &[],
};
