//! `0xFD`-prefixed 128-bit SIMD opcodes.
//!
//! Sub-opcodes above `0x7F` are LEB128 encoded and so carry a trailing `01` byte.

use super::{Entry, instr};

/// Entries behind the `0xFD` prefix, in sub-opcode order.
pub(super) static VECTOR: &[Entry] = &[
    // ── Vector memory ───────────────────────────────────────────────
    instr(r"\V128.\LOAD~\memarg", r"\hex{FD}~~\hex{00}", r"[\I32] \to [\V128]"),
    instr(r"\V128.\LOAD\K{8x8\_s}~\memarg", r"\hex{FD}~~\hex{01}", r"[\I32] \to [\V128]"),
    instr(r"\V128.\LOAD\K{8x8\_u}~\memarg", r"\hex{FD}~~\hex{02}", r"[\I32] \to [\V128]"),
    instr(r"\V128.\LOAD\K{16x4\_s}~\memarg", r"\hex{FD}~~\hex{03}", r"[\I32] \to [\V128]"),
    instr(r"\V128.\LOAD\K{16x4\_u}~\memarg", r"\hex{FD}~~\hex{04}", r"[\I32] \to [\V128]"),
    instr(r"\V128.\LOAD\K{32x2\_s}~\memarg", r"\hex{FD}~~\hex{05}", r"[\I32] \to [\V128]"),
    instr(r"\V128.\LOAD\K{32x2\_u}~\memarg", r"\hex{FD}~~\hex{06}", r"[\I32] \to [\V128]"),
    instr(r"\V128.\LOAD\K{8\_splat}~\memarg", r"\hex{FD}~~\hex{07}", r"[\I32] \to [\V128]"),
    instr(r"\V128.\LOAD\K{16\_splat}~\memarg", r"\hex{FD}~~\hex{08}", r"[\I32] \to [\V128]"),
    instr(r"\V128.\LOAD\K{32\_splat}~\memarg", r"\hex{FD}~~\hex{09}", r"[\I32] \to [\V128]"),
    instr(r"\V128.\LOAD\K{64\_splat}~\memarg", r"\hex{FD}~~\hex{0A}", r"[\I32] \to [\V128]"),
    instr(r"\V128.\STORE~\memarg", r"\hex{FD}~~\hex{0B}", r"[\I32~\V128] \to []"),
    // ── Constant and shuffle ────────────────────────────────────────
    instr(r"\V128.\VCONST~\i128", r"\hex{FD}~~\hex{0C}", r"[] \to [\V128]"),
    instr(r"\I8X16.\SHUFFLE~\laneidx^{16}", r"\hex{FD}~~\hex{0D}", r"[\V128~\V128] \to [\V128]"),
    // ── Lane access ─────────────────────────────────────────────────
    instr(r"\I8X16.\SWIZZLE", r"\hex{FD}~~\hex{0E}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I8X16.\SPLAT", r"\hex{FD}~~\hex{0F}", r"[\I32] \to [\V128]"),
    instr(r"\I16X8.\SPLAT", r"\hex{FD}~~\hex{10}", r"[\I32] \to [\V128]"),
    instr(r"\I32X4.\SPLAT", r"\hex{FD}~~\hex{11}", r"[\I32] \to [\V128]"),
    instr(r"\I64X2.\SPLAT", r"\hex{FD}~~\hex{12}", r"[\I64] \to [\V128]"),
    instr(r"\F32X4.\SPLAT", r"\hex{FD}~~\hex{13}", r"[\F32] \to [\V128]"),
    instr(r"\F64X2.\SPLAT", r"\hex{FD}~~\hex{14}", r"[\F64] \to [\V128]"),
    instr(r"\I8X16.\EXTRACTLANE\K{\_s}~\laneidx", r"\hex{FD}~~\hex{15}", r"[\V128] \to [\I32]"),
    instr(r"\I8X16.\EXTRACTLANE\K{\_u}~\laneidx", r"\hex{FD}~~\hex{16}", r"[\V128] \to [\I32]"),
    instr(r"\I8X16.\REPLACELANE~\laneidx", r"\hex{FD}~~\hex{17}", r"[\V128~\I32] \to [\V128]"),
    instr(r"\I16X8.\EXTRACTLANE\K{\_s}~\laneidx", r"\hex{FD}~~\hex{18}", r"[\V128] \to [\I32]"),
    instr(r"\I16X8.\EXTRACTLANE\K{\_u}~\laneidx", r"\hex{FD}~~\hex{19}", r"[\V128] \to [\I32]"),
    instr(r"\I16X8.\REPLACELANE~\laneidx", r"\hex{FD}~~\hex{1A}", r"[\V128~\I32] \to [\V128]"),
    instr(r"\I32X4.\EXTRACTLANE~\laneidx", r"\hex{FD}~~\hex{1B}", r"[\V128] \to [\I32]"),
    instr(r"\I32X4.\REPLACELANE~\laneidx", r"\hex{FD}~~\hex{1C}", r"[\V128~\I32] \to [\V128]"),
    instr(r"\I64X2.\EXTRACTLANE~\laneidx", r"\hex{FD}~~\hex{1D}", r"[\V128] \to [\I64]"),
    instr(r"\I64X2.\REPLACELANE~\laneidx", r"\hex{FD}~~\hex{1E}", r"[\V128~\I64] \to [\V128]"),
    instr(r"\F32X4.\EXTRACTLANE~\laneidx", r"\hex{FD}~~\hex{1F}", r"[\V128] \to [\F32]"),
    instr(r"\F32X4.\REPLACELANE~\laneidx", r"\hex{FD}~~\hex{20}", r"[\V128~\F32] \to [\V128]"),
    instr(r"\F64X2.\EXTRACTLANE~\laneidx", r"\hex{FD}~~\hex{21}", r"[\V128] \to [\F64]"),
    instr(r"\F64X2.\REPLACELANE~\laneidx", r"\hex{FD}~~\hex{22}", r"[\V128~\F64] \to [\V128]"),
    // ── Comparison ──────────────────────────────────────────────────
    instr(r"\I8X16.\VEQ", r"\hex{FD}~~\hex{23}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I8X16.\VNE", r"\hex{FD}~~\hex{24}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I8X16.\VLT\K{\_s}", r"\hex{FD}~~\hex{25}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I8X16.\VLT\K{\_u}", r"\hex{FD}~~\hex{26}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I8X16.\VGT\K{\_s}", r"\hex{FD}~~\hex{27}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I8X16.\VGT\K{\_u}", r"\hex{FD}~~\hex{28}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I8X16.\VLE\K{\_s}", r"\hex{FD}~~\hex{29}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I8X16.\VLE\K{\_u}", r"\hex{FD}~~\hex{2A}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I8X16.\VGE\K{\_s}", r"\hex{FD}~~\hex{2B}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I8X16.\VGE\K{\_u}", r"\hex{FD}~~\hex{2C}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I16X8.\VEQ", r"\hex{FD}~~\hex{2D}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I16X8.\VNE", r"\hex{FD}~~\hex{2E}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I16X8.\VLT\K{\_s}", r"\hex{FD}~~\hex{2F}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I16X8.\VLT\K{\_u}", r"\hex{FD}~~\hex{30}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I16X8.\VGT\K{\_s}", r"\hex{FD}~~\hex{31}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I16X8.\VGT\K{\_u}", r"\hex{FD}~~\hex{32}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I16X8.\VLE\K{\_s}", r"\hex{FD}~~\hex{33}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I16X8.\VLE\K{\_u}", r"\hex{FD}~~\hex{34}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I16X8.\VGE\K{\_s}", r"\hex{FD}~~\hex{35}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I16X8.\VGE\K{\_u}", r"\hex{FD}~~\hex{36}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I32X4.\VEQ", r"\hex{FD}~~\hex{37}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I32X4.\VNE", r"\hex{FD}~~\hex{38}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I32X4.\VLT\K{\_s}", r"\hex{FD}~~\hex{39}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I32X4.\VLT\K{\_u}", r"\hex{FD}~~\hex{3A}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I32X4.\VGT\K{\_s}", r"\hex{FD}~~\hex{3B}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I32X4.\VGT\K{\_u}", r"\hex{FD}~~\hex{3C}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I32X4.\VLE\K{\_s}", r"\hex{FD}~~\hex{3D}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I32X4.\VLE\K{\_u}", r"\hex{FD}~~\hex{3E}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I32X4.\VGE\K{\_s}", r"\hex{FD}~~\hex{3F}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I32X4.\VGE\K{\_u}", r"\hex{FD}~~\hex{40}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\F32X4.\VEQ", r"\hex{FD}~~\hex{41}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\F32X4.\VNE", r"\hex{FD}~~\hex{42}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\F32X4.\VLT", r"\hex{FD}~~\hex{43}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\F32X4.\VGT", r"\hex{FD}~~\hex{44}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\F32X4.\VLE", r"\hex{FD}~~\hex{45}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\F32X4.\VGE", r"\hex{FD}~~\hex{46}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\F64X2.\VEQ", r"\hex{FD}~~\hex{47}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\F64X2.\VNE", r"\hex{FD}~~\hex{48}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\F64X2.\VLT", r"\hex{FD}~~\hex{49}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\F64X2.\VGT", r"\hex{FD}~~\hex{4A}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\F64X2.\VLE", r"\hex{FD}~~\hex{4B}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\F64X2.\VGE", r"\hex{FD}~~\hex{4C}", r"[\V128~\V128] \to [\V128]"),
    // ── Bitwise ─────────────────────────────────────────────────────
    instr(r"\V128.\VNOT", r"\hex{FD}~~\hex{4D}", r"[\V128] \to [\V128]"),
    instr(r"\V128.\VAND", r"\hex{FD}~~\hex{4E}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\V128.\VANDNOT", r"\hex{FD}~~\hex{4F}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\V128.\VOR", r"\hex{FD}~~\hex{50}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\V128.\VXOR", r"\hex{FD}~~\hex{51}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\V128.\BITSELECT", r"\hex{FD}~~\hex{52}", r"[\V128~\V128~\V128] \to [\V128]"),
    instr(r"\V128.\ANYTRUE", r"\hex{FD}~~\hex{53}", r"[\V128] \to [\I32]"),
    // ── Lane loads and stores ───────────────────────────────────────
    instr(
        r"\V128.\LOAD\K{8\_lane}~\memarg~\laneidx",
        r"\hex{FD}~~\hex{54}",
        r"[\I32~\V128] \to [\V128]",
    ),
    instr(
        r"\V128.\LOAD\K{16\_lane}~\memarg~\laneidx",
        r"\hex{FD}~~\hex{55}",
        r"[\I32~\V128] \to [\V128]",
    ),
    instr(
        r"\V128.\LOAD\K{32\_lane}~\memarg~\laneidx",
        r"\hex{FD}~~\hex{56}",
        r"[\I32~\V128] \to [\V128]",
    ),
    instr(
        r"\V128.\LOAD\K{64\_lane}~\memarg~\laneidx",
        r"\hex{FD}~~\hex{57}",
        r"[\I32~\V128] \to [\V128]",
    ),
    instr(
        r"\V128.\STORE\K{8\_lane}~\memarg~\laneidx",
        r"\hex{FD}~~\hex{58}",
        r"[\I32~\V128] \to []",
    ),
    instr(
        r"\V128.\STORE\K{16\_lane}~\memarg~\laneidx",
        r"\hex{FD}~~\hex{59}",
        r"[\I32~\V128] \to []",
    ),
    instr(
        r"\V128.\STORE\K{32\_lane}~\memarg~\laneidx",
        r"\hex{FD}~~\hex{5A}",
        r"[\I32~\V128] \to []",
    ),
    instr(
        r"\V128.\STORE\K{64\_lane}~\memarg~\laneidx",
        r"\hex{FD}~~\hex{5B}",
        r"[\I32~\V128] \to []",
    ),
    instr(r"\V128.\LOAD\K{32\_zero}~\memarg", r"\hex{FD}~~\hex{5C}", r"[\I32] \to [\V128]"),
    instr(r"\V128.\LOAD\K{64\_zero}~\memarg", r"\hex{FD}~~\hex{5D}", r"[\I32] \to [\V128]"),
    // ── Conversion ──────────────────────────────────────────────────
    instr(r"\F32X4.\VDEMOTE\K{\_f64x2\_zero}", r"\hex{FD}~~\hex{5E}", r"[\V128] \to [\V128]"),
    instr(r"\F64X2.\VPROMOTE\K{\_low\_f32x4}", r"\hex{FD}~~\hex{5F}", r"[\V128] \to [\V128]"),
    // ── Integer lanes ───────────────────────────────────────────────
    instr(r"\I8X16.\VABS", r"\hex{FD}~~\hex{60}", r"[\V128] \to [\V128]"),
    instr(r"\I8X16.\VNEG", r"\hex{FD}~~\hex{61}", r"[\V128] \to [\V128]"),
    instr(r"\I8X16.\VPOPCNT", r"\hex{FD}~~\hex{62}", r"[\V128] \to [\V128]"),
    instr(r"\I8X16.\ALLTRUE", r"\hex{FD}~~\hex{63}", r"[\V128] \to [\I32]"),
    instr(r"\I8X16.\BITMASK", r"\hex{FD}~~\hex{64}", r"[\V128] \to [\I32]"),
    instr(r"\I8X16.\NARROW\K{\_i16x8\_s}", r"\hex{FD}~~\hex{65}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I8X16.\NARROW\K{\_i16x8\_u}", r"\hex{FD}~~\hex{66}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\F32X4.\VCEIL", r"\hex{FD}~~\hex{67}", r"[\V128] \to [\V128]"),
    instr(r"\F32X4.\VFLOOR", r"\hex{FD}~~\hex{68}", r"[\V128] \to [\V128]"),
    instr(r"\F32X4.\VTRUNC", r"\hex{FD}~~\hex{69}", r"[\V128] \to [\V128]"),
    instr(r"\F32X4.\VNEAREST", r"\hex{FD}~~\hex{6A}", r"[\V128] \to [\V128]"),
    instr(r"\I8X16.\VSHL", r"\hex{FD}~~\hex{6B}", r"[\V128~\I32] \to [\V128]"),
    instr(r"\I8X16.\VSHR\K{\_s}", r"\hex{FD}~~\hex{6C}", r"[\V128~\I32] \to [\V128]"),
    instr(r"\I8X16.\VSHR\K{\_u}", r"\hex{FD}~~\hex{6D}", r"[\V128~\I32] \to [\V128]"),
    instr(r"\I8X16.\VADD", r"\hex{FD}~~\hex{6E}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I8X16.\VADD\K{\_sat\_s}", r"\hex{FD}~~\hex{6F}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I8X16.\VADD\K{\_sat\_u}", r"\hex{FD}~~\hex{70}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I8X16.\VSUB", r"\hex{FD}~~\hex{71}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I8X16.\VSUB\K{\_sat\_s}", r"\hex{FD}~~\hex{72}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I8X16.\VSUB\K{\_sat\_u}", r"\hex{FD}~~\hex{73}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\F64X2.\VCEIL", r"\hex{FD}~~\hex{74}", r"[\V128] \to [\V128]"),
    instr(r"\F64X2.\VFLOOR", r"\hex{FD}~~\hex{75}", r"[\V128] \to [\V128]"),
    instr(r"\I8X16.\VMIN\K{\_s}", r"\hex{FD}~~\hex{76}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I8X16.\VMIN\K{\_u}", r"\hex{FD}~~\hex{77}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I8X16.\VMAX\K{\_s}", r"\hex{FD}~~\hex{78}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I8X16.\VMAX\K{\_u}", r"\hex{FD}~~\hex{79}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\F64X2.\VTRUNC", r"\hex{FD}~~\hex{7A}", r"[\V128] \to [\V128]"),
    instr(r"\I8X16.\AVGR\K{\_u}", r"\hex{FD}~~\hex{7B}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I16X8.\EXTADDPAIRWISE\K{\_i8x16\_s}", r"\hex{FD}~~\hex{7C}", r"[\V128] \to [\V128]"),
    instr(r"\I16X8.\EXTADDPAIRWISE\K{\_i8x16\_u}", r"\hex{FD}~~\hex{7D}", r"[\V128] \to [\V128]"),
    instr(r"\I32X4.\EXTADDPAIRWISE\K{\_i16x8\_s}", r"\hex{FD}~~\hex{7E}", r"[\V128] \to [\V128]"),
    instr(r"\I32X4.\EXTADDPAIRWISE\K{\_i16x8\_u}", r"\hex{FD}~~\hex{7F}", r"[\V128] \to [\V128]"),
    instr(r"\I16X8.\VABS", r"\hex{FD}~~\hex{80}~~\hex{01}", r"[\V128] \to [\V128]"),
    instr(r"\I16X8.\VNEG", r"\hex{FD}~~\hex{81}~~\hex{01}", r"[\V128] \to [\V128]"),
    instr(
        r"\I16X8.\Q15MULRSAT\K{\_s}",
        r"\hex{FD}~~\hex{82}~~\hex{01}",
        r"[\V128~\V128] \to [\V128]",
    ),
    instr(r"\I16X8.\ALLTRUE", r"\hex{FD}~~\hex{83}~~\hex{01}", r"[\V128] \to [\I32]"),
    instr(r"\I16X8.\BITMASK", r"\hex{FD}~~\hex{84}~~\hex{01}", r"[\V128] \to [\I32]"),
    instr(
        r"\I16X8.\NARROW\K{\_i32x4\_s}",
        r"\hex{FD}~~\hex{85}~~\hex{01}",
        r"[\V128~\V128] \to [\V128]",
    ),
    instr(
        r"\I16X8.\NARROW\K{\_i32x4\_u}",
        r"\hex{FD}~~\hex{86}~~\hex{01}",
        r"[\V128~\V128] \to [\V128]",
    ),
    instr(
        r"\I16X8.\VEXTEND\K{\_low\_i8x16\_s}",
        r"\hex{FD}~~\hex{87}~~\hex{01}",
        r"[\V128] \to [\V128]",
    ),
    instr(
        r"\I16X8.\VEXTEND\K{\_high\_i8x16\_s}",
        r"\hex{FD}~~\hex{88}~~\hex{01}",
        r"[\V128] \to [\V128]",
    ),
    instr(
        r"\I16X8.\VEXTEND\K{\_low\_i8x16\_u}",
        r"\hex{FD}~~\hex{89}~~\hex{01}",
        r"[\V128] \to [\V128]",
    ),
    instr(
        r"\I16X8.\VEXTEND\K{\_high\_i8x16\_u}",
        r"\hex{FD}~~\hex{8A}~~\hex{01}",
        r"[\V128] \to [\V128]",
    ),
    instr(r"\I16X8.\VSHL", r"\hex{FD}~~\hex{8B}~~\hex{01}", r"[\V128~\I32] \to [\V128]"),
    instr(r"\I16X8.\VSHR\K{\_s}", r"\hex{FD}~~\hex{8C}~~\hex{01}", r"[\V128~\I32] \to [\V128]"),
    instr(r"\I16X8.\VSHR\K{\_u}", r"\hex{FD}~~\hex{8D}~~\hex{01}", r"[\V128~\I32] \to [\V128]"),
    instr(r"\I16X8.\VADD", r"\hex{FD}~~\hex{8E}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(
        r"\I16X8.\VADD\K{\_sat\_s}",
        r"\hex{FD}~~\hex{8F}~~\hex{01}",
        r"[\V128~\V128] \to [\V128]",
    ),
    instr(
        r"\I16X8.\VADD\K{\_sat\_u}",
        r"\hex{FD}~~\hex{90}~~\hex{01}",
        r"[\V128~\V128] \to [\V128]",
    ),
    instr(r"\I16X8.\VSUB", r"\hex{FD}~~\hex{91}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(
        r"\I16X8.\VSUB\K{\_sat\_s}",
        r"\hex{FD}~~\hex{92}~~\hex{01}",
        r"[\V128~\V128] \to [\V128]",
    ),
    instr(
        r"\I16X8.\VSUB\K{\_sat\_u}",
        r"\hex{FD}~~\hex{93}~~\hex{01}",
        r"[\V128~\V128] \to [\V128]",
    ),
    instr(r"\F64X2.\VNEAREST", r"\hex{FD}~~\hex{94}~~\hex{01}", r"[\V128] \to [\V128]"),
    instr(r"\I16X8.\VMUL", r"\hex{FD}~~\hex{95}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I16X8.\VMIN\K{\_s}", r"\hex{FD}~~\hex{96}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I16X8.\VMIN\K{\_u}", r"\hex{FD}~~\hex{97}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I16X8.\VMAX\K{\_s}", r"\hex{FD}~~\hex{98}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I16X8.\VMAX\K{\_u}", r"\hex{FD}~~\hex{99}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I16X8.\AVGR\K{\_u}", r"\hex{FD}~~\hex{9B}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(
        r"\I16X8.\EXTMUL\K{\_low\_i8x16\_s}",
        r"\hex{FD}~~\hex{9C}~~\hex{01}",
        r"[\V128~\V128] \to [\V128]",
    ),
    instr(
        r"\I16X8.\EXTMUL\K{\_high\_i8x16\_s}",
        r"\hex{FD}~~\hex{9D}~~\hex{01}",
        r"[\V128~\V128] \to [\V128]",
    ),
    instr(
        r"\I16X8.\EXTMUL\K{\_low\_i8x16\_u}",
        r"\hex{FD}~~\hex{9E}~~\hex{01}",
        r"[\V128~\V128] \to [\V128]",
    ),
    instr(
        r"\I16X8.\EXTMUL\K{\_high\_i8x16\_u}",
        r"\hex{FD}~~\hex{9F}~~\hex{01}",
        r"[\V128~\V128] \to [\V128]",
    ),
    instr(r"\I32X4.\VABS", r"\hex{FD}~~\hex{A0}~~\hex{01}", r"[\V128] \to [\V128]"),
    instr(r"\I32X4.\VNEG", r"\hex{FD}~~\hex{A1}~~\hex{01}", r"[\V128] \to [\V128]"),
    instr(r"\I32X4.\ALLTRUE", r"\hex{FD}~~\hex{A3}~~\hex{01}", r"[\V128] \to [\I32]"),
    instr(r"\I32X4.\BITMASK", r"\hex{FD}~~\hex{A4}~~\hex{01}", r"[\V128] \to [\I32]"),
    instr(
        r"\I32X4.\VEXTEND\K{\_low\_i16x8\_s}",
        r"\hex{FD}~~\hex{A7}~~\hex{01}",
        r"[\V128] \to [\V128]",
    ),
    instr(
        r"\I32X4.\VEXTEND\K{\_high\_i16x8\_s}",
        r"\hex{FD}~~\hex{A8}~~\hex{01}",
        r"[\V128] \to [\V128]",
    ),
    instr(
        r"\I32X4.\VEXTEND\K{\_low\_i16x8\_u}",
        r"\hex{FD}~~\hex{A9}~~\hex{01}",
        r"[\V128] \to [\V128]",
    ),
    instr(
        r"\I32X4.\VEXTEND\K{\_high\_i16x8\_u}",
        r"\hex{FD}~~\hex{AA}~~\hex{01}",
        r"[\V128] \to [\V128]",
    ),
    instr(r"\I32X4.\VSHL", r"\hex{FD}~~\hex{AB}~~\hex{01}", r"[\V128~\I32] \to [\V128]"),
    instr(r"\I32X4.\VSHR\K{\_s}", r"\hex{FD}~~\hex{AC}~~\hex{01}", r"[\V128~\I32] \to [\V128]"),
    instr(r"\I32X4.\VSHR\K{\_u}", r"\hex{FD}~~\hex{AD}~~\hex{01}", r"[\V128~\I32] \to [\V128]"),
    instr(r"\I32X4.\VADD", r"\hex{FD}~~\hex{AE}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I32X4.\VSUB", r"\hex{FD}~~\hex{B1}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I32X4.\VMUL", r"\hex{FD}~~\hex{B5}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I32X4.\VMIN\K{\_s}", r"\hex{FD}~~\hex{B6}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I32X4.\VMIN\K{\_u}", r"\hex{FD}~~\hex{B7}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I32X4.\VMAX\K{\_s}", r"\hex{FD}~~\hex{B8}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I32X4.\VMAX\K{\_u}", r"\hex{FD}~~\hex{B9}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(
        r"\I32X4.\DOT\K{\_i16x8\_s}",
        r"\hex{FD}~~\hex{BA}~~\hex{01}",
        r"[\V128~\V128] \to [\V128]",
    ),
    instr(
        r"\I32X4.\EXTMUL\K{\_low\_i16x8\_s}",
        r"\hex{FD}~~\hex{BC}~~\hex{01}",
        r"[\V128~\V128] \to [\V128]",
    ),
    instr(
        r"\I32X4.\EXTMUL\K{\_high\_i16x8\_s}",
        r"\hex{FD}~~\hex{BD}~~\hex{01}",
        r"[\V128~\V128] \to [\V128]",
    ),
    instr(
        r"\I32X4.\EXTMUL\K{\_low\_i16x8\_u}",
        r"\hex{FD}~~\hex{BE}~~\hex{01}",
        r"[\V128~\V128] \to [\V128]",
    ),
    instr(
        r"\I32X4.\EXTMUL\K{\_high\_i16x8\_u}",
        r"\hex{FD}~~\hex{BF}~~\hex{01}",
        r"[\V128~\V128] \to [\V128]",
    ),
    instr(r"\I64X2.\VABS", r"\hex{FD}~~\hex{C0}~~\hex{01}", r"[\V128] \to [\V128]"),
    instr(r"\I64X2.\VNEG", r"\hex{FD}~~\hex{C1}~~\hex{01}", r"[\V128] \to [\V128]"),
    instr(r"\I64X2.\ALLTRUE", r"\hex{FD}~~\hex{C3}~~\hex{01}", r"[\V128] \to [\I32]"),
    instr(r"\I64X2.\BITMASK", r"\hex{FD}~~\hex{C4}~~\hex{01}", r"[\V128] \to [\I32]"),
    instr(
        r"\I64X2.\VEXTEND\K{\_low\_i32x4\_s}",
        r"\hex{FD}~~\hex{C7}~~\hex{01}",
        r"[\V128] \to [\V128]",
    ),
    instr(
        r"\I64X2.\VEXTEND\K{\_high\_i32x4\_s}",
        r"\hex{FD}~~\hex{C8}~~\hex{01}",
        r"[\V128] \to [\V128]",
    ),
    instr(
        r"\I64X2.\VEXTEND\K{\_low\_i32x4\_u}",
        r"\hex{FD}~~\hex{C9}~~\hex{01}",
        r"[\V128] \to [\V128]",
    ),
    instr(
        r"\I64X2.\VEXTEND\K{\_high\_i32x4\_u}",
        r"\hex{FD}~~\hex{CA}~~\hex{01}",
        r"[\V128] \to [\V128]",
    ),
    instr(r"\I64X2.\VSHL", r"\hex{FD}~~\hex{CB}~~\hex{01}", r"[\V128~\I32] \to [\V128]"),
    instr(r"\I64X2.\VSHR\K{\_s}", r"\hex{FD}~~\hex{CC}~~\hex{01}", r"[\V128~\I32] \to [\V128]"),
    instr(r"\I64X2.\VSHR\K{\_u}", r"\hex{FD}~~\hex{CD}~~\hex{01}", r"[\V128~\I32] \to [\V128]"),
    instr(r"\I64X2.\VADD", r"\hex{FD}~~\hex{CE}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I64X2.\VSUB", r"\hex{FD}~~\hex{D1}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I64X2.\VMUL", r"\hex{FD}~~\hex{D5}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I64X2.\VEQ", r"\hex{FD}~~\hex{D6}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I64X2.\VNE", r"\hex{FD}~~\hex{D7}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I64X2.\VLT\K{\_s}", r"\hex{FD}~~\hex{D8}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I64X2.\VGT\K{\_s}", r"\hex{FD}~~\hex{D9}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I64X2.\VLE\K{\_s}", r"\hex{FD}~~\hex{DA}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\I64X2.\VGE\K{\_s}", r"\hex{FD}~~\hex{DB}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(
        r"\I64X2.\EXTMUL\K{\_low\_i32x4\_s}",
        r"\hex{FD}~~\hex{DC}~~\hex{01}",
        r"[\V128~\V128] \to [\V128]",
    ),
    instr(
        r"\I64X2.\EXTMUL\K{\_high\_i32x4\_s}",
        r"\hex{FD}~~\hex{DD}~~\hex{01}",
        r"[\V128~\V128] \to [\V128]",
    ),
    instr(
        r"\I64X2.\EXTMUL\K{\_low\_i32x4\_u}",
        r"\hex{FD}~~\hex{DE}~~\hex{01}",
        r"[\V128~\V128] \to [\V128]",
    ),
    instr(
        r"\I64X2.\EXTMUL\K{\_high\_i32x4\_u}",
        r"\hex{FD}~~\hex{DF}~~\hex{01}",
        r"[\V128~\V128] \to [\V128]",
    ),
    instr(r"\F32X4.\VABS", r"\hex{FD}~~\hex{E0}~~\hex{01}", r"[\V128] \to [\V128]"),
    instr(r"\F32X4.\VNEG", r"\hex{FD}~~\hex{E1}~~\hex{01}", r"[\V128] \to [\V128]"),
    instr(r"\F32X4.\VSQRT", r"\hex{FD}~~\hex{E3}~~\hex{01}", r"[\V128] \to [\V128]"),
    instr(r"\F32X4.\VADD", r"\hex{FD}~~\hex{E4}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\F32X4.\VSUB", r"\hex{FD}~~\hex{E5}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\F32X4.\VMUL", r"\hex{FD}~~\hex{E6}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\F32X4.\VDIV", r"\hex{FD}~~\hex{E7}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\F32X4.\VMIN", r"\hex{FD}~~\hex{E8}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\F32X4.\VMAX", r"\hex{FD}~~\hex{E9}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\F32X4.\VPMIN", r"\hex{FD}~~\hex{EA}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\F32X4.\VPMAX", r"\hex{FD}~~\hex{EB}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\F64X2.\VABS", r"\hex{FD}~~\hex{EC}~~\hex{01}", r"[\V128] \to [\V128]"),
    instr(r"\F64X2.\VNEG", r"\hex{FD}~~\hex{ED}~~\hex{01}", r"[\V128] \to [\V128]"),
    instr(r"\F64X2.\VSQRT", r"\hex{FD}~~\hex{EF}~~\hex{01}", r"[\V128] \to [\V128]"),
    instr(r"\F64X2.\VADD", r"\hex{FD}~~\hex{F0}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\F64X2.\VSUB", r"\hex{FD}~~\hex{F1}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\F64X2.\VMUL", r"\hex{FD}~~\hex{F2}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\F64X2.\VDIV", r"\hex{FD}~~\hex{F3}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\F64X2.\VMIN", r"\hex{FD}~~\hex{F4}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\F64X2.\VMAX", r"\hex{FD}~~\hex{F5}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\F64X2.\VPMIN", r"\hex{FD}~~\hex{F6}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    instr(r"\F64X2.\VPMAX", r"\hex{FD}~~\hex{F7}~~\hex{01}", r"[\V128~\V128] \to [\V128]"),
    // ── Trailing conversions ────────────────────────────────────────
    instr(
        r"\I32X4.\TRUNC\K{\_sat\_f32x4\_s}",
        r"\hex{FD}~~\hex{F8}~~\hex{01}",
        r"[\V128] \to [\V128]",
    ),
    instr(
        r"\I32X4.\TRUNC\K{\_sat\_f32x4\_u}",
        r"\hex{FD}~~\hex{F9}~~\hex{01}",
        r"[\V128] \to [\V128]",
    ),
    instr(
        r"\F32X4.\VCONVERT\K{\_i32x4\_s}",
        r"\hex{FD}~~\hex{FA}~~\hex{01}",
        r"[\V128] \to [\V128]",
    ),
    instr(
        r"\F32X4.\VCONVERT\K{\_i32x4\_u}",
        r"\hex{FD}~~\hex{FB}~~\hex{01}",
        r"[\V128] \to [\V128]",
    ),
    instr(
        r"\I32X4.\VTRUNC\K{\_sat\_f64x2\_s\_zero}",
        r"\hex{FD}~~\hex{FC}~~\hex{01}",
        r"[\V128] \to [\V128]",
    ),
    instr(
        r"\I32X4.\VTRUNC\K{\_sat\_f64x2\_u\_zero}",
        r"\hex{FD}~~\hex{FD}~~\hex{01}",
        r"[\V128] \to [\V128]",
    ),
    instr(
        r"\F64X2.\VCONVERT\K{\_low\_i32x4\_s}",
        r"\hex{FD}~~\hex{FE}~~\hex{01}",
        r"[\V128] \to [\V128]",
    ),
    instr(
        r"\F64X2.\VCONVERT\K{\_low\_i32x4\_u}",
        r"\hex{FD}~~\hex{FF}~~\hex{01}",
        r"[\V128] \to [\V128]",
    ),
];
